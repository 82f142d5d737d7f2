// SPDX-License-Identifier: GPL-3.0-only

//! Pokédex backed by PokéAPI: loads a roster once, filters it by name prefix
//! and resolves single Pokémon on demand.

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod i18n;
pub mod utils;
