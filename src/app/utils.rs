// SPDX-License-Identifier: GPL-3.0-only

mod filters;
pub mod presentation;

pub use filters::filter_roster;
