// SPDX-License-Identifier: GPL-3.0-only

mod pokemon_type;
mod record;
mod roster_entry;

pub use pokemon_type::PokemonType;
pub use record::{Artwork, NamedResource, OtherSprites, Record, Sprites, TypeSlot};
pub use roster_entry::{RosterEntry, RosterPage};
