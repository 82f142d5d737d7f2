// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::{entities::PokemonType, utils::scale_numbers};

/// A single Pokémon as returned by `GET /pokemon/{nameOrId}`.
///
/// Only the fields we display are decoded, everything else in the payload is ignored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    /// Weight in hectograms
    pub weight: i64,
    /// `null` for some alternate forms
    pub base_experience: Option<i64>,
    pub sprites: Option<Sprites>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl Record {
    /// Official artwork if there is one, the default front sprite otherwise
    pub fn image_url(&self) -> Option<&str> {
        let sprites = self.sprites.as_ref()?;

        sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref())
            .or(sprites.front_default.as_deref())
    }

    pub fn weight_kg(&self) -> f64 {
        scale_numbers(self.weight)
    }

    /// Types in slot order
    pub fn types(&self) -> Vec<PokemonType> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots
            .into_iter()
            .map(|slot| PokemonType::from_name(&slot.type_.name))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// PokéAPI reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: Option<String>,
}
