// SPDX-License-Identifier: GPL-3.0-only

use crate::{fl, utils::capitalize_string};

/// Possible Pokémon Types
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    /// Anything PokéAPI adds that we don't have a translation for (`stellar`, `unknown`...)
    Other(String),
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            PokemonType::Normal => write!(f, "{}", fl!("normal")),
            PokemonType::Fire => write!(f, "{}", fl!("fire")),
            PokemonType::Water => write!(f, "{}", fl!("water")),
            PokemonType::Electric => write!(f, "{}", fl!("electric")),
            PokemonType::Grass => write!(f, "{}", fl!("grass")),
            PokemonType::Ice => write!(f, "{}", fl!("ice")),
            PokemonType::Fighting => write!(f, "{}", fl!("fighting")),
            PokemonType::Poison => write!(f, "{}", fl!("poison")),
            PokemonType::Ground => write!(f, "{}", fl!("ground")),
            PokemonType::Flying => write!(f, "{}", fl!("flying")),
            PokemonType::Psychic => write!(f, "{}", fl!("psychic")),
            PokemonType::Bug => write!(f, "{}", fl!("bug")),
            PokemonType::Rock => write!(f, "{}", fl!("rock")),
            PokemonType::Ghost => write!(f, "{}", fl!("ghost")),
            PokemonType::Dragon => write!(f, "{}", fl!("dragon")),
            PokemonType::Dark => write!(f, "{}", fl!("dark")),
            PokemonType::Steel => write!(f, "{}", fl!("steel")),
            PokemonType::Fairy => write!(f, "{}", fl!("fairy")),
            PokemonType::Other(name) => write!(f, "{}", capitalize_string(name)),
        }
    }
}

impl PokemonType {
    /// Parses a PokéAPI type name
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "normal" => PokemonType::Normal,
            "fire" => PokemonType::Fire,
            "water" => PokemonType::Water,
            "electric" => PokemonType::Electric,
            "grass" => PokemonType::Grass,
            "ice" => PokemonType::Ice,
            "fighting" => PokemonType::Fighting,
            "poison" => PokemonType::Poison,
            "ground" => PokemonType::Ground,
            "flying" => PokemonType::Flying,
            "psychic" => PokemonType::Psychic,
            "bug" => PokemonType::Bug,
            "rock" => PokemonType::Rock,
            "ghost" => PokemonType::Ghost,
            "dragon" => PokemonType::Dragon,
            "dark" => PokemonType::Dark,
            "steel" => PokemonType::Steel,
            "fairy" => PokemonType::Fairy,
            other => PokemonType::Other(other.to_string()),
        }
    }
}
