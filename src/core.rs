// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use crate::{
    core::{
        api::{ApiError, PokeApi},
        loader::RosterOptions,
        resolver::LookupError,
    },
    entities::Record,
};

pub mod api;
pub mod fetch;
pub mod loader;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

/// Cheap to clone handle over a [`PokeApi`], owned by the app and moved into its tasks
#[derive(Debug)]
pub struct Pokedex<A> {
    api: Arc<A>,
    roster: RosterOptions,
}

impl<A> Clone for Pokedex<A> {
    fn clone(&self) -> Self {
        Pokedex {
            api: Arc::clone(&self.api),
            roster: self.roster,
        }
    }
}

impl<A: PokeApi> Pokedex<A> {
    pub fn new(api: A, roster: RosterOptions) -> Self {
        Pokedex {
            api: Arc::new(api),
            roster,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Loads the whole roster, see [`loader::load_roster`]
    pub async fn load_roster(&self) -> Result<Vec<Record>, ApiError> {
        loader::load_roster(self.api.as_ref(), &self.roster).await
    }

    /// Looks a single Pokémon up by its normalized name or id
    pub async fn resolve(&self, identifier: &str) -> Result<Record, LookupError> {
        resolver::resolve(self.api.as_ref(), identifier).await
    }
}
