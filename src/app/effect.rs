// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use crate::{
    app::Message,
    core::{Pokedex, api::PokeApi},
};

/// Work requested by [`super::AppModel::update`], run by whoever drives the model.
/// Its outcome comes back as a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadRoster,
    Lookup { ticket: u64, identifier: String },
}

impl Effect {
    pub async fn run<A: PokeApi>(self, core: &Pokedex<A>) -> Message {
        match self {
            Effect::LoadRoster => Message::RosterLoaded(core.load_roster().await.map(Arc::new)),
            Effect::Lookup { ticket, identifier } => Message::LookupFinished {
                ticket,
                result: core.resolve(&identifier).await,
            },
        }
    }
}
