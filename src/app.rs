// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        Pokedex,
        api::{ApiError, PokeApi},
        resolver::{LookupError, normalize_identifier},
    },
    entities::Record,
};

mod effect;
pub mod oneshot;
pub mod tui;
pub mod utils;

pub use effect::Effect;

/// How overlapping lookups settle
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum RacePolicy {
    /// Every lookup is applied when it settles, the last one to settle wins
    #[default]
    LastSettled,
    /// Lookups superseded by a newer submission are dropped when they settle
    LatestIssued,
}

/// Lifecycle of the roster, it is only ever loaded once
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RosterStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Arc<Vec<Record>>),
    Failed(ApiError),
}

/// Where the lookup of the selected Pokémon stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    Idle,
    Busy,
    Resolved,
    NotFound,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Starts the roster load, ignored once it has been started
    LoadRoster,
    RosterLoaded(Result<Arc<Vec<Record>>, ApiError>),
    /// New search text
    Search(String),
    /// Raw user input, a name or a numeric id
    Lookup(String),
    /// Looks up the Pokémon at this position of the filtered list
    Select(usize),
    LookupFinished {
        ticket: u64,
        result: Result<Record, LookupError>,
    },
    /// Closes the selected Pokémon (or the lookup error)
    Dismiss,
}

#[derive(Debug, Default)]
struct Selection {
    record: Option<Record>,
    error: Option<LookupError>,
    /// Lookups issued but not settled yet
    in_flight: usize,
    /// Ticket of the most recent lookup
    issued: u64,
}

/// All the state of a Pokédex session. Only [`AppModel::update`] changes it.
pub struct AppModel<A> {
    core: Pokedex<A>,
    race_policy: RacePolicy,
    roster: RosterStatus,
    search: String,
    selection: Selection,
}

impl<A: PokeApi> AppModel<A> {
    pub fn new(core: Pokedex<A>, race_policy: RacePolicy) -> Self {
        AppModel {
            core,
            race_policy,
            roster: RosterStatus::default(),
            search: String::new(),
            selection: Selection::default(),
        }
    }

    /// Creates the model together with the effect that loads the roster
    pub fn init(core: Pokedex<A>, race_policy: RacePolicy) -> (Self, Option<Effect>) {
        let mut app = AppModel::new(core, race_policy);
        let effect = app.update(Message::LoadRoster);
        (app, effect)
    }

    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::LoadRoster => {
                if self.roster != RosterStatus::NotLoaded {
                    tracing::debug!("Roster already requested, ignoring");
                    return None;
                }

                self.roster = RosterStatus::Loading;
                return Some(Effect::LoadRoster);
            }
            Message::RosterLoaded(result) => match result {
                Ok(roster) => {
                    tracing::info!("Loaded {} Pokémon", roster.len());
                    self.roster = RosterStatus::Loaded(roster);
                }
                Err(e) => {
                    tracing::error!("Failed to load the Pokémon list: {e}");
                    self.roster = RosterStatus::Failed(e);
                }
            },
            Message::Search(search) => {
                self.search = search;
            }
            Message::Lookup(raw) => {
                return self.lookup(&raw);
            }
            Message::Select(index) => {
                let name = self.filtered().get(index).map(|pokemon| pokemon.name.clone());
                match name {
                    Some(name) => return self.lookup(&name),
                    None => tracing::debug!("No Pokémon at position {index}"),
                }
            }
            Message::LookupFinished { ticket, result } => {
                self.finish_lookup(ticket, result);
            }
            Message::Dismiss => {
                self.selection.record = None;
                self.selection.error = None;
            }
        }

        None
    }

    fn lookup(&mut self, raw: &str) -> Option<Effect> {
        let identifier = normalize_identifier(raw)?;

        self.selection.issued += 1;
        self.selection.in_flight += 1;
        self.selection.error = None;

        Some(Effect::Lookup {
            ticket: self.selection.issued,
            identifier,
        })
    }

    fn finish_lookup(&mut self, ticket: u64, result: Result<Record, LookupError>) {
        self.selection.in_flight = self.selection.in_flight.saturating_sub(1);

        if self.race_policy == RacePolicy::LatestIssued && ticket != self.selection.issued {
            tracing::debug!(
                ticket,
                latest = self.selection.issued,
                "Dropping superseded lookup"
            );
            return;
        }

        match result {
            Ok(record) => {
                self.selection.record = Some(record);
                self.selection.error = None;
            }
            Err(e) => {
                self.selection.record = None;
                self.selection.error = Some(e);
            }
        }
    }
}

impl<A> AppModel<A> {
    pub fn core(&self) -> &Pokedex<A> {
        &self.core
    }

    pub fn roster_status(&self) -> &RosterStatus {
        &self.roster
    }

    /// The loaded roster, empty until it is loaded (or if loading failed)
    pub fn roster(&self) -> &[Record] {
        match &self.roster {
            RosterStatus::Loaded(roster) => roster,
            _ => &[],
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The roster as shown, filtered by the current search text
    pub fn filtered(&self) -> Vec<&Record> {
        utils::filter_roster(self.roster(), &self.search)
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selection.record.as_ref()
    }

    pub fn error(&self) -> Option<&LookupError> {
        self.selection.error.as_ref()
    }

    /// True while at least one lookup is in flight
    pub fn is_busy(&self) -> bool {
        self.selection.in_flight > 0
    }

    /// Nothing left to wait for: no lookup in flight and the roster is not loading
    pub fn is_settled(&self) -> bool {
        !self.is_busy() && self.roster != RosterStatus::Loading
    }

    pub fn lookup_phase(&self) -> LookupPhase {
        if self.is_busy() {
            return LookupPhase::Busy;
        }

        match (&self.selection.record, &self.selection.error) {
            (Some(_), _) => LookupPhase::Resolved,
            (None, Some(LookupError::NotFound { .. })) => LookupPhase::NotFound,
            (None, Some(LookupError::Failed { .. })) => LookupPhase::Failed,
            (None, None) => LookupPhase::Idle,
        }
    }
}
