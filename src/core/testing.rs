// SPDX-License-Identifier: GPL-3.0-only

//! In-memory PokéAPI used by the unit tests

use std::{collections::HashMap, sync::Mutex, time::Duration};

use crate::{
    core::api::{ApiError, PokeApi},
    entities::{Record, RosterEntry},
};

pub(crate) const FAKE_URL: &str = "fake://pokemon/";

pub(crate) fn record(id: i64, name: &str) -> Record {
    Record {
        id,
        name: name.to_string(),
        weight: id * 10,
        base_experience: Some(64),
        sprites: None,
        types: Vec::new(),
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    records: Vec<Record>,
    failures: HashMap<String, ApiError>,
    delays: HashMap<String, u64>,
    listing_error: Option<ApiError>,
    list_limits: Mutex<Vec<usize>>,
    lookups: Mutex<Vec<String>>,
}

impl FakeApi {
    /// Ids follow the order of `names`, starting at 1
    pub(crate) fn with_roster(names: &[&str]) -> Self {
        Self {
            records: names
                .iter()
                .enumerate()
                .map(|(i, name)| record(i as i64 + 1, name))
                .collect(),
            ..Default::default()
        }
    }

    pub(crate) fn failing(mut self, name: &str, error: ApiError) -> Self {
        self.failures.insert(name.to_string(), error);
        self
    }

    pub(crate) fn delayed(mut self, name: &str, millis: u64) -> Self {
        self.delays.insert(name.to_string(), millis);
        self
    }

    pub(crate) fn listing_fails(mut self, error: ApiError) -> Self {
        self.listing_error = Some(error);
        self
    }

    /// Limits of every listing request so far
    pub(crate) fn list_limits(&self) -> Vec<usize> {
        self.list_limits.lock().unwrap().clone()
    }

    /// Identifiers of every lookup so far
    pub(crate) fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    async fn answer(&self, identifier: &str) -> Result<Record, ApiError> {
        if let Some(millis) = self.delays.get(identifier) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }

        if let Some(error) = self.failures.get(identifier) {
            return Err(error.clone());
        }

        self.records
            .iter()
            .find(|r| r.name == identifier || r.id.to_string() == identifier)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                url: format!("{FAKE_URL}{identifier}"),
            })
    }
}

impl PokeApi for FakeApi {
    async fn list(&self, limit: usize) -> Result<Vec<RosterEntry>, ApiError> {
        self.list_limits.lock().unwrap().push(limit);

        if let Some(error) = &self.listing_error {
            return Err(error.clone());
        }

        Ok(self
            .records
            .iter()
            .take(limit)
            .map(|r| RosterEntry {
                name: r.name.clone(),
                url: format!("{FAKE_URL}{}", r.name),
            })
            .collect())
    }

    async fn fetch_record(&self, url: &str) -> Result<Record, ApiError> {
        let name = url
            .strip_prefix(FAKE_URL)
            .ok_or_else(|| ApiError::InvalidUrl(url.to_string()))?;

        self.answer(name).await
    }

    async fn lookup(&self, identifier: &str) -> Result<Record, ApiError> {
        self.lookups.lock().unwrap().push(identifier.to_string());
        self.answer(identifier).await
    }
}
