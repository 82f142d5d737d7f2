// SPDX-License-Identifier: GPL-3.0-only

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anywho::Error;
use serde::{Deserialize, Serialize};

use crate::{
    app::RacePolicy,
    core::{
        api::DEFAULT_API_URL,
        fetch::JoinPolicy,
        loader::{DEFAULT_CONCURRENCY, DEFAULT_ROSTER_LIMIT, RosterOptions},
    },
};

pub const APP_ID: &str = "dev.pokedex.Pokedex";

/// User settings, read from a RON file. Every key is optional.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub roster_limit: usize,
    pub max_concurrent_fetches: usize,
    pub roster_join: JoinPolicy,
    pub race_policy: RacePolicy,
    /// No timeout unless set
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_URL),
            roster_limit: DEFAULT_ROSTER_LIMIT,
            max_concurrent_fetches: DEFAULT_CONCURRENCY,
            roster_join: JoinPolicy::default(),
            race_policy: RacePolicy::default(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// `<config dir>/dev.pokedex.Pokedex/config.ron`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.ron"))
    }

    /// Reads the config at `path`, a missing file means the defaults
    pub fn load(path: &Path) -> Result<Config, Error> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Config::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Config, Error> {
        let config: Config = ron::from_str(contents)?;
        Ok(config.clamped())
    }

    /// Limits below one would never fetch anything
    pub fn clamped(mut self) -> Self {
        self.roster_limit = self.roster_limit.max(1);
        self.max_concurrent_fetches = self.max_concurrent_fetches.max(1);
        self
    }

    pub fn roster_options(&self) -> RosterOptions {
        RosterOptions {
            limit: self.roster_limit,
            concurrency: self.max_concurrent_fetches,
            join: self.roster_join,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
