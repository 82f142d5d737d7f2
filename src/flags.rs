// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;
use pokedex::{app::RacePolicy, config::Config, core::fetch::JoinPolicy};

/// Command line flags, they take precedence over the config file
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about = "Look Pokémon up on PokéAPI")]
pub struct Flags {
    /// Config file to use instead of the default one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// PokéAPI base url
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Number of Pokémon in the list
    #[arg(long)]
    pub limit: Option<usize>,

    /// Detail requests in flight while loading the list
    #[arg(long)]
    pub concurrency: Option<usize>,

    #[arg(long, value_enum)]
    pub join_policy: Option<JoinPolicy>,

    #[arg(long, value_enum)]
    pub race_policy: Option<RacePolicy>,

    /// Look a single Pokémon up, print it and exit
    #[arg(long, value_name = "NAME_OR_ID", conflicts_with = "search")]
    pub lookup: Option<String>,

    /// Load the list, print the Pokémon matching the prefix and exit
    #[arg(long, value_name = "PREFIX")]
    pub search: Option<String>,
}

impl Flags {
    /// Loads the config file and applies the flags on top of it
    pub fn config(&self) -> Config {
        let path = self.config.clone().or_else(Config::default_path);

        let config = match path {
            Some(path) => Config::load(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config file {}: {e}", path.display());
                Config::default()
            }),
            None => Config::default(),
        };

        self.apply(config)
    }

    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(api_url) = &self.api_url {
            config.api_base_url = api_url.clone();
        }
        if let Some(limit) = self.limit {
            config.roster_limit = limit;
        }
        if let Some(concurrency) = self.concurrency {
            config.max_concurrent_fetches = concurrency;
        }
        if let Some(join_policy) = self.join_policy {
            config.roster_join = join_policy;
        }
        if let Some(race_policy) = self.race_policy {
            config.race_policy = race_policy;
        }

        config.clamped()
    }
}
