// SPDX-License-Identifier: GPL-3.0-only

//! `--lookup` and `--search`: answer once, print, exit

use std::{
    io::{self, Write},
    process::ExitCode,
};

use crate::{
    app::utils::{
        filter_roster,
        presentation::{lookup_error_message, record_card, roster_lines},
    },
    core::{Pokedex, api::PokeApi, resolver::normalize_identifier},
    fl,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Nothing was found, or the request failed
    Failed,
    /// The arguments can't be used
    Usage,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
            Outcome::Usage => ExitCode::from(2),
        }
    }
}

/// Prints the card of one Pokémon
pub async fn lookup<A: PokeApi>(
    core: &Pokedex<A>,
    raw: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    let Some(identifier) = normalize_identifier(raw) else {
        writeln!(err, "{}", fl!("missing-argument", command = String::from("--lookup")))?;
        return Ok(Outcome::Usage);
    };

    match core.resolve(&identifier).await {
        Ok(pokemon) => {
            write!(out, "{}", record_card(&pokemon))?;
            Ok(Outcome::Done)
        }
        Err(e) => {
            writeln!(err, "{}", lookup_error_message(&e))?;
            Ok(Outcome::Failed)
        }
    }
}

/// Loads the roster and prints the entries whose name starts with `search`
pub async fn search<A: PokeApi>(
    core: &Pokedex<A>,
    search: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    let roster = match core.load_roster().await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to load the Pokémon list: {e}");
            writeln!(err, "{}", fl!("roster-error"))?;
            return Ok(Outcome::Failed);
        }
    };

    let matches = filter_roster(&roster, search);
    if matches.is_empty() {
        writeln!(err, "{}", fl!("no-matches"))?;
    } else {
        write!(out, "{}", roster_lines(&matches))?;
    }

    Ok(Outcome::Done)
}
