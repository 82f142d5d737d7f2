// SPDX-License-Identifier: GPL-3.0-only

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use pokedex::{
    app::{
        self, AppModel,
        oneshot::{self, Outcome},
    },
    core::{Pokedex, api::HttpApi},
    fl, i18n,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod flags;

#[tokio::main]
async fn main() -> Result<ExitCode, anywho::Error> {
    // Logs go to stderr so they never mix with the Pokédex output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let flags = flags::Flags::parse();
    let config = flags.config();

    let api = HttpApi::new(&config.api_base_url, config.request_timeout())?;
    let core = Pokedex::new(api, config.roster_options());

    let outcome = if let Some(identifier) = &flags.lookup {
        oneshot::lookup(&core, identifier, &mut io::stdout(), &mut io::stderr()).await?
    } else if let Some(search) = &flags.search {
        oneshot::search(&core, search, &mut io::stdout(), &mut io::stderr()).await?
    } else if !io::stdout().is_terminal() {
        eprintln!("{}", fl!("needs-terminal"));
        Outcome::Usage
    } else {
        let (app, init) = AppModel::init(core, config.race_policy);
        app::tui::run(app, init).await?;
        Outcome::Done
    };

    Ok(outcome.into())
}
