// SPDX-License-Identifier: GPL-3.0-only

//! Text shown for the app state, shared by the TUI and the one-shot modes

use crate::{
    app::{AppModel, RosterStatus},
    core::resolver::LookupError,
    entities::Record,
    fl,
    utils::capitalize_string,
};

/// Message shown for a failed lookup
pub fn lookup_error_message(error: &LookupError) -> String {
    match error {
        LookupError::NotFound { .. } => fl!("pokemon-not-found"),
        LookupError::Failed {
            detail: Some(detail),
        } => detail.clone(),
        LookupError::Failed { detail: None } => fl!("lookup-failed"),
    }
}

/// Match count feedback, only when something is being searched
pub fn search_summary(search: &str, matches: usize) -> Option<String> {
    if search.trim().is_empty() {
        return None;
    }

    Some(if matches == 0 {
        fl!("no-matches")
    } else {
        fl!("pokemon-found", count = matches)
    })
}

/// Lines describing what is going on: loading, errors and search feedback
pub fn status_lines<A>(app: &AppModel<A>) -> Vec<String> {
    let mut lines = Vec::new();

    match app.roster_status() {
        RosterStatus::NotLoaded | RosterStatus::Loading => lines.push(fl!("loading")),
        RosterStatus::Failed(_) => lines.push(fl!("roster-error")),
        RosterStatus::Loaded(_) => {}
    }

    if app.is_busy() {
        lines.push(fl!("searching"));
    }

    if let Some(error) = app.error() {
        lines.push(lookup_error_message(error));
    }

    if let Some(summary) = search_summary(app.search(), app.filtered().len()) {
        lines.push(summary);
    }

    lines
}

/// Detailed view of a single Pokémon
pub fn record_card(pokemon: &Record) -> String {
    let mut card = format!("#{:03} {}\n", pokemon.id, capitalize_string(&pokemon.name));

    card.push_str(&format!("  {}: {} kg\n", fl!("weight"), pokemon.weight_kg()));

    let base_experience = pokemon
        .base_experience
        .map(|xp| xp.to_string())
        .unwrap_or_else(|| fl!("unknown"));
    card.push_str(&format!("  {}: {}\n", fl!("base-experience"), base_experience));

    let types = pokemon.types();
    if !types.is_empty() {
        let types: Vec<String> = types.iter().map(ToString::to_string).collect();
        card.push_str(&format!("  {}: {}\n", fl!("types"), types.join(", ")));
    }

    if let Some(image) = pokemon.image_url() {
        card.push_str(&format!("  {}: {}\n", fl!("image"), image));
    }

    card
}

/// One entry of the list
pub fn roster_line(pokemon: &Record) -> String {
    format!("#{:03} {}", pokemon.id, pokemon.name)
}

/// The list as printed by `--search`, one entry per line
pub fn roster_lines(roster: &[&Record]) -> String {
    roster
        .iter()
        .map(|pokemon| format!("{}\n", roster_line(pokemon)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::{Message, RacePolicy},
        core::{
            Pokedex,
            api::ApiError,
            loader::RosterOptions,
            testing::{FakeApi, record},
        },
        entities::{Artwork, NamedResource, OtherSprites, Sprites, TypeSlot},
    };

    fn bulbasaur() -> Record {
        Record {
            id: 1,
            name: String::from("bulbasaur"),
            weight: 69,
            base_experience: Some(64),
            sprites: Some(Sprites {
                front_default: Some(String::from("https://img/1.png")),
                other: Some(OtherSprites {
                    official_artwork: Some(Artwork {
                        front_default: Some(String::from("https://img/artwork/1.png")),
                    }),
                }),
            }),
            types: vec![
                TypeSlot {
                    slot: 1,
                    type_: NamedResource {
                        name: String::from("grass"),
                        url: None,
                    },
                },
                TypeSlot {
                    slot: 2,
                    type_: NamedResource {
                        name: String::from("poison"),
                        url: None,
                    },
                },
            ],
        }
    }

    #[test]
    fn card_shows_the_record_details() {
        let card = record_card(&bulbasaur());

        assert!(card.starts_with("#001 Bulbasaur\n"));
        assert!(card.contains("6.9 kg"));
        assert!(card.contains("64"));
        assert!(card.contains("Grass, Poison"));
        assert!(card.contains("https://img/artwork/1.png"));
    }

    #[test]
    fn card_without_image_or_experience() {
        let mut pokemon = record(10001, "deoxys-attack");
        pokemon.base_experience = None;

        let card = record_card(&pokemon);

        assert!(card.starts_with("#10001 Deoxys Attack\n"));
        assert!(card.contains(&fl!("unknown")));
        assert!(!card.contains("http"));
    }

    #[test]
    fn roster_lines_keep_the_roster_order() {
        let roster = [record(25, "pikachu"), record(1, "bulbasaur")];
        let lines = roster_lines(&roster.iter().collect::<Vec<_>>());

        assert_eq!(lines, "#025 pikachu\n#001 bulbasaur\n");
    }

    #[test]
    fn search_summary_only_while_searching() {
        assert_eq!(search_summary("", 151), None);
        assert_eq!(search_summary("  ", 151), None);
        assert_eq!(search_summary("zz", 0), Some(fl!("no-matches")));

        let summary = search_summary("char", 3).unwrap();
        assert!(summary.contains('3'));
    }

    #[test]
    fn lookup_errors_use_user_facing_messages() {
        assert_eq!(
            lookup_error_message(&LookupError::NotFound {
                identifier: String::from("agumon")
            }),
            fl!("pokemon-not-found")
        );
        assert_eq!(
            lookup_error_message(&LookupError::Failed {
                detail: Some(String::from("connection refused"))
            }),
            "connection refused"
        );
        assert_eq!(
            lookup_error_message(&LookupError::Failed { detail: None }),
            fl!("lookup-failed")
        );
    }

    #[tokio::test]
    async fn status_follows_the_state() {
        let api = FakeApi::with_roster(&["bulbasaur", "ivysaur"])
            .failing("ivysaur", ApiError::Decode(String::from("eof")));
        let mut app = AppModel::new(
            Pokedex::new(api, RosterOptions::default()),
            RacePolicy::default(),
        );

        let effect = app.update(Message::LoadRoster).unwrap();
        assert_eq!(status_lines(&app), [fl!("loading")]);

        let message = effect.run(app.core()).await;
        let _ = app.update(message);
        assert_eq!(status_lines(&app), [fl!("roster-error")]);
        assert!(app.filtered().is_empty());

        let effect = app.update(Message::Lookup(String::from("agumon"))).unwrap();
        assert_eq!(status_lines(&app), [fl!("roster-error"), fl!("searching")]);

        let message = effect.run(app.core()).await;
        let _ = app.update(message);
        assert_eq!(
            status_lines(&app),
            [fl!("roster-error"), fl!("pokemon-not-found")]
        );
    }
}
