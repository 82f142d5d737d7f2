// SPDX-License-Identifier: GPL-3.0-only

use crate::entities::Record;

/// Records whose name starts with `search`, ignoring case, in roster order.
///
/// Blank search text keeps the whole roster.
pub fn filter_roster<'a>(roster: &'a [Record], search: &str) -> Vec<&'a Record> {
    if search.trim().is_empty() {
        return roster.iter().collect();
    }

    let search = search.to_lowercase();
    roster
        .iter()
        .filter(|pokemon| pokemon.name.to_lowercase().starts_with(&search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::record;

    fn roster() -> Vec<Record> {
        ["bulbasaur", "ivysaur", "venusaur", "charmander", "Charmeleon", "charizard"]
            .iter()
            .enumerate()
            .map(|(i, name)| record(i as i64 + 1, name))
            .collect()
    }

    fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_search_keeps_the_roster_in_order() {
        let roster = roster();

        assert_eq!(filter_roster(&roster, "").len(), roster.len());
        assert_eq!(names(&filter_roster(&roster, "   ")), names(&filter_roster(&roster, "")));
        assert_eq!(names(&filter_roster(&roster, ""))[0], "bulbasaur");
    }

    #[test]
    fn matches_prefixes_ignoring_case() {
        let roster = roster();

        assert_eq!(
            names(&filter_roster(&roster, "CHAR")),
            ["charmander", "Charmeleon", "charizard"]
        );
        assert_eq!(names(&filter_roster(&roster, "charm")), ["charmander", "Charmeleon"]);
    }

    #[test]
    fn only_prefixes_match() {
        let roster = roster();

        assert!(filter_roster(&roster, "saur").is_empty());
        assert!(filter_roster(&roster, "pikachu").is_empty());
    }

    #[test]
    fn every_prefix_of_every_name_matches_exactly_the_expected_records() {
        let roster = roster();

        for pokemon in &roster {
            let name = pokemon.name.to_lowercase();
            for end in 1..=name.len() {
                let search = &name[..end];
                let expected: Vec<&str> = roster
                    .iter()
                    .filter(|r| r.name.to_lowercase().starts_with(search))
                    .map(|r| r.name.as_str())
                    .collect();

                assert_eq!(names(&filter_roster(&roster, search)), expected);
                assert_eq!(
                    names(&filter_roster(&roster, &search.to_uppercase())),
                    expected
                );
            }
        }
    }
}
