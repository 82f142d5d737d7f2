// SPDX-License-Identifier: GPL-3.0-only

use crate::{
    core::{
        api::{ApiError, PokeApi},
        fetch::{JoinPolicy, fetch_all},
    },
    entities::Record,
};

pub const DEFAULT_ROSTER_LIMIT: usize = 151;
pub const DEFAULT_CONCURRENCY: usize = 30;

/// How the roster gets loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterOptions {
    /// Number of entries requested from the listing endpoint
    pub limit: usize,
    /// Detail requests in flight at the same time
    pub concurrency: usize,
    pub join: JoinPolicy,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ROSTER_LIMIT,
            concurrency: DEFAULT_CONCURRENCY,
            join: JoinPolicy::default(),
        }
    }
}

/// Fetches the listing, then every entry's full record, and joins them in listing order
pub async fn load_roster<A: PokeApi>(
    api: &A,
    options: &RosterOptions,
) -> Result<Vec<Record>, ApiError> {
    let entries = api.list(options.limit).await?;

    tracing::debug!("Fetching details for {} roster entries", entries.len());

    fetch_all(entries, options.concurrency, options.join, |entry| async move {
        api.fetch_record(&entry.url).await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeApi;

    const KANTO: &[&str] = &["bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon"];

    #[tokio::test]
    async fn publishes_every_entry_in_listing_order() {
        // First entries are the slowest to answer
        let api = FakeApi::with_roster(KANTO)
            .delayed("bulbasaur", 40)
            .delayed("ivysaur", 20);

        let roster = load_roster(&api, &RosterOptions::default()).await.unwrap();

        let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, KANTO);
        assert_eq!(api.list_limits(), vec![DEFAULT_ROSTER_LIMIT]);
    }

    #[tokio::test]
    async fn limit_is_forwarded_to_the_listing() {
        let api = FakeApi::with_roster(KANTO);
        let options = RosterOptions {
            limit: 2,
            ..Default::default()
        };

        let roster = load_roster(&api, &options).await.unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(api.list_limits(), vec![2]);
    }

    #[tokio::test]
    async fn one_broken_detail_fails_the_whole_roster() {
        let api = FakeApi::with_roster(KANTO)
            .failing("charmander", ApiError::Decode(String::from("missing field `id`")));

        let result = load_roster(&api, &RosterOptions::default()).await;

        assert_eq!(
            result,
            Err(ApiError::Decode(String::from("missing field `id`")))
        );
    }

    #[tokio::test]
    async fn partial_join_keeps_the_healthy_records() {
        let api = FakeApi::with_roster(KANTO).failing(
            "ivysaur",
            ApiError::Status {
                status: 500,
                url: String::from("fake://pokemon/ivysaur"),
            },
        );
        let options = RosterOptions {
            join: JoinPolicy::Partial,
            ..Default::default()
        };

        let roster = load_roster(&api, &options).await.unwrap();

        let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["bulbasaur", "venusaur", "charmander", "charmeleon"]);
    }

    #[tokio::test]
    async fn listing_failure_is_reported() {
        let api = FakeApi::with_roster(KANTO).listing_fails(ApiError::Network(String::from(
            "connection refused",
        )));

        let result = load_roster(&api, &RosterOptions::default()).await;

        assert_eq!(
            result,
            Err(ApiError::Network(String::from("connection refused")))
        );
    }
}
