// SPDX-License-Identifier: GPL-3.0-only

use std::{fmt::Display, future::Future};

use futures::{StreamExt, TryStreamExt, stream};
use serde::{Deserialize, Serialize};

/// What to do when one of many concurrent fetches fails
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum JoinPolicy {
    /// The first failure aborts the whole join, nothing is returned
    #[default]
    FailFast,
    /// Failures are logged and skipped, the successes are returned
    Partial,
}

/// Runs `fetch` over every item with at most `limit` futures in flight.
///
/// Results come back in the order of `items`, never in completion order.
pub async fn fetch_all<I, F, Fut, T, E>(
    items: I,
    limit: usize,
    policy: JoinPolicy,
    fetch: F,
) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let results = stream::iter(items).map(fetch).buffered(limit.max(1));

    match policy {
        JoinPolicy::FailFast => results.try_collect().await,
        JoinPolicy::Partial => {
            let results: Vec<Result<T, E>> = results.collect().await;
            let mut fetched = Vec::with_capacity(results.len());

            for result in results {
                match result {
                    Ok(item) => fetched.push(item),
                    Err(e) => tracing::warn!("Skipping failed fetch: {e}"),
                }
            }

            Ok(fetched)
        }
    }
}
