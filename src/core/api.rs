// SPDX-License-Identifier: GPL-3.0-only

use std::{future::Future, time::Duration};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::entities::{Record, RosterEntry, RosterPage};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Everything that can go wrong talking to PokéAPI.
///
/// Errors are `Clone` so they can travel inside app messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, carries the message reported by the HTTP client
    #[error("{0}")]
    Network(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed payload: {0}")]
    Decode(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}

/// Source of Pokémon data.
///
/// [`HttpApi`] is the real thing, tests plug in-memory sources in here.
pub trait PokeApi: Send + Sync + 'static {
    /// `GET /pokemon?limit={limit}`
    fn list(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RosterEntry>, ApiError>> + Send;

    /// Follows a listing url to the full record
    fn fetch_record(&self, url: &str) -> impl Future<Output = Result<Record, ApiError>> + Send;

    /// `GET /pokemon/{identifier}`, the identifier is expected to be normalized already
    fn lookup(&self, identifier: &str) -> impl Future<Output = Result<Record, ApiError>> + Send;
}

/// PokéAPI over HTTP
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<HttpApi, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::InvalidUrl(format!("{base_url}: {err}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpApi {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base url
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl PokeApi for HttpApi {
    async fn list(&self, limit: usize) -> Result<Vec<RosterEntry>, ApiError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let page: RosterPage = self.get_json(url).await?;
        Ok(page.results)
    }

    async fn fetch_record(&self, url: &str) -> Result<Record, ApiError> {
        let url = Url::parse(url).map_err(|err| ApiError::InvalidUrl(format!("{url}: {err}")))?;
        self.get_json(url).await
    }

    async fn lookup(&self, identifier: &str) -> Result<Record, ApiError> {
        let url = self.endpoint(&["pokemon", identifier])?;
        self.get_json(url).await
    }
}
