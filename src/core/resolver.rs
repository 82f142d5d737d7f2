// SPDX-License-Identifier: GPL-3.0-only

use crate::{
    core::api::{ApiError, PokeApi},
    entities::Record,
};

/// Why a single lookup failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// PokéAPI answered with a non-success status
    #[error("no Pokémon matches {identifier:?}")]
    NotFound { identifier: String },

    /// Transport or payload trouble. `detail` holds the transport message when there is one.
    #[error("lookup failed")]
    Failed { detail: Option<String> },
}

impl LookupError {
    pub fn from_api(identifier: &str, error: ApiError) -> Self {
        match error {
            ApiError::Status { .. } => LookupError::NotFound {
                identifier: identifier.to_string(),
            },
            ApiError::Network(message) => LookupError::Failed {
                detail: Some(message),
            },
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => LookupError::Failed { detail: None },
        }
    }
}

/// Trims and lowercases user input, `None` when nothing is left
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_lowercase())
}

/// Resolves an already normalized name or numeric id
pub async fn resolve<A: PokeApi>(api: &A, identifier: &str) -> Result<Record, LookupError> {
    api.lookup(identifier).await.map_err(|err| {
        tracing::debug!("Lookup for {identifier:?} failed: {err}");
        LookupError::from_api(identifier, err)
    })
}
