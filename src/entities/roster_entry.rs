// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// One item of the `GET /pokemon?limit=N` listing, `url` points at the full record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub url: String,
}

/// Listing page, the paging fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPage {
    pub results: Vec<RosterEntry>,
}
