//! Engine-facing result types: connectivity belief, snapshot freshness, and
//! the conversion outcome handed to the UI layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// The engine's current belief about network usability for the rate
/// provider. Distinct from raw link state: a present link with an
/// unreachable provider is still `Offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    pub fn is_online(self) -> bool {
        self == Connectivity::Online
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Online => f.write_str("online"),
            Connectivity::Offline => f.write_str("offline"),
        }
    }
}

/// Where the snapshot backing a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    /// Served straight from a successful network fetch.
    Fresh,
    /// Served from the persisted fallback; the network was skipped or failed.
    Cached,
}

impl Freshness {
    pub fn is_cached(self) -> bool {
        self == Freshness::Cached
    }
}

/// A successful conversion, annotated with the provenance of the rates
/// behind it. "No conversion possible" is the `None` arm of
/// `Option<Conversion>` - a normal outcome, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// The converted amount.
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub freshness: Freshness,
    /// When the backing snapshot was fetched.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub fetched_at: DateTime<Utc>,
}
