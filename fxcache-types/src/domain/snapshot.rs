//! Persisted rate snapshots.

use std::collections::HashMap;
use std::time::Duration as StdDuration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// One fetched rate table: each currency's price in the fixed base unit.
pub type RateTable = HashMap<CurrencyCode, f64>;

/// The last successfully fetched rate table together with its fetch time.
///
/// A snapshot is immutable once built; a refresh constructs a whole new one.
/// Both fields live in a single serde document so that any store persisting
/// the document atomically cannot expose rates without their timestamp.
///
/// Persisted layout: `{ "rates": { "USD": 1.0, ... }, "timestamp": millis }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    rates: RateTable,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    pub fn new(rates: RateTable, fetched_at: DateTime<Utc>) -> Self {
        Self { rates, fetched_at }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// The base-unit price of `code`, if the table carries it.
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// When this snapshot was fetched from the network.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Elapsed time since the fetch. Negative under clock skew.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.fetched_at
    }

    /// Whether the snapshot has aged past `threshold`.
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: StdDuration) -> bool {
        let threshold = TimeDelta::from_std(threshold).unwrap_or(TimeDelta::MAX);
        self.age(now) >= threshold
    }
}
