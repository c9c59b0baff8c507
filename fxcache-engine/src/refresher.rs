//! Rate refresher.
//!
//! Performs the bounded-time remote fetch and falls back to the persisted
//! snapshot on any failure. No failure here ever escalates to the caller:
//! the return type has no error arm.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use fxcache_types::{CurrencyCode, Freshness, RateSnapshot, RateSource, SnapshotStore};

use crate::prober::Prober;

pub struct Refresher {
    source: Arc<dyn RateSource>,
    store: Arc<dyn SnapshotStore>,
    prober: Arc<Prober>,
    base: CurrencyCode,
    timeout: Duration,
}

impl Refresher {
    pub fn new(
        source: Arc<dyn RateSource>,
        store: Arc<dyn SnapshotStore>,
        prober: Arc<Prober>,
        base: CurrencyCode,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            store,
            prober,
            base,
            timeout,
        }
    }

    /// Returns the best available snapshot: freshly fetched if the network
    /// cooperates, else the persisted one, else `None`.
    ///
    /// A successful fetch is the sole path that persists a new snapshot and
    /// advances last-updated; a cached fallback keeps its original
    /// `fetched_at`.
    pub async fn refresh(&self) -> Option<(RateSnapshot, Freshness)> {
        if self.prober.connectivity().is_online() {
            match tokio::time::timeout(self.timeout, self.source.fetch_rates(&self.base)).await {
                Ok(Ok(rates)) => {
                    let snapshot = RateSnapshot::new(rates, Utc::now());
                    if let Err(err) = self.store.save(&snapshot) {
                        // The fresh snapshot is still served; only durability
                        // suffered.
                        tracing::warn!(%err, "failed to persist rate snapshot");
                    }
                    tracing::info!(currencies = snapshot.rates().len(), "rates refreshed");
                    return Some((snapshot, Freshness::Fresh));
                }
                Ok(Err(err)) => {
                    tracing::debug!(%err, "rate fetch failed, falling back to cache");
                }
                Err(_) => {
                    tracing::debug!(timeout = ?self.timeout, "rate fetch timed out, falling back to cache");
                }
            }
        } else {
            tracing::debug!("offline, skipping rate fetch");
        }

        self.store
            .load()
            .map(|cached| (cached, Freshness::Cached))
    }
}
