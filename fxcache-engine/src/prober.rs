//! Reachability prober.
//!
//! Decides whether the rate provider is currently usable - not just whether
//! a link is up - by performing a bounded, cache-proof call against the same
//! endpoint the refresher depends on.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use fxcache_types::{Connectivity, CurrencyCode, LinkStatus, RateSource};

use crate::single_flight::SingleFlight;

/// Holds and updates the engine's reachability belief.
///
/// The belief starts `Offline` (offline-safe) and is only written here; the
/// refresher and scheduler read it. Probes are single-flight: a `probe()`
/// while one is running starts no second network call.
pub struct Prober {
    source: Arc<dyn RateSource>,
    link: Arc<dyn LinkStatus>,
    base: CurrencyCode,
    timeout: Duration,
    online: AtomicBool,
    flight: SingleFlight<Connectivity>,
}

impl Prober {
    pub fn new(
        source: Arc<dyn RateSource>,
        link: Arc<dyn LinkStatus>,
        base: CurrencyCode,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            link,
            base,
            timeout,
            online: AtomicBool::new(false),
            flight: SingleFlight::new(),
        }
    }

    /// The current belief. Unchanged by an in-flight probe until it resolves.
    pub fn connectivity(&self) -> Connectivity {
        if self.online.load(Ordering::Relaxed) {
            Connectivity::Online
        } else {
            Connectivity::Offline
        }
    }

    /// Re-evaluates reachability and records the verdict.
    ///
    /// Callers arriving while a probe is in flight are handed that probe's
    /// verdict instead of triggering a pile-up.
    pub async fn probe(&self) -> Connectivity {
        self.flight.run(|| self.check()).await
    }

    async fn check(&self) -> Connectivity {
        let verdict = if !self.link.link_present() {
            // No link at all: offline without bothering the provider.
            Connectivity::Offline
        } else {
            match tokio::time::timeout(self.timeout, self.source.fetch_rates(&self.base)).await {
                // Only a structurally valid rate table counts as reachable.
                Ok(Ok(_)) => Connectivity::Online,
                Ok(Err(err)) => {
                    tracing::debug!(%err, "reachability check failed");
                    Connectivity::Offline
                }
                Err(_) => {
                    tracing::debug!(timeout = ?self.timeout, "reachability check timed out");
                    Connectivity::Offline
                }
            }
        };

        let previous = self.online.swap(verdict.is_online(), Ordering::Relaxed);
        if previous != verdict.is_online() {
            tracing::info!(%verdict, "connectivity changed");
        }
        verdict
    }
}
