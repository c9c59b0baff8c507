//! The engine context object.
//!
//! One explicit owner for the prober, refresher, and configuration - no
//! ambient globals. `RateEngine` is a cheap clone-by-handle, so the
//! scheduler tasks and the caller share the same context.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use fxcache_types::{
    Connectivity, Conversion, CurrencyCode, Freshness, LinkStatus, RateSnapshot, RateSource,
    SnapshotStore,
};

use crate::conversion;
use crate::prober::Prober;
use crate::refresher::Refresher;
use crate::scheduler::{self, SchedulerHandle};

/// Timing and base-currency configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Currency the remote rate table is quoted against.
    pub base_currency: CurrencyCode,
    /// Budget for a reachability check.
    pub probe_timeout: Duration,
    /// Budget for a full rate fetch.
    pub fetch_timeout: Duration,
    /// Cadence of the background reachability poll.
    pub probe_interval: Duration,
    /// Cadence of the background staleness check.
    pub refresh_check_interval: Duration,
    /// Snapshot age at which the scheduler refreshes (when online).
    pub staleness_threshold: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_currency: CurrencyCode::usd(),
            probe_timeout: Duration::from_millis(2500),
            fetch_timeout: Duration::from_secs(4),
            probe_interval: Duration::from_secs(10),
            refresh_check_interval: Duration::from_secs(60 * 60),
            staleness_threshold: Duration::from_secs(12 * 60 * 60),
        }
    }
}

struct Inner {
    config: EngineConfig,
    store: Arc<dyn SnapshotStore>,
    prober: Arc<Prober>,
    refresher: Refresher,
}

/// Handle to the rate-conversion cache engine.
#[derive(Clone)]
pub struct RateEngine {
    inner: Arc<Inner>,
}

impl RateEngine {
    /// Wires the engine over the injected adapters.
    pub fn new(
        config: EngineConfig,
        source: Arc<dyn RateSource>,
        store: Arc<dyn SnapshotStore>,
        link: Arc<dyn LinkStatus>,
    ) -> Self {
        let prober = Arc::new(Prober::new(
            Arc::clone(&source),
            link,
            config.base_currency.clone(),
            config.probe_timeout,
        ));
        let refresher = Refresher::new(
            source,
            Arc::clone(&store),
            Arc::clone(&prober),
            config.base_currency.clone(),
            config.fetch_timeout,
        );
        Self {
            inner: Arc::new(Inner {
                config,
                store,
                prober,
                refresher,
            }),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Converts `amount` using the best available snapshot.
    ///
    /// Asks the refresher first, so a long-idle client re-attempts a fetch
    /// on user interaction rather than waiting for the scheduler's clock.
    /// `None` means no conversion is possible right now: no network and no
    /// cache, or a currency the table does not carry.
    pub async fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Option<Conversion> {
        let (snapshot, freshness) = self.refresh().await?;
        let converted = conversion::convert(amount, from, to, &snapshot)?;
        Some(Conversion {
            amount: converted,
            from: from.clone(),
            to: to.clone(),
            freshness,
            fetched_at: snapshot.fetched_at(),
        })
    }

    /// Current reachability belief. `Offline` until the first probe resolves.
    pub fn connectivity(&self) -> Connectivity {
        self.inner.prober.connectivity()
    }

    /// When rates were last successfully fetched; advances only with a
    /// successful save.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.snapshot().map(|snapshot| snapshot.fetched_at())
    }

    /// The persisted snapshot, if any.
    pub fn snapshot(&self) -> Option<RateSnapshot> {
        self.inner.store.load()
    }

    /// Re-evaluates reachability now (single-flight).
    pub async fn probe(&self) -> Connectivity {
        self.inner.prober.probe().await
    }

    /// Entry point for host "link up"/"link down" transition events: the
    /// old belief is suspect, so re-probe immediately.
    pub async fn notify_link_change(&self) -> Connectivity {
        self.probe().await
    }

    /// One refresh cycle: fresh-if-possible, else cached, else `None`.
    pub async fn refresh(&self) -> Option<(RateSnapshot, Freshness)> {
        self.inner.refresher.refresh().await
    }

    /// User-initiated refresh: bypasses the staleness check, but still
    /// degrades to cache-or-absent when the provider is unreachable.
    pub async fn force_refresh(&self) -> Option<(RateSnapshot, Freshness)> {
        self.probe().await;
        self.refresh().await
    }

    /// Starts the background scheduler; stop it via the returned handle.
    pub fn start(&self) -> SchedulerHandle {
        scheduler::start(self.clone())
    }
}
