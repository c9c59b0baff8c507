//! Remote rate provider port.
//!
//! Implementations can be HTTP clients, test stubs, etc. The engine only
//! requires "a callable that, given a base currency, returns a rate table
//! or fails".

use crate::domain::{CurrencyCode, RateTable};
use crate::error::SourceError;

/// Port trait for live rate providers.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Performs one rate-table fetch against the live provider.
    ///
    /// Implementations should fail fast on transport problems; the engine
    /// applies its own timeout budget around this call. A returned table
    /// must be structurally valid: non-empty, every rate finite and
    /// positive. Anything else is `SourceError::MalformedPayload`.
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, SourceError>;
}
