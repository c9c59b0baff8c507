//! Snapshot store port.
//!
//! The persisted snapshot is the only durable shared resource: read by the
//! conversion path, written only by the refresher on a successful fetch.

use crate::domain::RateSnapshot;
use crate::error::StoreError;

/// Port trait for snapshot persistence.
///
/// Both operations are synchronous and non-suspending; only the network
/// calls in the engine suspend.
pub trait SnapshotStore: Send + Sync {
    /// Returns the last persisted snapshot.
    ///
    /// Missing, unreadable, or unparseable persisted data is `None` -
    /// corruption self-heals on the next successful refresh and must never
    /// surface as an error to the caller.
    fn load(&self) -> Option<RateSnapshot>;

    /// Atomically persists the snapshot.
    ///
    /// Rates and fetch timestamp are written together: a concurrent `load`
    /// observes either the previous snapshot or this one in full, never a
    /// blend.
    fn save(&self, snapshot: &RateSnapshot) -> Result<(), StoreError>;
}
