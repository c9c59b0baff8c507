//! Error types for the outbound ports.
//!
//! Every variant here is *transient* from the engine's point of view: the
//! engine recovers by falling back to the cache (or reporting no data), so
//! none of these ever propagate past the refresher or prober boundary.

/// Failures of a single remote rate fetch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request timed out")]
    Timeout,

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed rate payload: {0}")]
    MalformedPayload(String),
}

/// Failures of the snapshot store.
///
/// Only `save` can fail; a corrupt or missing persisted snapshot is
/// reported as absent by `load`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
