//! # fxcache Types
//!
//! Domain types and port traits for the rate-conversion cache engine.
//! This crate has ZERO external IO dependencies - only data structures,
//! invariants, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, RateSnapshot, Conversion)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Error types for the outbound ports

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Connectivity, Conversion, CurrencyCode, Freshness, RateSnapshot, RateTable};
pub use error::{SourceError, StoreError};
pub use ports::{LinkAlwaysPresent, LinkStatus, RateSource, SnapshotStore};
