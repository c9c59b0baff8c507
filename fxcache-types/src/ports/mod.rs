//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The engine depends on these traits, not concrete implementations.

mod link;
mod source;
mod store;

pub use link::{LinkAlwaysPresent, LinkStatus};
pub use source::RateSource;
pub use store::SnapshotStore;
