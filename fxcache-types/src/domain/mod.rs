//! Pure domain types.
//!
//! No IO, no clocks, no network - every type here is constructed from plain
//! values and can be exercised in a unit test without a runtime.

mod currency;
mod outcome;
mod snapshot;

pub use currency::CurrencyCode;
pub use outcome::{Connectivity, Conversion, Freshness};
pub use snapshot::{RateSnapshot, RateTable};
