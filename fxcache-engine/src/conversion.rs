//! The pure conversion computation.

use fxcache_types::{CurrencyCode, RateSnapshot};

/// Converts `amount` from one currency to another through the snapshot's
/// base unit: `(amount / rate[from]) * rate[to]`.
///
/// The snapshot stores each currency's price relative to a single fixed
/// base, not a pairwise matrix, so the two-hop path is the only one
/// available. Returns `None` - never a guess or a partial result - when
/// either code is missing, either rate is unusable, or the arithmetic
/// leaves the finite range.
pub fn convert(
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
    snapshot: &RateSnapshot,
) -> Option<f64> {
    if !amount.is_finite() {
        return None;
    }
    let from_rate = usable_rate(snapshot, from)?;
    let to_rate = usable_rate(snapshot, to)?;

    let converted = (amount / from_rate) * to_rate;
    converted.is_finite().then_some(converted)
}

fn usable_rate(snapshot: &RateSnapshot, code: &CurrencyCode) -> Option<f64> {
    snapshot
        .rate(code)
        .filter(|rate| rate.is_finite() && *rate > 0.0)
}
