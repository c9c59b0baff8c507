//! Host link-state port.

/// The host environment's "link present" signal.
///
/// Used only as a cheap fast path: link absent means offline without
/// contacting the provider. Link present proves nothing - the prober still
/// verifies the provider itself is reachable.
pub trait LinkStatus: Send + Sync {
    fn link_present(&self) -> bool;
}

/// Default for hosts that expose no link signal: always claims a link, so
/// reachability is decided entirely by the prober's endpoint check.
pub struct LinkAlwaysPresent;

impl LinkStatus for LinkAlwaysPresent {
    fn link_present(&self) -> bool {
        true
    }
}
