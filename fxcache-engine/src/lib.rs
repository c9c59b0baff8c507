//! # fxcache Engine
//!
//! The staleness-aware cache-refresh-and-fallback engine: decides, given
//! network reachability and snapshot age, whether to trust the network,
//! trust the cache, or report unavailability - and guarantees conversions
//! never hang on an unreachable network.
//!
//! ## Architecture
//!
//! - `prober` - reachability belief, single-flight endpoint checks
//! - `refresher` - bounded-time fetch with cache-or-absent fallback
//! - `scheduler` - owned periodic probe/refresh tasks with start/stop
//! - `conversion` - the pure two-hop conversion computation
//! - `engine` - the `RateEngine` context object wiring it all together
//!
//! The engine is built over the ports in `fxcache-types`; adapters are
//! injected at construction.

pub mod conversion;
pub mod engine;
pub mod prober;
pub mod refresher;
pub mod scheduler;
pub mod single_flight;


pub use engine::{EngineConfig, RateEngine};
pub use scheduler::SchedulerHandle;
