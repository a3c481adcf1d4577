//! Logging shims.
//!
//! With the `tracing` feature the engine reports guide fallbacks, sanitized
//! dimensions and registry misses through `tracing`. Without it every macro
//! below swallows its arguments, so call sites always read
//! `crate::log::debug!(...)` regardless of features.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace, warn};
