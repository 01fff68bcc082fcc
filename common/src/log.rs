//! Logging facade over [`tracing`].
//!
//! Every crate in the workspace logs through these macros so the CLI can
//! install a single formatter for all of them. `success!` emits at info level
//! on a dedicated target, letting the formatter render it with its own symbol.

/// Target carried by [`success!`] events.
pub const SUCCESS_TARGET: &str = "circ::success";

/// Target carried by raw display output from the CLI print helpers.
pub const PRINT_TARGET: &str = "circ::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { tracing::error!($($arg)*) };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => { tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*) };
}
