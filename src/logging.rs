//! Unified Logging Macros
//!
//! This module provides a unified logging interface that automatically
//! selects between `defmt::` and `log::` based on the active feature flags.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::knx_log;
//!
//! knx_log!(info, "Dispatcher ready");
//! knx_log!(debug, "Received {} bytes", n);
//! knx_log!(warn, "Group address '{}' not found", id);
//! knx_log!(error, "Payload too large");
//! knx_log!(trace, "Entering dispatch");
//! ```
//!
//! # Feature Flags
//!
//! - `defmt` - Uses `defmt::` (efficient binary logging for embedded targets)
//! - No feature - Uses `log::` (host-side; a no-op unless a logger is installed)

/// Unified logging macro - selects defmt:: or log:: based on features
///
/// This macro provides a consistent logging API across the entire crate,
/// regardless of which logging backend is configured at compile time.
#[macro_export]
#[cfg(feature = "defmt")]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(feature = "defmt"))]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}
