//! KNX Datapoint Types (DPT)
//!
//! This module provides encoding and decoding for KNX Datapoint Types.
//! DPTs define how to interpret the data payload in KNX telegrams.
//!
//! ## Supported DPT Families
//!
//! - **DPT 1.xxx** - Boolean (1 bit): switches, buttons, binary sensors
//! - **DPT 5.xxx** - 8-bit unsigned: raw values, percentages, angles
//! - **DPT 9.xxx** - 2-byte float: temperature, illuminance, pressure
//! - **DPT 10.001** - Time of day (3 bytes)
//! - **DPT 11.001** - Date (3 bytes)
//! - **DPT 14.xxx** - 4-byte IEEE-754 float
//! - **DPT 16.001** - Character string (max 14 ASCII chars)
//! - **DPT 19.001** - Date and time with validity flags (8 bytes)
//! - **DPT 20.102** - HVAC operating mode
//!
//! ## Design Note
//!
//! Every decode and encode function in this module is **total**: the target
//! execution environment forbids exceptions, so malformed input never fails.
//! Decoding a payload shorter than the DPT's wire width returns that DPT's
//! documented default (`false`, `0`, `0.0`, empty string, 2000-01-01,
//! `HvacMode::Auto`); encoding clamps out-of-range values to the nearest
//! valid bound and maps non-finite floats to the zero pattern. Callers that
//! need to distinguish "default" from "decoded zero" must validate payload
//! length themselves before decoding.
//!
//! ## Usage
//!
//! ```
//! use knx_tp::dpt::{dpt1, dpt5, dpt9};
//!
//! // Boolean
//! let data = dpt1::encode(true);          // [0x01]
//! assert!(dpt1::decode(&data));
//!
//! // Percentage (0-100%)
//! let data = dpt5::encode_percentage(75.0);
//! let value = dpt5::decode_percentage(&data);
//! assert!((value - 75.0).abs() < 0.4);
//!
//! // Temperature (2-byte float)
//! let data = dpt9::encode(21.5);
//! let temp = dpt9::decode(&data);
//! assert!((temp - 21.5).abs() < 0.1);
//! ```

pub mod dpt1;
pub mod dpt5;
pub mod dpt9;
pub mod dpt10;
pub mod dpt11;
pub mod dpt14;
pub mod dpt16;
pub mod dpt19;
pub mod dpt20;

// Re-export the value types carried by the structured DPTs
#[doc(inline)]
pub use dpt10::TimeOfDay;
#[doc(inline)]
pub use dpt11::Date;
#[doc(inline)]
pub use dpt19::DateTime;
#[doc(inline)]
pub use dpt20::HvacMode;
