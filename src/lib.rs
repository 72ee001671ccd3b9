#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # knx-tp
//!
//! KNX TP datapoint codec and telegram routing core for embedded systems.
//!
//! This crate provides a `no_std` implementation of the KNX Datapoint Type
//! codecs, the bit-packed address model, and a broadcast-and-self-filter
//! telegram dispatcher with a small set of bus-facing entities.
//!
//! ## Features
//!
//! - Total (never-failing) encode/decode for the common DPT families
//! - Group and individual addressing with strict and lenient parsing
//! - O(1) symbolic group address registry
//! - Telegram fan-out to listeners and self-filtering entities
//!
//! ## Example
//!
//! ```rust
//! use knx_tp::{dpt::dpt9, ga, GroupAddress};
//!
//! let addr = GroupAddress::new(1, 2, 3).unwrap();
//! assert_eq!(addr, ga!(1/2/3));
//!
//! let payload = dpt9::encode(21.6);
//! assert!((dpt9::decode(&payload) - 21.6).abs() < 0.01);
//! ```

pub mod addressing;
pub mod dispatch;
pub mod dpt;
pub mod entity;
pub mod error;
pub mod registry;

// Macro modules (must be declared before use)
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

// Re-export commonly used types
#[doc(inline)]
pub use addressing::{GroupAddress, IndividualAddress};
#[doc(inline)]
pub use dispatch::{Dispatcher, GroupListener, TelegramListener, TelegramTransport};
#[doc(inline)]
pub use dpt::{Date, DateTime, HvacMode, TimeOfDay};
#[doc(inline)]
pub use entity::{Entity, EntityCommand};
#[doc(inline)]
pub use error::{KnxError, Result};
#[doc(inline)]
pub use registry::GroupAddressRegistry;
