//! DPT 1.xxx - Boolean (1-bit)
//!
//! Boolean datapoint types represent binary states (on/off, true/false, etc.)
//! encoded as a single bit (LSB of the data byte in the APDU).
//!
//! ## Format
//!
//! - 7 bits: unused (always 0)
//! - 1 bit: data (LSB)
//!   - `0` = false/off/disable/...
//!   - `1` = true/on/enable/...
//!
//! ## Common Subtypes
//!
//! - **1.001** - Switch (off/on)
//! - **1.002** - Bool (false/true)
//! - **1.008** - UpDown (up/down)
//! - **1.009** - OpenClose (open/close)

/// Wire width of a DPT 1 payload in bytes.
pub const WIRE_WIDTH: usize = 1;

/// Decode a DPT 1 payload to a boolean.
///
/// Only the LSB of the first byte matters; upper bits are masked out.
/// Empty input decodes to `false`.
#[inline]
pub fn decode(data: &[u8]) -> bool {
    match data.first() {
        Some(byte) => (byte & 0x01) != 0,
        None => false,
    }
}

/// Encode a boolean to a DPT 1 payload.
#[inline]
pub fn encode(value: bool) -> [u8; WIRE_WIDTH] {
    [u8::from(value)]
}
