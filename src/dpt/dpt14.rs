//! DPT 14.xxx - 4-byte Float (IEEE-754 single precision)
//!
//! 4-byte floating point datapoint types carry a full IEEE-754 single
//! precision value, big-endian on the wire. Encoding is an exact bit
//! reinterpretation with no rounding, so round-trips are lossless.
//!
//! ## Format
//!
//! ```text
//! Byte 0-3: IEEE-754 binary32, most significant byte first
//! ```
//!
//! ## Common Subtypes
//!
//! - **14.019** - Electric current (A)
//! - **14.056** - Power (W)
//! - **14.068** - Temperature (°C)

/// Wire width of a DPT 14 payload in bytes.
pub const WIRE_WIDTH: usize = 4;

/// Decode a 4-byte IEEE-754 float.
///
/// Input shorter than 4 bytes decodes to `0.0`.
#[inline]
pub fn decode(data: &[u8]) -> f32 {
    if data.len() < WIRE_WIDTH {
        return 0.0;
    }
    f32::from_be_bytes([data[0], data[1], data[2], data[3]])
}

/// Encode an f32 as a 4-byte IEEE-754 payload (big-endian, lossless).
#[inline]
pub fn encode(value: f32) -> [u8; WIRE_WIDTH] {
    value.to_be_bytes()
}
