//! DPT 5.xxx - 8-bit Unsigned Value (1 byte)
//!
//! 8-bit unsigned datapoint types represent values from 0 to 255 with
//! different scaling and interpretations.
//!
//! ## Format
//!
//! - 8 bits: unsigned value (0-255)
//!
//! ## Subtypes covered here
//!
//! - **5.xxx** - Raw unsigned value (0-255), no scaling
//! - **5.001** - Percentage (0-100%), scaled x255/100
//! - **5.003** - Angle (0-360 degrees), scaled x255/360

/// Wire width of a DPT 5 payload in bytes.
pub const WIRE_WIDTH: usize = 1;

/// Decode a raw 8-bit unsigned value.
///
/// Empty input decodes to `0`.
#[inline]
pub fn decode(data: &[u8]) -> u8 {
    data.first().copied().unwrap_or(0)
}

/// Encode a raw 8-bit unsigned value.
#[inline]
pub fn encode(value: u8) -> [u8; WIRE_WIDTH] {
    [value]
}

/// Decode a DPT 5.001 percentage (0-100%).
///
/// Empty input decodes to `0.0`. The quantization step is 100/255, roughly
/// 0.4 percentage points.
#[inline]
pub fn decode_percentage(data: &[u8]) -> f32 {
    match data.first() {
        Some(&byte) => (f32::from(byte) * 100.0) / 255.0,
        None => 0.0,
    }
}

/// Encode a DPT 5.001 percentage (0-100%).
///
/// The value is clamped to 0-100 before scaling; non-finite input encodes
/// to `0`.
pub fn encode_percentage(value: f32) -> [u8; WIRE_WIDTH] {
    if !value.is_finite() {
        return [0];
    }
    let clamped = value.clamp(0.0, 100.0);
    // Round to nearest (manual rounding for no_std); clamped is non-negative
    [(clamped * 255.0 / 100.0 + 0.5) as u8]
}

/// Decode a DPT 5.003 angle (0-360 degrees).
///
/// Empty input decodes to `0.0`.
#[inline]
pub fn decode_angle(data: &[u8]) -> f32 {
    match data.first() {
        Some(&byte) => (f32::from(byte) * 360.0) / 255.0,
        None => 0.0,
    }
}

/// Encode a DPT 5.003 angle (0-360 degrees).
///
/// Out-of-range input is wrapped into 0-360 by remainder, so arbitrarily
/// large finite values reduce in constant time; non-finite input encodes to
/// 0 degrees.
pub fn encode_angle(value: f32) -> [u8; WIRE_WIDTH] {
    if !value.is_finite() {
        return [0];
    }

    // Euclidean remainder by hand; `%` keeps the dividend's sign.
    let mut angle = value % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    // A tiny negative remainder rounds back up to exactly 360.0
    if angle >= 360.0 {
        angle = 0.0;
    }
    [(angle * 255.0 / 360.0 + 0.5) as u8]
}
