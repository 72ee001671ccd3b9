//! DPT 9.xxx - 2-byte Float (16-bit floating point)
//!
//! 2-byte floating point datapoint types represent values using a custom
//! 16-bit format with 1 sign bit, 4 exponent bits and 11 mantissa bits.
//! This format is specific to the KNX protocol and distinct from IEEE-754.
//!
//! ## Format
//!
//! ```text
//! Byte 0: SEEE EMMM
//! Byte 1: MMMM MMMM
//!
//! S = Sign bit (bit 15: 0 = positive, 1 = negative)
//! E = Exponent (bits 14-11: 4 bits, unsigned, range 0-15)
//! M = Mantissa (bits 10-0: 11 bits, two's complement when S=1)
//!
//! Value = (0.01 * M) * 2^E
//! ```
//!
//! The mantissa already carries the sign through its two's-complement
//! encoding, so the explicit sign bit is redundant by the arithmetic. Both
//! are written on encode: downstream decoders on this bus were built against
//! that exact bit pattern, so it is preserved rather than "fixed".
//!
//! ## Range
//!
//! - Min: -671088.64
//! - Max: +670760.96
//! - Resolution: 0.01 at exponent 0, doubling with each exponent step
//!
//! ## Common Subtypes
//!
//! - **9.001** - Temperature (°C)
//! - **9.004** - Illuminance (lux)
//! - **9.006** - Pressure (Pa)
//! - **9.007** - Humidity (%)

/// Wire width of a DPT 9 payload in bytes.
pub const WIRE_WIDTH: usize = 2;

/// Smallest representable value.
pub const MIN: f32 = -671_088.64;
/// Largest representable value.
pub const MAX: f32 = 670_760.96;

/// Decode a 2-byte KNX float to f32.
///
/// Input shorter than 2 bytes decodes to `0.0`.
pub fn decode(data: &[u8]) -> f32 {
    if data.len() < WIRE_WIDTH {
        return 0.0;
    }

    let raw = u16::from_be_bytes([data[0], data[1]]);

    let exponent = (raw >> 11) & 0x0F;
    let mantissa_raw = raw & 0x07FF;

    // Sign bit set: mantissa is two's complement on 11 bits
    let mantissa = if raw & 0x8000 != 0 {
        i32::from(mantissa_raw) - 2048
    } else {
        i32::from(mantissa_raw)
    };

    (0.01 * mantissa as f32) * (1u32 << exponent) as f32
}

/// Encode an f32 to the 2-byte KNX float format.
///
/// Non-finite input encodes to the zero pattern `[0x00, 0x00]`. Finite input
/// is clamped to the representable range *before* the x100 scaling so the
/// mantissa computation cannot overflow. The smallest exponent (0-15) that
/// fits the scaled mantissa in 11 signed bits is selected by arithmetic
/// right-shifting until it fits or the exponent caps out, then the mantissa
/// is clamped as a final safety net.
pub fn encode(value: f32) -> [u8; WIRE_WIDTH] {
    if !value.is_finite() {
        return [0x00, 0x00];
    }

    let clamped = value.clamp(MIN, MAX);

    let mut mantissa = (clamped * 100.0) as i32;
    let mut exponent = 0u16;

    // Scale mantissa to fit in 11-bit signed range: -2048 to +2047
    while !(-2048..=2047).contains(&mantissa) && exponent < 15 {
        mantissa >>= 1;
        exponent += 1;
    }

    // Final clamp (should not trigger after the shift loop)
    let mantissa = mantissa.clamp(-2048, 2047) as i16;

    // Build the 16-bit value: SEEE EMMM MMMM MMMM.
    // Negative mantissas keep their two's-complement low 11 bits and
    // additionally set the sign bit.
    let mut raw = (exponent << 11) | ((mantissa as u16) & 0x07FF);
    if mantissa < 0 {
        raw |= 0x8000;
    }

    raw.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
        assert!(
            (a - b).abs() < epsilon,
            "Expected {} ≈ {}, diff = {}",
            a,
            b,
            (a - b).abs()
        );
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0.0), [0x00, 0x00]);
    }

    #[test]
    fn test_decode_zero() {
        assert_eq!(decode(&[0x00, 0x00]), 0.0);
    }

    #[test]
    fn test_decode_official_knx_example() {
        // Official KNX specification example: 0x0AF0 decodes to 15.04
        // Sign: 0, Exponent: 1, Mantissa: 752
        // Value = (752 * 0.01) * 2^1 = 15.04
        assert_float_eq(decode(&[0x0A, 0xF0]), 15.04, 0.01);
    }

    #[test]
    fn test_decode_real_bus_value() {
        // Real bus value: 0x0C38 decodes to 21.6°C
        // Sign: 0, Exponent: 1, Mantissa: 1080
        assert_float_eq(decode(&[0x0C, 0x38]), 21.6, 0.01);
    }

    #[test]
    fn test_encode_negative_sets_both_sign_encodings() {
        // -5.0: mantissa -500, two's complement on 11 bits = 0x60C,
        // with sign bit: 0x860C
        let data = encode(-5.0);
        assert_eq!(data[0] & 0x80, 0x80, "sign bit must be set");
        assert_float_eq(decode(&data), -5.0, 0.01);
    }

    #[test]
    fn test_round_trip_temperature_values() {
        for value in [0.0f32, 10.5, 21.0, -10.0, 50.0, -273.0] {
            let decoded = decode(&encode(value));
            assert_float_eq(decoded, value, value.abs() * 0.01 + 0.1);
        }
    }

    #[test]
    fn test_round_trip_large_values() {
        // Quantization error grows with the exponent
        let decoded = decode(&encode(1000.0));
        assert_float_eq(decoded, 1000.0, 5.0);

        let decoded = decode(&encode(100_000.0));
        assert_float_eq(decoded, 100_000.0, 500.0);
    }

    #[test]
    fn test_round_trip_small_decimal() {
        assert_float_eq(decode(&encode(0.5)), 0.5, 0.01);
        assert_float_eq(decode(&encode(-0.5)), -0.5, 0.02);
    }

    #[test]
    fn test_encode_clamps_to_range() {
        // Values outside the representable range clamp to the bounds
        let decoded = decode(&encode(1.0e9));
        assert_float_eq(decoded, MAX, MAX * 0.01);

        let decoded = decode(&encode(-1.0e9));
        assert_float_eq(decoded, MIN, -MIN * 0.01);
    }

    #[test]
    fn test_encode_non_finite_is_zero_pattern() {
        assert_eq!(encode(f32::NAN), [0x00, 0x00]);
        assert_eq!(encode(f32::INFINITY), [0x00, 0x00]);
        assert_eq!(encode(f32::NEG_INFINITY), [0x00, 0x00]);
    }

    #[test]
    fn test_decode_short_input_is_default() {
        assert_eq!(decode(&[]), 0.0);
        assert_eq!(decode(&[0x0C]), 0.0);
    }

    #[test]
    fn test_decode_min_mantissa_with_sign() {
        // 0x8000: sign set, exponent 0, raw mantissa 0 -> -2048 * 0.01
        assert_float_eq(decode(&[0x80, 0x00]), -20.48, 0.001);
    }
}
