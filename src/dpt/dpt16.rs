//! DPT 16.001 - Character String (ASCII)
//!
//! Carries up to 14 printable ASCII characters plus a terminating zero byte,
//! for a maximum wire width of 15 bytes.
//!
//! ## Format
//!
//! ```text
//! Byte 0..n: printable ASCII characters (0x20-0x7E), n <= 14
//! Byte n+1:  0x00 terminator
//! ```
//!
//! Non-printable bytes are filtered on both paths: decoding skips them
//! without counting against the 14-character ceiling, encoding drops them
//! from the output.

/// Maximum number of characters in a DPT 16.001 string.
pub const MAX_LENGTH: usize = 14;

/// Maximum wire width (14 characters + zero terminator).
pub const MAX_WIRE_WIDTH: usize = MAX_LENGTH + 1;

/// Decode a DPT 16.001 payload to a string.
///
/// Stops at the first zero byte or after 14 retained characters; bytes
/// outside the printable ASCII range (0x20-0x7E) are filtered out. Empty
/// input decodes to the empty string.
pub fn decode(data: &[u8]) -> heapless::String<MAX_LENGTH> {
    let mut result = heapless::String::new();

    for &byte in data {
        if byte == 0 || result.len() >= MAX_LENGTH {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            // Capacity is MAX_LENGTH, checked above
            let _ = result.push(byte as char);
        }
    }

    result
}

/// Encode a string to a DPT 16.001 payload.
///
/// Only printable ASCII characters (0x20-0x7E) are retained; the output is
/// truncated at 14 characters and always carries a terminating zero byte.
pub fn encode(value: &str) -> heapless::Vec<u8, MAX_WIRE_WIDTH> {
    let mut result = heapless::Vec::new();

    for byte in value.bytes() {
        if result.len() >= MAX_LENGTH {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            let _ = result.push(byte);
        }
    }

    let _ = result.push(0);
    result
}
