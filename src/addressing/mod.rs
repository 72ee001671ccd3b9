//! KNX addressing types.
//!
//! Two address kinds share the same 16-bit wire representation but split the
//! bits differently:
//!
//! - [`GroupAddress`] - logical multicast address, 5/3/8 bits (main/middle/sub)
//! - [`IndividualAddress`] - physical device address, 4/4/8 bits (area/line/device)

pub mod group;
pub mod individual;

pub use group::GroupAddress;
pub use individual::IndividualAddress;

/// Parse one address segment, accepting only unsigned decimal digits.
///
/// `u8::from_str` tolerates a leading `+`; address text must not, so the
/// segment is checked character-wise before the numeric parse.
pub(crate) fn parse_segment(part: &str) -> Option<u8> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
