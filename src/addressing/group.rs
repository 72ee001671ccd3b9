//! KNX Group Address implementation.
//!
//! Group addresses represent logical groupings of devices for functional
//! control, using the 3-level Main/Middle/Sub notation (e.g., 1/2/3).
//!
//! Internally stored as 16 bits:
//! - Main: 5 bits (0-31)
//! - Middle: 3 bits (0-7)
//! - Sub: 8 bits (0-255)
//!
//! The numeric value is the single source of truth. Text forms accept `/` or
//! `.` as separator on input; formatting always emits `main/middle/sub`.

use crate::error::{KnxError, Result};
use core::fmt;

/// KNX Group Address
///
/// Used for logical grouping of devices and functions.
///
/// # Examples
///
/// ```
/// use knx_tp::GroupAddress;
///
/// let addr = GroupAddress::new(1, 2, 3).unwrap();
/// assert_eq!(addr.to_text(), "1/2/3");
///
/// // Create from raw u16
/// let addr = GroupAddress::from(0x0A03u16);
/// assert_eq!(addr.main(), 1);
/// assert_eq!(addr.middle(), 2);
/// assert_eq!(addr.sub(), 3);
///
/// // Lenient parsing: malformed input yields the zero address
/// assert_eq!(GroupAddress::parse("5/3/200").raw(), GroupAddress::parse("5.3.200").raw());
/// assert_eq!(GroupAddress::parse("not an address").raw(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupAddress {
    raw: u16,
}

impl GroupAddress {
    /// Maximum main group value (5 bits)
    pub const MAX_MAIN: u8 = 31;
    /// Maximum middle group value (3 bits)
    pub const MAX_MIDDLE: u8 = 7;
    /// Maximum sub group value (8 bits)
    pub const MAX_SUB: u8 = 255;

    /// The degenerate all-zero address returned for malformed text input.
    pub const ZERO: Self = Self { raw: 0 };

    /// Create a new 3-level Group Address (Main/Middle/Sub).
    ///
    /// # Arguments
    ///
    /// * `main` - Main group (0-31)
    /// * `middle` - Middle group (0-7)
    /// * `sub` - Sub group (0-255)
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Addressing` if any component is out of range.
    pub fn new(main: u8, middle: u8, sub: u8) -> Result<Self> {
        if main > Self::MAX_MAIN {
            return Err(KnxError::address_out_of_range());
        }
        if middle > Self::MAX_MIDDLE {
            return Err(KnxError::address_out_of_range());
        }
        // sub is u8, so it's always in range

        let raw = (u16::from(main) << 11) | (u16::from(middle) << 8) | u16::from(sub);
        Ok(Self { raw })
    }

    /// Parse a group address from text, returning [`Self::ZERO`] on any violation.
    ///
    /// Accepts `/` or `.` as segment separator interchangeably. Requires
    /// exactly three non-empty, all-numeric, in-range segments; a missing
    /// segment, a non-digit character or an out-of-bounds value yields the
    /// all-zero address rather than a partial one. Callers that care about
    /// validity must check for the degenerate zero.
    pub fn parse(text: &str) -> Self {
        text.parse().unwrap_or(Self::ZERO)
    }

    /// Check whether this is the degenerate all-zero address.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Get the raw u16 representation of the address.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Get the main group component (0-31).
    #[inline(always)]
    pub const fn main(self) -> u8 {
        ((self.raw >> 11) & 0x1F) as u8
    }

    /// Get the middle group component (0-7).
    #[inline(always)]
    pub const fn middle(self) -> u8 {
        ((self.raw >> 8) & 0x07) as u8
    }

    /// Get the sub group component (0-255).
    #[inline(always)]
    pub const fn sub(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Format as canonical `main/middle/sub` text.
    ///
    /// Always reconstructs the slash form from the three bit-fields,
    /// regardless of how the address was originally separated on input.
    pub fn to_text(&self) -> heapless::String<16> {
        use core::fmt::Write;
        let mut s = heapless::String::new();
        let _ = write!(s, "{}/{}/{}", self.main(), self.middle(), self.sub());
        s
    }

    /// Encode the address into a byte buffer (big-endian).
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Transport` if the buffer is smaller than 2 bytes.
    #[inline]
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < 2 {
            return Err(KnxError::buffer_too_small());
        }
        buf[0..2].copy_from_slice(&self.raw.to_be_bytes());
        Ok(2)
    }

    /// Decode an address from a byte buffer (big-endian).
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Transport` if the buffer is smaller than 2 bytes.
    #[inline]
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < 2 {
            return Err(KnxError::buffer_too_small());
        }
        let raw = u16::from_be_bytes([buf[0], buf[1]]);
        Ok(Self { raw })
    }
}

impl From<u16> for GroupAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<GroupAddress> for u16 {
    #[inline(always)]
    fn from(addr: GroupAddress) -> u16 {
        addr.raw
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

impl core::str::FromStr for GroupAddress {
    type Err = KnxError;

    /// Strict parse: exactly three all-digit segments, `/` or `.` separated.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(['/', '.']);

        let main = parts
            .next()
            .and_then(super::parse_segment)
            .ok_or_else(KnxError::invalid_group_address)?;

        let middle = parts
            .next()
            .and_then(super::parse_segment)
            .ok_or_else(KnxError::invalid_group_address)?;

        let sub = parts
            .next()
            .and_then(super::parse_segment)
            .ok_or_else(KnxError::invalid_group_address)?;

        // Ensure no extra segments
        if parts.next().is_some() {
            return Err(KnxError::invalid_group_address());
        }

        Self::new(main, middle, sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let addr = GroupAddress::new(1, 2, 3).unwrap();
        assert_eq!(addr.main(), 1);
        assert_eq!(addr.middle(), 2);
        assert_eq!(addr.sub(), 3);
    }

    #[test]
    fn test_new_invalid_main() {
        let result = GroupAddress::new(32, 0, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_invalid_middle() {
        let result = GroupAddress::new(0, 8, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_raw() {
        // 1/2/3 = 0b00001_010_00000011 = 0x0A03
        let addr = GroupAddress::from(0x0A03u16);
        assert_eq!(addr.main(), 1);
        assert_eq!(addr.middle(), 2);
        assert_eq!(addr.sub(), 3);
    }

    #[test]
    fn test_to_raw() {
        let addr = GroupAddress::new(1, 2, 3).unwrap();
        assert_eq!(u16::from(addr), 0x0A03);
    }

    #[test]
    fn test_encode_decode() {
        let addr = GroupAddress::new(31, 7, 255).unwrap();
        let mut buf = [0u8; 2];
        addr.encode(&mut buf).unwrap();
        let decoded = GroupAddress::decode(&buf).unwrap();
        assert_eq!(addr, decoded);
    }

    #[test]
    fn test_display() {
        let addr = GroupAddress::new(1, 2, 3).unwrap();
        assert_eq!(format!("{}", addr), "1/2/3");
    }

    #[test]
    fn test_parse_slash_and_dot_agree() {
        let a = GroupAddress::parse("1/2/3");
        let b = GroupAddress::parse("1.2.3");
        assert_eq!(a, b);
        assert_eq!(a.raw(), 0x0A03);
    }

    #[test]
    fn test_parse_round_trip_format() {
        let addr = GroupAddress::parse("5/3/200");
        assert_eq!(addr.to_text(), "5/3/200");
    }

    #[test]
    fn test_parse_malformed_yields_zero() {
        assert_eq!(GroupAddress::parse(""), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("1.2"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("1.2.3.4"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("a.b.c"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("1//3"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("32/0/0"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("1/8/0"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("1/2/256"), GroupAddress::ZERO);
    }

    #[test]
    fn test_parse_rejects_signs_and_whitespace() {
        // u8::from_str alone would accept the leading plus
        assert_eq!(GroupAddress::parse("+1/2/3"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("1/+2/3"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse("-1/2/3"), GroupAddress::ZERO);
        assert_eq!(GroupAddress::parse(" 1/2/3"), GroupAddress::ZERO);
        assert!("+1/2/3".parse::<GroupAddress>().is_err());
    }

    #[test]
    fn test_parse_mixed_separators() {
        // Both separators are accepted, even mixed
        assert_eq!(GroupAddress::parse("1/2.3").raw(), 0x0A03);
    }

    #[test]
    fn test_from_str_strict_errors() {
        assert!("1".parse::<GroupAddress>().is_err());
        assert!("1/2/3/4".parse::<GroupAddress>().is_err());
        assert!("a/b/c".parse::<GroupAddress>().is_err());
        assert!("".parse::<GroupAddress>().is_err());
        assert!("32/0/0".parse::<GroupAddress>().is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(GroupAddress::ZERO.is_zero());
        assert!(GroupAddress::parse("0.0.0").is_zero());
        assert!(!GroupAddress::parse("0/0/1").is_zero());
    }
}
