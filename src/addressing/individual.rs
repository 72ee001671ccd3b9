//! KNX Individual (physical) Address implementation.
//!
//! Individual addresses identify a single device on the bus using the
//! Area.Line.Device notation (e.g., 1.1.20).
//!
//! Internally stored as 16 bits:
//! - Area: 4 bits (0-15)
//! - Line: 4 bits (0-15)
//! - Device: 8 bits (0-255)
//!
//! The same packed integer is reused for both address kinds in this protocol
//! family; only the field widths differ from [`GroupAddress`](super::GroupAddress).

use crate::error::{KnxError, Result};
use core::fmt;

/// KNX Individual Address (physical device address)
///
/// # Examples
///
/// ```
/// use knx_tp::IndividualAddress;
///
/// let addr = IndividualAddress::new(1, 1, 20).unwrap();
/// assert_eq!(addr.to_text(), "1.1.20");
///
/// // Dots and slashes both parse
/// assert_eq!(IndividualAddress::parse("1.1.20"), IndividualAddress::parse("1/1/20"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualAddress {
    raw: u16,
}

impl IndividualAddress {
    /// Maximum area value (4 bits)
    pub const MAX_AREA: u8 = 15;
    /// Maximum line value (4 bits)
    pub const MAX_LINE: u8 = 15;
    /// Maximum device value (8 bits)
    pub const MAX_DEVICE: u8 = 255;

    /// The degenerate all-zero address returned for malformed text input.
    pub const ZERO: Self = Self { raw: 0 };

    /// Create a new Individual Address (Area.Line.Device).
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Addressing` if any component is out of range.
    pub fn new(area: u8, line: u8, device: u8) -> Result<Self> {
        if area > Self::MAX_AREA {
            return Err(KnxError::address_out_of_range());
        }
        if line > Self::MAX_LINE {
            return Err(KnxError::address_out_of_range());
        }
        // device is u8, so it's always in range

        let raw = (u16::from(area) << 12) | (u16::from(line) << 8) | u16::from(device);
        Ok(Self { raw })
    }

    /// Parse an individual address from text, returning [`Self::ZERO`] on any violation.
    ///
    /// Accepts `.` or `/` as segment separator interchangeably. Requires
    /// exactly three non-empty, all-numeric, in-range segments.
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

    /// Get the area component (0-15).
    #[inline(always)]
    pub const fn area(self) -> u8 {
        ((self.raw >> 12) & 0x0F) as u8
    }

    /// Get the line component (0-15).
    #[inline(always)]
    pub const fn line(self) -> u8 {
        ((self.raw >> 8) & 0x0F) as u8
    }

    /// Get the device component (0-255).
    #[inline(always)]
    pub const fn device(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Format as canonical `area.line.device` text.
    pub fn to_text(&self) -> heapless::String<16> {
        use core::fmt::Write;
        let mut s = heapless::String::new();
        let _ = write!(s, "{}.{}.{}", self.area(), self.line(), self.device());
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

impl From<u16> for IndividualAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<IndividualAddress> for u16 {
    #[inline(always)]
    fn from(addr: IndividualAddress) -> u16 {
        addr.raw
    }
}

impl fmt::Display for IndividualAddress {
    /// Dot-separated canonical form, distinguishing it from group addresses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.area(), self.line(), self.device())
    }
}

impl core::str::FromStr for IndividualAddress {
    type Err = KnxError;

    /// Strict parse: exactly three all-digit segments, `.` or `/` separated.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(['.', '/']);

        let area = parts
            .next()
            .and_then(super::parse_segment)
            .ok_or_else(KnxError::invalid_individual_address)?;

        let line = parts
            .next()
            .and_then(super::parse_segment)
            .ok_or_else(KnxError::invalid_individual_address)?;

        let device = parts
            .next()
            .and_then(super::parse_segment)
            .ok_or_else(KnxError::invalid_individual_address)?;

        // Ensure no extra segments
        if parts.next().is_some() {
            return Err(KnxError::invalid_individual_address());
        }

        Self::new(area, line, device)
    }
}
