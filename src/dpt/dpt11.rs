//! DPT 11.001 - Date (3 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: day   (1-31)
//! Byte 1: month (1-12)
//! Byte 2: year  (0-99, windowed: 0-89 = 2000-2089, 90-99 = 1990-1999)
//! ```

/// Wire width of a DPT 11.001 payload in bytes.
pub const WIRE_WIDTH: usize = 3;

/// Calendar date value (DPT 11.001)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    /// 1-31
    pub day: u8,
    /// 1-12
    pub month: u8,
    /// Full year, 1990-2089
    pub year: u16,
}

impl Default for Date {
    /// The epoch-like default `2000-01-01`.
    fn default() -> Self {
        Self {
            day: 1,
            month: 1,
            year: 2000,
        }
    }
}

/// Decode a DPT 11.001 payload.
///
/// Input shorter than 3 bytes decodes to the default `2000-01-01`. The
/// two-digit year window maps 0-89 to 2000-2089 and 90-99 to 1990-1999; a
/// year byte above 99 is invalid and substitutes 2000. Out-of-range day or
/// month sub-fields substitute 1 rather than propagating corrupt values.
pub fn decode(data: &[u8]) -> Date {
    if data.len() < WIRE_WIDTH {
        return Date::default();
    }

    let mut date = Date {
        day: data[0],
        month: data[1],
        year: match data[2] {
            y @ 0..=89 => 2000 + u16::from(y),
            y @ 90..=99 => 1900 + u16::from(y),
            _ => 2000,
        },
    };

    if date.day < 1 || date.day > 31 {
        date.day = 1;
    }
    if date.month < 1 || date.month > 12 {
        date.month = 1;
    }

    date
}

/// Encode a date to a DPT 11.001 payload.
///
/// Day and month are clamped to their valid ranges; a year outside the
/// 1990-2089 window encodes as 2000 (year byte 0).
pub fn encode(date: &Date) -> [u8; WIRE_WIDTH] {
    let day = date.day.clamp(1, 31);
    let month = date.month.clamp(1, 12);

    let year_byte = match date.year {
        2000..=2089 => (date.year - 2000) as u8,
        1990..=1999 => (date.year - 1900) as u8,
        _ => 0,
    };

    [day, month, year_byte]
}
