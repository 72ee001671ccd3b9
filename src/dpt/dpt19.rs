//! DPT 19.001 - Date and Time (8 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0-1: year (1990-2089, big-endian)
//! Byte 2:   month (1-12)
//! Byte 3:   day (1-31)
//! Byte 4:   DDDH HHHH (D = day of week, H = hour)
//! Byte 5:   minute (0-59)
//! Byte 6:   second (0-59)
//! Byte 7:   flags (fault, working day, validity, summer time)
//! ```
//!
//! Unlike the 3-byte date and time types, DPT 19.001 decoding is strict
//! about the wire width: anything other than exactly 8 bytes yields the
//! full default struct.

/// Wire width of a DPT 19.001 payload in bytes.
pub const WIRE_WIDTH: usize = 8;

/// Combined date, time and quality flags (DPT 19.001)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    /// Full year, 1990-2089
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0 = no day, 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// Clock fault
    pub fault: bool,
    /// Day is a working day
    pub working_day: bool,
    /// Working-day field not valid
    pub no_wd: bool,
    /// Year field not valid
    pub no_year: bool,
    /// Date fields not valid
    pub no_date: bool,
    /// Day-of-week field not valid
    pub no_dow: bool,
    /// Time fields not valid
    pub no_time: bool,
    /// Summer time (DST) in effect
    pub summer_time: bool,
}

impl Default for DateTime {
    /// `2000-01-01 00:00:00`, no day of week, all flags clear.
    fn default() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            day_of_week: 0,
            hour: 0,
            minute: 0,
            second: 0,
            fault: false,
            working_day: false,
            no_wd: false,
            no_year: false,
            no_date: false,
            no_dow: false,
            no_time: false,
            summer_time: false,
        }
    }
}

/// Decode a DPT 19.001 payload.
///
/// Strict width check: anything other than exactly 8 bytes yields the full
/// default struct. Every numeric sub-field is re-validated after extraction
/// and substituted with its safe default when out of range (year outside
/// 1990-2089 becomes 2000, month outside 1-12 becomes 1, and so on).
pub fn decode(data: &[u8]) -> DateTime {
    if data.len() != WIRE_WIDTH {
        return DateTime::default();
    }

    let flags = data[7];

    let mut dt = DateTime {
        year: u16::from_be_bytes([data[0], data[1]]),
        month: data[2],
        day: data[3],
        day_of_week: (data[4] >> 5) & 0x07,
        hour: data[4] & 0x1F,
        minute: data[5],
        second: data[6],
        fault: (flags & 0x80) != 0,
        working_day: (flags & 0x40) != 0,
        no_wd: (flags & 0x20) != 0,
        no_year: (flags & 0x10) != 0,
        no_date: (flags & 0x08) != 0,
        no_dow: (flags & 0x04) != 0,
        no_time: (flags & 0x02) != 0,
        summer_time: (flags & 0x01) != 0,
    };

    // Substitute safe defaults for corrupt sub-fields
    if dt.year < 1990 || dt.year > 2089 {
        dt.year = 2000;
    }
    if dt.month < 1 || dt.month > 12 {
        dt.month = 1;
    }
    if dt.day < 1 || dt.day > 31 {
        dt.day = 1;
    }
    if dt.hour > 23 {
        dt.hour = 0;
    }
    if dt.minute > 59 {
        dt.minute = 0;
    }
    if dt.second > 59 {
        dt.second = 0;
    }

    dt
}

/// Encode a date-time to a DPT 19.001 payload.
///
/// Each sub-field is independently clamped to its valid range before
/// packing; the eight flags map to the bits of byte 7 (fault = MSB,
/// summer time = LSB).
pub fn encode(dt: &DateTime) -> [u8; WIRE_WIDTH] {
    let year = dt.year.clamp(1990, 2089);
    let month = dt.month.clamp(1, 12);
    let day = dt.day.clamp(1, 31);
    let dow = dt.day_of_week & 0x07;
    let hour = dt.hour.min(23);
    let minute = dt.minute.min(59);
    let second = dt.second.min(59);

    let mut flags = 0u8;
    if dt.fault {
        flags |= 0x80;
    }
    if dt.working_day {
        flags |= 0x40;
    }
    if dt.no_wd {
        flags |= 0x20;
    }
    if dt.no_year {
        flags |= 0x10;
    }
    if dt.no_date {
        flags |= 0x08;
    }
    if dt.no_dow {
        flags |= 0x04;
    }
    if dt.no_time {
        flags |= 0x02;
    }
    if dt.summer_time {
        flags |= 0x01;
    }

    let year_bytes = year.to_be_bytes();
    [
        year_bytes[0],
        year_bytes[1],
        month,
        day,
        (dow << 5) | hour,
        minute,
        second,
        flags,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime {
        DateTime {
            year: 2024,
            month: 10,
            day: 20,
            day_of_week: 7,
            hour: 14,
            minute: 30,
            second: 45,
            working_day: false,
            summer_time: true,
            ..DateTime::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let dt = sample();
        assert_eq!(decode(&encode(&dt)), dt);
    }

    #[test]
    fn test_wire_layout() {
        let data = encode(&sample());
        assert_eq!(&data[0..2], &2024u16.to_be_bytes());
        assert_eq!(data[2], 10);
        assert_eq!(data[3], 20);
        assert_eq!(data[4], (7 << 5) | 14);
        assert_eq!(data[5], 30);
        assert_eq!(data[6], 45);
        assert_eq!(data[7], 0x01); // only summer_time set
    }

    #[test]
    fn test_flags_round_trip() {
        let mut dt = DateTime::default();
        dt.fault = true;
        dt.no_year = true;
        dt.no_time = true;

        let decoded = decode(&encode(&dt));
        assert!(decoded.fault);
        assert!(decoded.no_year);
        assert!(decoded.no_time);
        assert!(!decoded.working_day);
        assert!(!decoded.summer_time);
    }

    #[test]
    fn test_encode_clamps_year() {
        // Year 2100 clamps to 2089 on the wire
        let mut dt = sample();
        dt.year = 2100;
        assert_eq!(decode(&encode(&dt)).year, 2089);

        dt.year = 1970;
        assert_eq!(decode(&encode(&dt)).year, 1990);
    }

    #[test]
    fn test_decode_requires_exact_width() {
        // Anything other than 8 bytes yields the full default struct
        assert_eq!(decode(&[]), DateTime::default());
        assert_eq!(decode(&encode(&sample())[..7]), DateTime::default());

        let mut long = [0u8; 9];
        long[..8].copy_from_slice(&encode(&sample()));
        assert_eq!(decode(&long), DateTime::default());
    }

    #[test]
    fn test_decode_substitutes_corrupt_fields() {
        // Year 3000, month 13, day 32, hour 24 on the wire
        let data = [0x0B, 0xB8, 13, 32, 24, 60, 60, 0];
        let dt = decode(&data);
        assert_eq!(dt.year, 2000);
        assert_eq!(dt.month, 1);
        assert_eq!(dt.day, 1);
        assert_eq!(dt.hour, 0);
        assert_eq!(dt.minute, 0);
        assert_eq!(dt.second, 0);
    }

    #[test]
    fn test_default_struct() {
        let dt = DateTime::default();
        assert_eq!(dt.year, 2000);
        assert_eq!(dt.month, 1);
        assert_eq!(dt.day, 1);
        assert!(!dt.fault && !dt.summer_time);
    }
}
