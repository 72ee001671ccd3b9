//! DPT 10.001 - Time of Day (3 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: DDDH HHHH  (D = day of week, H = hour)
//! Byte 1: RRMM MMMM  (R = reserved, M = minute)
//! Byte 2: RRSS SSSS  (R = reserved, S = second)
//! ```
//!
//! Day of week: 0 = no day, 1 = Monday .. 7 = Sunday.

/// Wire width of a DPT 10.001 payload in bytes.
pub const WIRE_WIDTH: usize = 3;

/// Time of day value (DPT 10.001)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    /// 0 = no day, 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

/// Decode a DPT 10.001 payload.
///
/// Input shorter than 3 bytes decodes to the all-zero default. Reserved bits
/// are masked out; any sub-field still out of range after masking is
/// substituted with 0 rather than propagated.
pub fn decode(data: &[u8]) -> TimeOfDay {
    if data.len() < WIRE_WIDTH {
        return TimeOfDay::default();
    }

    let mut time = TimeOfDay {
        day_of_week: (data[0] >> 5) & 0x07,
        hour: data[0] & 0x1F,
        minute: data[1] & 0x3F,
        second: data[2] & 0x3F,
    };

    // Re-validate: the masks still admit hour 24-31 and minute/second 60-63
    if time.hour > 23 {
        time.hour = 0;
    }
    if time.minute > 59 {
        time.minute = 0;
    }
    if time.second > 59 {
        time.second = 0;
    }

    time
}

/// Encode a time of day to a DPT 10.001 payload.
///
/// Each sub-field is independently clamped to its valid range.
pub fn encode(time: &TimeOfDay) -> [u8; WIRE_WIDTH] {
    let dow = time.day_of_week & 0x07;
    let hour = time.hour.min(23);
    let minute = time.minute.min(59);
    let second = time.second.min(59);

    [(dow << 5) | hour, minute, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let time = TimeOfDay {
            day_of_week: 1,
            hour: 14,
            minute: 30,
            second: 45,
        };
        assert_eq!(decode(&encode(&time)), time);
    }

    #[test]
    fn test_wire_layout() {
        // Monday 14:30:45 -> byte 0 = 001_01110
        let time = TimeOfDay {
            day_of_week: 1,
            hour: 14,
            minute: 30,
            second: 45,
        };
        assert_eq!(encode(&time), [0x2E, 30, 45]);
    }

    #[test]
    fn test_encode_clamps() {
        let time = TimeOfDay {
            day_of_week: 7,
            hour: 99,
            minute: 99,
            second: 99,
        };
        assert_eq!(encode(&time), [(7 << 5) | 23, 59, 59]);
    }

    #[test]
    fn test_decode_masks_reserved_bits() {
        // Reserved bits set in bytes 1 and 2 are ignored
        let time = decode(&[0x2E, 0xC0 | 30, 0xC0 | 45]);
        assert_eq!(time.minute, 30);
        assert_eq!(time.second, 45);
    }

    #[test]
    fn test_decode_out_of_range_hour_substituted() {
        // Hour bits 11000 = 24 are invalid and substitute to 0
        let time = decode(&[24, 0, 0]);
        assert_eq!(time.hour, 0);
    }

    #[test]
    fn test_decode_short_input_is_default() {
        assert_eq!(decode(&[]), TimeOfDay::default());
        assert_eq!(decode(&[0x2E, 30]), TimeOfDay::default());
    }

    #[test]
    fn test_no_day_of_week() {
        let time = TimeOfDay {
            day_of_week: 0,
            hour: 6,
            minute: 0,
            second: 0,
        };
        let decoded = decode(&encode(&time));
        assert_eq!(decoded.day_of_week, 0);
        assert_eq!(decoded.hour, 6);
    }
}
