//! DPT 20.102 - HVAC Operating Mode
//!
//! A single byte carrying an enumerated heating/cooling mode.
//!
//! ## Format
//!
//! ```text
//! Byte 0: mode discriminant (0-4)
//! ```
//!
//! Discriminants outside the known set decode to the lowest-ordinal default
//! ([`HvacMode::Auto`]), as does input shorter than one byte.

/// Wire width of a DPT 20.102 payload in bytes.
pub const WIRE_WIDTH: usize = 1;

/// HVAC operating mode (DPT 20.102)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HvacMode {
    /// Automatic changeover
    #[default]
    Auto = 0,
    /// Comfort setpoint
    Comfort = 1,
    /// Standby setpoint
    Standby = 2,
    /// Night setback
    Night = 3,
    /// Frost/heat protection only
    FrostProtection = 4,
}

impl HvacMode {
    /// Map a wire discriminant to a mode, substituting `Auto` for unknown values.
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            1 => HvacMode::Comfort,
            2 => HvacMode::Standby,
            3 => HvacMode::Night,
            4 => HvacMode::FrostProtection,
            _ => HvacMode::Auto,
        }
    }

    /// Human-readable mode name.
    pub const fn name(self) -> &'static str {
        match self {
            HvacMode::Auto => "auto",
            HvacMode::Comfort => "comfort",
            HvacMode::Standby => "standby",
            HvacMode::Night => "night",
            HvacMode::FrostProtection => "frost protection",
        }
    }
}

/// Decode a DPT 20.102 payload.
///
/// Empty input or an unknown discriminant decodes to [`HvacMode::Auto`].
#[inline]
pub fn decode(data: &[u8]) -> HvacMode {
    match data.first() {
        Some(&byte) => HvacMode::from_byte(byte),
        None => HvacMode::Auto,
    }
}

/// Encode an HVAC mode to a DPT 20.102 payload.
#[inline]
pub fn encode(mode: HvacMode) -> [u8; WIRE_WIDTH] {
    [mode as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_modes() {
        for mode in [
            HvacMode::Auto,
            HvacMode::Comfort,
            HvacMode::Standby,
            HvacMode::Night,
            HvacMode::FrostProtection,
        ] {
            assert_eq!(decode(&encode(mode)), mode);
        }
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(encode(HvacMode::Auto), [0]);
        assert_eq!(encode(HvacMode::Comfort), [1]);
        assert_eq!(encode(HvacMode::FrostProtection), [4]);
    }

    #[test]
    fn test_unknown_discriminant_defaults_to_auto() {
        assert_eq!(decode(&[5]), HvacMode::Auto);
        assert_eq!(decode(&[0xFF]), HvacMode::Auto);
    }

    #[test]
    fn test_decode_empty_defaults_to_auto() {
        assert_eq!(decode(&[]), HvacMode::Auto);
    }
}
