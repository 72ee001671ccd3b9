//! Analog sensor entity.
//!
//! Receives numeric values from the bus. The [`SensorKind`] picks the
//! datapoint codec for the state address and carries the display metadata
//! (unit, DPT identifier) the host surfaces alongside the value.

use crate::addressing::GroupAddress;
use crate::dpt::{dpt14, dpt5, dpt9};
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{id_matches, make_id, EntityName, GaId};

/// Sensor value kinds and the datapoint codec each one selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    /// DPT 9.001, degrees Celsius
    Temperature,
    /// DPT 9.007, percent relative humidity
    Humidity,
    /// DPT 9.004, lux
    Illuminance,
    /// DPT 9.006, pascal
    Pressure,
    /// DPT 5.001, percent
    Percentage,
    /// DPT 5.003, degrees
    Angle,
    /// DPT 5.xxx, raw unsigned byte
    Raw8,
    /// DPT 9.xxx, generic 2-byte float
    #[default]
    Float16,
    /// DPT 14.xxx, generic 4-byte float
    Float32,
}

impl SensorKind {
    /// DPT identifier string, e.g. `"9.001"`.
    pub const fn dpt_identifier(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "9.001",
            SensorKind::Humidity => "9.007",
            SensorKind::Illuminance => "9.004",
            SensorKind::Pressure => "9.006",
            SensorKind::Percentage => "5.001",
            SensorKind::Angle => "5.003",
            SensorKind::Raw8 => "5.010",
            SensorKind::Float16 => "9.002",
            SensorKind::Float32 => "14.000",
        }
    }

    /// Display unit, empty for dimensionless kinds.
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity | SensorKind::Percentage => "%",
            SensorKind::Illuminance => "lx",
            SensorKind::Pressure => "Pa",
            SensorKind::Angle => "°",
            SensorKind::Raw8 | SensorKind::Float16 | SensorKind::Float32 => "",
        }
    }

    /// Decode a payload with this kind's codec.
    pub fn decode(&self, data: &[u8]) -> f32 {
        match self {
            SensorKind::Temperature
            | SensorKind::Humidity
            | SensorKind::Illuminance
            | SensorKind::Pressure
            | SensorKind::Float16 => dpt9::decode(data),
            SensorKind::Percentage => dpt5::decode_percentage(data),
            SensorKind::Angle => dpt5::decode_angle(data),
            SensorKind::Raw8 => f32::from(dpt5::decode(data)),
            SensorKind::Float32 => dpt14::decode(data),
        }
    }
}

#[derive(Debug)]
pub struct Sensor {
    name: EntityName,
    state_ga_id: GaId,
    kind: SensorKind,
    value: Option<f32>,
}

impl Sensor {
    /// Create a sensor entity.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(name: &str, state_ga_id: &str, kind: SensorKind) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            state_ga_id: make_id(state_ga_id)?,
            kind,
            value: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Last published value, `None` until the first telegram.
    pub fn value(&self) -> Option<f32> {
        self.value
    }

    pub fn handle_telegram(
        &mut self,
        registry: &GroupAddressRegistry,
        address: GroupAddress,
        data: &[u8],
    ) {
        if !id_matches(registry, &self.state_ga_id, address) {
            return;
        }

        let value = self.kind.decode(data);
        knx_log!(
            debug,
            "'{}': received {} {}",
            self.name.as_str(),
            value,
            self.kind.unit()
        );
        self.value = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_float_eq(a: f32, b: f32) {
        assert!((a - b).abs() < 0.01, "expected {b}, got {a}");
    }

    fn registry() -> GroupAddressRegistry {
        let mut r = GroupAddressRegistry::new();
        r.register("temp", GroupAddress::parse("3/1/0")).unwrap();
        r
    }

    #[test]
    fn test_temperature_uses_dpt9() {
        let registry = registry();
        let mut sensor = Sensor::new("outside", "temp", SensorKind::Temperature).unwrap();

        // 21.6 degrees as a 2-byte float
        sensor.handle_telegram(&registry, GroupAddress::parse("3/1/0"), &[0x0C, 0x38]);
        assert_float_eq(sensor.value().unwrap(), 21.6);
    }

    #[test]
    fn test_percentage_uses_dpt5() {
        let registry = registry();
        let mut sensor = Sensor::new("valve", "temp", SensorKind::Percentage).unwrap();

        sensor.handle_telegram(&registry, GroupAddress::parse("3/1/0"), &[0xFF]);
        assert_float_eq(sensor.value().unwrap(), 100.0);
    }

    #[test]
    fn test_float32_uses_dpt14() {
        let registry = registry();
        let mut sensor = Sensor::new("energy", "temp", SensorKind::Float32).unwrap();

        sensor.handle_telegram(
            &registry,
            GroupAddress::parse("3/1/0"),
            &1234.5f32.to_be_bytes(),
        );
        assert_float_eq(sensor.value().unwrap(), 1234.5);
    }

    #[test]
    fn test_raw8() {
        let registry = registry();
        let mut sensor = Sensor::new("counter", "temp", SensorKind::Raw8).unwrap();

        sensor.handle_telegram(&registry, GroupAddress::parse("3/1/0"), &[42]);
        assert_float_eq(sensor.value().unwrap(), 42.0);
    }

    #[test]
    fn test_other_address_ignored() {
        let registry = registry();
        let mut sensor = Sensor::new("outside", "temp", SensorKind::Temperature).unwrap();

        sensor.handle_telegram(&registry, GroupAddress::parse("3/1/1"), &[0x0C, 0x38]);
        assert!(sensor.value().is_none());
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(SensorKind::Temperature.dpt_identifier(), "9.001");
        assert_eq!(SensorKind::Temperature.unit(), "°C");
        assert_eq!(SensorKind::Illuminance.unit(), "lx");
        assert_eq!(SensorKind::Float16.unit(), "");
    }
}
