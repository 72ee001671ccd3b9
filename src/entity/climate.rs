//! Climate entity (room thermostat front end).
//!
//! Tracks the current temperature and the setpoint as DPT 9 values and the
//! HVAC operating mode as DPT 20.102. The setpoint and mode are writable;
//! the current temperature is feedback only.

use crate::addressing::GroupAddress;
use crate::dispatch::TelegramTransport;
use crate::dpt::{dpt20, dpt9, HvacMode};
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{id_matches, make_id, make_opt_id, resolve_for_send, EntityName, GaId};

#[derive(Debug)]
pub struct Climate {
    name: EntityName,
    temperature_ga_id: GaId,
    setpoint_ga_id: GaId,
    mode_ga_id: Option<GaId>,
    current_temperature: Option<f32>,
    target_temperature: Option<f32>,
    mode: HvacMode,
}

impl Climate {
    /// Create a climate entity.
    ///
    /// `mode_ga_id` is optional; thermostats without a mode object skip it.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(
        name: &str,
        temperature_ga_id: &str,
        setpoint_ga_id: &str,
        mode_ga_id: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            temperature_ga_id: make_id(temperature_ga_id)?,
            setpoint_ga_id: make_id(setpoint_ga_id)?,
            mode_ga_id: make_opt_id(mode_ga_id)?,
            current_temperature: None,
            target_temperature: None,
            mode: HvacMode::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_temperature(&self) -> Option<f32> {
        self.current_temperature
    }

    pub fn target_temperature(&self) -> Option<f32> {
        self.target_temperature
    }

    pub fn mode(&self) -> HvacMode {
        self.mode
    }

    /// Send a new setpoint to the bus.
    pub fn send_setpoint(
        &mut self,
        registry: &GroupAddressRegistry,
        transport: &mut dyn TelegramTransport,
        setpoint: f32,
    ) -> Result<()> {
        let dest = resolve_for_send(registry, &self.setpoint_ga_id)?;

        knx_log!(debug, "'{}': sending setpoint {}", self.name.as_str(), setpoint);
        transport.send(dest, &dpt9::encode(setpoint))?;
        self.target_temperature = Some(setpoint);
        Ok(())
    }

    /// Send a new HVAC mode to the bus.
    ///
    /// Without a configured mode address this logs and skips; the entity
    /// state is left unchanged.
    pub fn send_mode(
        &mut self,
        registry: &GroupAddressRegistry,
        transport: &mut dyn TelegramTransport,
        mode: HvacMode,
    ) -> Result<()> {
        let Some(mode_id) = &self.mode_ga_id else {
            knx_log!(warn, "'{}': no mode address configured", self.name.as_str());
            return Ok(());
        };
        let dest = resolve_for_send(registry, mode_id)?;

        knx_log!(debug, "'{}': sending mode {}", self.name.as_str(), mode.name());
        transport.send(dest, &dpt20::encode(mode))?;
        self.mode = mode;
        Ok(())
    }

    pub fn handle_telegram(
        &mut self,
        registry: &GroupAddressRegistry,
        address: GroupAddress,
        data: &[u8],
    ) {
        if id_matches(registry, &self.temperature_ga_id, address) {
            let value = dpt9::decode(data);
            knx_log!(debug, "'{}': current temperature {}", self.name.as_str(), value);
            self.current_temperature = Some(value);
            return;
        }

        if id_matches(registry, &self.setpoint_ga_id, address) {
            let value = dpt9::decode(data);
            knx_log!(debug, "'{}': target temperature {}", self.name.as_str(), value);
            self.target_temperature = Some(value);
            return;
        }

        if let Some(mode_id) = &self.mode_ga_id {
            if id_matches(registry, mode_id, address) {
                let mode = dpt20::decode(data);
                knx_log!(debug, "'{}': mode feedback {}", self.name.as_str(), mode.name());
                self.mode = mode;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::test_support::RecordingTransport;

    fn registry() -> GroupAddressRegistry {
        let mut r = GroupAddressRegistry::new();
        r.register("clim_temp", GroupAddress::parse("5/0/1")).unwrap();
        r.register("clim_set", GroupAddress::parse("5/0/2")).unwrap();
        r.register("clim_mode", GroupAddress::parse("5/0/3")).unwrap();
        r
    }

    fn climate() -> Climate {
        Climate::new("living", "clim_temp", "clim_set", Some("clim_mode")).unwrap()
    }

    #[test]
    fn test_temperature_feedback() {
        let registry = registry();
        let mut clim = climate();

        // 21.6 degrees
        clim.handle_telegram(&registry, GroupAddress::parse("5/0/1"), &[0x0C, 0x38]);
        assert!((clim.current_temperature().unwrap() - 21.6).abs() < 0.01);
        assert!(clim.target_temperature().is_none());
    }

    #[test]
    fn test_setpoint_feedback() {
        let registry = registry();
        let mut clim = climate();

        clim.handle_telegram(&registry, GroupAddress::parse("5/0/2"), &[0x0C, 0x1A]);
        assert!((clim.target_temperature().unwrap() - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_mode_feedback() {
        let registry = registry();
        let mut clim = climate();

        clim.handle_telegram(&registry, GroupAddress::parse("5/0/3"), &[0x01]);
        assert_eq!(clim.mode(), HvacMode::Comfort);
    }

    #[test]
    fn test_send_setpoint() {
        let registry = registry();
        let mut transport = RecordingTransport::new();
        let mut clim = climate();

        clim.send_setpoint(&registry, &mut transport, 22.0).unwrap();

        let (dest, data) = &transport.sent[0];
        assert_eq!(*dest, GroupAddress::parse("5/0/2"));
        assert!((crate::dpt::dpt9::decode(data) - 22.0).abs() < 0.01);
        assert_eq!(clim.target_temperature(), Some(22.0));
    }

    #[test]
    fn test_send_mode() {
        let registry = registry();
        let mut transport = RecordingTransport::new();
        let mut clim = climate();

        clim.send_mode(&registry, &mut transport, HvacMode::Night).unwrap();

        let (dest, data) = &transport.sent[0];
        assert_eq!(*dest, GroupAddress::parse("5/0/3"));
        assert_eq!(data.as_slice(), &[0x03]);
        assert_eq!(clim.mode(), HvacMode::Night);
    }

    #[test]
    fn test_send_mode_without_mode_address_skips() {
        let registry = registry();
        let mut transport = RecordingTransport::new();
        let mut clim = Climate::new("living", "clim_temp", "clim_set", None).unwrap();

        clim.send_mode(&registry, &mut transport, HvacMode::Night).unwrap();
        assert!(transport.sent.is_empty());
        assert_eq!(clim.mode(), HvacMode::Auto);
    }
}
