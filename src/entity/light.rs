//! Light entity.
//!
//! Write-only actuator front end: a DPT 1 switch address plus an optional
//! DPT 5.001 brightness address. Dimmers without a brightness object behave
//! as plain on/off lights. The bus never feeds state back to this entity.

use crate::addressing::GroupAddress;
use crate::dispatch::TelegramTransport;
use crate::dpt::{dpt1, dpt5};
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{make_id, make_opt_id, resolve_for_send, EntityName, GaId};

#[derive(Debug)]
pub struct Light {
    name: EntityName,
    switch_ga_id: GaId,
    brightness_ga_id: Option<GaId>,
    on: Option<bool>,
    brightness: Option<f32>,
}

impl Light {
    /// Create a light entity.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(name: &str, switch_ga_id: &str, brightness_ga_id: Option<&str>) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            switch_ga_id: make_id(switch_ga_id)?,
            brightness_ga_id: make_opt_id(brightness_ga_id)?,
            on: None,
            brightness: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_on(&self) -> Option<bool> {
        self.on
    }

    /// Last written brightness, 0.0 .. 1.0.
    pub fn brightness(&self) -> Option<f32> {
        self.brightness
    }

    /// Supports dimming when a brightness address is configured.
    pub fn supports_brightness(&self) -> bool {
        self.brightness_ga_id.is_some()
    }

    /// Write the on/off state and, when configured, the brightness.
    pub fn write_state(
        &mut self,
        registry: &GroupAddressRegistry,
        transport: &mut dyn TelegramTransport,
        on: bool,
        brightness: f32,
    ) -> Result<()> {
        let switch_dest = resolve_for_send(registry, &self.switch_ga_id)?;

        knx_log!(
            debug,
            "'{}': writing {} brightness {}",
            self.name.as_str(),
            on,
            brightness
        );

        transport.send(switch_dest, &dpt1::encode(on))?;
        self.on = Some(on);

        if let Some(brightness_id) = &self.brightness_ga_id {
            let brightness_dest = resolve_for_send(registry, brightness_id)?;
            transport.send(brightness_dest, &dpt5::encode_percentage(brightness * 100.0))?;
            self.brightness = Some(brightness.clamp(0.0, 1.0));
        }

        Ok(())
    }

    /// Lights are write-only; inbound telegrams are ignored.
    pub fn handle_telegram(
        &mut self,
        _registry: &GroupAddressRegistry,
        _address: GroupAddress,
        _data: &[u8],
    ) {
    }
}
