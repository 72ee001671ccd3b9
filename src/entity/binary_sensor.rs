//! Binary sensor entity.
//!
//! Listens for DPT 1 telegrams on its state group address. Useful for wall
//! switches, motion detectors and window contacts. An optional auto-reset
//! interval supports momentary sources (motion, buttons): the core exposes
//! the interval and the host timer calls [`BinarySensor::publish_state`]
//! with `false` when it elapses. The core itself holds no timer machinery.

use crate::addressing::GroupAddress;
use crate::dpt::dpt1;
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{id_matches, make_id, EntityName, GaId};

#[derive(Debug)]
pub struct BinarySensor {
    name: EntityName,
    state_ga_id: GaId,
    invert: bool,
    auto_reset_ms: Option<u32>,
    state: Option<bool>,
}

impl BinarySensor {
    /// Create a binary sensor entity.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(
        name: &str,
        state_ga_id: &str,
        invert: bool,
        auto_reset_ms: Option<u32>,
    ) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            state_ga_id: make_id(state_ga_id)?,
            invert,
            auto_reset_ms,
            state: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last published state, `None` until the first telegram.
    pub fn state(&self) -> Option<bool> {
        self.state
    }

    /// Auto-reset interval for the host timer.
    ///
    /// When `Some(ms)` and the state just transitioned to `true`, the host
    /// schedules `publish_state(false)` after `ms` milliseconds.
    pub fn auto_reset_ms(&self) -> Option<u32> {
        self.auto_reset_ms
    }

    /// Publish a state directly, bypassing the bus.
    ///
    /// The host auto-reset timer uses this entry point; the inversion flag
    /// does not apply here since the value never crossed the wire.
    pub fn publish_state(&mut self, state: bool) {
        knx_log!(info, "'{}': state changed to {}", self.name.as_str(), state);
        self.state = Some(state);
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

        let state = dpt1::decode(data) != self.invert;
        self.publish_state(state);

        if state {
            if let Some(ms) = self.auto_reset_ms {
                knx_log!(debug, "'{}': auto-reset due in {} ms", self.name.as_str(), ms);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> GroupAddressRegistry {
        let mut r = GroupAddressRegistry::new();
        r.register("motion", GroupAddress::parse("2/0/1")).unwrap();
        r
    }

    #[test]
    fn test_telegram_on_state_address() {
        let registry = registry();
        let mut bs = BinarySensor::new("hall_motion", "motion", false, None).unwrap();

        bs.handle_telegram(&registry, GroupAddress::parse("2/0/1"), &[0x01]);
        assert_eq!(bs.state(), Some(true));

        bs.handle_telegram(&registry, GroupAddress::parse("2/0/1"), &[0x00]);
        assert_eq!(bs.state(), Some(false));
    }

    #[test]
    fn test_invert() {
        let registry = registry();
        let mut bs = BinarySensor::new("contact", "motion", true, None).unwrap();

        bs.handle_telegram(&registry, GroupAddress::parse("2/0/1"), &[0x01]);
        assert_eq!(bs.state(), Some(false));
    }

    #[test]
    fn test_other_address_ignored() {
        let registry = registry();
        let mut bs = BinarySensor::new("hall_motion", "motion", false, None).unwrap();

        bs.handle_telegram(&registry, GroupAddress::parse("2/0/2"), &[0x01]);
        assert_eq!(bs.state(), None);
    }

    #[test]
    fn test_host_auto_reset_contract() {
        let registry = registry();
        let mut bs = BinarySensor::new("button", "motion", false, Some(500)).unwrap();

        bs.handle_telegram(&registry, GroupAddress::parse("2/0/1"), &[0x01]);
        assert_eq!(bs.state(), Some(true));
        assert_eq!(bs.auto_reset_ms(), Some(500));

        // Host timer fires
        bs.publish_state(false);
        assert_eq!(bs.state(), Some(false));
    }
}
