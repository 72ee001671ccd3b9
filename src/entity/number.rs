//! Number entity (writable numeric value).
//!
//! Sends DPT 9 values to a command group address and tracks feedback from a
//! separate state address. Both directions use the 2-byte float codec.

use crate::addressing::GroupAddress;
use crate::dispatch::TelegramTransport;
use crate::dpt::dpt9;
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{id_matches, make_id, resolve_for_send, EntityName, GaId};

#[derive(Debug)]
pub struct Number {
    name: EntityName,
    command_ga_id: GaId,
    state_ga_id: GaId,
    value: Option<f32>,
}

impl Number {
    /// Create a number entity.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(name: &str, command_ga_id: &str, state_ga_id: &str) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            command_ga_id: make_id(command_ga_id)?,
            state_ga_id: make_id(state_ga_id)?,
            value: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last published value, `None` until the first write or feedback.
    pub fn value(&self) -> Option<f32> {
        self.value
    }

    /// Write a value to the bus and publish it locally.
    pub fn set_value(
        &mut self,
        registry: &GroupAddressRegistry,
        transport: &mut dyn TelegramTransport,
        value: f32,
    ) -> Result<()> {
        let dest = resolve_for_send(registry, &self.command_ga_id)?;

        knx_log!(debug, "'{}': writing value {}", self.name.as_str(), value);
        transport.send(dest, &dpt9::encode(value))?;
        self.value = Some(value);
        Ok(())
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

        let value = dpt9::decode(data);
        knx_log!(debug, "'{}': value feedback {}", self.name.as_str(), value);
        self.value = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::test_support::RecordingTransport;

    fn registry() -> GroupAddressRegistry {
        let mut r = GroupAddressRegistry::new();
        r.register("num_cmd", GroupAddress::parse("6/0/1")).unwrap();
        r.register("num_state", GroupAddress::parse("6/0/2")).unwrap();
        r
    }

    #[test]
    fn test_set_value_sends_dpt9() {
        let registry = registry();
        let mut transport = RecordingTransport::new();
        let mut num = Number::new("dimlevel", "num_cmd", "num_state").unwrap();

        num.set_value(&registry, &mut transport, 42.0).unwrap();

        let (dest, data) = &transport.sent[0];
        assert_eq!(*dest, GroupAddress::parse("6/0/1"));
        assert!((dpt9::decode(data) - 42.0).abs() < 0.01);
        assert_eq!(num.value(), Some(42.0));
    }

    #[test]
    fn test_state_feedback() {
        let registry = registry();
        let mut num = Number::new("dimlevel", "num_cmd", "num_state").unwrap();

        num.handle_telegram(&registry, GroupAddress::parse("6/0/2"), &[0x0C, 0x38]);
        assert!((num.value().unwrap() - 21.6).abs() < 0.01);
    }

    #[test]
    fn test_command_address_not_matched_on_receive() {
        let registry = registry();
        let mut num = Number::new("dimlevel", "num_cmd", "num_state").unwrap();

        // Telegrams on the command address are other senders' writes
        num.handle_telegram(&registry, GroupAddress::parse("6/0/1"), &[0x0C, 0x38]);
        assert!(num.value().is_none());
    }
}
