//! Switch entity (boolean actuator).
//!
//! Writes DPT 1 telegrams to a command group address and optionally tracks
//! state feedback from a second group address. The invert flag flips the
//! boolean on both the send and the feedback path, for actuators wired
//! active-low.

use crate::addressing::GroupAddress;
use crate::dispatch::TelegramTransport;
use crate::dpt::dpt1;
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{id_matches, make_id, make_opt_id, resolve_for_send, EntityName, GaId};

#[derive(Debug)]
pub struct Switch {
    name: EntityName,
    command_ga_id: GaId,
    state_ga_id: Option<GaId>,
    invert: bool,
    state: Option<bool>,
}

impl Switch {
    /// Create a switch entity.
    ///
    /// `state_ga_id` is the optional feedback address the actuator reports
    /// its real state on.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(name: &str, command_ga_id: &str, state_ga_id: Option<&str>, invert: bool) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            command_ga_id: make_id(command_ga_id)?,
            state_ga_id: make_opt_id(state_ga_id)?,
            invert,
            state: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last published state, `None` until the first write or feedback.
    pub fn state(&self) -> Option<bool> {
        self.state
    }

    /// Write a state to the bus and publish it locally.
    pub fn write_state(
        &mut self,
        registry: &GroupAddressRegistry,
        transport: &mut dyn TelegramTransport,
        state: bool,
    ) -> Result<()> {
        let dest = resolve_for_send(registry, &self.command_ga_id)?;
        let bus_state = state != self.invert;

        knx_log!(
            debug,
            "'{}': writing state {} (bus: {})",
            self.name.as_str(),
            state,
            bus_state
        );

        transport.send(dest, &dpt1::encode(bus_state))?;
        self.state = Some(state);
        Ok(())
    }

    /// Feedback telegrams on the state address update the published state.
    pub fn handle_telegram(
        &mut self,
        registry: &GroupAddressRegistry,
        address: GroupAddress,
        data: &[u8],
    ) {
        let Some(state_id) = &self.state_ga_id else {
            return;
        };
        if !id_matches(registry, state_id, address) {
            return;
        }

        let state = dpt1::decode(data) != self.invert;
        knx_log!(debug, "'{}': state feedback {}", self.name.as_str(), state);
        self.state = Some(state);
    }
}
