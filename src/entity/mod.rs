//! Bus-facing entities.
//!
//! Entities are the fan-out targets of the dispatcher: every inbound group
//! telegram is offered to every entity, and each entity decides for itself
//! whether the telegram matters by resolving its configured symbolic group
//! address ids and comparing against the destination. A telegram that matches
//! none of an entity's addresses is silently ignored.
//!
//! The set of entity kinds is closed. [`Entity`] is a tagged enum rather than
//! a trait object so the dispatcher can hold entities by value in a
//! fixed-capacity table and hand out commands without dynamic dispatch.
//!
//! Command flow goes the other way: the host issues an [`EntityCommand`]
//! through the dispatcher, the entity encodes the value with the matching
//! datapoint codec and hands the payload to the transport.

pub mod binary_sensor;
pub mod climate;
pub mod cover;
pub mod light;
pub mod number;
pub mod sensor;
pub mod switch;
pub mod text_sensor;

pub use binary_sensor::BinarySensor;
pub use climate::Climate;
pub use cover::Cover;
pub use light::Light;
pub use number::Number;
pub use sensor::{Sensor, SensorKind};
pub use switch::Switch;
pub use text_sensor::{TextDpt, TextSensor};

use crate::addressing::GroupAddress;
use crate::dispatch::TelegramTransport;
use crate::dpt::HvacMode;
use crate::error::{KnxError, Result};
use crate::knx_log;
use crate::registry::{GroupAddressRegistry, MAX_ID_LENGTH};

/// Entity names and symbolic group address ids share the registry's
/// identifier length limit.
pub type EntityName = heapless::String<MAX_ID_LENGTH>;

pub(crate) type GaId = heapless::String<MAX_ID_LENGTH>;

pub(crate) fn make_id(id: &str) -> Result<GaId> {
    match GaId::try_from(id) {
        Ok(id) => Ok(id),
        Err(_) => {
            knx_log!(error, "Identifier too long (max {} chars)", MAX_ID_LENGTH);
            Err(KnxError::identifier_too_long())
        }
    }
}

pub(crate) fn make_opt_id(id: Option<&str>) -> Result<Option<GaId>> {
    id.map(make_id).transpose()
}

/// Resolve a symbolic id and check it against a telegram destination.
///
/// Misses resolve to "no match"; the receive path never logs them because
/// most telegrams on a shared bus are legitimately for someone else.
pub(crate) fn id_matches(
    registry: &GroupAddressRegistry,
    id: &str,
    address: GroupAddress,
) -> bool {
    registry.lookup(id) == Some(address)
}

/// Commands the host can issue to an entity via the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntityCommand {
    /// Switch a boolean actuator (switch, light without brightness)
    SwitchState(bool),
    /// Move a cover to a position, 0.0 = closed .. 1.0 = open
    CoverPosition(f32),
    /// Set a climate target temperature in degrees Celsius
    ClimateSetpoint(f32),
    /// Set a climate HVAC operating mode
    ClimateMode(HvacMode),
    /// Set a numeric value
    NumberValue(f32),
    /// Set a light state with brightness, 0.0 .. 1.0
    LightState { on: bool, brightness: f32 },
}

/// A bus-facing entity, one of the closed set of kinds.
#[derive(Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Entity {
    Switch(Switch),
    BinarySensor(BinarySensor),
    Sensor(Sensor),
    Cover(Cover),
    Climate(Climate),
    TextSensor(TextSensor),
    Number(Number),
    Light(Light),
}

impl Entity {
    /// The configured entity name, used to address commands.
    pub fn name(&self) -> &str {
        match self {
            Entity::Switch(e) => e.name(),
            Entity::BinarySensor(e) => e.name(),
            Entity::Sensor(e) => e.name(),
            Entity::Cover(e) => e.name(),
            Entity::Climate(e) => e.name(),
            Entity::TextSensor(e) => e.name(),
            Entity::Number(e) => e.name(),
            Entity::Light(e) => e.name(),
        }
    }

    /// Offer an inbound group telegram to this entity.
    ///
    /// The entity resolves its configured ids through the registry and
    /// updates its published state when the destination matches one of them.
    pub fn handle_telegram(
        &mut self,
        registry: &GroupAddressRegistry,
        address: GroupAddress,
        data: &[u8],
    ) {
        match self {
            Entity::Switch(e) => e.handle_telegram(registry, address, data),
            Entity::BinarySensor(e) => e.handle_telegram(registry, address, data),
            Entity::Sensor(e) => e.handle_telegram(registry, address, data),
            Entity::Cover(e) => e.handle_telegram(registry, address, data),
            Entity::Climate(e) => e.handle_telegram(registry, address, data),
            Entity::TextSensor(e) => e.handle_telegram(registry, address, data),
            Entity::Number(e) => e.handle_telegram(registry, address, data),
            Entity::Light(e) => e.handle_telegram(registry, address, data),
        }
    }

    /// Apply a host command, encoding and sending through the transport.
    ///
    /// A command that does not fit the entity kind is logged and dropped;
    /// the bus is never touched in that case.
    pub fn command(
        &mut self,
        registry: &GroupAddressRegistry,
        transport: &mut dyn TelegramTransport,
        command: EntityCommand,
    ) -> Result<()> {
        match (self, command) {
            (Entity::Switch(e), EntityCommand::SwitchState(state)) => {
                e.write_state(registry, transport, state)
            }
            (Entity::Cover(e), EntityCommand::CoverPosition(position)) => {
                e.set_position(registry, transport, position)
            }
            (Entity::Climate(e), EntityCommand::ClimateSetpoint(setpoint)) => {
                e.send_setpoint(registry, transport, setpoint)
            }
            (Entity::Climate(e), EntityCommand::ClimateMode(mode)) => {
                e.send_mode(registry, transport, mode)
            }
            (Entity::Number(e), EntityCommand::NumberValue(value)) => {
                e.set_value(registry, transport, value)
            }
            (Entity::Light(e), EntityCommand::LightState { on, brightness }) => {
                e.write_state(registry, transport, on, brightness)
            }
            (entity, command) => {
                knx_log!(
                    warn,
                    "Entity '{}' cannot handle command {:?}",
                    entity.name(),
                    command
                );
                Ok(())
            }
        }
    }
}

/// Resolve a symbolic id for the send path.
///
/// Unlike the receive path, a miss here is a configuration fault: the host
/// asked to send to an id nobody registered. Logged and surfaced as an error
/// so the caller can skip the operation.
pub(crate) fn resolve_for_send(
    registry: &GroupAddressRegistry,
    id: &str,
) -> Result<GroupAddress> {
    match registry.lookup(id) {
        Some(address) => Ok(address),
        None => {
            knx_log!(warn, "Cannot send: group address '{}' not found", id);
            Err(KnxError::address_not_found())
        }
    }
}
