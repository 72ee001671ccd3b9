//! Cover entity (blinds, shutters).
//!
//! Position is carried on the bus as a DPT 5.001 percentage and exposed to
//! the host as 0.0 (closed) to 1.0 (open).

use crate::addressing::GroupAddress;
use crate::dispatch::TelegramTransport;
use crate::dpt::dpt5;
use crate::error::Result;
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

use super::{id_matches, make_id, resolve_for_send, EntityName, GaId};

#[derive(Debug)]
pub struct Cover {
    name: EntityName,
    position_ga_id: GaId,
    position: Option<f32>,
}

impl Cover {
    /// Create a cover entity.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if any identifier is too long.
    pub fn new(name: &str, position_ga_id: &str) -> Result<Self> {
        Ok(Self {
            name: make_id(name)?,
            position_ga_id: make_id(position_ga_id)?,
            position: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last known position, 0.0 = closed .. 1.0 = open.
    pub fn position(&self) -> Option<f32> {
        self.position
    }

    /// Move the cover by writing a position percentage to the bus.
    pub fn set_position(
        &mut self,
        registry: &GroupAddressRegistry,
        transport: &mut dyn TelegramTransport,
        position: f32,
    ) -> Result<()> {
        let dest = resolve_for_send(registry, &self.position_ga_id)?;

        knx_log!(debug, "'{}': moving to position {}", self.name.as_str(), position);
        transport.send(dest, &dpt5::encode_percentage(position * 100.0))?;
        self.position = Some(position.clamp(0.0, 1.0));
        Ok(())
    }

    pub fn handle_telegram(
        &mut self,
        registry: &GroupAddressRegistry,
        address: GroupAddress,
        data: &[u8],
    ) {
        if !id_matches(registry, &self.position_ga_id, address) {
            return;
        }

        let position = dpt5::decode_percentage(data) / 100.0;
        knx_log!(debug, "'{}': position feedback {}", self.name.as_str(), position);
        self.position = Some(position);
    }
}
