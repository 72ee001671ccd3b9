//! Telegram dispatcher.
//!
//! The dispatcher is the hub between the bus transport and everything that
//! consumes or produces group telegrams. Inbound telegrams fan out to three
//! consumer groups in a fixed order: any-telegram listeners, per-address
//! listeners, then every registered entity. There is no short-circuiting;
//! a telegram nobody wants is simply ignored by everyone.
//!
//! Outbound, symbolic group address ids resolve through the owned registry
//! and the payload goes to a caller-supplied [`TelegramTransport`]. The bus
//! stack behind that trait (TP UART, IP tunnel, test double) is not this
//! crate's concern.
//!
//! One dispatcher is built at setup and passed explicitly; there is no
//! global instance.

use crate::addressing::GroupAddress;
use crate::entity::{resolve_for_send, Entity, EntityCommand};
use crate::error::{KnxError, Result};
use crate::knx_log;
use crate::registry::GroupAddressRegistry;

/// Maximum group telegram payload in bytes (KNX TP frame limit).
pub const MAX_PAYLOAD: usize = 254;

/// Capacity of the any-telegram listener table.
pub const MAX_TELEGRAM_LISTENERS: usize = 8;

/// Listeners per group address.
pub const MAX_GROUP_LISTENERS: usize = 4;

/// Distinct group addresses with listeners (must stay a power of two).
pub const MAX_LISTENED_ADDRESSES: usize = 16;

/// Capacity of the entity table.
pub const MAX_ENTITIES: usize = 16;

/// Hook called for every inbound group telegram.
pub trait TelegramListener {
    /// `address` is the printable `main/middle/sub` form of the destination.
    fn on_telegram(&self, address: &str, data: &[u8]);
}

/// Hook called for inbound telegrams to one specific group address.
pub trait GroupListener {
    fn on_group_telegram(&self, data: &[u8]);
}

/// Outbound seam to the bus stack.
pub trait TelegramTransport {
    /// Hand a group telegram payload to the bus.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Transport` when the bus rejects the frame.
    fn send(&mut self, dest: GroupAddress, data: &[u8]) -> Result<()>;
}

type GroupListeners<'a> = heapless::Vec<&'a dyn GroupListener, MAX_GROUP_LISTENERS>;

/// The telegram hub: registry, listener tables and entity set.
#[derive(Default)]
pub struct Dispatcher<'a> {
    registry: GroupAddressRegistry,
    telegram_listeners: heapless::Vec<&'a dyn TelegramListener, MAX_TELEGRAM_LISTENERS>,
    group_listeners: heapless::index_map::FnvIndexMap<u16, GroupListeners<'a>, MAX_LISTENED_ADDRESSES>,
    entities: heapless::Vec<Entity, MAX_ENTITIES>,
}

impl core::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("telegram_listeners", &self.telegram_listeners.len())
            .field("group_listeners", &self.group_listeners.len())
            .field("entities", &self.entities)
            .finish()
    }
}

impl<'a> Dispatcher<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The owned group address registry.
    pub fn registry(&self) -> &GroupAddressRegistry {
        &self.registry
    }

    /// Mutable registry access for the setup phase.
    pub fn registry_mut(&mut self) -> &mut GroupAddressRegistry {
        &mut self.registry
    }

    /// Register a hook for every inbound telegram.
    ///
    /// Hooks run in registration order.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Dispatch` when the listener table is full.
    pub fn add_telegram_listener(&mut self, listener: &'a dyn TelegramListener) -> Result<()> {
        self.telegram_listeners.push(listener).map_err(|_| {
            knx_log!(error, "Telegram listener table full");
            KnxError::listener_table_full()
        })
    }

    /// Register a hook for one numeric group address.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Dispatch` when either the per-address table or the
    /// address map is full.
    pub fn add_group_listener(
        &mut self,
        address: u16,
        listener: &'a dyn GroupListener,
    ) -> Result<()> {
        if let Some(listeners) = self.group_listeners.get_mut(&address) {
            return listeners.push(listener).map_err(|_| {
                knx_log!(error, "Group listener table full for address {}", address);
                KnxError::listener_table_full()
            });
        }

        let mut listeners = GroupListeners::new();
        // Fresh vec with capacity > 0, push cannot fail
        let _ = listeners.push(listener);
        self.group_listeners.insert(address, listeners).map_err(|_| {
            knx_log!(error, "Group listener address map full");
            KnxError::listener_table_full()
        })?;
        Ok(())
    }

    /// Add an entity to the fan-out set.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Dispatch` when the entity table is full.
    pub fn add_entity(&mut self, entity: Entity) -> Result<()> {
        knx_log!(debug, "Registered entity '{}'", entity.name());
        self.entities.push(entity).map_err(|_| {
            knx_log!(error, "Entity table full (capacity {})", MAX_ENTITIES);
            KnxError::entity_table_full()
        })
    }

    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name() == name)
    }

    /// Number of registered entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Feed an inbound group telegram from the transport.
    ///
    /// Fan-out order: any-telegram listeners, exact-address listeners, then
    /// every entity. Each group runs in registration order and every
    /// consumer sees the telegram; entities self-filter.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Dispatch` and notifies nobody when the payload
    /// exceeds [`MAX_PAYLOAD`].
    pub fn on_group_value(&mut self, address: u16, data: &[u8]) -> Result<()> {
        if data.len() > MAX_PAYLOAD {
            knx_log!(
                error,
                "Dropping telegram for address {}: {} bytes exceeds {}",
                address,
                data.len(),
                MAX_PAYLOAD
            );
            return Err(KnxError::payload_too_large());
        }

        let ga = GroupAddress::from(address);
        let text = ga.to_text();

        knx_log!(
            trace,
            "Telegram for {} ({} bytes), notifying {} entities",
            text.as_str(),
            data.len(),
            self.entities.len()
        );

        for listener in &self.telegram_listeners {
            listener.on_telegram(&text, data);
        }

        if let Some(listeners) = self.group_listeners.get(&address) {
            for listener in listeners {
                listener.on_group_telegram(data);
            }
        }

        let registry = &self.registry;
        for entity in &mut self.entities {
            entity.handle_telegram(registry, ga, data);
        }

        Ok(())
    }

    /// Send a group value write to a symbolic address id.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` when the id is unknown,
    /// `KnxError::Dispatch` for oversized payloads and `KnxError::Transport`
    /// when the bus rejects the frame.
    pub fn send_group_write(
        &self,
        transport: &mut dyn TelegramTransport,
        ga_id: &str,
        data: &[u8],
    ) -> Result<()> {
        let dest = self.resolve_outbound(ga_id, data)?;
        knx_log!(debug, "Group write to {} ({})", ga_id, dest.raw());
        transport.send(dest, data)
    }

    /// Send a group value read request (empty payload) to a symbolic id.
    ///
    /// # Errors
    ///
    /// Same contract as [`Dispatcher::send_group_write`].
    pub fn send_group_read(
        &self,
        transport: &mut dyn TelegramTransport,
        ga_id: &str,
    ) -> Result<()> {
        let dest = resolve_for_send(&self.registry, ga_id)?;
        knx_log!(debug, "Group read request to {} ({})", ga_id, dest.raw());
        transport.send(dest, &[])
    }

    /// Send a group value response (answer to a read) to a symbolic id.
    ///
    /// # Errors
    ///
    /// Same contract as [`Dispatcher::send_group_write`].
    pub fn send_group_response(
        &self,
        transport: &mut dyn TelegramTransport,
        ga_id: &str,
        data: &[u8],
    ) -> Result<()> {
        let dest = self.resolve_outbound(ga_id, data)?;
        knx_log!(debug, "Group response to {} ({})", ga_id, dest.raw());
        transport.send(dest, data)
    }

    /// Issue a host command to a named entity.
    ///
    /// The entity encodes the value and sends through the transport.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Dispatch` for an unknown entity name; resolution
    /// and transport failures propagate from the entity.
    pub fn command(
        &mut self,
        transport: &mut dyn TelegramTransport,
        entity_name: &str,
        command: EntityCommand,
    ) -> Result<()> {
        let registry = &self.registry;
        let Some(entity) = self.entities.iter_mut().find(|e| e.name() == entity_name) else {
            knx_log!(warn, "No entity named '{}'", entity_name);
            return Err(KnxError::unknown_entity());
        };
        entity.command(registry, transport, command)
    }

    /// Log the configured registry and table sizes.
    pub fn dump_config(&self) {
        knx_log!(info, "KNX dispatcher:");
        knx_log!(info, "  Group addresses: {}", self.registry.len());
        for (id, address) in self.registry.iter() {
            knx_log!(info, "    {}: {} (0x{:04X})", id, address.to_text().as_str(), address.raw());
        }
        knx_log!(info, "  Entities: {}", self.entities.len());
        for entity in &self.entities {
            knx_log!(info, "    {}", entity.name());
        }
        knx_log!(info, "  Telegram listeners: {}", self.telegram_listeners.len());
    }

    fn resolve_outbound(&self, ga_id: &str, data: &[u8]) -> Result<GroupAddress> {
        if data.len() > MAX_PAYLOAD {
            knx_log!(
                error,
                "Refusing to send {} bytes to '{}': exceeds {}",
                data.len(),
                ga_id,
                MAX_PAYLOAD
            );
            return Err(KnxError::payload_too_large());
        }
        resolve_for_send(&self.registry, ga_id)
    }
}
