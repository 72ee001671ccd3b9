//! Group address registry.
//!
//! Maps user-assigned textual identifiers (configuration labels, distinct
//! from the printable `main/middle/sub` form) to [`GroupAddress`] values.
//! All consumers resolve symbolic names through this registry before
//! touching the wire.
//!
//! The map is hash-based ([`heapless::index_map::FnvIndexMap`]) so lookups
//! are O(1).
//! It is populated once during the setup phase and read-mostly afterwards;
//! there is no unregistration.

use crate::addressing::GroupAddress;
use crate::error::{KnxError, Result};
use crate::knx_log;

/// Maximum length of a textual identifier.
pub const MAX_ID_LENGTH: usize = 32;

/// Maximum number of registered group addresses (must stay a power of two
/// for the underlying index map).
pub const CAPACITY: usize = 32;

type Identifier = heapless::String<MAX_ID_LENGTH>;

/// Registry of symbolic identifier to group address bindings.
///
/// # Examples
///
/// ```
/// use knx_tp::{GroupAddress, GroupAddressRegistry};
///
/// let mut registry = GroupAddressRegistry::new();
/// registry.register("living_room_light", GroupAddress::parse("1/2/3")).unwrap();
///
/// let addr = registry.lookup("living_room_light").unwrap();
/// assert_eq!(addr.to_text(), "1/2/3");
/// assert!(registry.lookup("unknown").is_none());
/// ```
#[derive(Debug, Default)]
pub struct GroupAddressRegistry {
    entries: heapless::index_map::FnvIndexMap<Identifier, GroupAddress, CAPACITY>,
}

impl GroupAddressRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: heapless::index_map::FnvIndexMap::new(),
        }
    }

    /// Register an identifier, inserting or replacing.
    ///
    /// Duplicate registration under the same identifier replaces the prior
    /// entry — last write wins, no error raised.
    ///
    /// # Errors
    ///
    /// Returns `KnxError::Registry` if the identifier exceeds
    /// [`MAX_ID_LENGTH`] or the table is full.
    pub fn register(&mut self, id: &str, address: GroupAddress) -> Result<()> {
        let Ok(key) = Identifier::try_from(id) else {
            knx_log!(error, "Group address id too long (max {} chars)", MAX_ID_LENGTH);
            return Err(KnxError::identifier_too_long());
        };

        match self.entries.insert(key, address) {
            Ok(_) => {
                knx_log!(debug, "Registered group address: {} -> {}", id, address.raw());
                Ok(())
            }
            Err(_) => {
                knx_log!(error, "Group address registry full (capacity {})", CAPACITY);
                Err(KnxError::registry_full())
            }
        }
    }

    /// Look up an identifier, O(1).
    ///
    /// Returns `None` when the identifier was never registered; callers must
    /// treat a miss as "do not send / cannot match" and skip the dependent
    /// operation.
    pub fn lookup(&self, id: &str) -> Option<GroupAddress> {
        self.entries.get(id).copied()
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered (identifier, address) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, GroupAddress)> {
        self.entries.iter().map(|(id, addr)| (id.as_str(), *addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::GroupAddress;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = GroupAddressRegistry::new();
        registry
            .register("kitchen", GroupAddress::parse("1/2/3"))
            .unwrap();

        assert_eq!(registry.lookup("kitchen"), Some(GroupAddress::parse("1/2/3")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_miss() {
        let registry = GroupAddressRegistry::new();
        assert!(registry.lookup("nothing").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = GroupAddressRegistry::new();
        registry
            .register("light", GroupAddress::parse("1/2/3"))
            .unwrap();
        registry
            .register("light", GroupAddress::parse("4/5/6"))
            .unwrap();

        assert_eq!(registry.lookup("light"), Some(GroupAddress::parse("4/5/6")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_identifier_too_long() {
        let mut registry = GroupAddressRegistry::new();
        let long_id = "x".repeat(MAX_ID_LENGTH + 1);
        let result = registry.register(&long_id, GroupAddress::parse("1/2/3"));
        assert!(result.is_err());
    }

    #[test]
    fn test_capacity_exhaustion() {
        let mut registry = GroupAddressRegistry::new();
        for i in 0..CAPACITY {
            let id = format!("ga_{i}");
            registry
                .register(&id, GroupAddress::from(i as u16))
                .unwrap();
        }
        let overflow = registry.register("one_too_many", GroupAddress::from(999u16));
        assert!(overflow.is_err());
        // Existing entries still resolve
        assert_eq!(registry.lookup("ga_0"), Some(GroupAddress::from(0u16)));
    }

    #[test]
    fn test_iter() {
        let mut registry = GroupAddressRegistry::new();
        registry.register("a", GroupAddress::parse("1/0/0")).unwrap();
        registry.register("b", GroupAddress::parse("2/0/0")).unwrap();

        let mut ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["a", "b"]);
    }
}
