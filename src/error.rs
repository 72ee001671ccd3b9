//! Error types for the KNX TP core.
//!
//! This module provides structured error types with backtraces (when std is
//! enabled) and helper methods for error information.
//!
//! Note that the datapoint codec ([`crate::dpt`]) is deliberately absent here:
//! decode and encode are total functions that substitute documented defaults
//! instead of failing. Errors only surface on the paths where a caller can
//! meaningfully react — strict address construction, registry resolution,
//! dispatch contract violations and transport sends.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for KNX operations.
pub type Result<T> = core::result::Result<T, KnxError>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Addressing error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum AddressingErrorKind {
    InvalidGroupAddress,
    InvalidIndividualAddress,
    OutOfRange,
}

/// Registry error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum RegistryErrorKind {
    NotFound,
    TableFull,
    IdentifierTooLong,
}

/// Dispatch error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum DispatchErrorKind {
    PayloadTooLarge,
    ListenerTableFull,
    EntityTableFull,
    UnknownEntity,
}

/// Transport error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum TransportErrorKind {
    SendFailed,
    BufferTooSmall,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// KNX TP core error type.
///
/// This is the main error type returned by all fallible operations.
/// It contains a backtrace (when the std feature is enabled) and detailed
/// error information through helper methods.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnxError {
    /// Addressing errors (invalid address text, out-of-range component)
    Addressing(AddressingError),
    /// Registry errors (unknown identifier, table capacity)
    Registry(RegistryError),
    /// Dispatch errors (contract violations on the fan-out path)
    Dispatch(DispatchError),
    /// Transport errors (send failures reported by the bus seam)
    Transport(TransportError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Addressing error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressingError {
    kind: AddressingErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl AddressingError {
    pub(crate) fn new(kind: AddressingErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if an address component was out of range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::OutOfRange)
    }
}

/// Registry error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegistryError {
    kind: RegistryErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl RegistryError {
    pub(crate) fn new(kind: RegistryErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if a symbolic identifier failed to resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, RegistryErrorKind::NotFound)
    }
}

/// Dispatch error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchError {
    kind: DispatchErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl DispatchError {
    pub(crate) fn new(kind: DispatchErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if a payload exceeded the 254-byte frame limit
    pub fn is_payload_too_large(&self) -> bool {
        matches!(self.kind, DispatchErrorKind::PayloadTooLarge)
    }
}

/// Transport error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportError {
    kind: TransportErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl TransportError {
    pub(crate) fn new(kind: TransportErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if this is a send failure
    pub fn is_send_failed(&self) -> bool {
        matches!(self.kind, TransportErrorKind::SendFailed)
    }

    /// Check if a buffer was too small
    pub fn is_buffer_too_small(&self) -> bool {
        matches!(self.kind, TransportErrorKind::BufferTooSmall)
    }
}

// =============================================================================
// Convenience Constructors for KnxError
// =============================================================================

impl KnxError {
    // Addressing errors
    pub(crate) fn invalid_group_address() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::InvalidGroupAddress))
    }

    pub(crate) fn invalid_individual_address() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::InvalidIndividualAddress))
    }

    pub(crate) fn address_out_of_range() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::OutOfRange))
    }

    // Registry errors
    pub(crate) fn address_not_found() -> Self {
        Self::Registry(RegistryError::new(RegistryErrorKind::NotFound))
    }

    pub(crate) fn registry_full() -> Self {
        Self::Registry(RegistryError::new(RegistryErrorKind::TableFull))
    }

    pub(crate) fn identifier_too_long() -> Self {
        Self::Registry(RegistryError::new(RegistryErrorKind::IdentifierTooLong))
    }

    // Dispatch errors
    pub(crate) fn payload_too_large() -> Self {
        Self::Dispatch(DispatchError::new(DispatchErrorKind::PayloadTooLarge))
    }

    pub(crate) fn listener_table_full() -> Self {
        Self::Dispatch(DispatchError::new(DispatchErrorKind::ListenerTableFull))
    }

    pub(crate) fn entity_table_full() -> Self {
        Self::Dispatch(DispatchError::new(DispatchErrorKind::EntityTableFull))
    }

    pub(crate) fn unknown_entity() -> Self {
        Self::Dispatch(DispatchError::new(DispatchErrorKind::UnknownEntity))
    }

    // Transport errors (public: constructed by transport implementations)
    pub fn send_failed() -> Self {
        Self::Transport(TransportError::new(TransportErrorKind::SendFailed))
    }

    pub fn buffer_too_small() -> Self {
        Self::Transport(TransportError::new(TransportErrorKind::BufferTooSmall))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for KnxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnxError::Addressing(e) => write!(f, "Addressing error: {:?}", e.kind),
            KnxError::Registry(e) => write!(f, "Registry error: {:?}", e.kind),
            KnxError::Dispatch(e) => write!(f, "Dispatch error: {:?}", e.kind),
            KnxError::Transport(e) => write!(f, "Transport error: {:?}", e.kind),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for KnxError {}
