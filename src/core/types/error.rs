//! Error types for target memory access

use super::address::Address;
use std::fmt;
use std::io;
use thiserror::Error;

/// Which way bytes were moving when a transfer failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
        }
    }
}

/// Main error type for address-space access operations.
///
/// Every failing operation returns one of these directly; there is no
/// ambient last-error state to consult afterwards.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("{0}")]
    Configuration(String),

    #[error("cannot translate address {address}")]
    Translation { address: Address },

    #[error("unreadable segment at address {address}")]
    Unreadable { address: Address },

    #[error("unwritable segment at address {address}")]
    Unwritable { address: Address },

    #[error("cannot {direction} {size} bytes at address {address}: {source}")]
    Transfer {
        direction: Direction,
        address: Address,
        size: usize,
        #[source]
        source: io::Error,
    },

    #[error("partial {direction} at address {address}: moved {moved} of {size} bytes")]
    PartialTransfer {
        direction: Direction,
        address: Address,
        size: usize,
        moved: usize,
    },
}

/// Result type alias for access operations
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Creates a translation failure for an unmapped address
    pub fn translation(address: Address) -> Self {
        AccessError::Translation { address }
    }

    /// Creates a read rejection for a segment with no backing store
    pub fn unreadable(address: Address) -> Self {
        AccessError::Unreadable { address }
    }

    /// Creates a write rejection for a segment with no backing store
    pub fn unwritable(address: Address) -> Self {
        AccessError::Unwritable { address }
    }

    /// Creates a transfer failure wrapping the underlying I/O error
    pub fn transfer(direction: Direction, address: Address, size: usize, source: io::Error) -> Self {
        AccessError::Transfer {
            direction,
            address,
            size,
            source,
        }
    }

    /// Creates a partial-transfer failure after the retry loop stalled
    pub fn partial(direction: Direction, address: Address, size: usize, moved: usize) -> Self {
        AccessError::PartialTransfer {
            direction,
            address,
            size,
            moved,
        }
    }
}
