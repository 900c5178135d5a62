//! Architecture capability bound to an address space
//!
//! Address width and byte-order conversion are plain values bound to each
//! [`crate::space::AddressSpace`] at construction and consulted on every
//! typed access, so targets of different architectures can be open at the
//! same time.

use crate::core::types::{AccessError, AccessResult};
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Byte order of scalars in target memory.
///
/// The conversions are self-inverse: the same decode/encode pair is applied
/// on load and store, so a put followed by a get returns the original value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Decode a 16-bit scalar from target bytes
    pub fn read_u16(self, buf: &[u8]) -> u16 {
        match self {
            ByteOrder::Little => LittleEndian::read_u16(buf),
            ByteOrder::Big => BigEndian::read_u16(buf),
        }
    }

    /// Decode a 32-bit scalar from target bytes
    pub fn read_u32(self, buf: &[u8]) -> u32 {
        match self {
            ByteOrder::Little => LittleEndian::read_u32(buf),
            ByteOrder::Big => BigEndian::read_u32(buf),
        }
    }

    /// Decode a 64-bit scalar from target bytes
    pub fn read_u64(self, buf: &[u8]) -> u64 {
        match self {
            ByteOrder::Little => LittleEndian::read_u64(buf),
            ByteOrder::Big => BigEndian::read_u64(buf),
        }
    }

    /// Encode a 16-bit scalar into target bytes
    pub fn write_u16(self, buf: &mut [u8], value: u16) {
        match self {
            ByteOrder::Little => LittleEndian::write_u16(buf, value),
            ByteOrder::Big => BigEndian::write_u16(buf, value),
        }
    }

    /// Encode a 32-bit scalar into target bytes
    pub fn write_u32(self, buf: &mut [u8], value: u32) {
        match self {
            ByteOrder::Little => LittleEndian::write_u32(buf, value),
            ByteOrder::Big => BigEndian::write_u32(buf, value),
        }
    }

    /// Encode a 64-bit scalar into target bytes
    pub fn write_u64(self, buf: &mut [u8], value: u64) {
        match self {
            ByteOrder::Little => LittleEndian::write_u64(buf, value),
            ByteOrder::Big => BigEndian::write_u64(buf, value),
        }
    }
}

/// Width of a target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressWidth {
    Four,
    Eight,
}

impl AddressWidth {
    /// Address size in bytes
    pub const fn bytes(self) -> usize {
        match self {
            AddressWidth::Four => 4,
            AddressWidth::Eight => 8,
        }
    }
}

/// Address width plus byte order for one target architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    width: AddressWidth,
    order: ByteOrder,
}

impl Architecture {
    pub const AMD64: Self = Self::new(AddressWidth::Eight, ByteOrder::Little);
    pub const I386: Self = Self::new(AddressWidth::Four, ByteOrder::Little);
    pub const ARM64: Self = Self::new(AddressWidth::Eight, ByteOrder::Little);
    pub const POWER64: Self = Self::new(AddressWidth::Eight, ByteOrder::Big);
    pub const MIPS32: Self = Self::new(AddressWidth::Four, ByteOrder::Big);

    /// Creates an architecture from its width and byte order
    pub const fn new(width: AddressWidth, order: ByteOrder) -> Self {
        Architecture { width, order }
    }

    /// Address width of this architecture
    pub const fn width(&self) -> AddressWidth {
        self.width
    }

    /// Byte order of this architecture
    pub const fn order(&self) -> ByteOrder {
        self.order
    }
}

impl FromStr for Architecture {
    type Err = AccessError;

    fn from_str(s: &str) -> AccessResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amd64" | "x86_64" => Ok(Architecture::AMD64),
            "386" | "i386" | "x86" => Ok(Architecture::I386),
            "arm64" | "aarch64" => Ok(Architecture::ARM64),
            "power64" | "ppc64" => Ok(Architecture::POWER64),
            "mips" | "mips32" => Ok(Architecture::MIPS32),
            other => Err(AccessError::Configuration(format!(
                "unknown architecture: {other}"
            ))),
        }
    }
}
