//! Width- and endianness-aware typed access to an address space
//!
//! The accessors resolve a logical address to a segment and backing-store
//! offset, move the bytes through the transfer engine (and, for reads
//! against cache-eligible segments, the page cache), and apply the space's
//! architecture byte-order conversion. Block transfers (`get1`/`put1`) move
//! raw bytes verbatim for block-copy callers.
//!
//! Identity mappings short-circuit reads: the value is synthesized from the
//! address itself with no I/O, which lets a front end evaluate bare
//! constants through the same code path as memory. Writes against them
//! always fail as unwritable.

pub(crate) mod cache;
pub(crate) mod transfer;

use crate::arch::AddressWidth;
use crate::core::types::{AccessError, AccessResult, Address};
use crate::space::AddressSpace;

impl AddressSpace {
    /// Block read of `buf.len()` bytes at `addr`, no byte-order conversion.
    ///
    /// On an identity mapping the buffer is filled from the address's own
    /// little-endian representation, zero-filled past 8 bytes. An empty
    /// buffer always succeeds without touching storage.
    pub fn get1(&mut self, addr: Address, buf: &mut [u8]) -> AccessResult<()> {
        if self.is_identity() {
            let native = addr.as_u64().to_le_bytes();
            let n = buf.len().min(native.len());
            buf[..n].copy_from_slice(&native[..n]);
            buf[n..].fill(0);
            return Ok(());
        }
        self.read_exact_at(addr, buf)
    }

    /// Read a 16-bit scalar at `addr` in the target's byte order
    pub fn get2(&mut self, addr: Address) -> AccessResult<u16> {
        if self.is_identity() {
            return Ok(addr.as_u64() as u16);
        }
        let mut buf = [0u8; 2];
        self.read_exact_at(addr, &mut buf)?;
        Ok(self.arch().order().read_u16(&buf))
    }

    /// Read a 32-bit scalar at `addr` in the target's byte order
    pub fn get4(&mut self, addr: Address) -> AccessResult<u32> {
        if self.is_identity() {
            return Ok(addr.as_u64() as u32);
        }
        let mut buf = [0u8; 4];
        self.read_exact_at(addr, &mut buf)?;
        Ok(self.arch().order().read_u32(&buf))
    }

    /// Read a 64-bit scalar at `addr` in the target's byte order
    pub fn get8(&mut self, addr: Address) -> AccessResult<u64> {
        if self.is_identity() {
            return Ok(addr.as_u64());
        }
        let mut buf = [0u8; 8];
        self.read_exact_at(addr, &mut buf)?;
        Ok(self.arch().order().read_u64(&buf))
    }

    /// Read an address-width scalar at `addr`.
    ///
    /// Delegates to [`get8`](Self::get8) or [`get4`](Self::get4) by the
    /// architecture's address width; 4-byte results are zero-extended.
    pub fn get_addr(&mut self, addr: Address) -> AccessResult<u64> {
        match self.arch().width() {
            AddressWidth::Eight => self.get8(addr),
            AddressWidth::Four => self.get4(addr).map(u64::from),
        }
    }

    /// Block write of `buf` at `addr`, no byte-order conversion
    pub fn put1(&mut self, addr: Address, buf: &[u8]) -> AccessResult<()> {
        self.write_exact_at(addr, buf)
    }

    /// Write a 16-bit scalar at `addr` in the target's byte order
    pub fn put2(&mut self, addr: Address, value: u16) -> AccessResult<()> {
        let mut buf = [0u8; 2];
        self.arch().order().write_u16(&mut buf, value);
        self.write_exact_at(addr, &buf)
    }

    /// Write a 32-bit scalar at `addr` in the target's byte order
    pub fn put4(&mut self, addr: Address, value: u32) -> AccessResult<()> {
        let mut buf = [0u8; 4];
        self.arch().order().write_u32(&mut buf, value);
        self.write_exact_at(addr, &buf)
    }

    /// Write a 64-bit scalar at `addr` in the target's byte order
    pub fn put8(&mut self, addr: Address, value: u64) -> AccessResult<()> {
        let mut buf = [0u8; 8];
        self.arch().order().write_u64(&mut buf, value);
        self.write_exact_at(addr, &buf)
    }

    /// Write an address-width scalar at `addr`, truncating on 4-byte targets
    pub fn put_addr(&mut self, addr: Address, value: u64) -> AccessResult<()> {
        match self.arch().width() {
            AddressWidth::Eight => self.put8(addr, value),
            AddressWidth::Four => self.put4(addr, value as u32),
        }
    }

    fn read_exact_at(&mut self, addr: Address, buf: &mut [u8]) -> AccessResult<()> {
        let (segment, off) = self.resolve(addr)?;
        let seg = &self.segments[segment];
        let Some(store_id) = seg.store() else {
            return Err(AccessError::unreadable(addr));
        };
        let cacheable = seg.is_cacheable();
        let store = &mut *self.stores[store_id.0];
        transfer::read_exact(&mut self.cache, store, cacheable, segment, addr, off, buf)
    }

    fn write_exact_at(&mut self, addr: Address, buf: &[u8]) -> AccessResult<()> {
        let (segment, off) = self.resolve(addr)?;
        let Some(store_id) = self.segments[segment].store() else {
            return Err(AccessError::unwritable(addr));
        };
        let store = &mut *self.stores[store_id.0];
        transfer::write_exact(&mut self.cache, store, segment, addr, off, buf)
    }
}

/// Maps an absent space to a configuration failure.
fn configured(space: Option<&mut AddressSpace>) -> AccessResult<&mut AddressSpace> {
    space.ok_or_else(|| AccessError::Configuration("no address space is mapped".to_string()))
}

/// Block read for front ends that may not have a target mapped yet
pub fn get1(space: Option<&mut AddressSpace>, addr: Address, buf: &mut [u8]) -> AccessResult<()> {
    configured(space)?.get1(addr, buf)
}

/// 16-bit read for front ends that may not have a target mapped yet
pub fn get2(space: Option<&mut AddressSpace>, addr: Address) -> AccessResult<u16> {
    configured(space)?.get2(addr)
}

/// 32-bit read for front ends that may not have a target mapped yet
pub fn get4(space: Option<&mut AddressSpace>, addr: Address) -> AccessResult<u32> {
    configured(space)?.get4(addr)
}

/// 64-bit read for front ends that may not have a target mapped yet
pub fn get8(space: Option<&mut AddressSpace>, addr: Address) -> AccessResult<u64> {
    configured(space)?.get8(addr)
}

/// Address-width read for front ends that may not have a target mapped yet
pub fn get_addr(space: Option<&mut AddressSpace>, addr: Address) -> AccessResult<u64> {
    configured(space)?.get_addr(addr)
}

/// Block write for front ends that may not have a target mapped yet
pub fn put1(space: Option<&mut AddressSpace>, addr: Address, buf: &[u8]) -> AccessResult<()> {
    configured(space)?.put1(addr, buf)
}

/// 16-bit write for front ends that may not have a target mapped yet
pub fn put2(space: Option<&mut AddressSpace>, addr: Address, value: u16) -> AccessResult<()> {
    configured(space)?.put2(addr, value)
}

/// 32-bit write for front ends that may not have a target mapped yet
pub fn put4(space: Option<&mut AddressSpace>, addr: Address, value: u32) -> AccessResult<()> {
    configured(space)?.put4(addr, value)
}

/// 64-bit write for front ends that may not have a target mapped yet
pub fn put8(space: Option<&mut AddressSpace>, addr: Address, value: u64) -> AccessResult<()> {
    configured(space)?.put8(addr, value)
}

/// Address-width write for front ends that may not have a target mapped yet
pub fn put_addr(space: Option<&mut AddressSpace>, addr: Address, value: u64) -> AccessResult<()> {
    configured(space)?.put_addr(addr, value)
}
