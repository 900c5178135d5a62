//! Bounded transfer engine over a segment's backing store
//!
//! A logical transfer may be split by the store or by the page cache's
//! window clamp. The engine accumulates sub-transfers until the request is
//! satisfied; a sub-transfer that makes no progress stops the loop and the
//! whole request fails as partial. The shortfall is never tolerated
//! silently, since it usually means a miscomputed offset or a truncated
//! backing store.

use super::cache::PageCache;
use crate::core::types::{AccessError, AccessResult, Address, Direction};
use crate::store::Store;

/// Move exactly `buf.len()` bytes at store offset `off` into `buf`.
///
/// Cache-eligible segments read through the window cache; others read the
/// store directly. `addr` only labels errors.
pub(crate) fn read_exact(
    cache: &mut PageCache,
    store: &mut dyn Store,
    cacheable: bool,
    segment: usize,
    addr: Address,
    off: u64,
    buf: &mut [u8],
) -> AccessResult<()> {
    let size = buf.len();
    let mut moved = 0;
    while moved < size {
        let sub = &mut buf[moved..];
        let sub_off = off + moved as u64;
        let n = if cacheable {
            cache.read(segment, store, sub_off, sub)
        } else {
            store.read_at(sub_off, sub)
        }
        .map_err(|err| AccessError::transfer(Direction::Read, addr, size, err))?;
        if n == 0 {
            return Err(AccessError::partial(Direction::Read, addr, size, moved));
        }
        moved += n;
    }
    Ok(())
}

/// Move exactly `buf.len()` bytes from `buf` to store offset `off`.
///
/// Writes never consult the cache for data, but any bytes that land drop
/// the space's cached window when they overlap it, so later cached reads
/// see the new bytes.
pub(crate) fn write_exact(
    cache: &mut PageCache,
    store: &mut dyn Store,
    segment: usize,
    addr: Address,
    off: u64,
    buf: &[u8],
) -> AccessResult<()> {
    let size = buf.len();
    let mut moved = 0;
    let result = loop {
        if moved == size {
            break Ok(());
        }
        match store.write_at(off + moved as u64, &buf[moved..]) {
            Ok(0) => break Err(AccessError::partial(Direction::Write, addr, size, moved)),
            Ok(n) => moved += n,
            Err(err) => break Err(AccessError::transfer(Direction::Write, addr, size, err)),
        }
    };
    // Even a failed write may have landed bytes inside the cached window
    cache.invalidate(segment, off, moved);
    result
}
