//! Logical address to backing-store offset translation

use super::segment::Segment;
use crate::core::types::{AccessError, AccessResult, Address};

/// Resolve `addr` against the ordered segment list.
///
/// Scans in registration order and returns the index of the first in-use
/// segment containing `addr`, plus the corresponding backing-store offset
/// `addr + store_offset - base`. Overlapping segments are legal; the earliest
/// match is authoritative.
pub(crate) fn resolve(segments: &[Segment], addr: Address) -> AccessResult<(usize, u64)> {
    for (index, seg) in segments.iter().enumerate() {
        if seg.contains(addr) {
            let off = seg.store_offset() + (addr - seg.base());
            return Ok((index, off));
        }
    }
    Err(AccessError::translation(addr))
}
