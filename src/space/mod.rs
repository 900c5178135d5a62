//! Address spaces: ordered segments over shared backing stores
//!
//! An [`AddressSpace`] represents one mapped target: an executable image, a
//! core dump, or a traced process. External loaders construct it by
//! registering backing stores and segments; the typed accessors in
//! [`crate::access`] then provide byte-order-correct reads and writes
//! against it.

pub mod segment;

pub(crate) mod resolver;

pub use segment::{Segment, StoreId};

use crate::access::cache::PageCache;
use crate::arch::Architecture;
use crate::core::types::{AccessError, AccessResult, Address};
use crate::store::Store;
use std::fmt;
use tracing::debug;

/// One mapped target: an architecture, an ordered segment list, the backing
/// stores those segments reference, and this space's own page-cache slot.
///
/// Segment order matters: when ranges overlap, the earliest registered
/// segment is authoritative. Several segments may share one store (text and
/// data of the same image file).
pub struct AddressSpace {
    arch: Architecture,
    pub(crate) segments: Vec<Segment>,
    pub(crate) stores: Vec<Box<dyn Store>>,
    pub(crate) cache: PageCache,
}

impl AddressSpace {
    /// Creates an empty space for `arch`
    pub fn new(arch: Architecture) -> Self {
        AddressSpace {
            arch,
            segments: Vec::new(),
            stores: Vec::new(),
            cache: PageCache::new(),
        }
    }

    /// Creates the identity mapping: a single storeless segment covering the
    /// whole address range. Every read synthesizes its own address; every
    /// write fails as unwritable.
    pub fn identity(arch: Architecture) -> Self {
        let mut space = AddressSpace::new(arch);
        space.segments.push(Segment::new(
            "identity",
            Address::null(),
            Address::new(u64::MAX),
            0,
            None,
        ));
        space
    }

    /// Registers a backing store and returns its id for use in segments
    pub fn add_store(&mut self, store: Box<dyn Store>) -> StoreId {
        self.stores.push(store);
        StoreId(self.stores.len() - 1)
    }

    /// Appends a segment to the resolution order.
    ///
    /// Rejects ranges with `base > end` and store ids from another space.
    pub fn add_segment(&mut self, segment: Segment) -> AccessResult<()> {
        if segment.base() > segment.end() {
            return Err(AccessError::Configuration(format!(
                "segment {}: base {} beyond end {}",
                segment.name(),
                segment.base(),
                segment.end()
            )));
        }
        if let Some(StoreId(index)) = segment.store() {
            if index >= self.stores.len() {
                return Err(AccessError::Configuration(format!(
                    "segment {}: unknown store id {index}",
                    segment.name()
                )));
            }
        }
        debug!(
            name = segment.name(),
            base = %segment.base(),
            end = %segment.end(),
            cacheable = segment.is_cacheable(),
            "registered segment"
        );
        self.segments.push(segment);
        Ok(())
    }

    /// Architecture bound at construction
    pub fn arch(&self) -> Architecture {
        self.arch
    }

    /// Segments in resolution order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Looks up a segment by name, e.g. to toggle its in-use flag
    pub fn segment_mut(&mut self, name: &str) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.name() == name)
    }

    /// Whether this space is the identity mapping: exactly one segment with
    /// no backing store
    pub fn is_identity(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].store().is_none()
    }

    /// Translates `addr` to its authoritative segment index and backing-store
    /// offset
    pub(crate) fn resolve(&self, addr: Address) -> AccessResult<(usize, u64)> {
        resolver::resolve(&self.segments, addr)
    }
}

impl fmt::Debug for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressSpace")
            .field("arch", &self.arch)
            .field("segments", &self.segments)
            .field("stores", &self.stores.len())
            .finish()
    }
}
