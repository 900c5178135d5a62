//! One contiguous logical address range bound to backing storage

use crate::core::types::Address;

/// Index of a backing store registered with an
/// [`AddressSpace`](crate::space::AddressSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(pub(crate) usize);

/// A named, contiguous logical address range `[base, end)`.
///
/// `store_offset` is the backing-store offset corresponding to `base`; a
/// segment with no store is an identity range whose reads synthesize values
/// and whose writes are rejected. Only in-use segments participate in
/// address resolution.
#[derive(Debug)]
pub struct Segment {
    name: String,
    base: Address,
    end: Address,
    store_offset: u64,
    store: Option<StoreId>,
    in_use: bool,
    cacheable: bool,
}

impl Segment {
    /// Creates a segment mapping `[base, end)` to `store` at `store_offset`.
    ///
    /// New segments are in use and not cache-eligible.
    pub fn new(
        name: impl Into<String>,
        base: Address,
        end: Address,
        store_offset: u64,
        store: Option<StoreId>,
    ) -> Self {
        Segment {
            name: name.into(),
            base,
            end,
            store_offset,
            store,
            in_use: true,
            cacheable: false,
        }
    }

    /// Marks the segment cache-eligible; reads may be served from the page
    /// cache. Only sensible for stores whose contents don't change behind
    /// the toolkit's back (files, not live processes).
    pub fn cacheable(mut self) -> Self {
        self.cacheable = true;
        self
    }

    /// Segment name, e.g. `"text"` or `"data"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First address of the range
    pub fn base(&self) -> Address {
        self.base
    }

    /// Exclusive end address of the range
    pub fn end(&self) -> Address {
        self.end
    }

    /// Backing-store offset of `base`
    pub fn store_offset(&self) -> u64 {
        self.store_offset
    }

    /// Backing store, if any
    pub fn store(&self) -> Option<StoreId> {
        self.store
    }

    /// Whether the segment participates in resolution
    pub fn is_in_use(&self) -> bool {
        self.in_use
    }

    /// Enable or disable the segment for resolution
    pub fn set_in_use(&mut self, in_use: bool) {
        self.in_use = in_use;
    }

    /// Whether reads may be served through the page cache
    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }

    /// Whether `addr` belongs to this segment: in use and `base <= addr < end`
    pub fn contains(&self, addr: Address) -> bool {
        self.in_use && self.base <= addr && addr < self.end
    }
}
