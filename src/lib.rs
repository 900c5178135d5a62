//! Segment-aware, byte-order-correct access to the logical address space of
//! an executable image, a core dump, or a traced process.
//!
//! The crate is the memory-access layer of a multi-architecture inspection
//! toolkit: external loaders describe a target as an [`AddressSpace`] (an
//! [`Architecture`] plus ordered [`Segment`]s over [`Store`]s), and the
//! typed accessors move scalars and byte spans in the target's byte order,
//! with a per-space page cache in front of file-backed reads.
//!
//! ```
//! use coremem::{AddressSpace, Address, Architecture, MemStore, Segment};
//!
//! let mut space = AddressSpace::new(Architecture::AMD64);
//! let store = space.add_store(Box::new(MemStore::zeroed(0x1000)));
//! space.add_segment(
//!     Segment::new("data", Address::new(0x1000), Address::new(0x2000), 0, Some(store))
//!         .cacheable(),
//! )?;
//!
//! space.put4(Address::new(0x1004), 0xAABBCCDD)?;
//! assert_eq!(space.get4(Address::new(0x1004))?, 0xAABBCCDD);
//! # Ok::<(), coremem::AccessError>(())
//! ```

pub mod access;
pub mod arch;
pub mod core;
pub mod space;
pub mod store;

// Re-export the main types
pub use crate::core::types::{AccessError, AccessResult, Address, Direction};
pub use arch::{AddressWidth, Architecture, ByteOrder};
pub use space::{AddressSpace, Segment, StoreId};
pub use store::{FileStore, MemStore, Store};
