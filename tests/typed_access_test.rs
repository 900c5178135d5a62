//! Integration tests for typed access against store-backed address spaces

use coremem::{AccessError, Address, AddressSpace, Architecture, MemStore, Segment, StoreId};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// One segment `[0x1000, 0x2000)` over a zeroed store of `len` bytes.
fn data_space(arch: Architecture, len: usize, cacheable: bool) -> AddressSpace {
    let mut space = AddressSpace::new(arch);
    let store = space.add_store(Box::new(MemStore::zeroed(len)));
    let mut seg = Segment::new(
        "data",
        Address::new(0x1000),
        Address::new(0x2000),
        0,
        Some(store),
    );
    if cacheable {
        seg = seg.cacheable();
    }
    space.add_segment(seg).unwrap();
    space
}

#[test]
fn test_round_trip_all_widths() {
    for arch in [Architecture::AMD64, Architecture::POWER64] {
        let mut space = data_space(arch, 0x1000, false);
        let addr = Address::new(0x1010);

        space.put1(addr, &[0xA5]).unwrap();
        let mut byte = [0u8; 1];
        space.get1(addr, &mut byte).unwrap();
        assert_eq!(byte, [0xA5]);

        space.put2(addr, 0xBEEF).unwrap();
        assert_eq!(space.get2(addr).unwrap(), 0xBEEF);

        space.put4(addr, 0xAABBCCDD).unwrap();
        assert_eq!(space.get4(addr).unwrap(), 0xAABBCCDD);

        space.put8(addr, 0x0123456789ABCDEF).unwrap();
        assert_eq!(space.get8(addr).unwrap(), 0x0123456789ABCDEF);

        space.put_addr(addr, 0x0123456789ABCDEF).unwrap();
        assert_eq!(
            space.get_addr(addr).unwrap(),
            match arch.width().bytes() {
                8 => 0x0123456789ABCDEF,
                _ => 0x89ABCDEF,
            }
        );
    }
}

#[test]
fn test_end_to_end_scenario() {
    // Segment b=0x1000, e=0x2000, f=0, cache-eligible file-like store
    let mut space = data_space(Architecture::AMD64, 0x3000, true);

    space.put4(Address::new(0x1004), 0xAABBCCDD).unwrap();
    assert_eq!(space.get4(Address::new(0x1004)).unwrap(), 0xAABBCCDD);

    // A read near the segment's end resolves once and reads the exact bytes
    // present in storage at offset 0xFFE
    space.put1(Address::new(0x1FFE), &[0x01, 0x02]).unwrap();
    let got = space.get2(Address::new(0x1FFE)).unwrap();
    assert_eq!(got, space.arch().order().read_u16(&[0x01, 0x02]));
}

#[test]
fn test_translation_failures_name_the_address() {
    let mut space = data_space(Architecture::AMD64, 0x1000, false);

    let err = space.get4(Address::new(0x9999)).unwrap_err();
    assert!(matches!(err, AccessError::Translation { .. }));
    assert!(err.to_string().contains("0x9999"));

    let err = space.put8(Address::new(0x0FFF), 0).unwrap_err();
    assert!(err.to_string().contains("0xfff"));

    // The exclusive end address never resolves
    assert!(space.get2(Address::new(0x2000)).is_err());
    assert!(space.get2(Address::new(0x1FFE)).is_ok());
}

#[test]
fn test_overlapping_segments_first_match_wins() {
    let mut space = AddressSpace::new(Architecture::AMD64);
    let first = space.add_store(Box::new(MemStore::from_bytes(vec![0x11; 64])));
    let second = space.add_store(Box::new(MemStore::from_bytes(vec![0x22; 64])));

    space
        .add_segment(seg("text", 0x1000, 0x1040, first))
        .unwrap();
    space
        .add_segment(seg("shadow", 0x1000, 0x1040, second))
        .unwrap();

    assert_eq!(space.get4(Address::new(0x1000)).unwrap(), 0x11111111);

    // Disabling the first segment exposes the second
    space.segment_mut("text").unwrap().set_in_use(false);
    assert_eq!(space.get4(Address::new(0x1000)).unwrap(), 0x22222222);

    // Disabling both leaves the address untranslatable
    space.segment_mut("shadow").unwrap().set_in_use(false);
    assert!(matches!(
        space.get4(Address::new(0x1000)),
        Err(AccessError::Translation { .. })
    ));
}

fn seg(name: &str, base: u64, end: u64, store: StoreId) -> Segment {
    Segment::new(name, Address::new(base), Address::new(end), 0, Some(store))
}

#[test]
fn test_segments_share_one_store() {
    // Text and data of the same image: one store, two file offsets
    let mut space = AddressSpace::new(Architecture::AMD64);
    let image: Vec<u8> = (0..=255).cycle().take(0x800).map(|b| b as u8).collect();
    let store = space.add_store(Box::new(MemStore::from_bytes(image.clone())));

    space
        .add_segment(Segment::new(
            "text",
            Address::new(0x1000),
            Address::new(0x1400),
            0,
            Some(store),
        ))
        .unwrap();
    space
        .add_segment(Segment::new(
            "data",
            Address::new(0x8000),
            Address::new(0x8400),
            0x400,
            Some(store),
        ))
        .unwrap();

    let mut text = [0u8; 4];
    space.get1(Address::new(0x1000), &mut text).unwrap();
    assert_eq!(&text, &image[0..4]);

    let mut data = [0u8; 4];
    space.get1(Address::new(0x8000), &mut data).unwrap();
    assert_eq!(&data, &image[0x400..0x404]);
}

#[test]
fn test_truncated_store_reports_partial_transfer() {
    // Segment claims 0x1000 bytes but the store holds only 6
    let mut space = data_space(Architecture::AMD64, 6, false);

    let err = space.get8(Address::new(0x1000)).unwrap_err();
    match err {
        AccessError::PartialTransfer { size, moved, .. } => {
            assert_eq!(size, 8);
            assert_eq!(moved, 6);
        }
        other => panic!("wrong error: {other}"),
    }
}

proptest! {
    #[test]
    fn prop_round_trip_u64(value: u64, slot in 0u64..0x1F8, big_endian: bool) {
        let arch = if big_endian { Architecture::POWER64 } else { Architecture::AMD64 };
        let mut space = data_space(arch, 0x1000, false);
        let addr = Address::new(0x1000 + slot);

        space.put8(addr, value).unwrap();
        prop_assert_eq!(space.get8(addr).unwrap(), value);
    }

    #[test]
    fn prop_round_trip_u32(value: u32, slot in 0u64..0x1FC, big_endian: bool) {
        let arch = if big_endian { Architecture::POWER64 } else { Architecture::AMD64 };
        let mut space = data_space(arch, 0x1000, false);
        let addr = Address::new(0x1000 + slot);

        space.put4(addr, value).unwrap();
        prop_assert_eq!(space.get4(addr).unwrap(), value);
    }

    #[test]
    fn prop_block_round_trip(bytes: Vec<u8>, big_endian: bool) {
        prop_assume!(bytes.len() <= 0x800);
        let arch = if big_endian { Architecture::POWER64 } else { Architecture::AMD64 };
        let mut space = data_space(arch, 0x1000, false);
        let addr = Address::new(0x1100);

        space.put1(addr, &bytes).unwrap();
        let mut back = vec![0u8; bytes.len()];
        space.get1(addr, &mut back).unwrap();
        prop_assert_eq!(back, bytes);
    }
}
