//! Main memory.

use ls8_core::common::{Location, Trap};
use ls8_core::core::arch::ram::Ram;

#[test]
fn memory_starts_zeroed() {
    let ram = Ram::new();
    assert_eq!(ram.as_slice().len(), 256);
    assert!(ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn last_address_is_writable() {
    let mut ram = Ram::new();
    ram.write(255, 0x5A).unwrap();
    assert_eq!(ram.read(255), Ok(0x5A));
}

#[test]
fn address_256_is_out_of_range() {
    let mut ram = Ram::new();
    assert_eq!(ram.read(256), Err(Trap::OutOfRange(Location::Memory(256))));
    assert_eq!(
        ram.write(256, 1),
        Err(Trap::OutOfRange(Location::Memory(256)))
    );
}

#[test]
fn load_at_copies_bytes() {
    let mut ram = Ram::new();
    ram.load_at(4, &[1, 2, 3]).unwrap();
    assert_eq!(&ram.as_slice()[3..8], &[0, 1, 2, 3, 0]);
}

#[test]
fn load_at_full_memory_fits() {
    let mut ram = Ram::new();
    ram.load_at(0, &[0xEE; 256]).unwrap();
    assert_eq!(ram.read(255), Ok(0xEE));
}

#[test]
fn load_at_overflow_leaves_memory_untouched() {
    let mut ram = Ram::new();
    let err = ram.load_at(250, &[1; 10]).unwrap_err();
    assert_eq!(err, Trap::OutOfRange(Location::Memory(256)));
    assert_eq!(ram, Ram::new());
}

#[test]
fn clear_zero_fills() {
    let mut ram = Ram::new();
    ram.load_at(0, &[9; 16]).unwrap();
    ram.clear();
    assert_eq!(ram, Ram::new());
}
