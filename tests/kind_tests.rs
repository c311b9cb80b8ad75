//! Tests for the Kind enum

use time::OffsetDateTime;
use untext::{Decode, Kind};

fn kind_of<T: Decode>(mut value: T) -> Kind {
    value.slot().kind()
}

#[test]
fn test_slot_kinds() {
    assert_eq!(kind_of(false), Kind::Bool);
    assert_eq!(kind_of(0i8), Kind::I8);
    assert_eq!(kind_of(0i16), Kind::I16);
    assert_eq!(kind_of(0i32), Kind::I32);
    assert_eq!(kind_of(0i64), Kind::I64);
    assert_eq!(kind_of(0isize), Kind::Isize);
    assert_eq!(kind_of(0u8), Kind::U8);
    assert_eq!(kind_of(0u16), Kind::U16);
    assert_eq!(kind_of(0u32), Kind::U32);
    assert_eq!(kind_of(0u64), Kind::U64);
    assert_eq!(kind_of(0usize), Kind::Usize);
    assert_eq!(kind_of(0f32), Kind::F32);
    assert_eq!(kind_of(0f64), Kind::F64);
    assert_eq!(kind_of(String::new()), Kind::String);
    assert_eq!(kind_of(OffsetDateTime::UNIX_EPOCH), Kind::DateTime);
    assert_eq!(kind_of(None::<i64>), Kind::Indirect);
    assert_eq!(kind_of(Box::new(0i64)), Kind::Indirect);
    assert_eq!(kind_of(Vec::<i64>::new()), Kind::Sequence);
    assert_eq!(kind_of(std::net::Ipv4Addr::LOCALHOST), Kind::Other);
}

#[cfg(feature = "i128")]
#[test]
fn test_wide_integer_kinds() {
    assert_eq!(kind_of(0i128), Kind::I128);
    assert_eq!(kind_of(0u128), Kind::U128);
    assert!(Kind::I128.is_signed());
    assert!(Kind::U128.is_unsigned());
    assert!(Kind::I128.is_primitive());
}

#[test]
fn test_kind_is_primitive() {
    assert!(Kind::Bool.is_primitive());
    assert!(Kind::I8.is_primitive());
    assert!(Kind::U64.is_primitive());
    assert!(Kind::F64.is_primitive());
    assert!(Kind::String.is_primitive());

    assert!(!Kind::DateTime.is_primitive());
    assert!(!Kind::Indirect.is_primitive());
    assert!(!Kind::Sequence.is_primitive());
    assert!(!Kind::Other.is_primitive());
}

#[test]
fn test_kind_numeric_classes() {
    assert!(Kind::Isize.is_signed());
    assert!(!Kind::U8.is_signed());

    assert!(Kind::Usize.is_unsigned());
    assert!(!Kind::I8.is_unsigned());

    assert!(Kind::F32.is_float());
    assert!(!Kind::I32.is_float());

    assert!(Kind::F32.is_numeric());
    assert!(!Kind::Bool.is_numeric());
    assert!(!Kind::String.is_numeric());
}

#[test]
fn test_kind_is_supported() {
    assert!(Kind::Bool.is_supported());
    assert!(Kind::DateTime.is_supported());
    assert!(Kind::Indirect.is_supported());

    assert!(!Kind::Sequence.is_supported());
    assert!(!Kind::Other.is_supported());
}
