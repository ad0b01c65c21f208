//! Simple vs full type names.

use std::collections::HashMap;
use std::fmt::Debug;

use nameof::{full_type_name, full_type_name_of_val, nameof_full_type, nameof_type, type_name, type_name_of_val};

struct Point;

#[allow(dead_code)]
mod shapes {
    pub struct Circle<T>(pub T);
}

#[test]
fn references_are_stripped() {
    assert_eq!(type_name::<&i32>(), "i32");
    assert_eq!(type_name::<&mut i32>(), "i32");
    assert_eq!(type_name::<&i32>(), type_name::<&mut i32>());
    assert_eq!(type_name::<&&str>(), "str");
}

#[test]
fn raw_pointers_are_part_of_the_name() {
    assert_eq!(type_name::<*const u8>(), "*const u8");
    assert_eq!(type_name::<*mut u8>(), "*mut u8");
    assert_ne!(type_name::<*const u8>(), type_name::<u8>());
    assert_eq!(type_name::<&*const String>(), "*const String");
}

#[test]
fn full_names_keep_qualifiers() {
    assert_eq!(full_type_name::<&i32>(), "&i32");
    assert_eq!(full_type_name::<&mut i32>(), "&mut i32");
    assert_eq!(full_type_name::<*mut u8>(), "*mut u8");
    assert!(!type_name::<&mut i32>().contains('&'));
}

#[test]
fn paths_are_shortened_only_in_simple_names() {
    assert_eq!(type_name::<String>(), "String");
    assert_eq!(full_type_name::<String>(), "alloc::string::String");
    assert_eq!(type_name::<Point>(), "Point");
    assert_eq!(full_type_name::<Point>(), "type_names::Point");
    assert_eq!(type_name::<shapes::Circle<Point>>(), "Circle<Point>");
    assert_eq!(type_name::<Option<Vec<u8>>>(), "Option<Vec<u8>>");
    assert_eq!(type_name::<HashMap<String, Point>>(), "HashMap<String, Point>");
}

#[test]
fn unsized_types_are_named() {
    assert_eq!(type_name::<str>(), "str");
    assert_eq!(type_name::<[u8]>(), "[u8]");
    assert_eq!(type_name::<dyn Debug>(), "dyn Debug");
    assert_eq!(full_type_name::<dyn Debug>(), "dyn core::fmt::Debug");
}

#[test]
fn values_name_their_types() {
    let value = 5u16;
    let reference = &value;
    assert_eq!(type_name_of_val(&value), "u16");
    assert_eq!(full_type_name_of_val(&reference), "&u16");
    assert_eq!(type_name_of_val(&reference), "u16");
}

#[test]
fn simple_names_are_interned() {
    assert!(std::ptr::eq(type_name::<Vec<String>>(), type_name::<Vec<String>>()));
}

#[test]
fn type_macros_forward() {
    assert_eq!(nameof_type!(&mut Vec<u8>), "Vec<u8>");
    assert_eq!(nameof_full_type!(&Point), "&type_names::Point");
    let point = Point;
    assert_eq!(nameof::nameof_type_expr!(point), "Point");
    assert_eq!(nameof::nameof_full_type_expr!(point), "type_names::Point");
}
