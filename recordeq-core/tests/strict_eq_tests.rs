// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use recordeq_core::{Record, RecordError};
use std::any::Any;

#[test]
fn test_absent_reference_compares_false() {
    let r = Record::new("Alice".to_string(), 30);
    assert_eq!(r.try_eq(None), Ok(false));
}

#[test]
fn test_identity_compares_true() {
    let r = Record::new("Alice".to_string(), 30);
    assert_eq!(r.try_eq(Some(&r)), Ok(true));
}

#[test]
fn test_identity_succeeds_with_unset_name() {
    // Self-comparison never reads fields, so a partially initialized
    // record is safe to compare against itself.
    let r = Record::unnamed(30);
    assert_eq!(r.try_eq(Some(&r)), Ok(true));
}

#[test]
fn test_other_runtime_type_compares_false() {
    let r = Record::unnamed(30);
    assert_eq!(r.try_eq(Some(&30u32 as &dyn Any)), Ok(false));
}

#[test]
fn test_matching_records_compare_true() {
    let a = Record::new("Alice".to_string(), 30);
    let b = Record::new("Alice".to_string(), 30);
    assert_eq!(a.try_eq(Some(&b)), Ok(true));
}

#[test]
fn test_name_mismatch_compares_false() {
    let a = Record::new("Alice".to_string(), 30);
    let b = Record::new("Bob".to_string(), 30);
    assert_eq!(a.try_eq(Some(&b)), Ok(false));
}

#[test]
fn test_age_mismatch_short_circuits_before_names() {
    // Ages differ, so the unset left name is never read.
    let a = Record::unnamed(30);
    let b = Record::new("Alice".to_string(), 31);
    assert_eq!(a.try_eq(Some(&b)), Ok(false));
}

#[test]
fn test_unset_left_name_is_an_error() {
    let a = Record::unnamed(30);
    let b = Record::new("Alice".to_string(), 30);
    let err = a.try_eq(Some(&b)).unwrap_err();
    assert!(matches!(err, RecordError::UnsetName { .. }));
}

#[test]
fn test_unset_right_name_compares_false() {
    let a = Record::new("Alice".to_string(), 30);
    let b = Record::unnamed(30);
    assert_eq!(a.try_eq(Some(&b)), Ok(false));
}

#[test]
fn test_asymmetry_across_the_error_path() {
    let named = Record::new("Alice".to_string(), 30);
    let anonymous = Record::unnamed(30);
    assert_eq!(named.try_eq(Some(&anonymous)), Ok(false));
    assert!(anonymous.try_eq(Some(&named)).is_err());
}

#[test]
fn test_two_distinct_unnamed_records_are_an_error() {
    // Identity would succeed, but two separate unnamed records reach the
    // name comparison and fail there.
    let a = Record::unnamed(30);
    let b = Record::unnamed(30);
    assert!(a.try_eq(Some(&b)).is_err());
}
