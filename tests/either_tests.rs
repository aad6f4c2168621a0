//! Unit tests for Either<L, R> type.
//!
//! Either represents a value that can be one of two types:
//! - `Left(L)`: Contains a value of type L
//! - `Right(R)`: Contains a value of type R

#![cfg(feature = "control")]

use funkit::control::{Either, Maybe};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn maybe_left_of_left_is_present() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.maybe_left(), Maybe::Present(42));
}

#[rstest]
fn maybe_left_of_right_is_plain_absence() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.maybe_left(), Maybe::Absent(None));
}

#[rstest]
fn maybe_right_of_right_is_present() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.maybe_right(), Maybe::Present("hello".to_string()));
}

#[rstest]
fn references_do_not_consume() {
    let value: Either<i32, String> = Either::Left(1);
    assert_eq!(value.left_ref(), Some(&1));
    assert_eq!(value.right_ref(), None);
    assert!(value.is_left());
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn map_right_leaves_left_untouched() {
    let calls = Cell::new(0);
    let value: Either<i32, i32> = Either::Left(5);
    let mapped = value.map_right(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });
    assert_eq!(mapped, Either::Left(5));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_left_leaves_right_untouched() {
    let value: Either<i32, &str> = Either::Right("kept");
    assert_eq!(value.map_left(|x| x + 1), Either::Right("kept"));
}

#[rstest]
#[case(Either::Left(2), Either::Left(20))]
#[case(Either::Right('r'), Either::Right('r'))]
fn map_left_on_each_side(#[case] input: Either<i32, char>, #[case] expected: Either<i32, char>) {
    assert_eq!(input.map_left(|x| x * 10), expected);
}

#[rstest]
fn inherit_replaces_only_matching_side() {
    let left: Either<i32, i32> = Either::Left(1);
    assert_eq!(left.inherit_left("new"), Either::Left("new"));
    assert_eq!(left.inherit_right("new"), Either::Left(1));
}

// =============================================================================
// Combination and Folding
// =============================================================================

#[rstest]
fn then_discards_first() {
    let first: Either<i32, i32> = Either::Left(1);
    let second: Either<&str, char> = Either::Right('x');
    assert_eq!(first.then(second), Either::Right('x'));
}

#[rstest]
fn fold_collapses_both_sides() {
    let render = |value: Either<i32, &str>| value.fold(|n| n.to_string(), str::to_uppercase);
    assert_eq!(render(Either::Left(3)), "3");
    assert_eq!(render(Either::Right("abc")), "ABC");
}

#[rstest]
fn swap_exchanges_sides() {
    let value: Either<i32, char> = Either::Right('s');
    assert_eq!(value.swap(), Either::Left('s'));
}
