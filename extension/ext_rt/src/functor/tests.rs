use std::ptr;

use super::*;
use pretty_assertions::assert_eq;

fn zero() -> i32 {
    42
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn join(a: &'static str, b: &'static str, c: u8, d: u8, e: bool, f: char) -> String {
    format!("{a}{b}{c}{d}{e}{f}")
}

extern "C" fn twice(x: i64) -> i64 {
    x * 2
}

#[test]
fn forwards_arguments_in_order() {
    let f = Functor::new(add as fn(i32, i32) -> i32);
    assert!(f.is_valid());
    assert_eq!(f.call((2, 3)), Ok(5));

    let f = Functor::new(zero as fn() -> i32);
    assert_eq!(f.call(()), Ok(42));

    let f = Functor::new(join as fn(&'static str, &'static str, u8, u8, bool, char) -> String);
    assert_eq!(f.call(("a", "b", 1, 2, true, 'z')), Ok("ab12truez".to_string()));
}

#[test]
fn extern_c_signatures() {
    let f = Functor::new(twice as extern "C" fn(i64) -> i64);
    assert_eq!(f.call((21,)), Ok(42));
}

#[test]
fn null_pointer_is_unresolved() {
    let f = unsafe { Functor::<fn() -> i32>::from_raw("missing", ptr::null()) };
    assert!(!f.is_valid());
    assert_eq!(f.symbol(), "missing");
    assert_eq!(
        f.call(()),
        Err(RuntimeError::InvalidFunctor {
            symbol: "missing".to_string()
        })
    );
}

#[test]
fn raw_address_round_trips_to_callable() {
    let address = add as fn(i32, i32) -> i32 as *const c_void;
    let f = unsafe { Functor::<fn(i32, i32) -> i32>::from_raw("add", address) };
    assert!(f.is_valid());
    assert_eq!(f.call((40, 2)), Ok(42));
}

#[test]
fn debug_reports_validity() {
    let f: Functor<'_, fn() -> i32> = Functor::unresolved("gone");
    assert_eq!(format!("{f:?}"), "Functor { symbol: \"gone\", valid: false }");
}
