mod common;
use common::*;
use values::lang::ast::{Expression, Statement};
use values::mach::{Listing, Runtime};

const EXPECTED: &str = "kotlin\n2\n2.3333333333333335\nfalse\ntrue\nfalse\n";

#[test]
fn test_values_output() {
    let mut r = Runtime::new(Listing::values());
    assert_eq!(exec(&mut r), EXPECTED);
}

#[test]
fn test_repeatable() {
    for _ in 0..3 {
        let mut r = Runtime::new(Listing::values());
        assert_eq!(exec(&mut r), EXPECTED);
    }
}

#[test]
fn test_float_is_not_integer_division() {
    let mut r = Runtime::new(Listing::values());
    let out = exec(&mut r);
    let third = out.lines().nth(2).unwrap();
    assert_ne!(third, "2");
    assert_eq!(third.parse::<f64>().unwrap(), 7.0 / 3.0);
}

#[test]
fn test_custom_listing() {
    let mut listing = Listing::new("Mixing types.");
    listing.push(
        Some("Strings absorb whatever is added to them."),
        Statement::Print(Expression::add("1 + 1 = ", Expression::add(1, 1))),
    ).unwrap();
    listing.push(None, Statement::Print(Expression::multiply(2.0, 3))).unwrap();
    listing.push(
        None,
        Statement::Print(Expression::or(
            Expression::and(true, false),
            Expression::not(false),
        )),
    ).unwrap();
    let mut r = Runtime::new(listing);
    assert_eq!(exec(&mut r), "1 + 1 = 2\n6.0\ntrue\n");
}

#[test]
fn test_error_line_number() {
    let mut listing = Listing::default();
    listing.push(None, Statement::Print(Expression::from(1))).unwrap();
    listing.push(None, Statement::Print(Expression::from(2))).unwrap();
    listing.push(None, Statement::Print(Expression::add(true, "x"))).unwrap();
    let mut r = Runtime::new(listing);
    assert_eq!(exec(&mut r), "1\n2\n?TYPE MISMATCH IN 3\n");
}

#[test]
fn test_tight_cycle_budget() {
    let mut r = Runtime::new(Listing::values());
    assert_eq!(exec_n(&mut r, 2), EXPECTED);
}
