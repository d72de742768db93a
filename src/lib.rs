//! # Values by Example
//!
//! Strings, integers, floats and booleans: the basic value types, shown by
//! evaluating a handful of expressions and printing each result on its own
//! line.
//!
//! Run the executable with no arguments and you should see:
//! ```text
//! kotlin
//! 2
//! 2.3333333333333335
//! false
//! true
//! false
//! ```
//!
//! Run it with `--listing` to see the annotated program that produced
//! those lines.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod exit_codes;
pub mod lang;
pub mod logging;
pub mod mach;
pub mod term;
