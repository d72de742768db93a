/*!
# Rust Language Module

This Rust module describes the example program: statements, expressions,
and the numbered lines that hold them.

*/

pub type LineNumber = Option<u16>;

#[macro_use]
mod error;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;

pub mod ast;

#[cfg(test)]
mod tests;
