/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for the example
programs. Each listing compiles to a flat list of stack operations which
the runtime steps through, handing every printed line back to the caller.

*/

pub type Address = usize;

mod compile;
mod listing;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;

use compile::compile;
pub use listing::Listing;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;
