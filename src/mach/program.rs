use super::{compile, Address, Opcode};
use crate::lang::{Error, Line, LineNumber};
use std::sync::Arc;
use tracing::debug;

/// ## Compiled program
///
/// Opcodes are kept alongside the number of the line that produced them
/// so run-time errors can report where they happened.

#[derive(Debug, Default)]
pub struct Program {
    ops: Vec<Opcode>,
    line_numbers: Vec<LineNumber>,
    line_number: LineNumber,
    errors: Arc<Vec<Error>>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, op: Opcode) {
        self.ops.push(op);
        self.line_numbers.push(self.line_number);
    }

    pub fn error(&mut self, error: Error) {
        let error = match error.line_number() {
            Some(_) => error,
            None => error.in_line_number(self.line_number),
        };
        Arc::make_mut(&mut self.errors).push(error);
    }

    pub fn errors(&self) -> Arc<Vec<Error>> {
        Arc::clone(&self.errors)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn op(&self, addr: Address) -> Option<&Opcode> {
        self.ops.get(addr)
    }

    pub fn line_number(&self, addr: Address) -> LineNumber {
        self.line_numbers.get(addr).copied().flatten()
    }

    pub fn compile<'a, T: IntoIterator<Item = &'a Line>>(&mut self, lines: T) {
        for line in lines {
            self.line_number = line.number();
            compile(self, line.statement());
        }
        self.line_number = None;
        self.push(Opcode::End);
        debug!(
            ops = self.ops.len(),
            errors = self.errors.len(),
            "compiled program"
        );
    }
}
