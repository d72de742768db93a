use super::{Address, Listing, Opcode, Operation, Program, Stack, Val};
use crate::error;
use crate::lang::Error;
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Events
///
/// Every call to `execute` returns one of these.
/// The caller owns all output; the machine never writes anywhere itself.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The program has finished. Returned by every later call too.
    Stopped,
    /// The cycle budget ran out. Call `execute` again to continue.
    Running,
    /// One line of output including its trailing newline.
    Print(String),
    /// Compile or run-time errors. The machine halts afterwards.
    Errors(Arc<Vec<Error>>),
}

/// ## Virtual machine

#[derive(Debug)]
pub struct Runtime {
    listing: Listing,
    program: Program,
    pc: Address,
    stack: Stack<Val>,
    halted: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Listing::default())
    }
}

impl Runtime {
    pub fn new(listing: Listing) -> Runtime {
        let mut program = Program::new();
        program.compile(listing.lines());
        Runtime {
            listing,
            program,
            pc: 0,
            stack: Stack::new("STACK OVERFLOW"),
            halted: false,
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Start over from the first line.
    pub fn restart(&mut self) {
        self.pc = 0;
        self.stack.clear();
        self.halted = false;
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.halted {
            return Event::Stopped;
        }
        let errors = self.program.errors();
        if !errors.is_empty() {
            self.halted = true;
            return Event::Errors(errors);
        }
        for _ in 0..cycles {
            match self.execute_op() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    let error = match error.line_number() {
                        Some(_) => error,
                        None => error.in_line_number(self.program.line_number(self.pc - 1)),
                    };
                    debug!(pc = self.pc - 1, %error, "halted");
                    self.halted = true;
                    return Event::Errors(Arc::new(vec![error]));
                }
            }
        }
        Event::Running
    }

    fn execute_op(&mut self) -> Result<Option<Event>> {
        let op = match self.program.op(self.pc) {
            Some(op) => op.clone(),
            None => {
                self.pc += 1;
                return Err(error!(InternalError; "PROGRAM COUNTER OUT OF RANGE"));
            }
        };
        trace!(pc = self.pc, %op);
        self.pc += 1;
        match op {
            Opcode::Literal(val) => self.stack.push(val)?,
            Opcode::Println => {
                let val = self.stack.pop()?;
                return Ok(Some(Event::Print(format!("{}\n", val))));
            }
            Opcode::End => {
                debug!(pc = self.pc, "end of program");
                self.halted = true;
                return Ok(Some(Event::Stopped));
            }
            Opcode::Neg => self.unary(Operation::negate)?,
            Opcode::Not => self.unary(Operation::not)?,
            Opcode::Mul => self.binary(Operation::multiply)?,
            Opcode::Div => self.binary(Operation::divide)?,
            Opcode::Add => self.binary(Operation::sum)?,
            Opcode::Sub => self.binary(Operation::subtract)?,
            Opcode::And => self.binary(Operation::and)?,
            Opcode::Or => self.binary(Operation::or)?,
        }
        Ok(None)
    }

    fn unary(&mut self, f: fn(Val) -> Result<Val>) -> Result<()> {
        let val = self.stack.pop()?;
        self.stack.push(f(val)?)
    }

    fn binary(&mut self, f: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(f(lhs, rhs)?)
    }
}
