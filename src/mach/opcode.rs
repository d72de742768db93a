use super::Val;

/// ## Virtual machine instruction set
///
/// The machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `println(1 + 2 * 3)` compiles to
/// `[Literal(1), Literal(2), Literal(3), Mul, Add, Println]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, Clone, PartialEq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push literal value on to the stack.
    Literal(Val),

    // *** Statements
    /// Pop the stack and emit its rendering as one line of output.
    Println,
    /// Stop the machine.
    End,

    // *** Expression operations
    Neg,
    Not,
    Mul,
    Div,
    Add,
    Sub,
    And,
    Or,
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Literal(val) => write!(f, "LITERAL({:?})", val),
            Println => write!(f, "PRINTLN"),
            End => write!(f, "END"),
            Neg => write!(f, "NEG"),
            Not => write!(f, "NOT"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
        }
    }
}
