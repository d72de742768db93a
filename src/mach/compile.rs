use super::{Opcode, Program, Stack, Val};
use crate::lang::ast;
use crate::lang::Error;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

pub fn compile(program: &mut Program, statement: &ast::Statement) {
    let mut comp = Compiler::new();
    match comp.statement(statement) {
        Ok(()) => {
            for op in comp.prog.drain(..) {
                program.push(op);
            }
        }
        Err(e) => program.error(e),
    }
}

struct Compiler {
    prog: Stack<Opcode>,
}

impl Compiler {
    fn new() -> Compiler {
        Compiler {
            prog: Stack::new("COMPILED EXPRESSION TOO LARGE"),
        }
    }

    fn statement(&mut self, statement: &ast::Statement) -> Result<()> {
        use ast::Statement;
        match statement {
            Statement::Print(expr) => self.r#println(expr),
        }
    }

    fn r#println(&mut self, expr: &ast::Expression) -> Result<()> {
        self.expression(expr)?;
        trace!(%expr, "println");
        self.prog.push(Opcode::Println)
    }

    fn expression(&mut self, expr: &ast::Expression) -> Result<()> {
        fn binary_expression(
            this: &mut Compiler,
            lhs: &ast::Expression,
            rhs: &ast::Expression,
            op: Opcode,
        ) -> Result<()> {
            this.expression(lhs)?;
            this.expression(rhs)?;
            this.prog.push(op)
        }
        fn unary_expression(
            this: &mut Compiler,
            expr: &ast::Expression,
            op: Opcode,
        ) -> Result<()> {
            this.expression(expr)?;
            this.prog.push(op)
        }
        use ast::Expression;
        match expr {
            Expression::String(val) => self.prog.push(Opcode::Literal(Val::String(val.clone()))),
            Expression::Integer(val) => self.prog.push(Opcode::Literal(Val::Integer(*val))),
            Expression::Double(val) => self.prog.push(Opcode::Literal(Val::Double(*val))),
            Expression::Boolean(val) => self.prog.push(Opcode::Literal(Val::Boolean(*val))),
            Expression::Negation(expr) => unary_expression(self, expr, Opcode::Neg),
            Expression::Not(expr) => unary_expression(self, expr, Opcode::Not),
            Expression::Multiply(lhs, rhs) => binary_expression(self, lhs, rhs, Opcode::Mul),
            Expression::Divide(lhs, rhs) => binary_expression(self, lhs, rhs, Opcode::Div),
            Expression::Add(lhs, rhs) => binary_expression(self, lhs, rhs, Opcode::Add),
            Expression::Subtract(lhs, rhs) => binary_expression(self, lhs, rhs, Opcode::Sub),
            Expression::And(lhs, rhs) => binary_expression(self, lhs, rhs, Opcode::And),
            Expression::Or(lhs, rhs) => binary_expression(self, lhs, rhs, Opcode::Or),
        }
    }
}
