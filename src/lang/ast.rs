use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Print(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    String(Rc<str>),
    Integer(i32),
    Double(f64),
    Boolean(bool),
    Negation(Box<Expression>),
    Not(Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn add(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
        Expression::Add(Box::new(lhs.into()), Box::new(rhs.into()))
    }
    pub fn subtract(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
        Expression::Subtract(Box::new(lhs.into()), Box::new(rhs.into()))
    }
    pub fn multiply(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
        Expression::Multiply(Box::new(lhs.into()), Box::new(rhs.into()))
    }
    pub fn divide(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
        Expression::Divide(Box::new(lhs.into()), Box::new(rhs.into()))
    }
    pub fn and(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
        Expression::And(Box::new(lhs.into()), Box::new(rhs.into()))
    }
    pub fn or(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
        Expression::Or(Box::new(lhs.into()), Box::new(rhs.into()))
    }
    pub fn negate(expr: impl Into<Expression>) -> Expression {
        Expression::Negation(Box::new(expr.into()))
    }
    pub fn not(expr: impl Into<Expression>) -> Expression {
        Expression::Not(Box::new(expr.into()))
    }

    fn starts_with_minus(&self) -> bool {
        match self {
            Expression::Integer(n) => *n < 0,
            Expression::Double(n) => n.is_finite() && n.is_sign_negative(),
            Expression::Negation(_) => true,
            _ => false,
        }
    }

    /// Binding strength when rendered as source. Higher binds tighter.
    fn precedence(&self) -> u8 {
        use Expression::*;
        match self {
            Or(..) => 1,
            And(..) => 2,
            Add(..) | Subtract(..) => 3,
            Multiply(..) | Divide(..) => 4,
            Negation(_) | Not(_) => 5,
            String(_) | Integer(_) | Double(_) | Boolean(_) => 6,
        }
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Expression {
        Expression::String(s.into())
    }
}

impl From<i32> for Expression {
    fn from(n: i32) -> Expression {
        Expression::Integer(n)
    }
}

impl From<f64> for Expression {
    fn from(n: f64) -> Expression {
        Expression::Double(n)
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Expression {
        Expression::Boolean(b)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Statement::Print(expr) => write!(f, "println({})", expr),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            String(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '\\' => write!(f, "\\\\")?,
                        '"' => write!(f, "\\\"")?,
                        '$' => write!(f, "\\$")?,
                        '\n' => write!(f, "\\n")?,
                        '\r' => write!(f, "\\r")?,
                        '\t' => write!(f, "\\t")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            Integer(n) => write!(f, "{}", n),
            Double(n) if n.is_nan() => write!(f, "Double.NaN"),
            Double(n) if n.is_infinite() && *n > 0.0 => write!(f, "Double.POSITIVE_INFINITY"),
            Double(n) if n.is_infinite() => write!(f, "Double.NEGATIVE_INFINITY"),
            Double(n) => write!(f, "{:?}", n),
            Boolean(b) => write!(f, "{}", b),
            Negation(expr) => self.unary(f, "-", expr),
            Not(expr) => self.unary(f, "!", expr),
            Multiply(lhs, rhs) => self.binary(f, "*", lhs, rhs),
            Divide(lhs, rhs) => self.binary(f, "/", lhs, rhs),
            Add(lhs, rhs) => self.binary(f, "+", lhs, rhs),
            Subtract(lhs, rhs) => self.binary(f, "-", lhs, rhs),
            And(lhs, rhs) => self.binary(f, "&&", lhs, rhs),
            Or(lhs, rhs) => self.binary(f, "||", lhs, rhs),
        }
    }
}

impl Expression {
    fn unary(
        &self,
        f: &mut std::fmt::Formatter,
        op: &str,
        expr: &Expression,
    ) -> std::fmt::Result {
        if expr.precedence() < self.precedence() || (op == "-" && expr.starts_with_minus()) {
            write!(f, "{}({})", op, expr)
        } else {
            write!(f, "{}{}", op, expr)
        }
    }

    fn binary(
        &self,
        f: &mut std::fmt::Formatter,
        op: &str,
        lhs: &Expression,
        rhs: &Expression,
    ) -> std::fmt::Result {
        if lhs.precedence() < self.precedence() {
            write!(f, "({})", lhs)?;
        } else {
            write!(f, "{}", lhs)?;
        }
        write!(f, " {} ", op)?;
        // Left associative, so an equal right operand needs parens.
        if rhs.precedence() <= self.precedence() {
            write!(f, "({})", rhs)
        } else {
            write!(f, "{}", rhs)
        }
    }
}
