use super::ast::*;
use super::LineNumber;
use std::rc::Rc;

/// ## A numbered statement with its narration

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    comment: Option<Rc<str>>,
    statement: Statement,
}

impl Line {
    pub fn new(number: LineNumber, comment: Option<&str>, statement: Statement) -> Line {
        Line {
            number,
            comment: comment.map(Rc::<str>::from),
            statement,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(comment) = &self.comment {
            for text in comment.lines() {
                writeln!(f, "// {}", text)?;
            }
        }
        write!(f, "{}", self.statement)
    }
}
