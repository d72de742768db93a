use crate::error;
use crate::lang::ast::{Expression, Statement};
use crate::lang::{Error, Line};
use std::convert::TryFrom;
use std::rc::Rc;

/// ## An annotated example program
///
/// Lines are numbered from 1 in the order they are pushed.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    title: Option<Rc<str>>,
    source: Vec<Line>,
}

impl Listing {
    pub fn new(title: &str) -> Listing {
        Listing {
            title: Some(title.into()),
            source: vec![],
        }
    }

    /// Strings, integers, floats and booleans.
    pub fn values() -> Listing {
        let lines = vec![
            (
                Some("Strings, which can be added together with `+`."),
                Expression::add("kot", "lin"),
            ),
            (Some("Integers and floats."), Expression::add(1, 1)),
            (None, Expression::divide(7.0, 3.0)),
            (
                Some("Booleans, with boolean operators as you’d expect."),
                Expression::and(true, false),
            ),
            (None, Expression::or(true, false)),
            (None, Expression::not(true)),
        ];
        Listing {
            title: Some(
                "Kotlin has various types including strings, integers, floats, \
                 booleans, etc. Here are a few basic examples."
                    .into(),
            ),
            source: lines
                .into_iter()
                .zip(1..)
                .map(|((comment, expr), number)| {
                    Line::new(Some(number), comment, Statement::Print(expr))
                })
                .collect(),
        }
    }

    /// Append a line numbered one past the last.
    pub fn push(&mut self, comment: Option<&str>, statement: Statement) -> Result<(), Error> {
        let number = match u16::try_from(self.source.len() + 1) {
            Ok(number) => number,
            Err(_) => return Err(error!(OutOfMemory; "TOO MANY LINES")),
        };
        self.source.push(Line::new(Some(number), comment, statement));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.source.iter()
    }

    pub fn line(&self, number: u16) -> Option<&Line> {
        self.source.iter().find(|line| line.number() == Some(number))
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "// {}", title)?;
            writeln!(f)?;
        }
        writeln!(f, "fun main() {{")?;
        for (index, line) in self.source.iter().enumerate() {
            if index > 0 && line.comment().is_some() {
                writeln!(f)?;
            }
            for text in line.to_string().lines() {
                writeln!(f, "    {}", text)?;
            }
        }
        writeln!(f, "}}")
    }
}
