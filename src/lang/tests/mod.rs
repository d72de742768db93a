use super::ast::*;
use super::Line;
