//! Operator tags for binary nodes.
//!
//! Arithmetic and predicate operators are separate enums so that a
//! [`MathExpr`](super::MathExpr) can only ever hold a [`MathOp`] and a
//! [`Predicate`](super::Predicate) only a [`PredicateOp`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// An operator tag that renders to a fixed SQL token.
pub trait Operator: Copy + fmt::Debug + Send + Sync + 'static {
    /// The SQL token for this operator.
    fn token(&self) -> &'static str;
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MathOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Multi,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl Operator for MathOp {
    fn token(&self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Multi => "*",
            MathOp::Div => "/",
            MathOp::Mod => "%",
        }
    }
}

/// Comparison and logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `LIKE`
    Like,
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl Operator for PredicateOp {
    fn token(&self) -> &'static str {
        match self {
            PredicateOp::Eq => "=",
            PredicateOp::Ne => "!=",
            PredicateOp::Lt => "<",
            PredicateOp::Lte => "<=",
            PredicateOp::Gt => ">",
            PredicateOp::Gte => ">=",
            PredicateOp::Like => "LIKE",
            PredicateOp::And => "AND",
            PredicateOp::Or => "OR",
        }
    }
}

impl fmt::Display for MathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for PredicateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
