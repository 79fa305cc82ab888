//! Convenience re-exports for building expressions.
//!
//! ```ignore
//! use eql::prelude::*;
//! ```

pub use crate::expr::{
    Expr, IntoExpr, MathExpr, Predicate, RawExpr, eq, gt, gte, like, lt, lte, math, ne, raw,
    value_of,
};
pub use crate::{EqlError, EqlResult, RenderConfig};
