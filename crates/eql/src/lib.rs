//! # eql
//!
//! A typed expression builder for SQL conditions and arithmetic.
//!
//! Instead of concatenating query strings, callers build an immutable tree of
//! nodes and render it into a SQL fragment plus its positional arguments.
//!
//! ## Features
//!
//! - **Closed node set**: [`Expr`] is one of a literal [`Value`], a verbatim
//!   [`RawExpr`], an arithmetic [`MathExpr`] or a boolean [`Predicate`]
//! - **Pure builders**: every combinator returns a new node; trees are `Send + Sync`
//!   and may be reused or rendered concurrently
//! - **Explicit shape**: nested binary nodes are parenthesized, so the rendered
//!   SQL always mirrors call order
//! - **Escape hatch**: [`raw`] fragments pass through unchecked, and
//!   [`RawExpr::as_predicate`] opts in to using one as a condition
//!
//! ## Example
//!
//! ```ignore
//! use eql::{eq, raw};
//!
//! let cond = raw("price")
//!     .as_math()
//!     .multi(raw("?").bind(2i32))
//!     .gt(100)
//!     .and(eq(raw("status"), "active"));
//!
//! let (sql, params) = cond.render()?;
//! assert_eq!(sql, "((price * ?) > 100) AND (status = 'active')");
//! assert_eq!(params.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod expr;
pub mod param;
pub mod prelude;

pub use config::RenderConfig;
pub use error::{EqlError, EqlResult};
pub use expr::{
    BinaryExpr, Expr, IntoExpr, MathExpr, MathOp, Operator, Predicate, PredicateOp, RawExpr,
    Value, eq, gt, gte, like, lt, lte, math, ne, raw, value_of,
};
pub use param::{Param, ParamList};
