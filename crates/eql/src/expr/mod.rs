//! Expression algebra for SQL conditions and arithmetic.
//!
//! Trees are built from leaves ([`Value`], [`RawExpr`]) combined through
//! builder methods into binary nodes ([`MathExpr`], [`Predicate`]). Every
//! combinator returns a new node; nothing is mutated after construction, so
//! trees can be shared across threads and rendered any number of times.
//!
//! Rendering walks the tree left to right and produces the SQL fragment plus
//! the arguments contributed by raw fragments, in order.
//!
//! # Example
//!
//! ```ignore
//! use eql::raw;
//!
//! let total = raw("price").as_math().add(5).multi(2);
//! let (sql, params) = total.gt(raw("?").bind(100i64)).render()?;
//! assert_eq!(sql, "((price + 5) * 2) > ?");
//! assert_eq!(params.len(), 1);
//! ```

mod binary;
mod math;
mod op;
mod predicate;
mod raw;
mod value;

pub use binary::BinaryExpr;
use binary::Shape;
pub use math::{MathExpr, math};
pub use op::{MathOp, Operator, PredicateOp};
pub use predicate::{Predicate, eq, gt, gte, like, lt, lte, ne};
pub use raw::{RawExpr, raw};
pub use value::Value;

use crate::config::RenderConfig;
use crate::error::{EqlError, EqlResult};
use crate::param::ParamList;
use std::sync::Arc;

/// Any renderable node.
#[derive(Clone, Debug)]
pub enum Expr {
    /// A literal leaf.
    Value(Value),
    /// A verbatim fragment with arguments.
    Raw(RawExpr),
    /// An arithmetic node.
    Math(MathExpr),
    /// A boolean condition.
    Predicate(Predicate),
}

impl Expr {
    /// Build the SQL fragment, appending arguments to `params`.
    ///
    /// On error `params` may hold arguments from the part of the tree
    /// visited before the failure; use [`Expr::render`] to get all or nothing.
    pub fn build(&self, params: &mut ParamList) -> EqlResult<String> {
        RenderCtx::new(params, &RenderConfig::default()).expr(self)
    }

    /// Render with the default configuration.
    pub fn render(&self) -> EqlResult<(String, ParamList)> {
        self.render_with(&RenderConfig::default())
    }

    /// Render to the SQL fragment and its arguments.
    pub fn render_with(&self, config: &RenderConfig) -> EqlResult<(String, ParamList)> {
        render_root(config, |ctx| ctx.expr(self))
    }

    /// Hand the children of a binary node over to `stack`.
    fn take_children(&mut self, stack: &mut Vec<Arc<Expr>>) {
        match self {
            Expr::Value(_) | Expr::Raw(_) => {}
            Expr::Math(m) => m.binary_mut().take_children(stack),
            Expr::Predicate(p) => p.binary_mut().take_children(stack),
        }
    }
}

/// Conversion into an [`Expr`].
///
/// Nodes convert to themselves; host values become [`Expr::Value`] leaves.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

/// Coerce an expression or host value into an [`Expr`].
///
/// Existing nodes are returned unchanged, anything else is wrapped as a value.
pub fn value_of(val: impl IntoExpr) -> Expr {
    val.into_expr()
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for &Expr {
    fn into_expr(self) -> Expr {
        self.clone()
    }
}

impl IntoExpr for RawExpr {
    fn into_expr(self) -> Expr {
        Expr::Raw(self)
    }
}

impl IntoExpr for MathExpr {
    fn into_expr(self) -> Expr {
        Expr::Math(self)
    }
}

impl IntoExpr for Predicate {
    fn into_expr(self) -> Expr {
        Expr::Predicate(self)
    }
}

impl IntoExpr for Value {
    fn into_expr(self) -> Expr {
        Expr::Value(self)
    }
}

macro_rules! impl_into_expr_for_values {
    ($($t:ty),+) => {
        $(
            impl IntoExpr for $t {
                fn into_expr(self) -> Expr {
                    Expr::Value(Value::from(self))
                }
            }
        )+
    };
}

impl_into_expr_for_values!(i8, i16, i32, i64, u8, u16, u32, f32, f64, bool, &str, String);

impl<T: Into<Value>> IntoExpr for Option<T> {
    fn into_expr(self) -> Expr {
        Expr::Value(Value::from(self))
    }
}

/// Rendering state shared by one walk over a tree.
pub(crate) struct RenderCtx<'a> {
    params: &'a mut ParamList,
    max_depth: usize,
}

/// Pending work for the render walk.
enum Task<'e> {
    /// Render a node. `operand` is set when it sits directly under a complete binary node.
    Node {
        expr: &'e Expr,
        depth: usize,
        operand: bool,
    },
    Binary {
        shape: Shape<'e>,
        depth: usize,
        operand: bool,
    },
    Text(&'static str),
    Op(&'static str),
}

impl<'a> RenderCtx<'a> {
    fn new(params: &'a mut ParamList, config: &RenderConfig) -> Self {
        Self {
            params,
            max_depth: config.max_depth,
        }
    }

    pub(crate) fn expr(&mut self, expr: &Expr) -> EqlResult<String> {
        self.run(Task::Node {
            expr,
            depth: 1,
            operand: false,
        })
    }

    pub(crate) fn shape(&mut self, shape: Shape<'_>) -> EqlResult<String> {
        self.run(Task::Binary {
            shape,
            depth: 1,
            operand: false,
        })
    }

    /// Walk the tree with an explicit stack, writing left to right into one buffer.
    ///
    /// Tasks are pushed in reverse so the left operand, and the arguments of
    /// its raw fragments, always come first.
    fn run(&mut self, root: Task<'_>) -> EqlResult<String> {
        let mut out = String::new();
        let mut tasks = vec![root];

        while let Some(task) = tasks.pop() {
            match task {
                Task::Node {
                    expr,
                    depth,
                    operand,
                } => {
                    if depth > self.max_depth {
                        return Err(EqlError::DepthExceeded(self.max_depth));
                    }
                    match expr {
                        Expr::Value(v) => out.push_str(&v.to_sql_literal()?),
                        Expr::Raw(r) => {
                            let sql = r.build(self.params);
                            if operand && !r.is_atom() {
                                out.push('(');
                                out.push_str(&sql);
                                out.push(')');
                            } else {
                                out.push_str(&sql);
                            }
                        }
                        Expr::Math(m) => tasks.push(Task::Binary {
                            shape: m.binary().shape(),
                            depth,
                            operand,
                        }),
                        Expr::Predicate(p) => tasks.push(Task::Binary {
                            shape: p.binary().shape(),
                            depth,
                            operand,
                        }),
                    }
                }
                Task::Binary {
                    shape,
                    depth,
                    operand,
                } => {
                    if depth > self.max_depth {
                        return Err(EqlError::DepthExceeded(self.max_depth));
                    }
                    match shape {
                        Shape::Unset => {}
                        // A wrapper is transparent: its operand decides on parentheses.
                        Shape::LeftOnly(left) => tasks.push(Task::Node {
                            expr: left,
                            depth: depth + 1,
                            operand,
                        }),
                        Shape::Complete(left, token, right) => {
                            if operand {
                                tasks.push(Task::Text(")"));
                            }
                            tasks.push(Task::Node {
                                expr: right,
                                depth: depth + 1,
                                operand: true,
                            });
                            tasks.push(Task::Op(token));
                            tasks.push(Task::Node {
                                expr: left,
                                depth: depth + 1,
                                operand: true,
                            });
                            if operand {
                                tasks.push(Task::Text("("));
                            }
                        }
                    }
                }
                Task::Text(text) => out.push_str(text),
                Task::Op(token) => {
                    out.push(' ');
                    out.push_str(token);
                    out.push(' ');
                }
            }
        }

        Ok(out)
    }
}

/// Run a top-level render, returning nothing on failure.
pub(crate) fn render_root(
    config: &RenderConfig,
    f: impl FnOnce(&mut RenderCtx<'_>) -> EqlResult<String>,
) -> EqlResult<(String, ParamList)> {
    let mut params = ParamList::new();
    let result = f(&mut RenderCtx::new(&mut params, config));

    #[cfg(feature = "tracing")]
    log_render(&result, &params);

    result.map(|sql| (sql, params))
}

#[cfg(feature = "tracing")]
fn log_render(result: &EqlResult<String>, params: &ParamList) {
    match result {
        Ok(sql) => tracing::trace!(
            target: "eql.render",
            sql = %sql,
            param_count = params.len(),
            "rendered expression"
        ),
        Err(err) => tracing::debug!(target: "eql.render", error = %err, "render failed"),
    }
}
