use super::binary::BinaryExpr;
use super::op::PredicateOp;
use super::{Expr, IntoExpr};
use crate::config::RenderConfig;
use crate::error::EqlResult;
use crate::param::ParamList;

/// A boolean condition.
///
/// Operands are not type-checked: anything that converts into an [`Expr`]
/// is accepted, and it is up to the caller to only combine conditions with
/// `AND`/`OR`.
///
/// # Example
/// ```ignore
/// use eql::{eq, raw};
///
/// let p = eq(raw("status"), "active").and(raw("age > ?").bind(18i32).as_predicate());
/// // (status = 'active') AND (age > ?)
/// ```
#[derive(Clone, Debug, Default)]
pub struct Predicate(BinaryExpr<PredicateOp>);

impl Predicate {
    /// Join two expressions with a predicate operator.
    pub fn new(left: impl IntoExpr, op: PredicateOp, right: impl IntoExpr) -> Self {
        Predicate(BinaryExpr::join(left.into_expr(), op, right.into_expr()))
    }

    pub(crate) fn from_expr(expr: Expr) -> Self {
        Predicate(BinaryExpr::left_only(expr))
    }

    /// `self AND other`
    pub fn and(self, other: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::And, other)
    }

    /// `self OR other`
    pub fn or(self, other: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::Or, other)
    }

    /// The operator, or `None` for predicates built from a raw fragment.
    pub fn op(&self) -> Option<PredicateOp> {
        self.0.op()
    }

    /// The underlying binary node.
    pub fn binary(&self) -> &BinaryExpr<PredicateOp> {
        &self.0
    }

    pub(crate) fn binary_mut(&mut self) -> &mut BinaryExpr<PredicateOp> {
        &mut self.0
    }

    /// Render to the SQL fragment and its arguments.
    pub fn render(&self) -> EqlResult<(String, ParamList)> {
        self.0.render()
    }

    /// Render with the given configuration.
    pub fn render_with(&self, config: &RenderConfig) -> EqlResult<(String, ParamList)> {
        self.0.render_with(config)
    }
}

/// `left = right`
///
/// Comparing with `None` renders `= NULL`, which never matches; use
/// `raw("col IS NULL").as_predicate()` for null checks.
pub fn eq(left: impl IntoExpr, right: impl IntoExpr) -> Predicate {
    Predicate::new(left, PredicateOp::Eq, right)
}

/// `left != right`
pub fn ne(left: impl IntoExpr, right: impl IntoExpr) -> Predicate {
    Predicate::new(left, PredicateOp::Ne, right)
}

/// `left < right`
pub fn lt(left: impl IntoExpr, right: impl IntoExpr) -> Predicate {
    Predicate::new(left, PredicateOp::Lt, right)
}

/// `left <= right`
pub fn lte(left: impl IntoExpr, right: impl IntoExpr) -> Predicate {
    Predicate::new(left, PredicateOp::Lte, right)
}

/// `left > right`
pub fn gt(left: impl IntoExpr, right: impl IntoExpr) -> Predicate {
    Predicate::new(left, PredicateOp::Gt, right)
}

/// `left >= right`
pub fn gte(left: impl IntoExpr, right: impl IntoExpr) -> Predicate {
    Predicate::new(left, PredicateOp::Gte, right)
}

/// `left LIKE right`
pub fn like(left: impl IntoExpr, right: impl IntoExpr) -> Predicate {
    Predicate::new(left, PredicateOp::Like, right)
}
