use super::binary::BinaryExpr;
use super::op::{MathOp, PredicateOp};
use super::{Expr, IntoExpr, Predicate};
use crate::config::RenderConfig;
use crate::error::EqlResult;
use crate::param::ParamList;

/// An arithmetic expression.
///
/// Chaining is left-associative and follows call order only:
/// `a.add(b).multi(c)` is `(a + b) * c`.
#[derive(Clone, Debug, Default)]
pub struct MathExpr(BinaryExpr<MathOp>);

/// Start an arithmetic chain from an expression or host value.
pub fn math(val: impl IntoExpr) -> MathExpr {
    match val.into_expr() {
        Expr::Math(m) => m,
        other => MathExpr::from_expr(other),
    }
}

impl MathExpr {
    pub(crate) fn from_expr(expr: Expr) -> Self {
        MathExpr(BinaryExpr::left_only(expr))
    }

    /// Combine with an arithmetic operator. `self` becomes the left operand.
    pub fn apply(self, op: MathOp, val: impl IntoExpr) -> MathExpr {
        MathExpr(BinaryExpr::join(Expr::Math(self), op, val.into_expr()))
    }

    /// `self + val`
    pub fn add(self, val: impl IntoExpr) -> MathExpr {
        self.apply(MathOp::Add, val)
    }

    /// `self - val`
    pub fn sub(self, val: impl IntoExpr) -> MathExpr {
        self.apply(MathOp::Sub, val)
    }

    /// `self * val`
    pub fn multi(self, val: impl IntoExpr) -> MathExpr {
        self.apply(MathOp::Multi, val)
    }

    /// `self / val`
    pub fn div(self, val: impl IntoExpr) -> MathExpr {
        self.apply(MathOp::Div, val)
    }

    /// `self % val`
    pub fn rem(self, val: impl IntoExpr) -> MathExpr {
        self.apply(MathOp::Mod, val)
    }

    /// `self = val`
    pub fn eq(self, val: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::Eq, val)
    }

    /// `self != val`
    pub fn ne(self, val: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::Ne, val)
    }

    /// `self < val`
    pub fn lt(self, val: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::Lt, val)
    }

    /// `self <= val`
    pub fn lte(self, val: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::Lte, val)
    }

    /// `self > val`
    pub fn gt(self, val: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::Gt, val)
    }

    /// `self >= val`
    pub fn gte(self, val: impl IntoExpr) -> Predicate {
        Predicate::new(self, PredicateOp::Gte, val)
    }

    /// The underlying binary node.
    pub fn binary(&self) -> &BinaryExpr<MathOp> {
        &self.0
    }

    pub(crate) fn binary_mut(&mut self) -> &mut BinaryExpr<MathOp> {
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
