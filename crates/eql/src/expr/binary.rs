use super::op::Operator;
use super::{Expr, render_root};
use crate::config::RenderConfig;
use crate::error::EqlResult;
use crate::param::ParamList;
use std::sync::Arc;

/// Shared storage for two operands joined by an operator.
///
/// [`MathExpr`](super::MathExpr) and [`Predicate`](super::Predicate) wrap this
/// with their own operator type. Three shapes exist:
///
/// - complete: `left op right`
/// - left only: renders as the left operand (e.g. [`RawExpr::as_predicate`](super::RawExpr::as_predicate))
/// - unset ([`BinaryExpr::new`]): renders as an empty fragment, without error
#[derive(Clone, Debug)]
pub struct BinaryExpr<O> {
    left: Option<Arc<Expr>>,
    op: Option<O>,
    right: Option<Arc<Expr>>,
}

/// Borrowed view of a binary node, with the operator already turned into its token.
#[derive(Clone, Copy)]
pub(crate) enum Shape<'e> {
    Unset,
    LeftOnly(&'e Expr),
    Complete(&'e Expr, &'static str, &'e Expr),
}

impl<O> Default for BinaryExpr<O> {
    fn default() -> Self {
        Self {
            left: None,
            op: None,
            right: None,
        }
    }
}

impl<O> BinaryExpr<O> {
    /// Move both children onto `stack`, leaving this node without operands.
    pub(crate) fn take_children(&mut self, stack: &mut Vec<Arc<Expr>>) {
        stack.extend(self.left.take());
        stack.extend(self.right.take());
    }
}

impl<O> Drop for BinaryExpr<O> {
    // Long chains nest one node per call, so children are released from an
    // explicit stack instead of through recursive drops.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(child) = stack.pop() {
            // Shared children are still owned elsewhere; only the last owner unwinds them.
            if let Ok(mut expr) = Arc::try_unwrap(child) {
                expr.take_children(&mut stack);
            }
        }
    }
}

impl<O: Operator> BinaryExpr<O> {
    /// Create an unset node.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn left_only(left: Expr) -> Self {
        Self {
            left: Some(Arc::new(left)),
            op: None,
            right: None,
        }
    }

    pub(crate) fn join(left: Expr, op: O, right: Expr) -> Self {
        Self {
            left: Some(Arc::new(left)),
            op: Some(op),
            right: Some(Arc::new(right)),
        }
    }

    /// The left operand, if set.
    pub fn left(&self) -> Option<&Expr> {
        self.left.as_deref()
    }

    /// The operator, if set.
    pub fn op(&self) -> Option<O> {
        self.op
    }

    /// The right operand, if set.
    pub fn right(&self) -> Option<&Expr> {
        self.right.as_deref()
    }

    /// True when neither operand nor operator is set.
    pub fn is_unset(&self) -> bool {
        self.left.is_none() && self.op.is_none() && self.right.is_none()
    }

    pub(crate) fn shape(&self) -> Shape<'_> {
        match (&self.left, self.op, &self.right) {
            (Some(left), Some(op), Some(right)) => Shape::Complete(left, op.token(), right),
            (Some(left), None, None) => Shape::LeftOnly(left),
            // Constructors only build the three shapes; anything else is unset.
            _ => Shape::Unset,
        }
    }

    /// Render this node on its own.
    pub fn render(&self) -> EqlResult<(String, ParamList)> {
        self.render_with(&RenderConfig::default())
    }

    /// Render this node on its own with the given configuration.
    pub fn render_with(&self, config: &RenderConfig) -> EqlResult<(String, ParamList)> {
        render_root(config, |ctx| ctx.shape(self.shape()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{MathOp, PredicateOp, Value};

    #[test]
    fn unset_renders_empty() {
        let node = BinaryExpr::<MathOp>::new();
        assert!(node.is_unset());
        let (sql, params) = node.render().unwrap();
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn left_only_renders_left() {
        let node = BinaryExpr::<PredicateOp>::left_only(Expr::Value(Value::Bool(true)));
        assert_eq!(node.render().unwrap().0, "TRUE");
    }

    #[test]
    fn complete_renders_token_between() {
        let node = BinaryExpr::join(
            Expr::Value(Value::Int(1)),
            MathOp::Sub,
            Expr::Value(Value::Int(2)),
        );
        assert_eq!(node.op(), Some(MathOp::Sub));
        assert_eq!(node.render().unwrap().0, "1 - 2");
    }

    #[test]
    fn right_failure_discards_left() {
        let node = BinaryExpr::join(
            Expr::Raw(crate::raw("a").bind(1i32)),
            PredicateOp::Eq,
            Expr::Value(Value::Float(f64::NAN)),
        );
        let err = node.render().unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn dropping_long_chain_does_not_overflow() {
        let mut m = crate::expr::math(crate::raw("n"));
        for i in 0..100_000i64 {
            m = m.add(i);
        }
        drop(m);
    }

    #[test]
    fn dropping_keeps_shared_children_alive() {
        let shared = crate::expr::math(crate::raw("x")).add(1);
        let a = shared.clone().multi(2);
        let b = shared.clone().sub(3);
        drop(a);
        assert_eq!(b.render().unwrap().0, "(x + 1) - 3");
        assert_eq!(shared.render().unwrap().0, "x + 1");
    }
}
