//! Verbatim SQL fragments.

use super::{Expr, MathExpr, Predicate};
use crate::param::{Param, ParamList};
use tokio_postgres::types::ToSql;

/// A SQL fragment used as-is, with its positional arguments.
///
/// The fragment is never parsed or validated; placeholders inside it are the
/// caller's business. Renders to the fragment and its arguments unchanged.
#[derive(Clone, Debug)]
pub struct RawExpr {
    sql: String,
    params: Vec<Param>,
}

/// Create a raw fragment with no arguments.
///
/// # Example
/// ```ignore
/// let p = eql::raw("age > ?").bind(18i32).as_predicate();
/// ```
pub fn raw(sql: impl Into<String>) -> RawExpr {
    RawExpr::new(sql)
}

impl RawExpr {
    /// Create a raw fragment with no arguments.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Create a raw fragment with pre-wrapped arguments.
    pub fn with_params(sql: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Append a positional argument.
    pub fn bind<T: ToSql + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.params.push(Param::new(value));
        self
    }

    /// The fragment text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The positional arguments, in order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Use this fragment as a boolean condition.
    ///
    /// No validation is performed: the fragment is trusted to be a valid
    /// condition. The predicate renders exactly like the fragment; when it is
    /// nested under `AND`/`OR` it is wrapped in parentheses so that operators
    /// inside the fragment cannot regroup.
    pub fn as_predicate(self) -> Predicate {
        Predicate::from_expr(Expr::Raw(self))
    }

    /// Use this fragment as the start of an arithmetic chain.
    pub fn as_math(self) -> MathExpr {
        MathExpr::from_expr(Expr::Raw(self))
    }

    /// Whether the fragment is a single bare token (identifier, number or
    /// placeholder) that can sit next to an operator without parentheses.
    pub(crate) fn is_atom(&self) -> bool {
        self.sql
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$' | '?'))
    }

    pub(crate) fn build(&self, params: &mut ParamList) -> String {
        params.extend(self.params.iter().cloned());
        self.sql.clone()
    }

    /// Render this fragment on its own.
    pub fn render(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let sql = self.build(&mut params);
        (sql, params)
    }
}

/// Build a [`RawExpr`] from a fragment and any number of arguments.
///
/// # Example
/// ```ignore
/// let expr = eql::raw!("a = ? OR b = ?", 1i32, "x");
/// ```
#[macro_export]
macro_rules! raw {
    ($sql:expr $(, $arg:expr)* $(,)?) => {
        $crate::RawExpr::with_params($sql, vec![$($crate::Param::new($arg)),*])
    };
}
