//! Positional arguments carried by raw fragments.

use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly argument wrapper using Arc.
///
/// Expression trees are shared freely, so arguments are reference counted
/// rather than copied whenever a node is cloned.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ToSql requires Debug, so the wrapped value can be shown as-is.
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// An ordered collection of arguments, in the order their fragments render.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a parameter and return its 1-based index.
    pub fn push<T: ToSql + Send + Sync + 'static>(&mut self, value: T) -> usize {
        self.push_param(Param::new(value))
    }

    /// Add a pre-wrapped Param and return its 1-based index.
    pub fn push_param(&mut self, param: Param) -> usize {
        self.params.push(param);
        self.params.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in order.
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    /// Get all parameters as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }

    /// Extend this list with parameters from an iterator.
    pub fn extend(&mut self, params: impl IntoIterator<Item = Param>) {
        self.params.extend(params);
    }
}

impl From<Vec<Param>> for ParamList {
    fn from(params: Vec<Param>) -> Self {
        Self { params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_one_based_index() {
        let mut params = ParamList::new();
        assert_eq!(params.push(1i32), 1);
        assert_eq!(params.push("x"), 2);
        assert_eq!(params.len(), 2);
        assert_eq!(params.as_refs().len(), 2);
    }

    #[test]
    fn debug_shows_wrapped_value() {
        let p = Param::new(42i64);
        assert_eq!(format!("{p:?}"), "42");

        let mut params = ParamList::new();
        params.push("alice");
        let shown: Vec<String> = params.iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(shown, vec!["\"alice\""]);
    }

    #[test]
    fn extend_keeps_order() {
        let mut a = ParamList::new();
        a.push(1i32);
        let mut b = ParamList::new();
        b.push(2i32);
        b.push(3i32);

        a.extend(b.iter().cloned());
        let shown: Vec<String> = a.iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(shown, vec!["1", "2", "3"]);
    }
}
