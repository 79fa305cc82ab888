//! Rendering behavior through the public API.

use eql::prelude::*;
use eql::{ParamList, PredicateOp, Value};
use std::sync::Arc;
use std::thread;

fn shown(params: &ParamList) -> Vec<String> {
    params.iter().map(|p| format!("{p:?}")).collect()
}

fn build_filter(i: i64) -> Predicate {
    raw("price")
        .as_math()
        .multi(raw("?").bind(i))
        .add(i)
        .gt(raw("?").bind(i * 10))
        .and(eq(raw("status"), "active"))
        .or(raw("owner_id = ?").bind(i).as_predicate())
}

#[test]
fn raw_as_predicate_matches_raw() {
    let (sql, params) = raw("x = ?").bind(1i32).as_predicate().render().unwrap();
    assert_eq!(sql, "x = ?");
    assert_eq!(shown(&params), vec!["1"]);
}

#[test]
fn raw_add_literal_has_no_args() {
    let (sql, params) = math(raw("age")).add(5).render().unwrap();
    assert_eq!(sql, "age + 5");
    assert!(params.is_empty());
}

#[test]
fn add_then_multi_groups_left() {
    let (sql, _) = math(raw("a")).add(raw("b")).multi(raw("c")).render().unwrap();
    assert_eq!(sql, "(a + b) * c");
    assert_ne!(sql, "a + (b * c)");
}

#[test]
fn generic_binary_node_renders_empty() {
    let node = eql::BinaryExpr::<PredicateOp>::new();
    let (sql, params) = node.render().unwrap();
    assert_eq!(sql, "");
    assert!(params.is_empty());
}

#[test]
fn full_filter_renders_in_tree_order() {
    let (sql, params) = build_filter(3).render().unwrap();
    assert_eq!(
        sql,
        "((((price * ?) + 3) > ?) AND (status = 'active')) OR (owner_id = ?)"
    );
    assert_eq!(shown(&params), vec!["3", "30", "3"]);
}

#[test]
fn raw_operands_keep_their_own_grouping() {
    let (sql, _) = raw("x - 1").as_math().multi(2).render().unwrap();
    assert_eq!(sql, "(x - 1) * 2");

    let (sql, _) = eq(raw("flag"), true)
        .and(raw("a = 1 OR b = 2").as_predicate())
        .render()
        .unwrap();
    assert_eq!(sql, "(flag = TRUE) AND (a = 1 OR b = 2)");
}

#[test]
fn long_or_list_renders_and_drops() {
    let mut p = eq(raw("id"), 1);
    for i in 2..=300i64 {
        p = p.or(eq(raw("id"), i));
    }
    let (sql, _) = p.render().unwrap();
    assert_eq!(sql.matches(" OR ").count(), 299);
    drop(p);
}

#[test]
fn optional_values_coerce_to_null() {
    let (sql, _) = eq(raw("deleted_at"), None::<String>).render().unwrap();
    assert_eq!(sql, "deleted_at = NULL");
    assert!(matches!(value_of(Some(2i32)), Expr::Value(Value::Int(2))));
}

#[test]
fn concurrent_construction_matches_sequential() {
    let expected: Vec<(String, Vec<String>)> = (0..64)
        .map(|i| {
            let (sql, params) = build_filter(i).render().unwrap();
            (sql, shown(&params))
        })
        .collect();

    let results: Vec<Vec<(String, Vec<String>)>> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..64)
                        .map(|i| {
                            let (sql, params) = build_filter(i).render().unwrap();
                            (sql, shown(&params))
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for got in results {
        assert_eq!(got, expected);
    }
}

#[test]
fn shared_tree_renders_identically_across_threads() {
    let tree = Arc::new(build_filter(7));
    let expected = tree.render().unwrap().0;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                (0..100)
                    .map(|_| tree.render().unwrap().0)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        for sql in h.join().unwrap() {
            assert_eq!(sql, expected);
        }
    }
}

#[test]
fn errors_surface_through_render() {
    let err = eq(raw("ratio"), f64::INFINITY).render().unwrap_err();
    assert!(matches!(err, EqlError::UnsupportedValue(_)));
    assert!(err.to_string().starts_with("Unsupported value"));

    let config = RenderConfig::new().with_max_depth(2);
    let err = build_filter(1).render_with(&config).unwrap_err();
    assert_eq!(err.to_string(), "Expression nesting exceeds max depth 2");
}
