//! Unit tests for the read-only guard and HTML rendering

use super::guard::ensure_read_only;
use super::render;
use crate::error::CourtsideError;
use crate::storage::{ColumnInfo, TableData};

#[test]
fn test_guard_accepts_select_shapes() {
    assert!(ensure_read_only("SELECT * FROM competitions").is_ok());
    assert!(ensure_read_only("  select 1").is_ok());
    assert!(ensure_read_only("WITH c AS (SELECT 1) SELECT * FROM c").is_ok());
    assert!(ensure_read_only("EXPLAIN SELECT * FROM categories").is_ok());
    assert!(ensure_read_only("SELECT 1;").is_ok());
    assert!(ensure_read_only("-- leading comment\nSELECT 1").is_ok());
}

#[test]
fn test_guard_rejects_writes() {
    for sql in [
        "DELETE FROM competitions",
        "drop table categories",
        "INSERT INTO categories VALUES ('x', 'y')",
        "UPDATE competitions SET gender = 'men'",
        "TRUNCATE competitions",
    ] {
        let err = ensure_read_only(sql).unwrap_err();
        assert!(
            matches!(err, CourtsideError::ForbiddenStatement { .. }),
            "expected rejection for {sql:?}"
        );
    }
}

#[test]
fn test_guard_rejects_data_modifying_cte() {
    // Postgres executes DML inside a CTE even when the statement starts WITH.
    let err = ensure_read_only(
        "WITH gone AS (DELETE FROM competitions RETURNING *) SELECT * FROM gone",
    )
    .unwrap_err();
    assert!(matches!(err, CourtsideError::ForbiddenStatement { .. }));

    assert!(ensure_read_only(
        "WITH added AS (INSERT INTO categories VALUES ('x', 'y') RETURNING *) SELECT 1"
    )
    .is_err());
    assert!(ensure_read_only("SELECT * FROM t WHERE id IN (WITH u AS (SELECT 1) SELECT * FROM u)").is_ok());
    assert!(ensure_read_only("WITH c AS (SELECT 1) SELECT * FROM c").is_ok());
}

#[test]
fn test_guard_allows_semicolons_inside_string_literals() {
    assert!(ensure_read_only("SELECT ';'").is_ok());
    assert!(ensure_read_only("SELECT 'a;b' FROM competitions").is_ok());
    assert!(ensure_read_only("SELECT 'it''s; quoted'").is_ok());
    assert!(ensure_read_only("SELECT \";\" FROM competitions").is_ok());
}

#[test]
fn test_guard_allows_identifiers_containing_keywords() {
    assert!(ensure_read_only("EXPLAIN SELECT * FROM analyzed_totals").is_ok());
    assert!(ensure_read_only("SELECT created_at, updated_rank FROM competitor_rankings").is_ok());
    assert!(ensure_read_only("SELECT 'DELETE FROM competitions'").is_ok());
    assert!(ensure_read_only("SELECT \"delete\" FROM audit_log").is_ok());
}

#[test]
fn test_guard_rejects_explain_analyze() {
    assert!(ensure_read_only("EXPLAIN ANALYZE DELETE FROM competitions").is_err());
    assert!(ensure_read_only("explain analyze select 1").is_err());
    assert!(ensure_read_only("EXPLAIN SELECT 1").is_ok());
}

#[test]
fn test_guard_rejects_multiple_statements() {
    let err = ensure_read_only("SELECT 1; DROP TABLE categories").unwrap_err();
    assert!(err.to_string().contains("multiple statements"));
}

#[test]
fn test_guard_rejects_empty_input() {
    assert!(ensure_read_only("").is_err());
    assert!(ensure_read_only("   ").is_err());
    assert!(ensure_read_only("-- only a comment").is_err());
}

#[test]
fn test_guard_rejects_select_hidden_behind_write() {
    // The keyword check looks at the first statement, not substrings.
    assert!(ensure_read_only("DELETE FROM t WHERE id IN (SELECT id FROM u)").is_err());
}

#[test]
fn test_escape_html() {
    assert_eq!(
        render::escape("<script>alert('x')</script>"),
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
    );
    assert_eq!(render::escape("a & b"), "a &amp; b");
    assert_eq!(render::escape("plain"), "plain");
}

#[test]
fn test_data_table_escapes_cells() {
    let data = TableData {
        columns: vec!["name".to_string()],
        rows: vec![vec!["<b>ATP</b>".to_string()]],
    };

    let html = render::data_table(&data);
    assert!(html.contains("<th>name</th>"));
    assert!(html.contains("&lt;b&gt;ATP&lt;/b&gt;"));
    assert!(!html.contains("<b>ATP</b>"));
}

#[test]
fn test_data_table_empty_result() {
    assert_eq!(render::data_table(&TableData::default()), "<p>(no rows)</p>");
}

#[test]
fn test_schema_table_lists_columns() {
    let columns = vec![
        ColumnInfo {
            column_name: "competition_id".to_string(),
            data_type: "character varying".to_string(),
        },
        ColumnInfo {
            column_name: "gender".to_string(),
            data_type: "character varying".to_string(),
        },
    ];

    let html = render::schema_table(&columns);
    assert!(html.contains("<td>competition_id</td>"));
    assert!(html.contains("<td>character varying</td>"));
}

#[test]
fn test_index_lists_fixed_tables() {
    let html = render::index();
    for table in crate::storage::DASHBOARD_TABLES {
        assert!(html.contains(&format!("/tables/{table}")), "missing {table}");
    }
    assert!(html.contains("action=\"/query\""));
}
