//! `tracing` events emitted while building statements.

use crate::dialect::Dialect;
use crate::error::BuildError;

/// The kind of statement being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
}

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

pub(crate) fn built(
    kind: StatementKind,
    dialect: Dialect,
    sql: &str,
    arg_count: usize,
    max_sql_length: Option<usize>,
) {
    if !tracing::enabled!(target: "sqlbuilder.build", tracing::Level::DEBUG) {
        return;
    }
    let sql = match max_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    };
    tracing::debug!(
        target: "sqlbuilder.build",
        kind = ?kind,
        %dialect,
        args = arg_count,
        sql = %sql,
        "statement built"
    );
}

pub(crate) fn rejected(kind: StatementKind, err: &BuildError) {
    tracing::warn!(target: "sqlbuilder.build", kind = ?kind, error = %err, "statement rejected");
}
