//! The mutable statement builder.
//!
//! A [`Query`] owns the SQL text, the argument list, the target tables and the
//! placeholder dialect. Text and arguments are private: placeholders can only be
//! written through [`Query::add_arg`] (or the positional path of [`Query::raw`]),
//! which pushes the bound value in the same step, so the argument count always
//! matches the placeholders in the text.
//!
//! # Example
//!
//! ```
//! use sqlbuilder::{Dialect, InsertValues, Query};
//!
//! # fn main() -> sqlbuilder::BuildResult<()> {
//! let mut q = Query::new(["users"], Dialect::Positional);
//! let stmt = q.insert(&["name", "age"], InsertValues::flat(["alice", "30"]))?;
//! assert_eq!(stmt.as_str(), "INSERT INTO users(name,age)VALUES($1,$2)");
//! # Ok(())
//! # }
//! ```

mod delete;
mod insert;
mod raw;
mod select;
mod update;

#[cfg(test)]
mod tests;

pub use insert::InsertValues;
pub use update::UpdateData;

use crate::config::QueryConfig;
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::log::{self, StatementKind};
use crate::statement::Statement;

/// A reusable builder for parametrized SQL statements.
///
/// `V` is the bind value type; it is never inspected, only counted and
/// positioned. Use [`Param`](crate::Param) for heterogeneous values.
#[derive(Debug, Clone)]
pub struct Query<V> {
    text: String,
    args: Vec<V>,
    tables: Vec<String>,
    dialect: Dialect,
    log_sql_length: Option<usize>,
}

impl<V> Query<V> {
    /// Create a builder for `tables` using `dialect`.
    pub fn new<I, S>(tables: I, dialect: Dialect) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_config(QueryConfig::new(dialect).tables(tables))
    }

    /// Create a builder for `tables` from a driver name (`pg`, `postgres`, `postgresql`, `mysql`).
    pub fn with_driver<I, S>(tables: I, driver: &str) -> BuildResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(tables, Dialect::from_driver(driver)?))
    }

    /// Create a builder from a [`QueryConfig`].
    pub fn from_config(config: QueryConfig) -> Self {
        Self {
            text: String::new(),
            args: Vec::new(),
            tables: config.tables,
            dialect: config.driver,
            log_sql_length: config.log_sql_length,
        }
    }

    /// Discard the accumulated text and arguments. Tables and dialect are kept.
    pub fn reset(&mut self) {
        self.text.clear();
        self.args.clear();
        tracing::trace!(target: "sqlbuilder.build", "reset");
    }

    /// The SQL text accumulated since the last reset.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The arguments accumulated since the last reset, in placeholder order.
    pub fn args(&self) -> &[V] {
        &self.args
    }

    /// Target tables.
    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// The first target table, if any.
    pub fn table(&self) -> Option<&str> {
        self.tables.first().map(String::as_str)
    }

    /// Target a single table. Resets the builder.
    pub fn set_table(&mut self, table: impl Into<String>) {
        self.set_tables([table]);
    }

    /// Replace the target tables. Resets the builder.
    ///
    /// An empty list is accepted here; building a statement against it fails
    /// with [`BuildError::NoTables`].
    pub fn set_tables<I, S>(&mut self, tables: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reset();
        self.tables = tables.into_iter().map(Into::into).collect();
        tracing::trace!(target: "sqlbuilder.build", tables = ?self.tables, "tables set");
    }

    /// The active placeholder dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Switch the placeholder dialect for subsequent statements.
    ///
    /// Does not reset: text already written keeps its placeholders until the
    /// next build or [`reset`](Query::reset).
    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
        tracing::trace!(target: "sqlbuilder.build", %dialect, "dialect set");
    }

    /// Switch dialect by driver name. Unknown names leave the builder unchanged.
    pub fn set_driver(&mut self, driver: &str) -> BuildResult<()> {
        self.set_dialect(Dialect::from_driver(driver)?);
        Ok(())
    }

    /// A read-only view of the current text and arguments.
    ///
    /// Useful after composing a statement by hand with the primitives.
    pub fn statement(&self) -> Statement<'_, V> {
        Statement::new(self)
    }

    /// Bind `value` and write its placeholder.
    ///
    /// Positional dialect writes `$n` where `n` is the new argument count;
    /// unnumbered dialect writes `?`.
    pub fn add_arg(&mut self, value: V) -> &mut Self {
        self.args.push(value);
        self.dialect.write_placeholder(self.args.len(), &mut self.text);
        self
    }

    /// Write `columns` comma-joined, verbatim and in order.
    pub fn add_columns<S: AsRef<str>>(&mut self, columns: &[S]) -> &mut Self {
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                self.text.push(',');
            }
            self.text.push_str(column.as_ref());
        }
        self
    }

    /// Write the target tables comma-joined.
    pub fn add_tables(&mut self) -> BuildResult<&mut Self> {
        if self.tables.is_empty() {
            return Err(BuildError::NoTables);
        }
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                self.text.push(',');
            }
            self.text.push_str(table);
        }
        Ok(self)
    }

    fn push_str(&mut self, sql: &str) -> &mut Self {
        self.text.push_str(sql);
        self
    }

    /// Reset, write one statement with `write`, and hand out a view of it.
    ///
    /// On failure the builder is reset again so no partial text survives.
    fn build(
        &mut self,
        kind: StatementKind,
        write: impl FnOnce(&mut Self) -> BuildResult<()>,
    ) -> BuildResult<Statement<'_, V>> {
        self.reset();
        if let Err(err) = write(self) {
            self.reset();
            log::rejected(kind, &err);
            return Err(err);
        }
        log::built(
            kind,
            self.dialect,
            &self.text,
            self.args.len(),
            self.log_sql_length,
        );
        Ok(Statement::new(self))
    }
}
