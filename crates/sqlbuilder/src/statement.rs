//! Read-only views of a built statement.

use crate::param::BindParam;
use crate::query::Query;
use std::fmt;
use tokio_postgres::types::ToSql;

/// A read-only view of the SQL text and arguments of a [`Query`].
///
/// The view borrows its builder, so it cannot outlive it and no statement can
/// be built (or the builder reset) while the view is alive. Use
/// [`Statement::to_built`] to keep a copy across builds.
pub struct Statement<'q, V> {
    query: &'q Query<V>,
}

impl<'q, V> Statement<'q, V> {
    pub(crate) fn new(query: &'q Query<V>) -> Self {
        Self { query }
    }

    /// The SQL text.
    pub fn as_str(&self) -> &'q str {
        self.query.as_str()
    }

    /// The arguments, in placeholder order.
    pub fn args(&self) -> &'q [V] {
        self.query.args()
    }

    /// Copy the statement out of the builder.
    pub fn to_built(&self) -> BuiltStatement<V>
    where
        V: Clone,
    {
        BuiltStatement {
            sql: self.as_str().to_string(),
            args: self.args().to_vec(),
        }
    }
}

impl<'q, V: BindParam> Statement<'q, V> {
    /// Parameter refs compatible with `tokio-postgres`.
    ///
    /// ```ignore
    /// let stmt = q.select(&["id"])?;
    /// let rows = client.query(stmt.as_str(), &stmt.params_ref()).await?;
    /// ```
    pub fn params_ref(&self) -> Vec<&'q (dyn ToSql + Sync)> {
        self.args().iter().map(BindParam::as_param).collect()
    }
}

impl<V> Clone for Statement<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Statement<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Statement<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("sql", &self.as_str())
            .field("args", &self.args())
            .finish()
    }
}

impl<V> fmt::Display for Statement<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owned statement, detached from its builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltStatement<V> {
    pub sql: String,
    pub args: Vec<V>,
}

impl<V: BindParam> BuiltStatement<V> {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.args.iter().map(BindParam::as_param).collect()
    }
}

impl<V> fmt::Display for BuiltStatement<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
