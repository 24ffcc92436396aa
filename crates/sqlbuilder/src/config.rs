use crate::dialect::Dialect;
use serde::{Deserialize, Serialize};

const DEFAULT_LOG_SQL_LENGTH: usize = 200;

fn default_log_sql_length() -> Option<usize> {
    Some(DEFAULT_LOG_SQL_LENGTH)
}

/// Configuration for a [`Query`](crate::Query).
///
/// The driver is required; there is no implicit default dialect. In config
/// files the driver is written by name (`"pg"`, `"postgres"`, `"mysql"`, ...):
///
/// ```
/// use sqlbuilder::{Dialect, Query, QueryConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config: QueryConfig = serde_json::from_str(r#"{"tables":["users"],"driver":"pg"}"#)?;
/// assert_eq!(config.driver, Dialect::Positional);
///
/// let mut q = Query::<i64>::from_config(config);
/// assert_eq!(q.delete()?.as_str(), "DELETE FROM users");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Target tables, written comma-joined into every statement.
    #[serde(default)]
    pub tables: Vec<String>,
    /// Placeholder dialect.
    pub driver: Dialect,
    /// Truncate SQL in debug logs (in bytes). `None` means no truncation.
    #[serde(default = "default_log_sql_length")]
    pub log_sql_length: Option<usize>,
}

impl QueryConfig {
    /// Create a configuration with no tables for the given dialect.
    pub fn new(driver: Dialect) -> Self {
        Self {
            tables: Vec::new(),
            driver,
            log_sql_length: default_log_sql_length(),
        }
    }

    /// Append a target table.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.tables.push(table.into());
        self
    }

    /// Replace the target tables.
    pub fn tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Set maximum SQL length shown in debug logs.
    pub fn log_sql_length(mut self, len: usize) -> Self {
        self.log_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in debug logs.
    pub fn no_truncate(mut self) -> Self {
        self.log_sql_length = None;
        self
    }
}
