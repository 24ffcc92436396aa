//! Error types for sqlbuilder

use thiserror::Error;

/// Result type alias for statement building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while configuring a [`Query`](crate::Query) or building a statement.
///
/// Every variant is caller misuse. A failed build never hands out a
/// [`Statement`](crate::Statement), so no half-written SQL reaches a driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Driver selector that maps to no known placeholder dialect
    #[error("unsupported driver: {0}")]
    UnsupportedDriver(String),

    /// Statement built against an empty table list
    #[error("no tables configured")]
    NoTables,

    /// INSERT without any value to bind
    #[error("insert requires at least one value")]
    EmptyValues,

    /// INSERT row whose value count differs from the column count
    #[error("insert row {row}: expected {expected} values, found {found}")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// UPDATE without any assignment
    #[error("update requires at least one assignment")]
    EmptyAssignments,

    /// Positional raw fragment given more arguments than `?` markers
    #[error("raw fragment has {markers} placeholder markers but {supplied} arguments")]
    SurplusArguments { markers: usize, supplied: usize },
}

impl BuildError {
    /// Create an unsupported driver error
    pub fn unsupported_driver(driver: impl Into<String>) -> Self {
        Self::UnsupportedDriver(driver.into())
    }

    /// Check if this is a missing-tables error
    pub fn is_no_tables(&self) -> bool {
        matches!(self, Self::NoTables)
    }

    /// Check if this error comes from builder configuration rather than statement input
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedDriver(_) | Self::NoTables)
    }
}
