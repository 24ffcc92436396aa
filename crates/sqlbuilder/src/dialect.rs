//! Placeholder dialects.

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bind-parameter syntax of the target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// `$1, $2, ...` (PostgreSQL).
    Positional,
    /// `?` (MySQL).
    Unnumbered,
}

impl Dialect {
    /// Resolve a driver name (`pg`, `postgres`, `postgresql`, `mysql`), ignoring case.
    pub fn from_driver(driver: &str) -> Result<Self, BuildError> {
        match driver.to_ascii_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(Self::Positional),
            "mysql" => Ok(Self::Unnumbered),
            _ => Err(BuildError::unsupported_driver(driver)),
        }
    }

    /// Canonical driver name for this dialect.
    pub fn driver_name(self) -> &'static str {
        match self {
            Self::Positional => "pg",
            Self::Unnumbered => "mysql",
        }
    }

    /// Write the placeholder for the 1-based argument `index`.
    pub(crate) fn write_placeholder(self, index: usize, out: &mut String) {
        match self {
            Self::Positional => {
                out.push('$');
                out.push_str(&index.to_string());
            }
            Self::Unnumbered => out.push('?'),
        }
    }
}

impl FromStr for Dialect {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_driver(s)
    }
}

impl TryFrom<String> for Dialect {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_driver(&value)
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.driver_name().to_string()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.driver_name())
    }
}
