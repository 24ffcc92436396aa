//! # sqlbuilder
//!
//! A minimal parametrized SQL statement assembler.
//!
//! A [`Query`] is configured once with its target table(s) and a placeholder
//! [`Dialect`], then reused to build SELECT / INSERT / UPDATE / DELETE
//! statements. Each build produces a [`Statement`]: the SQL text plus the
//! arguments in placeholder order, ready for a driver's parametrized execute.
//!
//! - **Positional** dialect (PostgreSQL): `$1, $2, ...`
//! - **Unnumbered** dialect (MySQL): `?`
//!
//! Raw fragments use `?` as a dialect-neutral marker and are renumbered for
//! the positional dialect.
//!
//! ```
//! use sqlbuilder::{Dialect, InsertValues, Query, UpdateData};
//!
//! # fn main() -> sqlbuilder::BuildResult<()> {
//! let mut q = Query::new(["users"], Dialect::Positional);
//!
//! let stmt = q.insert(&["name", "age"], InsertValues::rows([["alice", "30"], ["bob", "41"]]))?;
//! assert_eq!(stmt.as_str(), "INSERT INTO users(name,age)VALUES($1,$2),($3,$4)");
//!
//! q.update(UpdateData::ordered([("name", "carol")]))?;
//! q.raw(" WHERE name=?", ["alice"])?;
//! assert_eq!(q.as_str(), "UPDATE users SET name=$1 WHERE name=$2");
//! assert_eq!(q.args(), &["carol", "alice"]);
//! # Ok(())
//! # }
//! ```
//!
//! Table and column names are written verbatim; they must be trusted.

pub mod config;
pub mod dialect;
pub mod error;
pub mod log;
pub mod param;
pub mod query;
pub mod statement;

pub use config::QueryConfig;
pub use dialect::Dialect;
pub use error::{BuildError, BuildResult};
pub use log::StatementKind;
pub use param::{BindParam, Param};
pub use query::{InsertValues, Query, UpdateData};
pub use statement::{BuiltStatement, Statement};
