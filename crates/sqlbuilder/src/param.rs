//! Heterogeneous driver parameters.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly, type-erased bind value.
///
/// Use `Query<Param>` when a single statement binds values of different
/// types; the builder never looks inside.
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

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&self.0).finish()
    }
}

/// A bind value that can be handed to `tokio-postgres`.
///
/// Implemented for every `ToSql + Sync` type and for [`Param`].
pub trait BindParam {
    /// Borrow the value as a driver parameter.
    fn as_param(&self) -> &(dyn ToSql + Sync);
}

impl<T: ToSql + Sync> BindParam for T {
    fn as_param(&self) -> &(dyn ToSql + Sync) {
        self
    }
}

impl BindParam for Param {
    fn as_param(&self) -> &(dyn ToSql + Sync) {
        self.as_ref()
    }
}

/// Build a `Vec<Param>` from heterogeneous values.
///
/// ```
/// use sqlbuilder::params;
///
/// let args = params![1_i64, "alice", true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::new($value)),+]
    };
}
