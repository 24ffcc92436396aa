use super::Query;
use crate::error::BuildResult;
use crate::log::StatementKind;
use crate::statement::Statement;

impl<V> Query<V> {
    /// Build `DELETE FROM <tables>`.
    ///
    /// No WHERE clause is added; append one with [`Query::raw`] and take the
    /// result through [`Query::statement`].
    pub fn delete(&mut self) -> BuildResult<Statement<'_, V>> {
        self.build(StatementKind::Delete, |q| {
            q.push_str("DELETE FROM ").add_tables()?;
            Ok(())
        })
    }
}
