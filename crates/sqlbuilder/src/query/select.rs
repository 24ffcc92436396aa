use super::Query;
use crate::error::BuildResult;
use crate::log::StatementKind;
use crate::statement::Statement;

impl<V> Query<V> {
    /// Build `SELECT <columns> FROM <tables>`.
    ///
    /// An empty column list selects `*`.
    pub fn select<S: AsRef<str>>(&mut self, columns: &[S]) -> BuildResult<Statement<'_, V>> {
        self.build(StatementKind::Select, |q| {
            q.push_str("SELECT ");
            if columns.is_empty() {
                q.raw_char('*');
            } else {
                q.add_columns(columns);
            }
            q.push_str(" FROM ").add_tables()?;
            Ok(())
        })
    }
}
