use super::Query;
use crate::error::{BuildError, BuildResult};
use crate::log::StatementKind;
use crate::statement::Statement;

/// Values for an INSERT.
///
/// The caller states the shape: one row of scalars, or many rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertValues<V> {
    /// A single row, one value per column.
    Flat(Vec<V>),
    /// Bulk insert, one inner vector per row.
    Rows(Vec<Vec<V>>),
}

impl<V> InsertValues<V> {
    /// A single row.
    pub fn flat(values: impl IntoIterator<Item = V>) -> Self {
        Self::Flat(values.into_iter().collect())
    }

    /// Many rows.
    pub fn rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
    {
        Self::Rows(rows.into_iter().map(|r| r.into_iter().collect()).collect())
    }

    /// Whether there is nothing to bind, including rows that are all empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of values across all rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(values) => values.len(),
            Self::Rows(rows) => rows.iter().map(Vec::len).sum(),
        }
    }

    fn check_arity(&self, columns: usize) -> BuildResult<()> {
        let mismatch = |row: usize, found: usize| BuildError::ArityMismatch {
            row,
            expected: columns,
            found,
        };
        match self {
            Self::Flat(values) if values.len() != columns => Err(mismatch(0, values.len())),
            Self::Flat(_) => Ok(()),
            Self::Rows(rows) => rows
                .iter()
                .enumerate()
                .find(|(_, r)| r.len() != columns)
                .map_or(Ok(()), |(i, r)| Err(mismatch(i, r.len()))),
        }
    }
}

impl<V> Query<V> {
    /// Build `INSERT INTO <tables>(<columns>)VALUES(...)`.
    ///
    /// [`InsertValues::Rows`] writes one parenthesized group per row:
    /// `VALUES($1,$2),($3,$4)`. Every row must carry exactly one value per
    /// column.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        columns: &[S],
        values: InsertValues<V>,
    ) -> BuildResult<Statement<'_, V>> {
        self.build(StatementKind::Insert, |q| {
            if values.is_empty() {
                return Err(BuildError::EmptyValues);
            }
            values.check_arity(columns.len())?;

            q.push_str("INSERT INTO ").add_tables()?;
            q.raw_char('(').add_columns(columns).push_str(")VALUES");
            match values {
                InsertValues::Flat(row) => q.add_row(row),
                InsertValues::Rows(rows) => {
                    for (i, row) in rows.into_iter().enumerate() {
                        if i > 0 {
                            q.raw_char(',');
                        }
                        q.add_row(row);
                    }
                }
            }
            Ok(())
        })
    }

    fn add_row(&mut self, row: Vec<V>) {
        self.raw_char('(');
        for (i, value) in row.into_iter().enumerate() {
            if i > 0 {
                self.raw_char(',');
            }
            self.add_arg(value);
        }
        self.raw_char(')');
    }
}
