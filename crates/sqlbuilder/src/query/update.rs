use super::Query;
use crate::error::{BuildError, BuildResult};
use crate::log::StatementKind;
use crate::statement::Statement;
use std::collections::{BTreeMap, HashMap};

/// The SET part of an UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateData<V> {
    /// A raw assignment template with `?` markers, e.g. `"name=?,age=age+?"`.
    Raw { template: String, args: Vec<V> },
    /// Column to value. Assignment order follows map iteration and is unspecified.
    Map(HashMap<String, V>),
    /// Column to value, written in the given order.
    Ordered(Vec<(String, V)>),
}

impl<V> UpdateData<V> {
    /// A raw template bound through [`Query::raw`].
    pub fn raw(template: impl Into<String>, args: impl IntoIterator<Item = V>) -> Self {
        Self::Raw {
            template: template.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Assignments written in iteration order.
    pub fn ordered<I, S>(assignments: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
    {
        Self::Ordered(
            assignments
                .into_iter()
                .map(|(column, value)| (column.into(), value))
                .collect(),
        )
    }
}

impl<V> From<HashMap<String, V>> for UpdateData<V> {
    fn from(map: HashMap<String, V>) -> Self {
        Self::Map(map)
    }
}

impl<V> From<BTreeMap<String, V>> for UpdateData<V> {
    fn from(map: BTreeMap<String, V>) -> Self {
        Self::Ordered(map.into_iter().collect())
    }
}

impl<V> From<Vec<(String, V)>> for UpdateData<V> {
    fn from(assignments: Vec<(String, V)>) -> Self {
        Self::Ordered(assignments)
    }
}

impl<V> Query<V> {
    /// Build `UPDATE <tables> SET <assignments>`.
    ///
    /// Map and ordered forms write `col=<placeholder>` per entry,
    /// comma-joined; an empty set of assignments fails with
    /// [`BuildError::EmptyAssignments`]. The raw form is appended through
    /// [`Query::raw`] so its `?` markers follow the active dialect.
    pub fn update(&mut self, data: impl Into<UpdateData<V>>) -> BuildResult<Statement<'_, V>> {
        let data = data.into();
        self.build(StatementKind::Update, |q| {
            q.push_str("UPDATE ").add_tables()?;
            q.push_str(" SET ");
            match data {
                UpdateData::Raw { template, args } => {
                    q.raw(&template, args)?;
                }
                UpdateData::Map(map) => q.add_assignments(map)?,
                UpdateData::Ordered(assignments) => q.add_assignments(assignments)?,
            }
            Ok(())
        })
    }

    fn add_assignments(
        &mut self,
        assignments: impl IntoIterator<Item = (String, V)>,
    ) -> BuildResult<()> {
        let mut written = 0;
        for (column, value) in assignments {
            if written > 0 {
                self.raw_char(',');
            }
            self.push_str(&column).raw_char('=').add_arg(value);
            written += 1;
        }
        if written == 0 {
            return Err(BuildError::EmptyAssignments);
        }
        Ok(())
    }
}
