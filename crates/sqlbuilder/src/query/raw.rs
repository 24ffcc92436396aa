//! Raw SQL fragments with `?` markers.

use super::Query;
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};

impl<V> Query<V> {
    /// Append a raw SQL fragment, binding `args` to its `?` markers.
    ///
    /// Under the positional dialect each `?` is rewritten to `$n`, left to
    /// right, one argument per marker. Markers past the last argument stay as
    /// a literal `?`. Passing more arguments than markers fails with
    /// [`BuildError::SurplusArguments`] and leaves the builder untouched.
    ///
    /// Under the unnumbered dialect `?` already is the wire syntax: the
    /// fragment is appended verbatim and `args` are appended as given.
    ///
    /// ```
    /// use sqlbuilder::{Dialect, Query};
    ///
    /// # fn main() -> sqlbuilder::BuildResult<()> {
    /// let mut q = Query::new(["users"], Dialect::Positional);
    /// q.raw("a=? and b=?", [5, 6])?;
    /// assert_eq!(q.as_str(), "a=$1 and b=$2");
    /// assert_eq!(q.args(), &[5, 6]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn raw<I>(&mut self, template: &str, args: I) -> BuildResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
    {
        let args: Vec<V> = args.into_iter().collect();

        match self.dialect {
            Dialect::Positional => {
                let markers = template.matches('?').count();
                if args.len() > markers {
                    return Err(BuildError::SurplusArguments {
                        markers,
                        supplied: args.len(),
                    });
                }

                // One piece before each consumed marker, then the untouched tail.
                let mut pieces = template.splitn(args.len() + 1, '?');
                for arg in args {
                    if let Some(piece) = pieces.next() {
                        self.text.push_str(piece);
                    }
                    self.add_arg(arg);
                }
                if let Some(tail) = pieces.next() {
                    self.text.push_str(tail);
                }
            }
            Dialect::Unnumbered => {
                self.text.push_str(template);
                self.args.extend(args);
            }
        }
        Ok(self)
    }

    /// Append a single character with no placeholder handling.
    pub fn raw_char(&mut self, c: char) -> &mut Self {
        self.text.push(c);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{BuildError, Dialect, Query};

    fn positional() -> Query<i32> {
        Query::new(["t"], Dialect::Positional)
    }

    #[test]
    fn renumbers_markers() {
        let mut q = positional();
        q.raw("a=? and b=?", [5, 6]).unwrap();
        assert_eq!(q.as_str(), "a=$1 and b=$2");
        assert_eq!(q.args(), &[5, 6]);
    }

    #[test]
    fn numbering_continues_after_existing_args() {
        let mut q = positional();
        q.add_arg(1).raw_char(' ');
        q.raw("x=?", [2]).unwrap();
        assert_eq!(q.as_str(), "$1 x=$2");
    }

    #[test]
    fn markers_without_args_stay_literal() {
        let mut q = positional();
        q.raw("a=? and b=? or c=?", [1]).unwrap();
        assert_eq!(q.as_str(), "a=$1 and b=? or c=?");
        assert_eq!(q.args(), &[1]);
    }

    #[test]
    fn no_markers_no_args_is_verbatim() {
        let mut q = positional();
        q.raw("WHERE deleted_at IS NULL", []).unwrap();
        assert_eq!(q.as_str(), "WHERE deleted_at IS NULL");
        assert!(q.args().is_empty());
    }

    #[test]
    fn marker_at_edges() {
        let mut q = positional();
        q.raw("?,?", [1, 2]).unwrap();
        assert_eq!(q.as_str(), "$1,$2");
    }

    #[test]
    fn surplus_args_are_rejected_without_writing() {
        let mut q = positional();
        q.raw("id=", []).unwrap();
        let err = q.raw("a=?", [1, 2]).unwrap_err();
        assert_eq!(
            err,
            BuildError::SurplusArguments {
                markers: 1,
                supplied: 2
            }
        );
        assert_eq!(q.as_str(), "id=");
        assert!(q.args().is_empty());
    }

    #[test]
    fn unnumbered_appends_verbatim() {
        let mut q: Query<i32> = Query::new(["t"], Dialect::Unnumbered);
        q.raw("a=? and b=?", [5, 6]).unwrap();
        assert_eq!(q.as_str(), "a=? and b=?");
        assert_eq!(q.args(), &[5, 6]);
    }

    #[test]
    fn raw_char_skips_bookkeeping() {
        let mut q = positional();
        q.raw_char('?');
        assert_eq!(q.as_str(), "?");
        assert!(q.args().is_empty());
    }
}
