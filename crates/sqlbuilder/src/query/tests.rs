//! Builder-level tests: placeholder bookkeeping, resets and configuration.

use crate::query::{InsertValues, UpdateData};
use crate::{BuildError, Dialect, Query, QueryConfig};
use std::io;
use std::sync::{Arc, Mutex};

/// Count `$n` / `?` placeholders in `sql`, checking `$n` are 1..=k in order.
fn placeholder_count(sql: &str, dialect: Dialect) -> usize {
    match dialect {
        Dialect::Unnumbered => sql.matches('?').count(),
        Dialect::Positional => {
            let mut expected = 1;
            let mut rest = sql;
            while let Some(idx) = rest.find('$') {
                rest = &rest[idx + 1..];
                let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                assert_eq!(digits, expected.to_string(), "placeholders out of order in {sql}");
                expected += 1;
            }
            expected - 1
        }
    }
}

#[test]
fn add_arg_numbers_contiguously() {
    let mut q: Query<&str> = Query::new(["t"], Dialect::Positional);
    q.add_arg("a").raw_char(',').add_arg("b").raw_char(',').add_arg("c");
    assert_eq!(q.as_str(), "$1,$2,$3");
    assert_eq!(q.args(), &["a", "b", "c"]);
}

#[test]
fn add_arg_unnumbered() {
    let mut q: Query<&str> = Query::new(["t"], Dialect::Unnumbered);
    q.add_arg("a").add_arg("b");
    assert_eq!(q.as_str(), "??");
    assert_eq!(q.args().len(), 2);
}

#[test]
fn add_columns_joins_without_trailing_comma() {
    let mut q: Query<i32> = Query::new(["t"], Dialect::Positional);
    q.add_columns(&["a", "b", "c"]);
    assert_eq!(q.as_str(), "a,b,c");

    q.reset();
    q.add_columns::<&str>(&[]);
    assert_eq!(q.as_str(), "");
}

#[test]
fn add_tables_requires_a_table() {
    let mut q: Query<i32> = Query::new(Vec::<String>::new(), Dialect::Positional);
    assert_eq!(q.add_tables().unwrap_err(), BuildError::NoTables);
}

#[test]
fn every_factory_fails_without_tables() {
    let mut q: Query<i32> = Query::new(Vec::<String>::new(), Dialect::Positional);
    assert!(q.select::<&str>(&[]).unwrap_err().is_no_tables());
    assert!(q.insert(&["a"], InsertValues::flat([1])).unwrap_err().is_no_tables());
    assert!(q.update(UpdateData::ordered([("a", 1)])).unwrap_err().is_no_tables());
    assert!(q.delete().unwrap_err().is_no_tables());
    assert_eq!(q.as_str(), "");
    assert!(q.args().is_empty());
}

#[test]
fn rebuild_discards_previous_statement() {
    let mut q: Query<i32> = Query::new(["t"], Dialect::Positional);
    q.insert(&["a", "b"], InsertValues::flat([1, 2])).unwrap();
    let stmt = q.update(UpdateData::ordered([("a", 3)])).unwrap();
    assert_eq!(stmt.as_str(), "UPDATE t SET a=$1");
    assert_eq!(stmt.args(), &[3]);
}

#[test]
fn failed_build_clears_previous_statement() {
    let mut q: Query<i32> = Query::new(["t"], Dialect::Positional);
    q.insert(&["a"], InsertValues::flat([1])).unwrap();
    q.insert(&["a"], InsertValues::Flat(vec![])).unwrap_err();
    assert_eq!(q.as_str(), "");
    assert!(q.args().is_empty());
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn output(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[test]
fn reset_emits_trace_event() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut q: Query<i32> = Query::new(["t"], Dialect::Positional);
    q.add_arg(1);
    tracing::subscriber::with_default(subscriber, || q.reset());

    let output = captured.output();
    assert!(output.contains("TRACE"), "{output}");
    assert!(output.contains("sqlbuilder.build: reset"), "{output}");
    assert_eq!(q.as_str(), "");
}

#[test]
fn set_tables_resets() {
    let mut q: Query<i32> = Query::new(["a"], Dialect::Positional);
    q.raw("x=?", [1]).unwrap();
    q.set_tables(["b", "c"]);
    assert_eq!(q.as_str(), "");
    assert!(q.args().is_empty());
    assert_eq!(q.tables(), &["b", "c"]);
    assert_eq!(q.table(), Some("b"));

    q.set_table("d");
    assert_eq!(q.tables(), &["d"]);
    assert_eq!(q.delete().unwrap().as_str(), "DELETE FROM d");
}

#[test]
fn set_dialect_keeps_written_text() {
    let mut q: Query<i32> = Query::new(["t"], Dialect::Positional);
    q.add_arg(1);
    q.set_dialect(Dialect::Unnumbered);
    assert_eq!(q.as_str(), "$1");

    let stmt = q.insert(&["a"], InsertValues::flat([2])).unwrap();
    assert_eq!(stmt.as_str(), "INSERT INTO t(a)VALUES(?)");
}

#[test]
fn set_driver_by_name() {
    let mut q: Query<i32> = Query::new(["t"], Dialect::Unnumbered);
    q.set_driver("Postgres").unwrap();
    assert_eq!(q.dialect(), Dialect::Positional);

    let err = q.set_driver("oracle").unwrap_err();
    assert_eq!(err, BuildError::UnsupportedDriver("oracle".to_string()));
    assert_eq!(q.dialect(), Dialect::Positional);
}

#[test]
fn with_driver_rejects_unknown_names() {
    assert!(Query::<i32>::with_driver(["t"], "mysql").is_ok());
    assert!(Query::<i32>::with_driver(["t"], "sqlite").unwrap_err().is_configuration());
}

#[test]
fn from_config() {
    let config = QueryConfig::new(Dialect::Unnumbered).table("users").table("roles");
    let mut q: Query<i32> = Query::from_config(config);
    assert_eq!(q.select(&["id"]).unwrap().as_str(), "SELECT id FROM users,roles");
}

#[test]
fn statement_view_after_primitives() {
    let mut q: Query<i32> = Query::new(["users"], Dialect::Positional);
    q.select(&["id"]).unwrap();
    q.raw(" WHERE age>? AND age<?", [18, 65]).unwrap();
    let stmt = q.statement();
    assert_eq!(stmt.as_str(), "SELECT id FROM users WHERE age>$1 AND age<$2");
    assert_eq!(stmt.args(), &[18, 65]);
}

#[test]
fn placeholder_count_matches_args_across_statements() {
    for dialect in [Dialect::Positional, Dialect::Unnumbered] {
        let mut q: Query<i32> = Query::new(["t"], dialect);

        let stmt = q
            .insert(&["a", "b", "c"], InsertValues::rows((0..5).map(|i| [i, i + 1, i + 2])))
            .unwrap();
        assert_eq!(placeholder_count(stmt.as_str(), dialect), stmt.args().len());
        assert_eq!(stmt.args().len(), 15);

        let stmt = q
            .update(UpdateData::ordered([("a", 1), ("b", 2), ("c", 3)]))
            .unwrap();
        assert_eq!(placeholder_count(stmt.as_str(), dialect), 3);
        assert_eq!(stmt.args().len(), 3);

        q.select(&["a"]).unwrap();
        q.raw(" WHERE a=? OR b=? OR c=?", [1, 2, 3]).unwrap();
        q.raw(" LIMIT ?", [10]).unwrap();
        let stmt = q.statement();
        assert_eq!(placeholder_count(stmt.as_str(), dialect), stmt.args().len());
        assert_eq!(stmt.args(), &[1, 2, 3, 10]);
    }
}
