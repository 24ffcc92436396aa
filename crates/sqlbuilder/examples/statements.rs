//! Example building one statement of each kind in both dialects.
//!
//! Run with:
//!   cargo run --example statements -p sqlbuilder

use sqlbuilder::{BuildResult, Dialect, InsertValues, Param, Query, UpdateData, params};

fn print(label: &str, q: &Query<Param>) {
    let stmt = q.statement();
    println!("{label:<8} {stmt}");
    println!("{:<8} {:?}", "", stmt.args());
}

fn main() -> BuildResult<()> {
    for dialect in [Dialect::Positional, Dialect::Unnumbered] {
        println!("== {dialect}");
        let mut q: Query<Param> = Query::new(["users"], dialect);

        q.select(&["id", "username"])?;
        q.raw(" WHERE status=? LIMIT ?", params!["active", 20_i64])?;
        print("select", &q);

        q.insert(
            &["username", "email"],
            InsertValues::rows([
                params!["alice", "alice@example.com"],
                params!["bob", "bob@example.com"],
            ]),
        )?;
        print("insert", &q);

        q.update(UpdateData::ordered([("status", Param::new("inactive"))]))?;
        q.raw(" WHERE id=?", params![1_i64])?;
        print("update", &q);

        q.delete()?;
        q.raw(" WHERE id=?", params![1_i64])?;
        print("delete", &q);
    }
    Ok(())
}
