//! Read-only handle on the student database
//!
//! Rows come back as ordered tuples of scalar cells; the tool never builds an
//! entity model on top of them.

use crate::error::{LookupError, Result};
use rusqlite::{Connection, OpenFlags, params_from_iter, types::ValueRef};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, instrument};

/// A single scalar value from a result row
pub type Cell = Value;

/// One result row, in `SELECT` column order
pub type Row = Vec<Cell>;

/// The rows returned by one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    /// Rows in the order the store returned them
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Render a cell the way it is shown on the console
pub fn format_value(value: &Cell) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => value.to_string(),
    }
}

fn cell_from_sql(value: ValueRef<'_>) -> Cell {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Database handle held for the lifetime of a session
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing SQLite file without write access
    #[instrument]
    pub fn open<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| LookupError::connection(path, e))?;

        // Opening is lazy; touch the schema so a non-database file fails here
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| LookupError::connection(path, e))?;

        info!("Opened database: {}", path.display());
        Ok(Self { conn })
    }

    /// Wrap a connection that is already open
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Run a statement and collect every row
    #[instrument(skip(self, sql))]
    pub fn fetch(&self, sql: &str, params: &[&str]) -> Result<RowSet> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(LookupError::query)?;

        let width = stmt.column_count();

        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(cell_from_sql))
                    .collect::<rusqlite::Result<Row>>()
            })
            .and_then(|mapped| mapped.collect::<rusqlite::Result<Vec<Row>>>())
            .map_err(LookupError::query)?;

        debug!("Query returned {} row(s)", rows.len());
        Ok(RowSet::new(rows))
    }

    /// Release the connection
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| LookupError::query(e))?;
        debug!("Database connection closed");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{broken_store, sample_store};
    use super::*;
    use crate::core::queries;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_without_params() {
        let store = sample_store();
        let rows = store.fetch(queries::ALL_STUDENTS, &[]).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert!(rows.rows.contains(&vec![json!("Ada"), json!("Lovelace")]));
    }

    #[test]
    fn test_subjects_are_distinct() {
        let store = sample_store();
        let rows = store
            .fetch(queries::SUBJECTS_FOR_STUDENT, &["ST0001"])
            .unwrap();

        let mut names: Vec<String> = rows.iter().map(|r| format_value(&r[0])).collect();
        names.sort();
        assert_eq!(names, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_integer_and_null_cells() {
        let store = sample_store();
        let rows = store
            .fetch(
                "SELECT mark FROM StudentCourse WHERE student_id = ?1 ORDER BY mark",
                &["ST0001"],
            )
            .unwrap();

        assert_eq!(rows.rows[0], vec![Value::Null]);
        assert_eq!(rows.rows[1], vec![json!(85)]);
    }

    #[test]
    fn test_real_cells() {
        let store = sample_store();
        let rows = store.fetch("SELECT 2.5", &[]).unwrap();
        assert_eq!(rows.rows[0], vec![json!(2.5)]);
    }

    #[test]
    fn test_missing_table_is_a_query_error() {
        let store = broken_store();
        let err = store.fetch(queries::ALL_STUDENTS, &[]).unwrap_err();
        assert!(matches!(err, LookupError::Query { .. }));
        assert!(err.to_string().starts_with("There has been a database error"));
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Store::open(dir.path().join("missing.db")).unwrap_err();
        assert!(matches!(err, LookupError::Connection { .. }));
        assert!(!dir.path().join("missing.db").exists());
    }

    #[test]
    fn test_open_rejects_non_database_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.db");
        std::fs::write(&path, "not a database\n".repeat(512)).unwrap();

        let err = Store::open(&path).unwrap_err();
        assert!(matches!(err, LookupError::Connection { .. }));
    }

    #[test]
    fn test_open_is_read_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("school.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch(fixtures::SCHEMA)
            .unwrap();

        let store = Store::open(&path).unwrap();
        let err = store.fetch("DELETE FROM Student", &[]).unwrap_err();
        assert!(matches!(err, LookupError::Query { .. }));
        store.close().unwrap();
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&Value::Null), "NULL");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("hello")), "hello");
    }
}
