use anyhow::Result;
use rusqlite::Connection;

use crate::Database;
use crate::models::SubmissionRow;

impl Database {
    /// Insert one validated submission and return its assigned id.
    /// Rows are insert-only; nothing ever updates or deletes them.
    pub fn insert_submission(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
        eircode: &str,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO submissions (first_name, last_name, email, phone_number, eircode)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![first_name, last_name, email, phone_number, eircode],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_submission(&self, id: i64) -> Result<Option<SubmissionRow>> {
        self.with_conn(|conn| query_submission(conn, id))
    }

    pub fn count_submissions(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM submissions", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}

fn query_submission(conn: &Connection, id: i64) -> Result<Option<SubmissionRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, email, phone_number, eircode, created_at
         FROM submissions WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(SubmissionRow {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                phone_number: row.get(4)?,
                eircode: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
