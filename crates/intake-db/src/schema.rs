use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Create the schema if it is absent. AUTOINCREMENT keeps ids
/// monotonically increasing even across deletes of the highest row.
pub fn init(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS submissions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name   TEXT NOT NULL,
            last_name    TEXT NOT NULL,
            email        TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            eircode      TEXT NOT NULL,
            created_at   TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;

    info!("Database schema ready");
    Ok(())
}
