//! SQLite connection and schema for the key-value store
use anyhow::Result;
use rusqlite::Connection as SyncConnection;
use tokio_rusqlite::Connection;

/// Open the async connection for the database living in `db_path`
pub async fn async_db(db_path: &str) -> Result<Connection, tokio_rusqlite::Error> {
    let db = Connection::open(format!("{}/db.sqlite", db_path)).await?;
    Ok(db)
}

/// Create the tables used by the application. Safe to run more than
/// once.
pub fn initialize_db(conn: &SyncConnection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r"
        BEGIN;
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        COMMIT;
        ",
    )
}

/// Bring an existing database up to the current schema.
pub fn migrate_db(conn: &SyncConnection) -> Result<(), rusqlite::Error> {
    let has_updated_at = conn
        .prepare("SELECT 1 FROM pragma_table_info('kv') WHERE name = 'updated_at'")?
        .exists([])?;

    if !has_updated_at {
        tracing::info!("Adding kv.updated_at column");
        conn.execute(
            "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_initializes_twice_without_error() {
        let conn = SyncConnection::open_in_memory().unwrap();
        initialize_db(&conn).unwrap();
        initialize_db(&conn).unwrap();
        migrate_db(&conn).unwrap();
    }

    #[test]
    fn it_migrates_a_table_without_timestamps() {
        let conn = SyncConnection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)", [])
            .unwrap();
        migrate_db(&conn).unwrap();

        let has_updated_at = conn
            .prepare("SELECT 1 FROM pragma_table_info('kv') WHERE name = 'updated_at'")
            .unwrap()
            .exists([])
            .unwrap();
        assert!(has_updated_at);
    }
}
