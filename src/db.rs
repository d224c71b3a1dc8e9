// ==========================================
// Furniture Catalog - SQLite connection init
// ==========================================
// Goals:
// - one place for Connection::open PRAGMA behavior, so every module
//   gets foreign keys and the same busy_timeout
// - idempotent schema creation for the three catalog tables
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMA set to a connection
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// applied to every connection we open.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the catalog tables and indexes if they do not exist yet
///
/// - furniture_type.name and room.name carry UNIQUE indexes (upsert target)
/// - furniture.code carries a non-unique index (duplicate codes are expected)
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS furniture_type (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_furniture_type_name
            ON furniture_type(name);

        CREATE TABLE IF NOT EXISTS room (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_room_name
            ON room(name);

        CREATE TABLE IF NOT EXISTS furniture (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            row_index INTEGER NOT NULL,
            code      TEXT,
            width_mm  INTEGER,
            depth_mm  INTEGER,
            height_mm INTEGER,
            type_id   INTEGER NOT NULL REFERENCES furniture_type(id),
            room_id   INTEGER NOT NULL REFERENCES room(id)
        );
        CREATE INDEX IF NOT EXISTS idx_furniture_code
            ON furniture(code);
        "#,
    )?;
    Ok(())
}
