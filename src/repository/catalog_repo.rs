// ==========================================
// CatalogStore - furniture/type/room data access
// ==========================================
// Write side of the catalog. No business logic here: normalization
// happens before names reach the store, parsing before records do.
// All statements are parameterized.
// ==========================================

use crate::db::{ensure_schema, open_sqlite_connection};
use crate::domain::catalog::{FurnitureRecord, NameAnomaly};
use crate::importer::data_cleaner::TextNormalizer;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub struct CatalogStore {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogStore {
    /// Open (or create) the catalog database at db_path
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Build a store on an existing shared connection
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            ensure_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    /// Share the underlying connection (e.g. with a QueryService)
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Get-or-create a type record by normalized name, returning its id
    ///
    /// Idempotent: repeated calls with names normalizing to the same string
    /// always yield the same id.
    pub fn upsert_type(&self, name: &str) -> RepositoryResult<i64> {
        self.upsert_name("furniture_type", name)
    }

    /// Get-or-create a room record by normalized name, returning its id
    pub fn upsert_room(&self, name: &str) -> RepositoryResult<i64> {
        self.upsert_name("room", name)
    }

    fn upsert_name(&self, table: &str, name: &str) -> RepositoryResult<i64> {
        let name = TextNormalizer.normalize_text(name);
        let conn = self.get_conn()?;

        // table names are the two fixed catalog tables, never caller input
        conn.execute(
            &format!(
                "INSERT INTO {} (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
                table
            ),
            params![name],
        )?;

        let id: i64 = conn.query_row(
            &format!("SELECT id FROM {} WHERE name = ?1", table),
            params![name],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Append one furniture record; duplicate codes are allowed and kept
    pub fn insert_furniture(&self, record: &FurnitureRecord) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO furniture (
                row_index, code, width_mm, depth_mm, height_mm, type_id, room_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.row_index,
                record.code,
                record.width_mm,
                record.depth_mm,
                record.height_mm,
                record.type_id,
                record.room_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Clear the furniture table for a full rebuild
    ///
    /// Type/Room rows are deliberately kept; their ids stay stable across
    /// re-imports and are reused through the upserts.
    pub fn reset_furniture(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let deleted = conn.execute("DELETE FROM furniture", [])?;
        Ok(deleted)
    }

    pub fn count_furniture(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM furniture", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Row positions whose stored width is null (diagnostic list)
    pub fn null_width_rows(&self) -> RepositoryResult<Vec<i64>> {
        self.null_dimension_rows("width_mm")
    }

    /// Row positions whose stored depth is null
    pub fn null_depth_rows(&self) -> RepositoryResult<Vec<i64>> {
        self.null_dimension_rows("depth_mm")
    }

    fn null_dimension_rows(&self, column: &str) -> RepositoryResult<Vec<i64>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT row_index FROM furniture WHERE {} IS NULL ORDER BY row_index",
            column
        ))?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(rows)
    }

    /// Maintenance scan: Type/Room names with embedded newline characters
    ///
    /// A newline inside a name means a malformed source row leaked through
    /// normalization; offending records are reported for manual cleanup.
    pub fn find_names_with_newlines(&self) -> RepositoryResult<Vec<NameAnomaly>> {
        let conn = self.get_conn()?;
        let mut anomalies = Vec::new();
        for table in ["furniture_type", "room"] {
            let mut stmt = conn.prepare(&format!(
                "SELECT id, name FROM {} WHERE instr(name, char(10)) > 0 ORDER BY id",
                table
            ))?;
            let found = stmt.query_map([], |row| {
                Ok(NameAnomaly {
                    table: table.to_string(),
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?;
            for anomaly in found {
                anomalies.push(anomaly?);
            }
        }
        Ok(anomalies)
    }
}
