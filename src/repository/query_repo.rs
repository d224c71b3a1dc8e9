// ==========================================
// QueryService - read-side catalog lookups
// ==========================================
// Two join-style lookups over the imported catalog:
// - by type: exact name equality
// - by room: case-insensitive substring on the room name
// Both return empty lists (not errors) when nothing matches.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::catalog::{FurnitureByRoom, FurnitureByType};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub struct QueryService {
    conn: Arc<Mutex<Connection>>,
}

impl QueryService {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Furniture whose type name equals type_name exactly
    pub fn furniture_by_type(&self, type_name: &str) -> RepositoryResult<Vec<FurnitureByType>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT f.code, f.width_mm, f.depth_mm, f.height_mm, t.name, f.room_id
            FROM furniture f
            JOIN furniture_type t ON f.type_id = t.id
            WHERE t.name = ?1
            ORDER BY f.row_index
            "#,
        )?;
        let rows = stmt
            .query_map(params![type_name], |row| {
                Ok(FurnitureByType {
                    code: row.get(0)?,
                    width_mm: row.get(1)?,
                    depth_mm: row.get(2)?,
                    height_mm: row.get(3)?,
                    type_name: row.get(4)?,
                    room_id: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Furniture whose room name contains room_query, case-insensitively
    ///
    /// instr + lower instead of LIKE, so query text containing % or _
    /// needs no escaping. lower() folds ASCII only; Japanese room names
    /// compare verbatim, which matches the import normalization.
    pub fn furniture_by_room(&self, room_query: &str) -> RepositoryResult<Vec<FurnitureByRoom>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT f.code, f.width_mm, f.depth_mm, f.height_mm, r.name, f.type_id
            FROM furniture f
            JOIN room r ON f.room_id = r.id
            WHERE instr(lower(r.name), lower(?1)) > 0
            ORDER BY f.row_index
            "#,
        )?;
        let rows = stmt
            .query_map(params![room_query], |row| {
                Ok(FurnitureByRoom {
                    code: row.get(0)?,
                    width_mm: row.get(1)?,
                    depth_mm: row.get(2)?,
                    height_mm: row.get(3)?,
                    room_name: row.get(4)?,
                    type_id: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::FurnitureRecord;
    use crate::repository::catalog_repo::CatalogStore;

    fn seeded() -> (CatalogStore, QueryService) {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        let store = CatalogStore::from_connection(Arc::new(Mutex::new(conn))).unwrap();
        let query = QueryService::from_connection(store.connection());

        let sofa = store.upsert_type("Sofa").unwrap();
        let sofa2 = store.upsert_type("Sofa-2").unwrap();
        let living = store.upsert_room("Living Room").unwrap();
        let office = store.upsert_room("Office").unwrap();

        for (row, code, type_id, room_id) in [
            (1, "S-1", sofa, living),
            (2, "S-2", sofa2, living),
            (3, "S-3", sofa, office),
        ] {
            store
                .insert_furniture(&FurnitureRecord {
                    row_index: row,
                    code: Some(code.to_string()),
                    width_mm: Some(1200),
                    depth_mm: Some(600),
                    height_mm: Some(700),
                    type_id,
                    room_id,
                })
                .unwrap();
        }
        (store, query)
    }

    #[test]
    fn test_by_type_exact_match_only() {
        let (_store, query) = seeded();
        let result = query.furniture_by_type("Sofa").unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|f| f.type_name == "Sofa"));
        // "Sofa" must not pull in "Sofa-2"
        assert!(result.iter().all(|f| f.code.as_deref() != Some("S-2")));
    }

    #[test]
    fn test_by_room_case_insensitive_substring() {
        let (_store, query) = seeded();
        let result = query.furniture_by_room("liv").unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|f| f.room_name == "Living Room"));

        let upper = query.furniture_by_room("LIVING").unwrap();
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let (_store, query) = seeded();
        assert!(query.furniture_by_type("Bed").unwrap().is_empty());
        assert!(query.furniture_by_room("garage").unwrap().is_empty());
    }
}
