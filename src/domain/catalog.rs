// ==========================================
// Furniture Catalog - catalog entities
// ==========================================
// Aligned with the furniture / furniture_type / room tables
// (see db::ensure_schema)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// FurnitureRecord - one imported catalog row
// ==========================================
// Written by the importer, read-only afterwards.
// The furniture table is cleared and fully rebuilt on every import run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureRecord {
    /// 1-based position of the source row, for traceability back to the sheet
    pub row_index: i64,
    /// Item code (品番); duplicates are expected and preserved
    pub code: Option<String>,
    /// Width in mm; None = empty, unparseable, or column absent
    #[serde(rename = "W")]
    pub width_mm: Option<i64>,
    /// Depth in mm; falls back to width when unparsed (see importer)
    #[serde(rename = "D")]
    pub depth_mm: Option<i64>,
    /// Height in mm
    #[serde(rename = "H")]
    pub height_mm: Option<i64>,
    pub type_id: i64,
    pub room_id: i64,
}

// ==========================================
// ImportReport - outcome of one import run
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// Run identifier (uuid v4), carried in every log line of the run
    pub batch_id: String,
    /// Data rows seen in the source (blank rows excluded)
    pub total_rows: usize,
    pub inserted: usize,
    pub skipped: usize,
    /// First max_error_sample row-level errors; skipped counts them all
    pub errors: Vec<RowError>,
    /// Header names the logical columns resolved to
    pub columns: ResolvedColumns,
    /// Row positions whose stored width is null (manual follow-up list)
    pub null_width_rows: Vec<i64>,
    /// Row positions whose stored depth is null
    pub null_depth_rows: Vec<i64>,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// A recovered per-row failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based source row position
    pub row: usize,
    pub message: String,
}

/// Which header name each logical field resolved to (None = column absent)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedColumns {
    pub room: Option<String>,
    pub type_name: Option<String>,
    pub code: Option<String>,
    pub width: Option<String>,
    pub depth: Option<String>,
    pub height: Option<String>,
}

// ==========================================
// Query projections
// ==========================================

/// furniture_by_type projection: code/W/D/H + type name + room reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureByType {
    pub code: Option<String>,
    #[serde(rename = "W")]
    pub width_mm: Option<i64>,
    #[serde(rename = "D")]
    pub depth_mm: Option<i64>,
    #[serde(rename = "H")]
    pub height_mm: Option<i64>,
    #[serde(rename = "type")]
    pub type_name: String,
    pub room_id: i64,
}

/// furniture_by_room projection: code/W/D/H + room name + type reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureByRoom {
    pub code: Option<String>,
    #[serde(rename = "W")]
    pub width_mm: Option<i64>,
    #[serde(rename = "D")]
    pub depth_mm: Option<i64>,
    #[serde(rename = "H")]
    pub height_mm: Option<i64>,
    #[serde(rename = "room")]
    pub room_name: String,
    pub type_id: i64,
}

// ==========================================
// NameAnomaly - maintenance scan result
// ==========================================
// A Type/Room record whose name embeds a newline, i.e. a malformed
// source row leaked into a name table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameAnomaly {
    /// Table the record lives in ("furniture_type" or "room")
    pub table: String,
    pub id: i64,
    pub name: String,
}
