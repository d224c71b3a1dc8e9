// ==========================================
// Furniture Catalog - import configuration
// ==========================================
// All knobs of one import run in a plain struct, so the pipeline is
// constructed explicitly and repeatable instead of running as
// process-wide script state
// ==========================================

use crate::domain::ExtractMode;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the default database path
pub const DB_PATH_ENV: &str = "FURNIDB_PATH";

/// Fallback database file when neither argument nor environment set one
pub const DEFAULT_DB_PATH: &str = "furniture.db";

/// Ordered candidate header labels per logical column
///
/// Each list mixes Japanese full-width/half-width variants with an English
/// fallback; the source sheets are inconsistent about which one they use.
/// Order matters: the resolver tries candidates front to back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateLabels {
    pub room: Vec<String>,
    pub type_name: Vec<String>,
    pub code: Vec<String>,
    pub width: Vec<String>,
    pub depth: Vec<String>,
    pub height: Vec<String>,
}

impl Default for CandidateLabels {
    fn default() -> Self {
        fn labels(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            room: labels(&["室名", "Room"]),
            // 品名 sometimes appears with interior padding spaces
            type_name: labels(&["品名", "品   名", "Name"]),
            code: labels(&["品番", "品 番", "Code"]),
            width: labels(&["寸法_W", "Ｗ", "W"]),
            depth: labels(&["寸法_D", "Ｄ", "D"]),
            height: labels(&["寸法_H", "Ｈ", "H"]),
        }
    }
}

/// Configuration of one import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Spreadsheet to ingest (.xlsx/.xls/.csv)
    pub source_path: String,
    /// SQLite database file
    pub db_path: String,
    /// 0-based offsets of the two physical header rows in the sheet
    pub header_rows: (usize, usize),
    pub candidates: CandidateLabels,
    /// Which number a compound dimension cell resolves to (default Max)
    pub extract_mode: ExtractMode,
    /// When depth parsed to null but width did not, store width as depth
    pub depth_falls_back_to_width: bool,
    /// How many row-level errors the report keeps verbatim
    pub max_error_sample: usize,
}

impl ImportConfig {
    /// Config for a source file, db path resolved from FURNIDB_PATH / default
    pub fn from_env(source_path: impl Into<String>) -> Self {
        let db_path =
            std::env::var(DB_PATH_ENV).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        Self::new(source_path, db_path)
    }

    pub fn new(source_path: impl Into<String>, db_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            db_path: db_path.into(),
            // the catalog workbook carries its merged header on rows 2 and 3
            header_rows: (2, 3),
            candidates: CandidateLabels::default(),
            extract_mode: ExtractMode::Max,
            depth_falls_back_to_width: true,
            max_error_sample: 5,
        }
    }
}
