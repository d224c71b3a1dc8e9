// ==========================================
// Furniture Catalog - core library
// ==========================================
// Stack: Rust + SQLite (rusqlite)
// Purpose: batch import of a spreadsheet furniture
// catalog into Furniture/Type/Room tables, plus
// read-side lookups by type and room
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and typed cells
pub mod domain;

// Repository layer - data access
pub mod repository;

// Importer layer - external data ingestion
pub mod importer;

// Configuration layer
pub mod config;

// Database infrastructure (connection init / PRAGMA / schema)
pub mod db;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::types::{CellValue, ExtractMode};

// Domain entities
pub use domain::{
    FurnitureByRoom, FurnitureByType, FurnitureRecord, ImportReport, NameAnomaly, ResolvedColumns,
    RowError,
};

// Configuration
pub use config::{CandidateLabels, ImportConfig};

// Importer
pub use importer::{
    CatalogImporter, ColumnResolver, CsvParser, ExcelParser, HeaderFlattener, ImportError,
    ImportResult, NumericExtractor, TextNormalizer, UniversalFileParser,
};

// Repository
pub use repository::{CatalogStore, QueryService, RepositoryError, RepositoryResult};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "furniture-catalog";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
