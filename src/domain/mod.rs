// ==========================================
// Furniture Catalog - domain layer
// ==========================================
// Entities and value types shared by the importer,
// repository and query layers
// ==========================================

pub mod catalog;
pub mod types;

pub use catalog::{
    FurnitureByRoom, FurnitureByType, FurnitureRecord, ImportReport, NameAnomaly, ResolvedColumns,
    RowError,
};
pub use types::{CellValue, ExtractMode};
