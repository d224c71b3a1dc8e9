// ==========================================
// Furniture Catalog - importer layer
// ==========================================
// Responsibility: spreadsheet ingestion into the catalog tables
// Supported sources: Excel (.xlsx/.xls), CSV
// ==========================================

pub mod catalog_importer;
pub mod column_resolver;
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod header_flattener;
pub mod numeric_extractor;

pub use catalog_importer::CatalogImporter;
pub use column_resolver::{ColumnIndices, ColumnResolver};
pub use data_cleaner::TextNormalizer;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, DataRow, ExcelParser, FileParser, TableData, UniversalFileParser};
pub use header_flattener::HeaderFlattener;
pub use numeric_extractor::NumericExtractor;
