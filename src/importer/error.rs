// ==========================================
// Furniture Catalog - importer error types
// ==========================================
// thiserror derive, one variant per failure class
// ==========================================

use thiserror::Error;

/// Importer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("Excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    #[error("header region incomplete: sheet has no row {0}")]
    HeaderRowMissing(usize),

    // ===== Configuration errors (fatal, abort the run) =====
    #[error("required column(s) not resolved: {}. Available headers: {}", .missing.join(", "), .available.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    // ===== Row-level errors (recovered, row skipped) =====
    #[error("row {row}: {message}")]
    RowError { row: usize, message: String },

    // ===== Database errors =====
    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("database query failed: {0}")]
    DatabaseQueryError(String),

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        ImportError::DatabaseQueryError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<crate::repository::RepositoryError> for ImportError {
    fn from(err: crate::repository::RepositoryError) -> Self {
        match err {
            crate::repository::RepositoryError::DatabaseConnectionError(msg) => {
                ImportError::DatabaseConnectionError(msg)
            }
            other => ImportError::DatabaseQueryError(other.to_string()),
        }
    }
}

/// Result alias for the importer layer
pub type ImportResult<T> = Result<T, ImportError>;
