// ==========================================
// Furniture Catalog - value types
// ==========================================
// CellValue replaces the duck typing of spreadsheet cells
// with an explicit tagged variant, so parse paths are
// selected by matching instead of runtime type inspection
// ==========================================

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell as read from the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Empty cell, error cell, or cell absent from a ragged row
    Missing,
    /// Native numeric cell (Excel floats and ints both land here)
    Numeric(f64),
    /// Everything else, verbatim
    Text(String),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Text cell from a &str, mapping empty/whitespace-only input to Missing
    pub fn from_raw_text(s: &str) -> Self {
        if s.trim().is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

/// Which extracted number a compound dimension cell resolves to
///
/// Cells like "W1200×D600" contain several numbers; Max recovers the
/// dominant dimension and is the import default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractMode {
    /// Leftmost extracted number
    First,
    /// Largest extracted number
    Max,
}

impl Default for ExtractMode {
    fn default() -> Self {
        ExtractMode::Max
    }
}
