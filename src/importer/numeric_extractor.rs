// ==========================================
// Furniture Catalog - numeric extractor
// ==========================================
// Lenient number recovery from free-text dimension cells
// ("W1200×D600", "約１２００mm", ...). Unparseable input is a null
// dimension, never an error.
// ==========================================

use crate::domain::{CellValue, ExtractMode};
use crate::importer::data_cleaner::TextNormalizer;
use once_cell::sync::Lazy;
use regex::Regex;

/// optional sign, digits, optional decimal tail; non-overlapping, left-to-right
static NUM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+]?\d+\.?\d*").unwrap());

pub struct NumericExtractor {
    normalizer: TextNormalizer,
}

impl NumericExtractor {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer,
        }
    }

    /// All numeric substrings of the normalized text, in match order
    pub fn extract_all_numbers(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize_text(text);
        NUM_PATTERN
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Resolve a cell to an integer dimension
    ///
    /// - Missing / NaN → None
    /// - native numeric → rounded to the nearest integer
    /// - text → normalize, extract all numbers; none found → None; else the
    ///   first (First) or largest (Max) value, rounded
    ///
    /// Rounding is f64::round (half away from zero).
    pub fn parse_value(&self, cell: &CellValue, mode: ExtractMode) -> Option<i64> {
        match cell {
            CellValue::Missing => None,
            CellValue::Numeric(v) => {
                if v.is_finite() {
                    Some(v.round() as i64)
                } else {
                    None
                }
            }
            CellValue::Text(s) => {
                let nums = self.extract_all_numbers(s);
                if nums.is_empty() {
                    return None;
                }
                let values: Vec<f64> = nums.iter().filter_map(|n| n.parse::<f64>().ok()).collect();
                if values.is_empty() {
                    return None;
                }
                let picked = match mode {
                    ExtractMode::First => values[0],
                    ExtractMode::Max => values.iter().copied().fold(f64::MIN, f64::max),
                };
                Some(picked.round() as i64)
            }
        }
    }
}

impl Default for NumericExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_extract_all_numbers_compound_cell() {
        let extractor = NumericExtractor::new();
        assert_eq!(extractor.extract_all_numbers("W1200×D600"), vec!["1200", "600"]);
        assert_eq!(extractor.extract_all_numbers("W1200 / 奥行600mm"), vec!["1200", "600"]);
    }

    #[test]
    fn test_extract_handles_full_width_digits() {
        let extractor = NumericExtractor::new();
        assert_eq!(extractor.extract_all_numbers("Ｗ１２００"), vec!["1200"]);
    }

    #[test]
    fn test_parse_value_modes() {
        let extractor = NumericExtractor::new();
        assert_eq!(extractor.parse_value(&text("W1200×D600"), ExtractMode::Max), Some(1200));
        assert_eq!(extractor.parse_value(&text("W1200×D600"), ExtractMode::First), Some(1200));
        assert_eq!(extractor.parse_value(&text("D600×W1200"), ExtractMode::First), Some(600));
        assert_eq!(extractor.parse_value(&text("550"), ExtractMode::Max), Some(550));
    }

    #[test]
    fn test_parse_value_nulls() {
        let extractor = NumericExtractor::new();
        assert_eq!(extractor.parse_value(&text(""), ExtractMode::Max), None);
        assert_eq!(extractor.parse_value(&text("未定"), ExtractMode::Max), None);
        assert_eq!(extractor.parse_value(&CellValue::Missing, ExtractMode::Max), None);
        assert_eq!(
            extractor.parse_value(&CellValue::Numeric(f64::NAN), ExtractMode::Max),
            None
        );
    }

    #[test]
    fn test_parse_value_native_numeric_rounds() {
        let extractor = NumericExtractor::new();
        assert_eq!(extractor.parse_value(&CellValue::Numeric(1200.0), ExtractMode::Max), Some(1200));
        assert_eq!(extractor.parse_value(&CellValue::Numeric(599.6), ExtractMode::Max), Some(600));
    }

    #[test]
    fn test_parse_value_idempotent_under_renormalization() {
        let extractor = NumericExtractor::new();
        let first = extractor.parse_value(&text("約１２００mm"), ExtractMode::Max).unwrap();
        let again = extractor.parse_value(&text(&first.to_string()), ExtractMode::Max);
        assert_eq!(again, Some(first));
    }
}
