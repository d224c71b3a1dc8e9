// ==========================================
// Furniture Catalog - text normalizer
// ==========================================
// Full-width digit/punctuation translation + trim.
// Japanese text itself is never altered; only the characters the
// numeric extractor needs are mapped to ASCII.
// ==========================================

use crate::domain::CellValue;

/// Fixed translation table: full-width numerals and the punctuation that
/// occurs inside dimension cells. Everything else passes through verbatim
/// (including the full-width space U+3000).
const FULL_WIDTH_MAP: &[(char, char)] = &[
    ('０', '0'),
    ('１', '1'),
    ('２', '2'),
    ('３', '3'),
    ('４', '4'),
    ('５', '5'),
    ('６', '6'),
    ('７', '7'),
    ('８', '8'),
    ('９', '9'),
    ('．', '.'),
    ('，', ','),
    ('－', '-'),
];

pub struct TextNormalizer;

impl TextNormalizer {
    /// Translate full-width digits/punctuation to ASCII and trim
    pub fn normalize_text(&self, s: &str) -> String {
        let translated: String = s
            .chars()
            .map(|c| {
                FULL_WIDTH_MAP
                    .iter()
                    .find(|(from, _)| *from == c)
                    .map(|(_, to)| *to)
                    .unwrap_or(c)
            })
            .collect();
        translated.trim().to_string()
    }

    /// Cell to normalized string; Missing and NaN map to ""
    ///
    /// Numeric cells render without a trailing ".0" when integral, so a
    /// 1200.0 read from Excel round-trips as "1200".
    pub fn clean_cell(&self, cell: &CellValue) -> String {
        match cell {
            CellValue::Missing => String::new(),
            CellValue::Numeric(v) => {
                if !v.is_finite() {
                    String::new()
                } else if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    format!("{}", *v as i64)
                } else {
                    format!("{}", v)
                }
            }
            CellValue::Text(s) => self.normalize_text(s),
        }
    }

    /// Cell to Option<String>: empty-after-normalization becomes None
    pub fn clean_optional(&self, cell: &CellValue) -> Option<String> {
        let cleaned = self.clean_cell(cell);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_digits_to_ascii() {
        let normalizer = TextNormalizer;
        assert_eq!(normalizer.normalize_text("１２３４５"), "12345");
        assert_eq!(normalizer.normalize_text("１２．５"), "12.5");
        assert_eq!(normalizer.normalize_text("－３，０００"), "-3,000");
    }

    #[test]
    fn test_full_width_space_is_preserved() {
        let normalizer = TextNormalizer;
        // interior full-width space is not in the translation table
        assert_eq!(normalizer.normalize_text("１２　３４．５"), "12　34.5");
    }

    #[test]
    fn test_japanese_text_untouched() {
        let normalizer = TextNormalizer;
        assert_eq!(normalizer.normalize_text("  奥行６００mm  "), "奥行600mm");
        assert_eq!(normalizer.normalize_text("リビング"), "リビング");
    }

    #[test]
    fn test_missing_and_nan_to_empty() {
        let normalizer = TextNormalizer;
        assert_eq!(normalizer.clean_cell(&CellValue::Missing), "");
        assert_eq!(normalizer.clean_cell(&CellValue::Numeric(f64::NAN)), "");
    }

    #[test]
    fn test_numeric_cell_renders_without_decimal_point() {
        let normalizer = TextNormalizer;
        assert_eq!(normalizer.clean_cell(&CellValue::Numeric(1200.0)), "1200");
        assert_eq!(normalizer.clean_cell(&CellValue::Numeric(12.5)), "12.5");
    }

    #[test]
    fn test_clean_optional_empty_is_none() {
        let normalizer = TextNormalizer;
        assert_eq!(normalizer.clean_optional(&CellValue::Text("   ".into())), None);
        assert_eq!(
            normalizer.clean_optional(&CellValue::Text("  Sofa  ".into())),
            Some("Sofa".to_string())
        );
    }
}
