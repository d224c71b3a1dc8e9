// ==========================================
// Furniture Catalog - header flattener
// ==========================================
// The catalog workbook carries a two-row merged header: a parent label
// (寸法) visually spans its child columns (W/D/H). In the raw grid the
// parent appears only in the first cell of the span; continuation cells
// read back empty and must be forward-filled before joining.
// ==========================================

use crate::domain::CellValue;
use crate::importer::data_cleaner::TextNormalizer;

/// Separator between parent and child segments of a flattened name
const SEGMENT_SEPARATOR: &str = "_";

pub struct HeaderFlattener {
    normalizer: TextNormalizer,
}

impl HeaderFlattener {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer,
        }
    }

    /// Collapse a two-row merged header into flat names
    ///
    /// Parent cells are forward-filled across merged spans, then each
    /// column becomes "parent_child" with empty/placeholder segments
    /// dropped. A column empty in both rows flattens to "" (it can never
    /// match a candidate label). The result covers the longer of the two
    /// rows.
    pub fn flatten_merged(&self, parent: &[CellValue], child: &[CellValue]) -> Vec<String> {
        let width = parent.len().max(child.len());
        let mut names = Vec::with_capacity(width);
        let mut carried_parent: Option<String> = None;

        for col in 0..width {
            let parent_seg = self.segment(parent.get(col));
            if let Some(p) = parent_seg {
                carried_parent = Some(p);
            }
            let child_seg = self.segment(child.get(col));

            let segments: Vec<&str> = carried_parent
                .as_deref()
                .into_iter()
                .chain(child_seg.as_deref())
                .collect();
            names.push(segments.join(SEGMENT_SEPARATOR));
        }
        names
    }

    /// Pass-through for sources that already have a single header row
    pub fn flatten_single(&self, row: &[CellValue]) -> Vec<String> {
        row.iter()
            .map(|cell| self.segment(Some(cell)).unwrap_or_default())
            .collect()
    }

    /// A usable header segment, or None for empty / placeholder cells
    ///
    /// "nan" is the stringified missing marker some exports leave behind
    /// in merged header regions; it must never leak into a flattened name.
    fn segment(&self, cell: Option<&CellValue>) -> Option<String> {
        let cell = cell?;
        if cell.is_missing() {
            return None;
        }
        let cleaned = self.normalizer.clean_cell(cell);
        if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
            None
        } else {
            Some(cleaned)
        }
    }
}

impl Default for HeaderFlattener {
    fn default() -> Self {
        Self::new()
    }
}
