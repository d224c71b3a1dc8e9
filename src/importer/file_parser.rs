// ==========================================
// Furniture Catalog - file parsers
// ==========================================
// Excel (.xlsx/.xls) via calamine, CSV via the csv crate.
// Both produce the same TableData: a two-row header region at
// configured offsets plus typed data rows.
// ==========================================

use crate::domain::CellValue;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// One data row with its 1-based position inside the data region
///
/// Positions are assigned before blank-row skipping, so they stay
/// traceable back to the physical sheet.
#[derive(Debug, Clone)]
pub struct DataRow {
    pub position: usize,
    pub cells: Vec<CellValue>,
}

/// Parsed tabular source: the two physical header rows plus data rows
#[derive(Debug, Clone)]
pub struct TableData {
    pub parent_header: Vec<CellValue>,
    pub child_header: Vec<CellValue>,
    pub rows: Vec<DataRow>,
}

pub trait FileParser {
    /// Parse the file, taking rows `header_rows.0` and `header_rows.1`
    /// (0-based, within the used range) as the merged header region.
    /// Data starts on the row after the second header row; fully blank
    /// data rows are dropped.
    fn parse(&self, file_path: &Path, header_rows: (usize, usize)) -> ImportResult<TableData>;
}

/// Assemble TableData out of a full grid of typed rows
fn split_header_region(
    mut grid: Vec<Vec<CellValue>>,
    header_rows: (usize, usize),
) -> ImportResult<TableData> {
    let (parent_at, child_at) = header_rows;
    if grid.len() <= child_at {
        return Err(ImportError::HeaderRowMissing(child_at));
    }

    let data = grid.split_off(child_at + 1);
    let child_header = grid.pop().unwrap_or_default();
    let parent_header = grid
        .get(parent_at)
        .cloned()
        .ok_or(ImportError::HeaderRowMissing(parent_at))?;

    let rows = data
        .into_iter()
        .enumerate()
        .map(|(idx, cells)| DataRow {
            position: idx + 1,
            cells,
        })
        .filter(|row| !row.cells.iter().all(CellValue::is_missing))
        .collect();

    Ok(TableData {
        parent_header,
        child_header,
        rows,
    })
}

// ==========================================
// Excel parser
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    fn cell_value(cell: &Data) -> CellValue {
        match cell {
            Data::Empty | Data::Error(_) => CellValue::Missing,
            Data::Float(f) => CellValue::Numeric(*f),
            Data::Int(i) => CellValue::Numeric(*i as f64),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            Data::DateTime(dt) => CellValue::Numeric(dt.as_f64()),
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                CellValue::from_raw_text(s)
            }
        }
    }
}

impl FileParser for ExcelParser {
    fn parse(&self, file_path: &Path, header_rows: (usize, usize)) -> ImportResult<TableData> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // auto-detection picks the right backend for .xlsx and legacy .xls
        let mut workbook = open_workbook_auto(file_path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let grid: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(Self::cell_value).collect())
            .collect();

        split_header_region(grid, header_rows)
    }
}

// ==========================================
// CSV parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse(&self, file_path: &Path, header_rows: (usize, usize)) -> ImportResult<TableData> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        if let Some(ext) = file_path.extension() {
            if ext.to_string_lossy().to_lowercase() != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // the header region is positional, not csv-style
            .flexible(true) // ragged rows surface as row-level errors later
            .from_reader(file);

        let mut grid = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record.iter().map(CellValue::from_raw_text).collect();
            grid.push(row);
        }

        split_header_region(grid, header_rows)
    }
}

// ==========================================
// Universal parser (dispatch on extension)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(
        &self,
        file_path: P,
        header_rows: (usize, usize),
    ) -> ImportResult<TableData> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path, header_rows),
            "xlsx" | "xls" => ExcelParser.parse(path, header_rows),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_csv_parser_header_region() {
        let file = write_csv(&[
            "西尾家具製品一覧,,,,",
            ",,,,",
            "室名,品名,寸法,,",
            ",,W,D,H",
            "Living,Sofa,1200,600,700",
        ]);

        let table = CsvParser.parse(file.path(), (2, 3)).unwrap();
        assert_eq!(table.parent_header[0], CellValue::Text("室名".to_string()));
        assert_eq!(table.child_header[2], CellValue::Text("W".to_string()));
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].position, 1);
    }

    #[test]
    fn test_csv_parser_skips_blank_rows_keeps_positions() {
        let file = write_csv(&[
            ",,",
            ",,",
            "室名,品名,品番",
            ",,",
            "Living,Sofa,A-1",
            ",,",
            "Kitchen,Table,B-2",
        ]);

        let table = CsvParser.parse(file.path(), (2, 3)).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].position, 1);
        // the blank row between data rows still advances the position
        assert_eq!(table.rows[1].position, 3);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse(Path::new("does_not_exist.csv"), (2, 3));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_header_region_beyond_file_is_error() {
        let file = write_csv(&["only,one,row"]);
        let result = CsvParser.parse(file.path(), (2, 3));
        assert!(matches!(result, Err(ImportError::HeaderRowMissing(3))));
    }

    #[test]
    fn test_xls_extension_reaches_the_excel_parser() {
        // .xls is an accepted spreadsheet extension; a file that is not
        // actually a workbook must fail as a parse error, not as an
        // unsupported format
        let mut file = Builder::new().suffix(".xls").tempfile().unwrap();
        writeln!(file, "not a workbook").unwrap();
        file.flush().unwrap();

        let result = UniversalFileParser.parse(file.path(), (2, 3));
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let result = UniversalFileParser.parse(Path::new("catalog.txt"), (2, 3));
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
