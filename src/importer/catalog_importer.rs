// ==========================================
// CatalogImporter - the import pipeline
// ==========================================
// Flow: parse → flatten headers → resolve columns → validate →
//       reset furniture → per-row normalize/upsert/insert → report
// One row's failure never aborts the run; missing required columns do.
// ==========================================

use crate::config::ImportConfig;
use crate::domain::catalog::{FurnitureRecord, ImportReport, RowError};
use crate::domain::CellValue;
use crate::importer::column_resolver::{ColumnIndices, ColumnResolver};
use crate::importer::data_cleaner::TextNormalizer;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{DataRow, UniversalFileParser};
use crate::importer::header_flattener::HeaderFlattener;
use crate::importer::numeric_extractor::NumericExtractor;
use crate::repository::CatalogStore;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct CatalogImporter {
    config: ImportConfig,
    store: CatalogStore,
    parser: UniversalFileParser,
    flattener: HeaderFlattener,
    resolver: ColumnResolver,
    normalizer: TextNormalizer,
    extractor: NumericExtractor,
}

impl CatalogImporter {
    /// Build an importer, opening the store at the configured db path
    pub fn new(config: ImportConfig) -> ImportResult<Self> {
        let store = CatalogStore::new(&config.db_path)?;
        Ok(Self::with_store(config, store))
    }

    /// Build an importer on an existing store (shared connection)
    pub fn with_store(config: ImportConfig, store: CatalogStore) -> Self {
        Self {
            config,
            store,
            parser: UniversalFileParser,
            flattener: HeaderFlattener::new(),
            resolver: ColumnResolver,
            normalizer: TextNormalizer,
            extractor: NumericExtractor::new(),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Run one full import
    ///
    /// Fatal: unreadable source, unresolved required columns, unreachable
    /// store. Everything row-scoped is recovered: the row is skipped,
    /// counted, and sampled into the report.
    pub fn run(&self) -> ImportResult<ImportReport> {
        let start = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, source = %self.config.source_path, "starting catalog import");

        // === Step 1: parse the source with its two-row header region ===
        let table = self
            .parser
            .parse(&self.config.source_path, self.config.header_rows)?;
        info!(rows = table.rows.len(), "source parsed");

        // === Step 2: flatten headers, resolve logical columns ===
        let headers = self
            .flattener
            .flatten_merged(&table.parent_header, &table.child_header);
        let indices = self.resolver.resolve_all(&headers, &self.config.candidates);
        let columns = indices.to_resolved_columns(&headers);
        info!(
            room = ?columns.room,
            type_name = ?columns.type_name,
            code = ?columns.code,
            width = ?columns.width,
            depth = ?columns.depth,
            height = ?columns.height,
            "columns resolved"
        );

        // === Step 3: validate required columns ===
        let missing = indices.missing_required();
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns {
                missing,
                available: headers,
            });
        }

        // === Step 4: full rebuild of the furniture table ===
        let dropped = self.store.reset_furniture()?;
        debug!(dropped = dropped, "furniture table reset");

        // === Step 5: per-row import, failures recovered locally ===
        let total_rows = table.rows.len();
        let mut inserted = 0usize;
        let mut skipped = 0usize;
        let mut errors: Vec<RowError> = Vec::new();

        for row in &table.rows {
            match self.import_row(row, &indices) {
                Ok(()) => inserted += 1,
                Err(e) => {
                    skipped += 1;
                    warn!(row = row.position, error = %e, "row skipped");
                    if errors.len() < self.config.max_error_sample {
                        errors.push(RowError {
                            row: row.position,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        // === Step 6: null-dimension diagnostics ===
        let null_width_rows = self.store.null_width_rows()?;
        let null_depth_rows = self.store.null_depth_rows()?;
        if !null_width_rows.is_empty() || !null_depth_rows.is_empty() {
            info!(
                null_width = null_width_rows.len(),
                null_depth = null_depth_rows.len(),
                "rows with null dimensions (manual follow-up)"
            );
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            batch_id = %batch_id,
            total = total_rows,
            inserted = inserted,
            skipped = skipped,
            elapsed_ms = elapsed_ms,
            "catalog import finished"
        );

        Ok(ImportReport {
            batch_id,
            total_rows,
            inserted,
            skipped,
            errors,
            columns,
            null_width_rows,
            null_depth_rows,
            imported_at: Utc::now(),
            elapsed_ms,
        })
    }

    /// Import a single source row: upsert type/room, parse dimensions,
    /// apply the depth fallback, insert
    fn import_row(&self, row: &DataRow, indices: &ColumnIndices) -> ImportResult<()> {
        // required columns were validated, the indices are present
        let type_cell = self.required_cell(row, indices.type_name, "type")?;
        let room_cell = self.required_cell(row, indices.room, "room")?;
        let code_cell = self.required_cell(row, indices.code, "code")?;

        let type_name = self.normalizer.clean_cell(type_cell);
        let room_name = self.normalizer.clean_cell(room_cell);
        let code = self.normalizer.clean_optional(code_cell);

        // upsert before insert keeps the references valid
        let type_id = self.store.upsert_type(&type_name)?;
        let room_id = self.store.upsert_room(&room_name)?;

        let width_mm = self.parse_dimension(row, indices.width);
        let mut depth_mm = self.parse_dimension(row, indices.depth);
        let height_mm = self.parse_dimension(row, indices.height);

        // depth unspecified or unparseable: assume square in depth
        if self.config.depth_falls_back_to_width && depth_mm.is_none() {
            depth_mm = width_mm;
        }

        self.store.insert_furniture(&FurnitureRecord {
            row_index: row.position as i64,
            code,
            width_mm,
            depth_mm,
            height_mm,
            type_id,
            room_id,
        })?;
        Ok(())
    }

    /// Cell of a required column; absent from a ragged row is a row error
    fn required_cell<'a>(
        &self,
        row: &'a DataRow,
        index: Option<usize>,
        field: &str,
    ) -> ImportResult<&'a CellValue> {
        // resolution was validated before the row loop
        let index = index.ok_or_else(|| ImportError::RowError {
            row: row.position,
            message: format!("{} column unresolved", field),
        })?;
        row.cells.get(index).ok_or_else(|| ImportError::RowError {
            row: row.position,
            message: format!(
                "{} cell missing: row has {} cells, column index {} out of range",
                field,
                row.cells.len(),
                index
            ),
        })
    }

    /// Lenient dimension parse; absent column or short row is simply null
    fn parse_dimension(&self, row: &DataRow, index: Option<usize>) -> Option<i64> {
        index
            .and_then(|i| row.cells.get(i))
            .and_then(|cell| self.extractor.parse_value(cell, self.config.extract_mode))
    }
}
