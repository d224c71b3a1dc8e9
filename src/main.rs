// ==========================================
// Furniture Catalog - import entry point
// ==========================================
// Usage:
//   furniture-catalog <spreadsheet> [db_path]
//
// db_path defaults to $FURNIDB_PATH, then "furniture.db".
// The final report is printed as JSON on stdout.
// ==========================================

use furniture_catalog::{logging, CatalogImporter, ImportConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", furniture_catalog::APP_NAME, furniture_catalog::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let source_path = args
        .next()
        .ok_or("usage: furniture-catalog <spreadsheet> [db_path]")?;

    let mut config = ImportConfig::from_env(source_path.as_str());
    if let Some(db_path) = args.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        config.db_path = db_path;
    }
    tracing::info!("database: {}", config.db_path);

    let importer = CatalogImporter::new(config)?;
    let report = importer.run()?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
