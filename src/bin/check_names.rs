// Maintenance check: scan Type/Room names for embedded newline
// characters (malformed source rows that leaked into the name tables).
//
// Usage:
//   cargo run --bin check_names -- [db_path]

use furniture_catalog::config::{DB_PATH_ENV, DEFAULT_DB_PATH};
use furniture_catalog::CatalogStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(DB_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let store = CatalogStore::new(&db_path)?;
    let anomalies = store.find_names_with_newlines()?;

    if anomalies.is_empty() {
        println!("No Type/Room name contains a newline");
        return Ok(());
    }

    for anomaly in &anomalies {
        // {:?} makes the \n visible
        println!(
            "- table={}, id={}, name={:?}",
            anomaly.table, anomaly.id, anomaly.name
        );
    }
    println!("Found {} record(s) with newline in name", anomalies.len());
    Ok(())
}
