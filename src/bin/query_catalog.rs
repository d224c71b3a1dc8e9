// Small lookup utility over an imported catalog.
//
// Usage:
//   cargo run --bin query_catalog -- <type_name> <room_query> [db_path]
//
// Prints furniture matching the type name exactly, then furniture whose
// room name contains the query case-insensitively.

use furniture_catalog::config::{DB_PATH_ENV, DEFAULT_DB_PATH};
use furniture_catalog::QueryService;

fn dim(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| "null".to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let type_name = args
        .next()
        .ok_or("usage: query_catalog <type_name> <room_query> [db_path]")?
        .trim()
        .trim_matches('"')
        .to_string();
    let room_query = args
        .next()
        .ok_or("usage: query_catalog <type_name> <room_query> [db_path]")?
        .trim()
        .trim_matches('"')
        .to_string();
    let db_path = args
        .next()
        .or_else(|| std::env::var(DB_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let service = QueryService::new(&db_path)?;

    let by_type = service.furniture_by_type(&type_name)?;
    println!("Furniture by Type '{}': {} item(s)", type_name, by_type.len());
    for f in &by_type {
        println!(
            "Code: {}, W: {}, D: {}, H: {}",
            f.code.as_deref().unwrap_or("null"),
            dim(f.width_mm),
            dim(f.depth_mm),
            dim(f.height_mm)
        );
    }

    let by_room = service.furniture_by_room(&room_query)?;
    println!();
    println!("Furniture by Room '{}': {} item(s)", room_query, by_room.len());
    for f in &by_room {
        println!(
            "Code: {}, W: {}, D: {}, H: {} ({})",
            f.code.as_deref().unwrap_or("null"),
            dim(f.width_mm),
            dim(f.depth_mm),
            dim(f.height_mm),
            f.room_name
        );
    }

    Ok(())
}
