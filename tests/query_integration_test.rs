// ==========================================
// QueryService integration tests
// ==========================================
// Import a fixture, then exercise the two read-side lookups
// ==========================================


use furniture_catalog::{logging, CatalogImporter, ImportConfig, QueryService};
use test_helpers::{catalog_fixture, create_test_db};

fn imported_db() -> (tempfile::NamedTempFile, String) {
    let (db_file, db_path) = create_test_db();
    let fixture = catalog_fixture(&[
        "Living Room,Sofa,S-1,1200,600,700",
        "Living Room,Sofa-2,S-2,1400,650,700",
        "Office,Sofa,S-3,1100,550,680",
        "Kitchen,Table,T-1,800,800,720",
    ]);

    let config = ImportConfig::new(fixture.path().to_str().unwrap(), db_path.as_str());
    let importer = CatalogImporter::new(config).unwrap();
    let report = importer.run().expect("import");
    assert_eq!(report.inserted, 4);
    (db_file, db_path)
}

#[test]
fn test_by_type_is_exact() {
    logging::init_test();
    let (_db_file, db_path) = imported_db();
    let query = QueryService::new(&db_path).unwrap();

    let sofas = query.furniture_by_type("Sofa").unwrap();
    assert_eq!(sofas.len(), 2);
    // "Sofa" never matches "Sofa-2"
    assert!(sofas.iter().all(|f| f.type_name == "Sofa"));

    let sofa2 = query.furniture_by_type("Sofa-2").unwrap();
    assert_eq!(sofa2.len(), 1);
    assert_eq!(sofa2[0].code.as_deref(), Some("S-2"));
}

#[test]
fn test_by_room_substring_case_insensitive() {
    logging::init_test();
    let (_db_file, db_path) = imported_db();
    let query = QueryService::new(&db_path).unwrap();

    let living = query.furniture_by_room("liv").unwrap();
    assert_eq!(living.len(), 2);
    assert!(living.iter().all(|f| f.room_name == "Living Room"));

    // full name in the wrong case still matches
    let upper = query.furniture_by_room("LIVING ROOM").unwrap();
    assert_eq!(upper.len(), 2);

    // substring shared by several rooms returns all of them: "o" is in
    // "Living Room" and "Office" but not "Kitchen"
    let shared = query.furniture_by_room("o").unwrap();
    assert_eq!(shared.len(), 3);
    assert!(shared.iter().all(|f| f.room_name != "Kitchen"));
}

#[test]
fn test_projections_carry_references() {
    logging::init_test();
    let (_db_file, db_path) = imported_db();
    let query = QueryService::new(&db_path).unwrap();

    let by_type = query.furniture_by_type("Sofa").unwrap();
    let by_room = query.furniture_by_room("Living").unwrap();

    // by-type rows carry the room reference, by-room rows the type reference;
    // S-1 appears in both result sets and its references must line up
    let s1_by_type = by_type.iter().find(|f| f.code.as_deref() == Some("S-1")).unwrap();
    let s1_by_room = by_room.iter().find(|f| f.code.as_deref() == Some("S-1")).unwrap();
    let s3 = by_type.iter().find(|f| f.code.as_deref() == Some("S-3")).unwrap();
    assert_ne!(s1_by_type.room_id, s3.room_id);
    assert_eq!(s1_by_type.width_mm, s1_by_room.width_mm);
}

#[test]
fn test_no_match_is_empty_not_error() {
    logging::init_test();
    let (_db_file, db_path) = imported_db();
    let query = QueryService::new(&db_path).unwrap();
    assert!(query.furniture_by_type("Bed").unwrap().is_empty());
    assert!(query.furniture_by_room("garage").unwrap().is_empty());
}
