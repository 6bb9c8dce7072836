// ==========================================
// Facility snapshot loading tests
// ==========================================
// Target: JSON snapshot file -> validated planning inputs
// ==========================================

use childcare_occupancy::{logging, ConfigError, FacilityFile, TargetMonth, TransitionPlanner};
use std::io::Write;
use tempfile::NamedTempFile;

#[path = "test_helpers.rs"]
mod test_helpers;
use test_helpers::date;

const SNAPSHOT: &str = r#"{
    "rooms": [
        {"name": "Infant", "min_age_months": 0, "max_age_months": 12, "capacity": 2},
        {"name": "YoungToddler", "min_age_months": 12, "max_age_months": 18, "capacity": 1}
    ],
    "children": [
        {"child_id": "X", "name": "Child X", "birth_date": "2025-06-20", "room": "Infant"},
        {"child_id": "W", "name": "Child W", "birth_date": "2025-11-01", "room": null}
    ],
    "waitlist": [
        {"child_id": "W", "room": "Infant", "priority": 1, "date_added": "2025-12-01"}
    ]
}"#;

fn write_snapshot(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_snapshot_and_plan() {
    logging::init_test();
    let file = write_snapshot(SNAPSHOT);
    let target_month = TargetMonth::new(2026, 6).unwrap();

    let facility = FacilityFile::load(file.path())
        .unwrap()
        .into_facility(target_month.first_day())
        .unwrap();

    assert_eq!(facility.catalog.rooms_by_age().len(), 2);
    assert_eq!(facility.children.len(), 2);
    assert_eq!(facility.waitlist.len(), 1);

    let plan = TransitionPlanner::new()
        .optimize_occupancy(
            &facility.catalog,
            &facility.children,
            &facility.waitlist,
            target_month,
        )
        .unwrap();

    // X moves up into YoungToddler; W backfills Infant's second seat
    // (X still holds the first one within June)
    assert_eq!(plan.room_transitions["YoungToddler"].moving_in[0].child_id, "X");
    assert_eq!(plan.waitlist_filled.len(), 1);
    assert_eq!(plan.waitlist_filled[0].child.child_id, "W");
    assert_eq!(plan.final_available_spaces["Infant"], 0);
    assert_eq!(plan.final_available_spaces["YoungToddler"], 0);
}

#[test]
fn test_missing_sections_default_to_empty() {
    logging::init_test();
    let file = write_snapshot(
        r#"{"rooms": [{"name": "Infant", "min_age_months": 0, "max_age_months": 12, "capacity": 2}]}"#,
    );

    let facility = FacilityFile::load(file.path())
        .unwrap()
        .into_facility(date(2026, 6, 1))
        .unwrap();

    assert!(facility.children.is_empty());
    assert!(facility.waitlist.is_empty());
}

#[test]
fn test_duplicate_room_is_rejected() {
    logging::init_test();
    let file = write_snapshot(
        r#"{"rooms": [
            {"name": "Infant", "min_age_months": 0, "max_age_months": 12, "capacity": 2},
            {"name": "Infant", "min_age_months": 12, "max_age_months": 18, "capacity": 2}
        ]}"#,
    );

    let err = FacilityFile::load(file.path())
        .unwrap()
        .into_facility(date(2026, 6, 1))
        .unwrap_err();

    assert!(matches!(err, ConfigError::Catalog(_)));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    logging::init_test();
    let file = write_snapshot("{ not json");

    let err = FacilityFile::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    logging::init_test();
    let err = FacilityFile::load(std::path::Path::new("/nonexistent/facility.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
