// ==========================================
// Test helpers
// ==========================================
// Responsibility: shared builders for rooms, children and waitlist
// entries used by the engine integration tests
// ==========================================

use childcare_occupancy::{Child, Room, RoomCatalog, WaitlistEntry};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn room(name: &str, min_age: u32, max_age: u32, capacity: u32) -> Room {
    Room {
        name: name.to_string(),
        min_age_months: min_age,
        max_age_months: max_age,
        capacity,
    }
}

/// The full five-room ladder most tests run against.
pub fn standard_catalog() -> RoomCatalog {
    RoomCatalog::new(vec![
        room("Infant", 0, 12, 2),
        room("YoungToddler", 12, 18, 3),
        room("Toddler", 18, 30, 4),
        room("TransitionalPreschool", 30, 48, 5),
        room("Preschool", 48, 60, 6),
    ])
    .unwrap()
}

pub fn child(child_id: &str, birth_date: NaiveDate, room: Option<&str>) -> Child {
    Child {
        child_id: child_id.to_string(),
        name: format!("Child {child_id}"),
        birth_date,
        room: room.map(str::to_string),
    }
}

pub fn waitlist_entry(
    child_id: &str,
    room: &str,
    priority: u32,
    date_added: NaiveDate,
) -> WaitlistEntry {
    WaitlistEntry {
        child_id: child_id.to_string(),
        room: room.to_string(),
        priority,
        date_added,
    }
}
