// ==========================================
// Childcare Occupancy Planner - Waitlist Entry
// ==========================================
// Responsibility: externally managed waitlist records
// Red line: lower priority number = more urgent; ties break on date_added
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// WaitlistEntry
// ==========================================
// References a child and the room the family is waiting for.
// Referential integrity is the caller's contract; the engines treat a
// dangling reference as a fatal precondition violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub child_id: String,
    pub room: String,
    pub priority: u32,
    pub date_added: NaiveDate,
}

impl WaitlistEntry {
    /// Consumption order: `(priority, date_added)` ascending.
    pub fn ordering_key(&self) -> (u32, NaiveDate) {
        (self.priority, self.date_added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: u32, date: NaiveDate) -> WaitlistEntry {
        WaitlistEntry {
            child_id: "C1".to_string(),
            room: "Infant".to_string(),
            priority,
            date_added: date,
        }
    }

    #[test]
    fn test_ordering_key_priority_beats_date() {
        let early_low = entry(2, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let late_high = entry(1, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(late_high.ordering_key() < early_low.ordering_key());
    }

    #[test]
    fn test_ordering_key_date_breaks_tie() {
        let a = entry(1, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        let b = entry(1, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(a.ordering_key() < b.ordering_key());
    }
}
