// ==========================================
// Childcare Occupancy Planner - Transition Record
// ==========================================
// Responsibility: the confirmation checklist for one planned move
// Red line: committing a move (writing the child's new room) belongs to
//           the collaborator that owns persistence, not to the engines
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// TransitionRecord
// ==========================================
// Produced from an accepted plan, one per moving child. Tracks the
// human steps that must all happen before the move is real: parents
// confirm, the external roster system is updated, the local records
// are updated, and the tuition rate is adjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub child_id: String,
    pub from_room: String,
    pub to_room: String,
    pub start_date: NaiveDate,

    // ===== confirmation checklist =====
    pub parents_agree: bool,
    pub roster_updated: bool,
    pub records_updated: bool,
    pub tuition_updated: bool,
}

impl TransitionRecord {
    /// A fresh record with an empty checklist.
    pub fn new(child_id: &str, from_room: &str, to_room: &str, start_date: NaiveDate) -> Self {
        Self {
            child_id: child_id.to_string(),
            from_room: from_room.to_string(),
            to_room: to_room.to_string(),
            start_date,
            parents_agree: false,
            roster_updated: false,
            records_updated: false,
            tuition_updated: false,
        }
    }

    /// Whether the transition may be committed: every checklist item is
    /// done and the start date has been reached.
    pub fn is_complete(&self, today: NaiveDate) -> bool {
        self.parents_agree
            && self.roster_updated
            && self.records_updated
            && self.tuition_updated
            && today >= self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_until_every_step_done() {
        let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let mut record = TransitionRecord::new("C1", "Infant", "YoungToddler", start);

        assert!(!record.is_complete(start));
        record.parents_agree = true;
        record.roster_updated = true;
        record.records_updated = true;
        assert!(!record.is_complete(start));
        record.tuition_updated = true;
        assert!(record.is_complete(start));
    }

    #[test]
    fn test_not_complete_before_start_date() {
        let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let mut record = TransitionRecord::new("C1", "Infant", "YoungToddler", start);
        record.parents_agree = true;
        record.roster_updated = true;
        record.records_updated = true;
        record.tuition_updated = true;

        assert!(!record.is_complete(NaiveDate::from_ymd_opt(2026, 5, 31).unwrap()));
        assert!(record.is_complete(NaiveDate::from_ymd_opt(2026, 6, 2).unwrap()));
    }
}
