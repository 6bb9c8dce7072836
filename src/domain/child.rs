// ==========================================
// Childcare Occupancy Planner - Child Entity
// ==========================================
// Responsibility: enrolled/prospective children and their age arithmetic
// Red line: move-up dates are recomputed from birth date + room band,
//           never read back from a stored approximation
// ==========================================

use crate::domain::room::RoomCatalog;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// Child
// ==========================================
// `room` is the current room's name; `None` means unassigned
// (e.g. a waitlist-only child). Unassigned children never count
// against any room's capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub child_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub room: Option<String>,
}

impl Child {
    /// Age in whole calendar months on the given date.
    ///
    /// Calendar-month difference; day-of-month is ignored. Negative for
    /// dates before the birth date.
    pub fn age_in_months(&self, on: NaiveDate) -> i32 {
        (on.year() - self.birth_date.year()) * 12
            + (on.month() as i32 - self.birth_date.month() as i32)
    }

    /// The date this child ages out of their current room:
    /// `birth_date + current_room.max_age months`.
    ///
    /// # Returns
    /// `None` when the child is unassigned or the room name is not in the
    /// catalog (the caller decides whether that reference is fatal).
    pub fn expected_move_up_date(&self, catalog: &RoomCatalog) -> Option<NaiveDate> {
        let room = catalog.get(self.room.as_deref()?)?;
        self.birth_date
            .checked_add_months(Months::new(room.max_age_months))
    }
}
