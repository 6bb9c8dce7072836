// ==========================================
// Childcare Occupancy Planner - Waitlist Allocator
// ==========================================
// Responsibility: order the waitlist and fill remaining vacancies
// Input: waitlist entries + live seat counter (post move-up)
// Output: (child, room) placements
// Red line: consumption order is (priority, date_added) ascending;
//           a skipped entry keeps no state, it is retried on the next call
// ==========================================

use crate::domain::child::Child;
use crate::domain::room::{Room, RoomCatalog};
use crate::domain::types::TargetMonth;
use crate::domain::waitlist::WaitlistEntry;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::snapshot::SeatCounter;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

// ==========================================
// WaitlistPlacement - one filled vacancy
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistPlacement {
    pub child: Child,
    pub room: Room,
}

// ==========================================
// WaitlistAllocator - vacancy filling engine
// ==========================================
pub struct WaitlistAllocator {
    // stateless engine, no injected dependencies
}

impl WaitlistAllocator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core methods
    // ==========================================

    /// Waitlist entries eligible for the target month, resolved to
    /// `(Child, Room)` pairs and sorted by `(priority, date_added)`
    /// ascending.
    ///
    /// Eligible means `date_added <= first day of target month`.
    ///
    /// # Errors
    /// `EngineError::UnknownChild` / `UnknownRoom` on dangling references.
    #[instrument(skip(self, catalog, children, waitlist), fields(
        target_month = %target_month,
        waitlist_count = waitlist.len()
    ))]
    pub fn ordered_waitlist(
        &self,
        catalog: &RoomCatalog,
        children: &[Child],
        waitlist: &[WaitlistEntry],
        target_month: TargetMonth,
    ) -> EngineResult<Vec<(Child, Room)>> {
        let by_id: HashMap<&str, &Child> = children
            .iter()
            .map(|child| (child.child_id.as_str(), child))
            .collect();
        let cutoff = target_month.first_day();

        let mut eligible: Vec<(&WaitlistEntry, Child, Room)> = Vec::new();
        for entry in waitlist {
            if entry.date_added > cutoff {
                continue;
            }
            let child = by_id.get(entry.child_id.as_str()).copied().ok_or_else(|| {
                EngineError::UnknownChild {
                    child_id: entry.child_id.clone(),
                    referenced_by: format!("waitlist entry for room '{}'", entry.room),
                }
            })?;
            let room = catalog.get(&entry.room).ok_or_else(|| EngineError::UnknownRoom {
                room: entry.room.clone(),
                referenced_by: format!("waitlist entry for child '{}'", entry.child_id),
            })?;
            eligible.push((entry, child.clone(), room.clone()));
        }

        // stable: equal keys keep caller-supplied record order
        eligible.sort_by_key(|(entry, _, _)| entry.ordering_key());
        debug!(eligible_count = eligible.len(), "waitlist ordered");
        Ok(eligible
            .into_iter()
            .map(|(_, child, room)| (child, room))
            .collect())
    }

    /// Greedy fill: walk the ordered waitlist and hand out seats while the
    /// target room still has one. Skipped entries keep their place in the
    /// external waitlist and compete again on a later planning call.
    #[instrument(skip(self, ordered, seats), fields(ordered_count = ordered.len()))]
    pub fn fill_from_waitlist(
        &self,
        ordered: &[(Child, Room)],
        seats: &mut SeatCounter,
    ) -> Vec<WaitlistPlacement> {
        let mut placements = Vec::new();

        for (child, room) in ordered {
            if seats.has_seat(&room.name) {
                seats.claim(&room.name);
                info!(
                    child_id = %child.child_id,
                    room = %room.name,
                    remaining = seats.remaining(&room.name),
                    "waitlist vacancy filled"
                );
                placements.push(WaitlistPlacement {
                    child: child.clone(),
                    room: room.clone(),
                });
            } else {
                debug!(
                    child_id = %child.child_id,
                    room = %room.name,
                    remaining = seats.remaining(&room.name),
                    "room full, waitlist entry skipped"
                );
            }
        }

        placements
    }
}

impl Default for WaitlistAllocator {
    fn default() -> Self {
        Self::new()
    }
}
