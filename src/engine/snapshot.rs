// ==========================================
// Childcare Occupancy Planner - Occupancy Snapshot
// ==========================================
// Responsibility: seats used/free per room for a target month
// Input: room catalog + enrolled children
// Output: SeatCounter (live, mutable within one planning call)
// Red line: one counter per planning call; move-up projection and
//           waitlist filling must share it, never re-snapshot
// ==========================================

use crate::domain::child::Child;
use crate::domain::room::RoomCatalog;
use crate::domain::types::TargetMonth;
use crate::engine::error::{EngineError, EngineResult};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

// ==========================================
// SeatCounter - live per-room seat ledger
// ==========================================
// Counts may go negative: an over-capacity room is a valid signal to
// surface, not an error, and is never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeatCounter {
    seats: BTreeMap<String, i32>,
}

impl SeatCounter {
    /// Every room starts at its full capacity.
    pub fn from_catalog(catalog: &RoomCatalog) -> Self {
        let seats = catalog
            .rooms_by_age()
            .iter()
            .map(|room| (room.name.clone(), room.capacity as i32))
            .collect();
        Self { seats }
    }

    /// Remaining seats in a room; 0 for rooms this counter does not track.
    pub fn remaining(&self, room: &str) -> i32 {
        self.seats.get(room).copied().unwrap_or(0)
    }

    /// Whether a seat can still be handed out.
    pub fn has_seat(&self, room: &str) -> bool {
        self.remaining(room) > 0
    }

    /// Take one seat. May drive the count negative when the caller is
    /// recording an existing over-capacity assignment.
    pub fn claim(&mut self, room: &str) {
        *self.seats.entry(room.to_string()).or_insert(0) -= 1;
    }

    /// Final per-room availability, in room-name order.
    pub fn into_map(self) -> BTreeMap<String, i32> {
        self.seats
    }
}

// ==========================================
// OccupancyProjector - snapshot engine
// ==========================================
pub struct OccupancyProjector {
    // stateless engine, no injected dependencies
}

impl OccupancyProjector {
    pub fn new() -> Self {
        Self {}
    }

    /// Available seats per room for the target month.
    ///
    /// Rules:
    /// 1) every room starts at `capacity`
    /// 2) a child whose move-up date is strictly before the 1st of the
    ///    target month is presumed to have vacated and is not counted
    /// 3) every other assigned child takes one seat
    /// 4) unassigned children take no seat anywhere
    ///
    /// # Errors
    /// `EngineError::UnknownRoom` when a child references a room that is
    /// not in the catalog.
    #[instrument(skip(self, catalog, children), fields(
        target_month = %target_month,
        children_count = children.len()
    ))]
    pub fn available_seats(
        &self,
        catalog: &RoomCatalog,
        children: &[Child],
        target_month: TargetMonth,
    ) -> EngineResult<SeatCounter> {
        let mut counter = SeatCounter::from_catalog(catalog);
        let cutoff = target_month.first_day();

        for child in children {
            let Some(room_name) = child.room.as_deref() else {
                continue;
            };
            if catalog.get(room_name).is_none() {
                return Err(EngineError::UnknownRoom {
                    room: room_name.to_string(),
                    referenced_by: format!("child '{}'", child.child_id),
                });
            }

            if let Some(move_up) = child.expected_move_up_date(catalog) {
                if move_up < cutoff {
                    debug!(
                        child_id = %child.child_id,
                        room = room_name,
                        move_up_date = %move_up,
                        "presumed vacated before target month, seat not held"
                    );
                    continue;
                }
            }

            counter.claim(room_name);
        }

        Ok(counter)
    }
}

impl Default for OccupancyProjector {
    fn default() -> Self {
        Self::new()
    }
}
