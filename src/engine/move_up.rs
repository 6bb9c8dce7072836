// ==========================================
// Childcare Occupancy Planner - Move-Up Projector
// ==========================================
// Responsibility: which children age out of their room by the target
//                 month, and where they can go
// Input: room catalog + enrolled children + live seat counter
// Output: per-room moving_in / moving_out lists
// Red line: single greedy pass, earliest move-up date served first;
//           a blocked child is simply not moved, no partial state
// ==========================================

use crate::domain::child::Child;
use crate::domain::room::RoomCatalog;
use crate::domain::types::TargetMonth;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::snapshot::{OccupancyProjector, SeatCounter};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

// ==========================================
// RoomTransition - one room's in/out lists
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomTransition {
    pub moving_in: Vec<Child>,
    pub moving_out: Vec<Child>,
}

/// Room name -> transition lists, in room-name order.
pub type RoomTransitions = BTreeMap<String, RoomTransition>;

// ==========================================
// MoveUpProjector - move-up projection engine
// ==========================================
pub struct MoveUpProjector {
    // stateless engine, no injected dependencies
}

impl MoveUpProjector {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core methods
    // ==========================================

    /// Children whose move-up date falls inside the target month
    /// (same year and month), ascending by move-up date.
    ///
    /// Unassigned children have no move-up date and are excluded.
    ///
    /// # Errors
    /// `EngineError::UnknownRoom` when a child references a room that is
    /// not in the catalog.
    #[instrument(skip(self, catalog, children), fields(
        target_month = %target_month,
        children_count = children.len()
    ))]
    pub fn children_moving_up(
        &self,
        catalog: &RoomCatalog,
        children: &[Child],
        target_month: TargetMonth,
    ) -> EngineResult<Vec<Child>> {
        let mut moving: Vec<(chrono::NaiveDate, Child)> = Vec::new();

        for child in children {
            if let Some(room_name) = child.room.as_deref() {
                if catalog.get(room_name).is_none() {
                    return Err(EngineError::UnknownRoom {
                        room: room_name.to_string(),
                        referenced_by: format!("child '{}'", child.child_id),
                    });
                }
            }
            if let Some(move_up) = child.expected_move_up_date(catalog) {
                if target_month.contains(move_up) {
                    moving.push((move_up, child.clone()));
                }
            }
        }

        // stable: equal dates keep caller-supplied record order
        moving.sort_by_key(|(date, _)| *date);
        debug!(moving_count = moving.len(), "move-up window resolved");
        Ok(moving.into_iter().map(|(_, child)| child).collect())
    }

    /// Greedy single-pass placement of the move-up cohort against a live
    /// seat counter.
    ///
    /// For each child, earliest move-up date first:
    /// 1) no qualifying next room -> excluded (leaves the room sequence)
    /// 2) next room has a free seat -> recorded under both rooms, seat claimed
    /// 3) no seat -> the child is not moved in this pass
    ///
    /// The counter is shared with the waitlist fill that follows in the
    /// same planning call.
    #[instrument(skip(self, catalog, children, seats), fields(target_month = %target_month))]
    pub fn project_transitions_with_seats(
        &self,
        catalog: &RoomCatalog,
        children: &[Child],
        target_month: TargetMonth,
        seats: &mut SeatCounter,
    ) -> EngineResult<RoomTransitions> {
        let moving = self.children_moving_up(catalog, children, target_month)?;
        let mut transitions = RoomTransitions::new();

        for child in moving {
            // a move-up date implies an assigned, known room
            let current = match child.room.as_deref().and_then(|name| catalog.get(name)) {
                Some(room) => room,
                None => continue,
            };

            let Some(next) = catalog.next_room(current) else {
                debug!(
                    child_id = %child.child_id,
                    room = %current.name,
                    "top of room sequence, placement left to the caller"
                );
                continue;
            };

            if seats.has_seat(&next.name) {
                seats.claim(&next.name);
                info!(
                    child_id = %child.child_id,
                    from_room = %current.name,
                    to_room = %next.name,
                    remaining = seats.remaining(&next.name),
                    "move-up placed"
                );
                transitions
                    .entry(current.name.clone())
                    .or_default()
                    .moving_out
                    .push(child.clone());
                transitions
                    .entry(next.name.clone())
                    .or_default()
                    .moving_in
                    .push(child);
            } else {
                debug!(
                    child_id = %child.child_id,
                    to_room = %next.name,
                    remaining = seats.remaining(&next.name),
                    "no seat in next room, child not moved this pass"
                );
            }
        }

        Ok(transitions)
    }

    /// Standalone projection: builds a fresh seat counter from the
    /// occupancy snapshot and runs one placement pass against it.
    pub fn project_transitions(
        &self,
        catalog: &RoomCatalog,
        children: &[Child],
        target_month: TargetMonth,
    ) -> EngineResult<RoomTransitions> {
        let mut seats =
            OccupancyProjector::new().available_seats(catalog, children, target_month)?;
        self.project_transitions_with_seats(catalog, children, target_month, &mut seats)
    }
}

impl Default for MoveUpProjector {
    fn default() -> Self {
        Self::new()
    }
}
