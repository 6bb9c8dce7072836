// ==========================================
// Childcare Occupancy Planner - Transition Planner
// ==========================================
// Responsibility: orchestrate snapshot, move-up projection and waitlist
//                 fill into one per-month transition plan
// Red line: one seat counter threaded through the whole call; planning
//           is read-only, committing a plan is a collaborator's write
// ==========================================

use crate::domain::child::Child;
use crate::domain::room::RoomCatalog;
use crate::domain::transition::TransitionRecord;
use crate::domain::types::TargetMonth;
use crate::domain::waitlist::WaitlistEntry;
use crate::engine::allocator::{WaitlistAllocator, WaitlistPlacement};
use crate::engine::error::EngineResult;
use crate::engine::move_up::{MoveUpProjector, RoomTransitions};
use crate::engine::snapshot::OccupancyProjector;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument};

// ==========================================
// TransitionPlan - the planning result
// ==========================================
// Recomputed fresh per call; never cached, never mutated after return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionPlan {
    pub room_transitions: RoomTransitions,
    pub waitlist_filled: Vec<WaitlistPlacement>,
    pub final_available_spaces: BTreeMap<String, i32>,
}

impl TransitionPlan {
    /// Materialize confirmation records for the planned move-ups, one per
    /// moving child, for hand-off to the collaborator that commits moves.
    ///
    /// Waitlist placements are new enrollments, not room transitions, and
    /// go through the enrollment workflow instead.
    pub fn transition_records(&self, start_date: NaiveDate) -> Vec<TransitionRecord> {
        let mut records = Vec::new();
        for (to_room, transition) in &self.room_transitions {
            for child in &transition.moving_in {
                if let Some(from_room) = child.room.as_deref() {
                    records.push(TransitionRecord::new(
                        &child.child_id,
                        from_room,
                        to_room,
                        start_date,
                    ));
                }
            }
        }
        records
    }
}

// ==========================================
// TransitionPlanner - engine orchestrator
// ==========================================
pub struct TransitionPlanner {
    occupancy: OccupancyProjector,
    move_up: MoveUpProjector,
    allocator: WaitlistAllocator,
}

impl TransitionPlanner {
    pub fn new() -> Self {
        Self {
            occupancy: OccupancyProjector::new(),
            move_up: MoveUpProjector::new(),
            allocator: WaitlistAllocator::new(),
        }
    }

    /// Full planning pass for one target month.
    ///
    /// Order matters:
    /// 1) snapshot seats into one live counter
    /// 2) move-up projection claims next-room seats from that counter
    /// 3) waitlist fill consumes what remains of the same counter
    ///
    /// # Returns
    /// The merged plan; identical inputs always yield an identical plan.
    ///
    /// # Errors
    /// Dangling room/child references are fatal, see `EngineError`.
    #[instrument(skip(self, catalog, children, waitlist), fields(
        target_month = %target_month,
        children_count = children.len(),
        waitlist_count = waitlist.len()
    ))]
    pub fn optimize_occupancy(
        &self,
        catalog: &RoomCatalog,
        children: &[Child],
        waitlist: &[WaitlistEntry],
        target_month: TargetMonth,
    ) -> EngineResult<TransitionPlan> {
        let mut seats = self
            .occupancy
            .available_seats(catalog, children, target_month)?;

        let room_transitions = self.move_up.project_transitions_with_seats(
            catalog,
            children,
            target_month,
            &mut seats,
        )?;

        let ordered = self
            .allocator
            .ordered_waitlist(catalog, children, waitlist, target_month)?;
        let waitlist_filled = self.allocator.fill_from_waitlist(&ordered, &mut seats);

        let moved_up: usize = room_transitions
            .values()
            .map(|transition| transition.moving_in.len())
            .sum();
        info!(
            moved_up,
            waitlist_filled = waitlist_filled.len(),
            "transition plan computed"
        );

        Ok(TransitionPlan {
            room_transitions,
            waitlist_filled,
            final_available_spaces: seats.into_map(),
        })
    }
}

impl Default for TransitionPlanner {
    fn default() -> Self {
        Self::new()
    }
}
