// ==========================================
// Childcare Occupancy Planner - Engine Layer
// ==========================================
// Responsibility: the planning rule engines; pure functions of an
//                 in-memory snapshot plus a target month
// Red line: no I/O, no persisted state, every skip logged with a reason
// ==========================================

pub mod allocator;
pub mod error;
pub mod move_up;
pub mod planner;
pub mod snapshot;

// Re-export core engines
pub use allocator::{WaitlistAllocator, WaitlistPlacement};
pub use error::{EngineError, EngineResult};
pub use move_up::{MoveUpProjector, RoomTransition, RoomTransitions};
pub use planner::{TransitionPlan, TransitionPlanner};
pub use snapshot::{OccupancyProjector, SeatCounter};
