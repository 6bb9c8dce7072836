// ==========================================
// Childcare Occupancy Planner - Core Library
// ==========================================
// Room-occupancy projection and transition planning for a childcare
// facility: who ages out of their room by a target month, how many
// seats that frees, and how the waitlist backfills them.
//
// Planning is pure: every call recomputes from the supplied snapshot;
// committing an accepted plan is a collaborator's write, serialized
// outside this crate.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Engine layer - planning rules
pub mod engine;

// Config layer - facility snapshot input
pub mod config;

// Logging setup
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::{
    Child, Room, RoomCatalog, RoomCategory, TargetMonth, TransitionRecord, WaitlistEntry,
};

// Engines
pub use engine::{
    EngineError, EngineResult, MoveUpProjector, OccupancyProjector, RoomTransition, SeatCounter,
    TransitionPlan, TransitionPlanner, WaitlistAllocator, WaitlistPlacement,
};

// Config
pub use config::{ConfigError, Facility, FacilityFile};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Childcare Occupancy Planner";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
