// ==========================================
// Childcare Occupancy Planner - Engine Errors
// ==========================================
// Responsibility: fatal precondition violations during planning
// Red line: referential integrity is the caller's contract; a dangling
//           reference is surfaced as a distinct error, never repaired
// ==========================================

use thiserror::Error;

/// Engine-layer error type.
///
/// Missing-but-valid data (unassigned children, top-of-hierarchy rooms)
/// is handled by exclusion, not by these errors.
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== referential integrity =====
    #[error("unknown room '{room}' referenced by {referenced_by}")]
    UnknownRoom {
        room: String,
        referenced_by: String,
    },

    #[error("unknown child '{child_id}' referenced by {referenced_by}")]
    UnknownChild {
        child_id: String,
        referenced_by: String,
    },

    // ===== generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for the engine layer.
pub type EngineResult<T> = Result<T, EngineError>;
