// ==========================================
// Childcare Occupancy Planner - Domain Layer
// ==========================================
// Responsibility: entities and value types, business invariants
// Red line: no data access, no engine logic, no I/O
// ==========================================

pub mod child;
pub mod room;
pub mod transition;
pub mod types;
pub mod waitlist;

// Re-export core types
pub use child::Child;
pub use room::{CatalogError, Room, RoomCatalog};
pub use transition::TransitionRecord;
pub use types::{ParseTargetMonthError, RoomCategory, TargetMonth};
pub use waitlist::WaitlistEntry;
