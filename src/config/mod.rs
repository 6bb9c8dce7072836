// ==========================================
// Childcare Occupancy Planner - Config Layer
// ==========================================
// Responsibility: external facility snapshot input
// ==========================================

pub mod error;
pub mod facility;

// Re-export core config types
pub use error::{ConfigError, ConfigResult};
pub use facility::{Facility, FacilityFile};
