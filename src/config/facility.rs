// ==========================================
// Childcare Occupancy Planner - Facility Snapshot File
// ==========================================
// Responsibility: load one read-only facility snapshot (rooms, children,
//                 waitlist) from JSON and validate it into domain form
// Red line: the only filesystem access in the crate; engines never do I/O
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::child::Child;
use crate::domain::room::{Room, RoomCatalog};
use crate::domain::waitlist::WaitlistEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

// ==========================================
// FacilityFile - raw snapshot as stored on disk
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityFile {
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default)]
    pub waitlist: Vec<WaitlistEntry>,
}

// ==========================================
// Facility - validated planning inputs
// ==========================================
#[derive(Debug, Clone)]
pub struct Facility {
    pub catalog: RoomCatalog,
    pub children: Vec<Child>,
    pub waitlist: Vec<WaitlistEntry>,
}

impl FacilityFile {
    /// Read a snapshot file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: FacilityFile = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            rooms = file.rooms.len(),
            children = file.children.len(),
            waitlist = file.waitlist.len(),
            "facility snapshot loaded"
        );
        Ok(file)
    }

    /// Validate the snapshot into planning inputs.
    ///
    /// Data-quality findings that are not precondition violations are
    /// logged as warnings, never errors: a child whose age on `as_of`
    /// falls outside their assigned room's band stays where the records
    /// say they are.
    ///
    /// # Errors
    /// `ConfigError::Catalog` when the room configuration itself is
    /// invalid (duplicate names, inverted bands, zero capacity).
    pub fn into_facility(self, as_of: NaiveDate) -> ConfigResult<Facility> {
        let catalog = RoomCatalog::new(self.rooms)?;
        for room in catalog.rooms_by_age() {
            debug!(
                room = %room.name,
                category = %room.category(),
                band_min = room.min_age_months,
                band_max = room.max_age_months,
                capacity = room.capacity,
                "room registered"
            );
        }

        for child in &self.children {
            let Some(room) = child.room.as_deref().and_then(|name| catalog.get(name)) else {
                continue; // unknown rooms surface as engine errors later
            };
            let age = child.age_in_months(as_of);
            if !room.covers_age(age) {
                warn!(
                    child_id = %child.child_id,
                    room = %room.name,
                    age_months = age,
                    band_min = room.min_age_months,
                    band_max = room.max_age_months,
                    "child's age is outside the assigned room's band"
                );
            }
        }

        Ok(Facility {
            catalog,
            children: self.children,
            waitlist: self.waitlist,
        })
    }
}
