// ==========================================
// Childcare Occupancy Planner - Room Catalog
// ==========================================
// Responsibility: the facility's room configuration, ordered by age band
// Red line: rooms form a strict total order by min_age
// ==========================================

use crate::domain::types::RoomCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ==========================================
// Room - one age-banded classroom
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,          // unique within the facility
    pub min_age_months: u32,   // youngest admitted age
    pub max_age_months: u32,   // age at which a child moves up
    pub capacity: u32,         // licensed seat count
}

impl Room {
    /// Age-band category, derived from `min_age_months`.
    pub fn category(&self) -> RoomCategory {
        RoomCategory::from_min_age(self.min_age_months)
    }

    /// Whether an age in months falls inside this room's band.
    pub fn covers_age(&self, age_months: i32) -> bool {
        age_months >= 0
            && (age_months as u32) >= self.min_age_months
            && (age_months as u32) < self.max_age_months
    }
}

// ==========================================
// CatalogError - room configuration rejects
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate room name: {0}")]
    DuplicateRoomName(String),

    #[error("room '{room}' has invalid age band: min_age={min_age} max_age={max_age}")]
    InvalidAgeBand {
        room: String,
        min_age: u32,
        max_age: u32,
    },
}

// ==========================================
// RoomCatalog - validated, age-ordered view
// ==========================================
// Static per planning run; engines only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<Room>, // sorted ascending by min_age_months
}

impl RoomCatalog {
    /// Validate a room configuration and store it sorted by minimum age.
    ///
    /// Capacity 0 is accepted: it describes a room that admits nobody
    /// (e.g. temporarily closed), which the planners treat as always full.
    ///
    /// # Errors
    /// Rejects duplicate names and inverted age bands.
    pub fn new(mut rooms: Vec<Room>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for room in &rooms {
            if !seen.insert(room.name.clone()) {
                return Err(CatalogError::DuplicateRoomName(room.name.clone()));
            }
            if room.min_age_months >= room.max_age_months {
                return Err(CatalogError::InvalidAgeBand {
                    room: room.name.clone(),
                    min_age: room.min_age_months,
                    max_age: room.max_age_months,
                });
            }
        }
        rooms.sort_by_key(|room| room.min_age_months);
        Ok(Self { rooms })
    }

    /// All rooms, ascending by `min_age_months`.
    pub fn rooms_by_age(&self) -> &[Room] {
        &self.rooms
    }

    /// Lookup by unique room name.
    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == name)
    }

    /// The room a child moves up into from `room`: the first room (in age
    /// order) whose `min_age_months >= room.max_age_months`.
    ///
    /// # Returns
    /// `None` at the top of the hierarchy; such children leave the facility's
    /// room sequence and are outside this engine's placement scope.
    pub fn next_room(&self, room: &Room) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|candidate| candidate.min_age_months >= room.max_age_months)
    }
}
