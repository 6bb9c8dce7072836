// ==========================================
// Childcare Occupancy Planner - Domain Types
// ==========================================
// Responsibility: shared value types for the room hierarchy
// Red line: derived values are computed, never stored
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// RoomCategory - age-band classification
// ==========================================
// Derived solely from a room's minimum age; not independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    Infant,                // 0-12 months
    YoungToddler,          // 12-18 months
    Toddler,               // 18-30 months
    TransitionalPreschool, // 30-42 months
    EarlyPreschool,        // 42-48 months
    Preschool,             // 48+ months
}

impl RoomCategory {
    /// Classify a room by its minimum age in months.
    ///
    /// # Arguments
    /// - `min_age_months`: the youngest age the room admits
    ///
    /// # Returns
    /// The matching category band
    pub fn from_min_age(min_age_months: u32) -> Self {
        if min_age_months < 12 {
            RoomCategory::Infant
        } else if min_age_months < 18 {
            RoomCategory::YoungToddler
        } else if min_age_months < 30 {
            RoomCategory::Toddler
        } else if min_age_months < 42 {
            RoomCategory::TransitionalPreschool
        } else if min_age_months < 48 {
            RoomCategory::EarlyPreschool
        } else {
            RoomCategory::Preschool
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomCategory::Infant => write!(f, "infant"),
            RoomCategory::YoungToddler => write!(f, "young_toddler"),
            RoomCategory::Toddler => write!(f, "toddler"),
            RoomCategory::TransitionalPreschool => write!(f, "transitional_preschool"),
            RoomCategory::EarlyPreschool => write!(f, "early_preschool"),
            RoomCategory::Preschool => write!(f, "preschool"),
        }
    }
}

// ==========================================
// TargetMonth - projection window
// ==========================================
// The calendar month a projection is computed for.
// Day-of-month is normalized to the 1st for all comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetMonth {
    year: i32,
    month: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid target month '{0}', expected YYYY-MM")]
pub struct ParseTargetMonthError(String);

impl TargetMonth {
    /// Build a target month, rejecting out-of-range month numbers.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // from_ymd_opt also rejects years chrono cannot represent
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The normalized comparison date: the 1st of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month validated at construction")
    }

    /// Whether a date falls inside this calendar month (same year and month).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for TargetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for TargetMonth {
    type Err = ParseTargetMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTargetMonthError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        TargetMonth::new(year, month).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_band_boundaries() {
        assert_eq!(RoomCategory::from_min_age(0), RoomCategory::Infant);
        assert_eq!(RoomCategory::from_min_age(11), RoomCategory::Infant);
        assert_eq!(RoomCategory::from_min_age(12), RoomCategory::YoungToddler);
        assert_eq!(RoomCategory::from_min_age(18), RoomCategory::Toddler);
        assert_eq!(RoomCategory::from_min_age(30), RoomCategory::TransitionalPreschool);
        assert_eq!(RoomCategory::from_min_age(42), RoomCategory::EarlyPreschool);
        assert_eq!(RoomCategory::from_min_age(48), RoomCategory::Preschool);
        assert_eq!(RoomCategory::from_min_age(60), RoomCategory::Preschool);
    }

    #[test]
    fn test_target_month_contains() {
        let month = TargetMonth::new(2026, 6).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
        assert!(month.contains(NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
    }

    #[test]
    fn test_target_month_parse() {
        assert_eq!(
            "2026-06".parse::<TargetMonth>().unwrap(),
            TargetMonth::new(2026, 6).unwrap()
        );
        assert!("2026-13".parse::<TargetMonth>().is_err());
        assert!("june".parse::<TargetMonth>().is_err());
    }

    #[test]
    fn test_target_month_first_day() {
        let month = TargetMonth::new(2026, 2).unwrap();
        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }
}
