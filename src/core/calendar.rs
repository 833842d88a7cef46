//! Calendar system for month/day tracking
//!
//! The scheduler advances in whole months. Government terms and emergency
//! windows are expressed in days, so every date-sensitive call receives a
//! `SimDate` derived from the current tick instead of reading a wall clock.

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;

/// Days in a simulated year
pub const DAYS_PER_YEAR: u32 = 365;

/// Months in a simulated year
pub const MONTHS_PER_YEAR: u32 = 12;

/// A simulated date, counted in days since the start of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SimDate(pub u32);

impl SimDate {
    /// Date at the start of the given month tick, saturating at `u32::MAX` days
    pub fn from_tick(tick: Tick) -> Self {
        let days = tick as u64 * DAYS_PER_YEAR as u64 / MONTHS_PER_YEAR as u64;
        Self(days.min(u32::MAX as u64) as u32)
    }

    pub fn day(&self) -> u32 {
        self.0
    }

    pub fn plus_days(&self, days: u32) -> Self {
        Self(self.0.saturating_add(days))
    }
}

impl std::fmt::Display for SimDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let year = self.0 / DAYS_PER_YEAR;
        let day = self.0 % DAYS_PER_YEAR;
        write!(f, "Y{} D{}", year + 1, day + 1)
    }
}

/// Calendar tracks simulation time with month granularity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Calendar {
    tick: Tick,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn today(&self) -> SimDate {
        SimDate::from_tick(self.tick)
    }

    /// Month within the current year (0-based)
    pub fn month_of_year(&self) -> u32 {
        self.tick % MONTHS_PER_YEAR
    }

    /// True on the last month of each simulated year
    pub fn is_year_end(&self) -> bool {
        self.month_of_year() == MONTHS_PER_YEAR - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_date_from_tick() {
        assert_eq!(SimDate::from_tick(0), SimDate(0));
        assert_eq!(SimDate::from_tick(12), SimDate(365));
        assert_eq!(SimDate::from_tick(36), SimDate(1095));
        // Four months cover an emergency window of 120 days
        assert!(SimDate::from_tick(4) >= SimDate::from_tick(0).plus_days(120));
        assert!(SimDate::from_tick(3) < SimDate::from_tick(0).plus_days(120));
    }

    #[test]
    fn test_sim_date_from_distant_tick() {
        assert_eq!(SimDate::from_tick(11_767_033), SimDate(357_913_920));
        assert_eq!(SimDate::from_tick(12_000_000), SimDate(365_000_000));
        assert_eq!(SimDate::from_tick(Tick::MAX), SimDate(u32::MAX));
    }

    #[test]
    fn test_calendar_advances() {
        let mut cal = Calendar::new();
        assert_eq!(cal.current_tick(), 0);
        assert_eq!(cal.today(), SimDate(0));

        for _ in 0..11 {
            cal.advance();
        }
        assert_eq!(cal.current_tick(), 11);
        assert!(cal.is_year_end());

        cal.advance();
        assert_eq!(cal.month_of_year(), 0);
        assert_eq!(cal.today().day(), 365);
    }

    #[test]
    fn test_date_display() {
        assert_eq!(SimDate(0).to_string(), "Y1 D1");
        assert_eq!(SimDate(366).to_string(), "Y2 D2");
    }
}
