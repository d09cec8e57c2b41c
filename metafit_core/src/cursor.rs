//! Cursor over the 30-day program for viewing and editing.

use crate::types::PROGRAM_DAYS;
use crate::{Error, Result};

/// Tracks which day is currently selected.
///
/// Always holds a value in `1..=30`. Stepping past either end clamps
/// rather than erroring; jumping to an explicit out-of-range day is a
/// contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCursor {
    day: u32,
}

impl Default for DayCursor {
    fn default() -> Self {
        Self { day: 1 }
    }
}

impl DayCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Move to the next day, clamping at day 30
    pub fn advance(&mut self) {
        self.day = (self.day + 1).min(PROGRAM_DAYS);
    }

    /// Move to the previous day, clamping at day 1
    pub fn retreat(&mut self) {
        self.day = (self.day - 1).max(1);
    }

    /// Jump to a specific day
    pub fn set_day(&mut self, day: u32) -> Result<()> {
        if !(1..=PROGRAM_DAYS).contains(&day) {
            return Err(Error::DayOutOfRange(day));
        }
        self.day = day;
        Ok(())
    }
}
