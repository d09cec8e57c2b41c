//! Derived completion statistics over a program.

use crate::types::ProgramState;
use serde::Serialize;

/// Overall progress through the 30-day program
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProgramSummary {
    pub completed_days: u32,
    pub remaining_days: u32,
    /// Rounded to the nearest whole percent, halves rounding up
    pub percent: u32,
}

/// Compute completion stats for a program.
///
/// Recomputed from the exercise flags on every call, so it can never go
/// stale relative to the program state.
pub fn summarize(state: &ProgramState) -> ProgramSummary {
    let total = state.days.len() as u32;
    let completed_days = state.days.iter().filter(|d| d.is_complete()).count() as u32;

    let percent = if total == 0 {
        0
    } else {
        (f64::from(completed_days) / f64::from(total) * 100.0).round() as u32
    };

    ProgramSummary {
        completed_days,
        remaining_days: total - completed_days,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::plan::generate_program;
    use crate::types::Tier;

    fn complete_day(state: &mut ProgramState, day: u32) {
        for ex in &mut state.day_mut(day).unwrap().exercises {
            ex.mark_complete();
        }
    }

    #[test]
    fn test_fresh_program_is_zero_percent() {
        let catalog = build_default_catalog();
        let state = generate_program(&catalog, Tier::Explorer);

        let summary = summarize(&state);
        assert_eq!(summary.completed_days, 0);
        assert_eq!(summary.remaining_days, 30);
        assert_eq!(summary.percent, 0);
    }

    #[test]
    fn test_one_day_is_three_percent() {
        let catalog = build_default_catalog();
        let mut state = generate_program(&catalog, Tier::Explorer);

        // Completing both day-1 exercises completes the day
        state.exercise_mut("1-1").unwrap().mark_complete();
        assert!(!state.day(1).unwrap().is_complete());
        state.exercise_mut("1-2").unwrap().mark_complete();
        assert!(state.day(1).unwrap().is_complete());

        let summary = summarize(&state);
        assert_eq!(summary.completed_days, 1);
        assert_eq!(summary.remaining_days, 29);
        assert_eq!(summary.percent, 3); // round(1/30 * 100)
    }

    #[test]
    fn test_days_always_sum_to_thirty() {
        let catalog = build_default_catalog();
        let mut state = generate_program(&catalog, Tier::Warrior);

        for day in [1, 5, 12, 30] {
            complete_day(&mut state, day);
            let summary = summarize(&state);
            assert_eq!(summary.completed_days + summary.remaining_days, 30);
            assert!(summary.percent <= 100);
        }
    }

    #[test]
    fn test_full_program_is_hundred_percent() {
        let catalog = build_default_catalog();
        let mut state = generate_program(&catalog, Tier::Champion);

        for day in 1..=30 {
            complete_day(&mut state, day);
        }

        let summary = summarize(&state);
        assert_eq!(summary.completed_days, 30);
        assert_eq!(summary.remaining_days, 0);
        assert_eq!(summary.percent, 100);
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        let catalog = build_default_catalog();
        let mut state = generate_program(&catalog, Tier::Explorer);

        // 15/30 is exactly 50%; 16/30 = 53.33 rounds to 53
        for day in 1..=15 {
            complete_day(&mut state, day);
        }
        assert_eq!(summarize(&state).percent, 50);

        complete_day(&mut state, 16);
        assert_eq!(summarize(&state).percent, 53);
    }
}
