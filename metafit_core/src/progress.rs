//! Derived progress stats and milestones over the journal.
//!
//! Counters move only when the user logs an entry; there is no
//! automatic day- or week-boundary rollover.

use crate::config::TargetsConfig;
use crate::journal::ProgressEntry;
use crate::profile::Goal;
use serde::Serialize;

/// Latest logged body weight, if any was ever recorded
pub fn latest_weight(entries: &[ProgressEntry]) -> Option<f64> {
    entries.iter().rev().find_map(|e| e.weight_kg)
}

/// Latest logged weekly workout count
pub fn latest_weekly_workouts(entries: &[ProgressEntry]) -> u32 {
    entries
        .iter()
        .rev()
        .find_map(|e| e.workouts_completed)
        .unwrap_or(0)
}

/// Latest logged daily calorie total
pub fn latest_calories_consumed(entries: &[ProgressEntry]) -> u32 {
    entries
        .iter()
        .rev()
        .find_map(|e| e.calories_consumed)
        .unwrap_or(0)
}

/// Progress toward the goal weight as a percentage in [0, 100].
///
/// Weight loss targets a fixed drop, muscle gain a fixed rise; the
/// remaining goals have no weight target and always read 100.
pub fn weight_progress(
    initial_kg: f64,
    current_kg: f64,
    goal: Goal,
    targets: &TargetsConfig,
) -> f64 {
    let target_change = match goal {
        Goal::WeightLoss => targets.weight_loss_target_kg,
        Goal::MuscleGain => targets.muscle_gain_target_kg,
        Goal::Maintenance | Goal::Strength | Goal::Endurance => 0.0,
    };

    if target_change == 0.0 {
        return 100.0;
    }

    let current_change = current_kg - initial_kg;
    (current_change / target_change * 100.0).clamp(0.0, 100.0)
}

/// Weekly workouts against the configured target, as [0, 100]
pub fn workout_progress(weekly_workouts: u32, targets: &TargetsConfig) -> f64 {
    if targets.weekly_workout_target == 0 {
        return 100.0;
    }
    (f64::from(weekly_workouts) / f64::from(targets.weekly_workout_target) * 100.0).min(100.0)
}

/// Calories consumed against the daily target, as [0, 100]
pub fn calorie_progress(calories_consumed: u32, daily_calories: u32) -> f64 {
    if daily_calories == 0 {
        return 0.0;
    }
    (f64::from(calories_consumed) / f64::from(daily_calories) * 100.0).min(100.0)
}

// ============================================================================
// Milestones
// ============================================================================

/// An unlockable achievement derived from the journal
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Evaluate all milestones against the journal
pub fn evaluate_milestones(entries: &[ProgressEntry]) -> Vec<Milestone> {
    let weekly_workouts = latest_weekly_workouts(entries);
    let calorie_logs = entries.iter().filter(|e| e.calories_consumed.is_some()).count();
    let weight_logs = entries.iter().filter(|e| e.weight_kg.is_some()).count();

    vec![
        Milestone {
            name: "First Victory",
            description: "Complete your first workout",
            unlocked: weekly_workouts > 0,
        },
        Milestone {
            name: "Nutrition Warrior",
            description: "Track calories for 3 days",
            unlocked: calorie_logs >= 3,
        },
        Milestone {
            name: "Consistent Champion",
            description: "Complete 5 workouts",
            unlocked: weekly_workouts >= 5,
        },
        Milestone {
            name: "Progress Pioneer",
            description: "Log weight 5 times",
            unlocked: weight_logs >= 5,
        },
    ]
}
