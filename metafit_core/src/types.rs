//! Core domain types for the MetaFit 30-day program.
//!
//! This module defines the fundamental types used throughout the system:
//! - Fitness tiers and their parsing
//! - Exercises and their measurement kinds
//! - Day plans and the full 30-day program state

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of days in a full program
pub const PROGRAM_DAYS: u32 = 30;

// ============================================================================
// Tier
// ============================================================================

/// Fitness difficulty level selecting a workout template set
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Explorer,
    Warrior,
    Champion,
}

impl Tier {
    /// All tiers in ascending intensity order
    pub fn all() -> [Tier; 3] {
        [Tier::Explorer, Tier::Warrior, Tier::Champion]
    }

    /// Stable lowercase name, used in storage keys and CLI input
    pub fn key(&self) -> &'static str {
        match self {
            Tier::Explorer => "explorer",
            Tier::Warrior => "warrior",
            Tier::Champion => "champion",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "explorer" => Ok(Tier::Explorer),
            "warrior" => Ok(Tier::Warrior),
            "champion" => Ok(Tier::Champion),
            other => Err(Error::Validation(format!(
                "unknown tier '{}' (expected explorer, warrior or champion)",
                other
            ))),
        }
    }
}

// ============================================================================
// Exercise Types
// ============================================================================

/// How an exercise target is measured
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Repetition count (e.g. 10 push-ups)
    Reps,
    /// Duration in seconds (e.g. 30-second plank), drivable by the timer
    Time,
    /// Distance (e.g. 2 km run)
    Distance,
}

/// A single exercise within a day plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique within a day; generated as `<day>-<n>` so ids are unique
    /// across the whole program in practice
    pub id: String,
    pub name: String,
    pub kind: ExerciseKind,
    pub target: u32,
    pub unit: String,
    pub equipment: Vec<String>,
    pub muscle_groups: Vec<String>,
    pub instructions: Vec<String>,
    pub completed: bool,
}

impl Exercise {
    /// Mark the exercise as done. Completion only ever moves forward;
    /// there is no way to un-complete an exercise within a day.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }
}

// ============================================================================
// Day Plan and Program State
// ============================================================================

/// One day's exercise set within the 30-day program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// 1-based day index
    pub day: u32,
    pub title: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

impl DayPlan {
    /// A day is complete iff every exercise in it is complete.
    /// Derived on demand, never stored.
    pub fn is_complete(&self) -> bool {
        self.exercises.iter().all(|e| e.completed)
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercise_mut(&mut self, id: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }
}

/// The full 30-day program for one tier.
///
/// Exactly one program exists per tier; it is created lazily on first
/// access and thereafter only mutated, never regenerated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgramState {
    pub tier: Tier,
    pub days: Vec<DayPlan>,
}

impl ProgramState {
    /// Look up a day plan by its 1-based index
    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.day == day)
    }

    /// Find an exercise anywhere in the program by id
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.days.iter().find_map(|d| d.exercise(id))
    }

    pub fn exercise_mut(&mut self, id: &str) -> Option<&mut Exercise> {
        self.days.iter_mut().find_map(|d| d.exercise_mut(id))
    }

    /// Check the structural invariants: 30 days, contiguous 1..=30,
    /// ids unique within each day
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.days.len() != PROGRAM_DAYS as usize {
            errors.push(format!(
                "program has {} days, expected {}",
                self.days.len(),
                PROGRAM_DAYS
            ));
        }

        for (idx, plan) in self.days.iter().enumerate() {
            let expected = idx as u32 + 1;
            if plan.day != expected {
                errors.push(format!(
                    "day at position {} has index {}, expected {}",
                    idx, plan.day, expected
                ));
            }
            if plan.exercises.is_empty() {
                errors.push(format!("day {} has no exercises", plan.day));
            }
            for (i, a) in plan.exercises.iter().enumerate() {
                if plan.exercises[..i].iter().any(|b| b.id == a.id) {
                    errors.push(format!(
                        "day {} has duplicate exercise id '{}'",
                        plan.day, a.id
                    ));
                }
            }
        }

        errors
    }
}
