//! Plan generation: stamping tier templates into a 30-day program.

use crate::catalog::{DayTemplate, WorkoutCatalog};
use crate::types::{DayPlan, Exercise, ProgramState, Tier, PROGRAM_DAYS};

/// Generate a fresh 30-day program for a tier.
///
/// Pure function of the catalog and tier: the tier's day templates are
/// cycled across days 1..=30, every exercise starts incomplete, and
/// exercise ids are stamped as `<day>-<n>`. Calling this twice with the
/// same inputs yields identical programs.
pub fn generate_program(catalog: &WorkoutCatalog, tier: Tier) -> ProgramState {
    let templates = catalog.templates_for(tier);

    let days = (1..=PROGRAM_DAYS)
        .map(|day| {
            let template = &templates[(day as usize - 1) % templates.len()];
            instantiate_day(template, day)
        })
        .collect();

    ProgramState { tier, days }
}

fn instantiate_day(template: &DayTemplate, day: u32) -> DayPlan {
    let exercises = template
        .exercises
        .iter()
        .enumerate()
        .map(|(i, ex)| Exercise {
            id: format!("{}-{}", day, i + 1),
            name: ex.name.to_string(),
            kind: ex.kind,
            target: ex.target,
            unit: ex.unit.to_string(),
            equipment: ex.equipment.iter().map(|s| s.to_string()).collect(),
            muscle_groups: ex.muscle_groups.iter().map(|s| s.to_string()).collect(),
            instructions: ex.instructions.iter().map(|s| s.to_string()).collect(),
            completed: false,
        })
        .collect();

    DayPlan {
        day,
        title: template.title.to_string(),
        focus: template.focus.to_string(),
        exercises,
    }
}
