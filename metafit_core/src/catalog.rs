//! Built-in workout templates for each fitness tier.
//!
//! Each tier carries three day templates (upper body, lower body,
//! core & cardio) that the plan generator cycles across the 30 days.

use crate::types::{ExerciseKind, Tier};
use once_cell::sync::Lazy;

/// Blueprint for one exercise, before it is stamped into a day plan
#[derive(Clone, Debug)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub kind: ExerciseKind,
    pub target: u32,
    pub unit: &'static str,
    pub equipment: &'static [&'static str],
    pub muscle_groups: &'static [&'static str],
    pub instructions: &'static [&'static str],
}

/// Blueprint for one day of the program
#[derive(Clone, Debug)]
pub struct DayTemplate {
    pub title: &'static str,
    pub focus: &'static str,
    pub exercises: Vec<ExerciseTemplate>,
}

/// The complete set of day templates, one list per tier
#[derive(Clone, Debug)]
pub struct WorkoutCatalog {
    explorer: Vec<DayTemplate>,
    warrior: Vec<DayTemplate>,
    champion: Vec<DayTemplate>,
}

impl WorkoutCatalog {
    /// Day templates for a tier. The match is exhaustive over the tier
    /// enum, so adding a tier without templates fails to compile.
    pub fn templates_for(&self, tier: Tier) -> &[DayTemplate] {
        match tier {
            Tier::Explorer => &self.explorer,
            Tier::Warrior => &self.warrior,
            Tier::Champion => &self.champion,
        }
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for tier in Tier::all() {
            let templates = self.templates_for(tier);
            if templates.is_empty() {
                errors.push(format!("tier '{}' has no day templates", tier));
            }

            for (i, day) in templates.iter().enumerate() {
                if day.title.is_empty() {
                    errors.push(format!("tier '{}' day template {} has empty title", tier, i));
                }
                if day.exercises.is_empty() {
                    errors.push(format!(
                        "tier '{}' day template '{}' has no exercises",
                        tier, day.title
                    ));
                }
                for ex in &day.exercises {
                    if ex.name.is_empty() {
                        errors.push(format!(
                            "tier '{}' day template '{}' has an unnamed exercise",
                            tier, day.title
                        ));
                    }
                    if ex.target == 0 {
                        errors.push(format!(
                            "exercise '{}' in tier '{}' has zero target",
                            ex.name, tier
                        ));
                    }
                    if ex.kind == ExerciseKind::Time && ex.unit != "seconds" {
                        errors.push(format!(
                            "timed exercise '{}' must be measured in seconds, got '{}'",
                            ex.name, ex.unit
                        ));
                    }
                    if ex.instructions.is_empty() {
                        errors.push(format!("exercise '{}' has no instructions", ex.name));
                    }
                }
            }
        }

        errors
    }
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<WorkoutCatalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static WorkoutCatalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in tier templates
///
/// **Note**: For production use, prefer `get_default_catalog()` which
/// returns a cached reference. This function is retained for testing and
/// custom catalog creation.
pub fn build_default_catalog() -> WorkoutCatalog {
    build_default_catalog_internal()
}

fn build_default_catalog_internal() -> WorkoutCatalog {
    WorkoutCatalog {
        explorer: explorer_days(),
        warrior: warrior_days(),
        champion: champion_days(),
    }
}

fn explorer_days() -> Vec<DayTemplate> {
    vec![
        DayTemplate {
            title: "Foundation Upper Body",
            focus: "Building Strength",
            exercises: vec![
                ExerciseTemplate {
                    name: "Push-ups (Modified)",
                    kind: ExerciseKind::Reps,
                    target: 10,
                    unit: "reps",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Chest", "Triceps", "Shoulders"],
                    instructions: &[
                        "Start in plank position",
                        "Lower chest to ground",
                        "Push back up",
                    ],
                },
                ExerciseTemplate {
                    name: "Plank Hold",
                    kind: ExerciseKind::Time,
                    target: 30,
                    unit: "seconds",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Core", "Shoulders"],
                    instructions: &[
                        "Hold plank position",
                        "Keep core tight",
                        "Breathe steadily",
                    ],
                },
            ],
        },
        DayTemplate {
            title: "Foundation Lower Body",
            focus: "Building Strength",
            exercises: vec![
                ExerciseTemplate {
                    name: "Bodyweight Squats",
                    kind: ExerciseKind::Reps,
                    target: 12,
                    unit: "reps",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes", "Hamstrings"],
                    instructions: &[
                        "Feet shoulder-width apart",
                        "Sit back until thighs are parallel",
                        "Drive through heels to stand",
                    ],
                },
                ExerciseTemplate {
                    name: "Glute Bridges",
                    kind: ExerciseKind::Reps,
                    target: 10,
                    unit: "reps",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Glutes", "Hamstrings"],
                    instructions: &[
                        "Lie on back, knees bent",
                        "Lift hips until body is straight",
                        "Lower with control",
                    ],
                },
                ExerciseTemplate {
                    name: "Wall Sit",
                    kind: ExerciseKind::Time,
                    target: 20,
                    unit: "seconds",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes"],
                    instructions: &[
                        "Back flat against wall",
                        "Slide down to a seated position",
                        "Hold with thighs parallel",
                    ],
                },
            ],
        },
        DayTemplate {
            title: "Foundation Core & Cardio",
            focus: "Endurance Basics",
            exercises: vec![
                ExerciseTemplate {
                    name: "Crunches",
                    kind: ExerciseKind::Reps,
                    target: 15,
                    unit: "reps",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Core"],
                    instructions: &[
                        "Lie on back, knees bent",
                        "Curl shoulders toward knees",
                        "Lower slowly",
                    ],
                },
                ExerciseTemplate {
                    name: "Brisk Walk",
                    kind: ExerciseKind::Distance,
                    target: 1,
                    unit: "km",
                    equipment: &[],
                    muscle_groups: &["Legs", "Heart"],
                    instructions: &[
                        "Keep a pace where talking is possible",
                        "Swing arms naturally",
                        "Maintain upright posture",
                    ],
                },
            ],
        },
    ]
}

fn warrior_days() -> Vec<DayTemplate> {
    vec![
        DayTemplate {
            title: "Power Upper Body",
            focus: "Strength & Endurance",
            exercises: vec![
                ExerciseTemplate {
                    name: "Standard Push-ups",
                    kind: ExerciseKind::Reps,
                    target: 15,
                    unit: "reps",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Chest", "Triceps", "Shoulders"],
                    instructions: &[
                        "Maintain proper form",
                        "Full range of motion",
                        "Control the movement",
                    ],
                },
                ExerciseTemplate {
                    name: "Plank Hold",
                    kind: ExerciseKind::Time,
                    target: 60,
                    unit: "seconds",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Core", "Shoulders"],
                    instructions: &[
                        "Hold stable plank",
                        "Engage entire core",
                        "Keep body straight",
                    ],
                },
            ],
        },
        DayTemplate {
            title: "Power Lower Body",
            focus: "Strength & Endurance",
            exercises: vec![
                ExerciseTemplate {
                    name: "Jump Squats",
                    kind: ExerciseKind::Reps,
                    target: 15,
                    unit: "reps",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes", "Calves"],
                    instructions: &[
                        "Squat to parallel",
                        "Explode upward",
                        "Land softly and repeat",
                    ],
                },
                ExerciseTemplate {
                    name: "Walking Lunges",
                    kind: ExerciseKind::Reps,
                    target: 20,
                    unit: "reps",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes", "Hamstrings"],
                    instructions: &[
                        "Step forward into a lunge",
                        "Keep front knee over ankle",
                        "Alternate legs each step",
                    ],
                },
                ExerciseTemplate {
                    name: "Wall Sit",
                    kind: ExerciseKind::Time,
                    target: 45,
                    unit: "seconds",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes"],
                    instructions: &[
                        "Back flat against wall",
                        "Thighs parallel to floor",
                        "Keep breathing even",
                    ],
                },
            ],
        },
        DayTemplate {
            title: "Power Core & Cardio",
            focus: "Conditioning",
            exercises: vec![
                ExerciseTemplate {
                    name: "Bicycle Crunches",
                    kind: ExerciseKind::Reps,
                    target: 20,
                    unit: "reps",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Core", "Obliques"],
                    instructions: &[
                        "Alternate elbow to opposite knee",
                        "Keep lower back pressed down",
                        "Move with control, not speed",
                    ],
                },
                ExerciseTemplate {
                    name: "Burpees",
                    kind: ExerciseKind::Reps,
                    target: 12,
                    unit: "reps",
                    equipment: &[],
                    muscle_groups: &["Full Body"],
                    instructions: &[
                        "Drop to a plank",
                        "Jump feet back in",
                        "Jump up with arms overhead",
                    ],
                },
                ExerciseTemplate {
                    name: "Run",
                    kind: ExerciseKind::Distance,
                    target: 2,
                    unit: "km",
                    equipment: &[],
                    muscle_groups: &["Legs", "Heart"],
                    instructions: &[
                        "Keep a steady conversational pace",
                        "Land midfoot",
                        "Relax shoulders",
                    ],
                },
            ],
        },
    ]
}

fn champion_days() -> Vec<DayTemplate> {
    vec![
        DayTemplate {
            title: "Elite Upper Power",
            focus: "Advanced Training",
            exercises: vec![
                ExerciseTemplate {
                    name: "Diamond Push-ups",
                    kind: ExerciseKind::Reps,
                    target: 20,
                    unit: "reps",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Triceps", "Chest", "Shoulders"],
                    instructions: &[
                        "Form diamond with hands",
                        "Maintain strict form",
                        "Control tempo",
                    ],
                },
                ExerciseTemplate {
                    name: "Plank Hold",
                    kind: ExerciseKind::Time,
                    target: 90,
                    unit: "seconds",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Core", "Shoulders"],
                    instructions: &[
                        "Maximum stability",
                        "Perfect form",
                        "Mental focus",
                    ],
                },
            ],
        },
        DayTemplate {
            title: "Elite Lower Power",
            focus: "Advanced Training",
            exercises: vec![
                ExerciseTemplate {
                    name: "Pistol Squats",
                    kind: ExerciseKind::Reps,
                    target: 10,
                    unit: "reps",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes", "Core"],
                    instructions: &[
                        "Extend one leg forward",
                        "Squat on the standing leg",
                        "Use a support if needed",
                    ],
                },
                ExerciseTemplate {
                    name: "Jump Lunges",
                    kind: ExerciseKind::Reps,
                    target: 24,
                    unit: "reps",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes", "Calves"],
                    instructions: &[
                        "Lunge deep",
                        "Switch legs mid-air",
                        "Land with soft knees",
                    ],
                },
                ExerciseTemplate {
                    name: "Wall Sit",
                    kind: ExerciseKind::Time,
                    target: 75,
                    unit: "seconds",
                    equipment: &[],
                    muscle_groups: &["Quads", "Glutes"],
                    instructions: &[
                        "Back flat against wall",
                        "Thighs parallel, arms crossed",
                        "Hold through the burn",
                    ],
                },
            ],
        },
        DayTemplate {
            title: "Elite Conditioning",
            focus: "Peak Performance",
            exercises: vec![
                ExerciseTemplate {
                    name: "V-Ups",
                    kind: ExerciseKind::Reps,
                    target: 25,
                    unit: "reps",
                    equipment: &["Yoga Mat"],
                    muscle_groups: &["Core", "Hip Flexors"],
                    instructions: &[
                        "Lie flat with arms overhead",
                        "Fold into a V, touching toes",
                        "Lower with control",
                    ],
                },
                ExerciseTemplate {
                    name: "Burpees",
                    kind: ExerciseKind::Reps,
                    target: 20,
                    unit: "reps",
                    equipment: &[],
                    muscle_groups: &["Full Body"],
                    instructions: &[
                        "Chest to floor each rep",
                        "Explode into the jump",
                        "Keep a steady rhythm",
                    ],
                },
                ExerciseTemplate {
                    name: "Run",
                    kind: ExerciseKind::Distance,
                    target: 3,
                    unit: "km",
                    equipment: &[],
                    muscle_groups: &["Legs", "Heart"],
                    instructions: &[
                        "Push the pace on flats",
                        "Drive with your arms",
                        "Finish strong",
                    ],
                },
            ],
        },
    ]
}
