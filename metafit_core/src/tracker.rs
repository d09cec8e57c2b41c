//! The workout tracker: one controller owning the program state.
//!
//! Wires the store, day cursor, countdown timer and summary together so
//! that callers (the CLI, a UI shell, tests) only talk to one object.
//! Every mutation is persisted synchronously; a failing store degrades
//! the session to memory-only instead of aborting it.

use crate::catalog::WorkoutCatalog;
use crate::cursor::DayCursor;
use crate::store::{KeyValueStore, ProgramStore};
use crate::summary::{summarize, ProgramSummary};
use crate::timer::{ExerciseTimer, TickOutcome, TimerState};
use crate::types::{DayPlan, ExerciseKind, ProgramState, Tier};
use crate::{Error, Result};

pub struct WorkoutTracker<S: KeyValueStore> {
    tier: Tier,
    store: ProgramStore<S>,
    state: ProgramState,
    cursor: DayCursor,
    timer: ExerciseTimer,
}

impl<S: KeyValueStore> WorkoutTracker<S> {
    /// Open the tracker for a tier, loading the persisted program or
    /// generating a fresh one on first use.
    pub fn open(store: S, catalog: &WorkoutCatalog, tier: Tier) -> Result<Self> {
        let mut store = ProgramStore::new(store);
        let state = store.ensure(catalog, tier)?;

        Ok(Self {
            tier,
            store,
            state,
            cursor: DayCursor::new(),
            timer: ExerciseTimer::new(),
        })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn state(&self) -> &ProgramState {
        &self.state
    }

    /// True when a save has failed and progress is memory-only
    pub fn is_degraded(&self) -> bool {
        self.store.is_degraded()
    }

    // ------------------------------------------------------------------
    // Day navigation
    // ------------------------------------------------------------------

    pub fn day(&self) -> u32 {
        self.cursor.day()
    }

    pub fn set_day(&mut self, day: u32) -> Result<()> {
        self.cursor.set_day(day)
    }

    pub fn advance_day(&mut self) {
        self.cursor.advance();
    }

    pub fn retreat_day(&mut self) {
        self.cursor.retreat();
    }

    /// Plan for the day the cursor points at
    pub fn current_plan(&self) -> Result<&DayPlan> {
        self.state
            .day(self.cursor.day())
            .ok_or_else(|| Error::DayOutOfRange(self.cursor.day()))
    }

    // ------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------

    /// Mark an exercise complete and persist the program.
    ///
    /// A storage failure is non-fatal: the in-memory flag stays set and
    /// the tracker reports degraded mode.
    pub fn complete_exercise(&mut self, exercise_id: &str) -> Result<()> {
        let exercise = self
            .state
            .exercise_mut(exercise_id)
            .ok_or_else(|| Error::Validation(format!("unknown exercise '{}'", exercise_id)))?;

        exercise.mark_complete();
        tracing::info!("Exercise {} marked complete", exercise_id);
        self.persist();
        Ok(())
    }

    pub fn summary(&self) -> ProgramSummary {
        summarize(&self.state)
    }

    // ------------------------------------------------------------------
    // Timer
    // ------------------------------------------------------------------

    /// Start a countdown for one of the program's exercises.
    ///
    /// With no explicit duration, timed exercises fall back to their
    /// target seconds; other kinds require a duration.
    pub fn start_timer(&mut self, exercise_id: &str, duration_seconds: Option<u32>) -> Result<()> {
        let exercise = self
            .state
            .exercise(exercise_id)
            .ok_or_else(|| Error::Validation(format!("unknown exercise '{}'", exercise_id)))?;

        let duration = match duration_seconds {
            Some(secs) => secs,
            None if exercise.kind == ExerciseKind::Time => exercise.target,
            None => {
                return Err(Error::Validation(format!(
                    "exercise '{}' is not time-based; give an explicit duration",
                    exercise_id
                )))
            }
        };

        self.timer.start(exercise_id, duration)
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
    }

    pub fn reset_timer(&mut self, duration_seconds: u32) {
        self.timer.reset(duration_seconds);
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.remaining()
    }

    /// Drive the countdown by one second.
    ///
    /// On expiry the bound exercise is marked complete and the program
    /// persisted, which is the auto-completion path for timed exercises.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();

        if let TickOutcome::Expired { exercise_id } = &outcome {
            match self.state.exercise_mut(exercise_id) {
                Some(exercise) => {
                    exercise.mark_complete();
                    tracing::info!("Timer expired; exercise {} auto-completed", exercise_id);
                    self.persist();
                }
                None => {
                    // Timer survived a program swap; nothing to complete
                    tracing::warn!(
                        "Timer expired for unknown exercise '{}'",
                        exercise_id
                    );
                }
            }
        }

        outcome
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.tier, &self.state) {
            tracing::warn!(
                "Could not persist program for tier '{}': {}. Continuing in memory.",
                self.tier,
                e
            );
        }
    }
}
