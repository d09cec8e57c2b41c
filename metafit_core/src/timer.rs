//! Countdown timer for time-based exercises.
//!
//! At most one timer session exists at a time. The timer itself is a
//! pure state machine: it never touches the program state or any clock.
//! A scheduler (the CLI's one-second loop, or a test harness) calls
//! `tick()` once per elapsed second and acts on the returned outcome,
//! which is how expiry reaches the exercise completion flag.

use crate::{Error, Result};

/// Observable timer state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

/// What a single one-second tick did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No active countdown (idle, paused or already expired)
    Noop,
    /// Countdown decremented and is still going
    Counting { remaining: u32 },
    /// Countdown reached zero; the bound exercise should be marked
    /// complete by the caller. Reported exactly once per session.
    Expired { exercise_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Paused,
    Expired,
}

#[derive(Clone, Debug)]
struct Session {
    exercise_id: String,
    remaining: u32,
    phase: Phase,
}

/// Single-session countdown bound to one exercise
#[derive(Clone, Debug, Default)]
pub struct ExerciseTimer {
    session: Option<Session>,
}

impl ExerciseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a countdown for an exercise.
    ///
    /// Any previously active session (for this or another exercise) is
    /// discarded, which also cancels its pending expiry.
    pub fn start(&mut self, exercise_id: impl Into<String>, duration_seconds: u32) -> Result<()> {
        if duration_seconds == 0 {
            return Err(Error::Validation(
                "timer duration must be positive".into(),
            ));
        }

        let exercise_id = exercise_id.into();
        tracing::debug!(
            "Starting {}s timer for exercise {}",
            duration_seconds,
            exercise_id
        );

        self.session = Some(Session {
            exercise_id,
            remaining: duration_seconds,
            phase: Phase::Running,
        });
        Ok(())
    }

    /// Pause a running countdown or resume a paused one.
    /// No-op when idle or expired.
    pub fn toggle(&mut self) {
        if let Some(session) = &mut self.session {
            session.phase = match session.phase {
                Phase::Running => Phase::Paused,
                Phase::Paused => Phase::Running,
                Phase::Expired => Phase::Expired,
            };
        }
    }

    /// Rewind the countdown to a fresh duration without running it.
    ///
    /// Keeps the exercise binding and never touches completion flags.
    /// No-op when no exercise is bound.
    pub fn reset(&mut self, duration_seconds: u32) {
        if let Some(session) = &mut self.session {
            session.remaining = duration_seconds;
            session.phase = Phase::Paused;
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(session) = &mut self.session else {
            return TickOutcome::Noop;
        };

        if session.phase != Phase::Running {
            return TickOutcome::Noop;
        }

        session.remaining = session.remaining.saturating_sub(1);
        if session.remaining == 0 {
            session.phase = Phase::Expired;
            tracing::debug!("Timer expired for exercise {}", session.exercise_id);
            TickOutcome::Expired {
                exercise_id: session.exercise_id.clone(),
            }
        } else {
            TickOutcome::Counting {
                remaining: session.remaining,
            }
        }
    }

    pub fn state(&self) -> TimerState {
        match &self.session {
            None => TimerState::Idle,
            Some(s) => match s.phase {
                Phase::Running => TimerState::Running,
                Phase::Paused => TimerState::Paused,
                Phase::Expired => TimerState::Expired,
            },
        }
    }

    /// Seconds left on the active countdown, if any
    pub fn remaining(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.remaining)
    }

    /// Exercise the active countdown is bound to, if any
    pub fn exercise_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.exercise_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let timer = ExerciseTimer::new();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let mut timer = ExerciseTimer::new();
        let err = timer.start("1-2", 0).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_counts_down_to_expiry() {
        let mut timer = ExerciseTimer::new();
        timer.start("1-2", 3).unwrap();
        assert_eq!(timer.state(), TimerState::Running);

        assert_eq!(timer.tick(), TickOutcome::Counting { remaining: 2 });
        assert_eq!(timer.tick(), TickOutcome::Counting { remaining: 1 });
        assert_eq!(
            timer.tick(),
            TickOutcome::Expired {
                exercise_id: "1-2".into()
            }
        );
        assert_eq!(timer.state(), TimerState::Expired);

        // Expiry fires exactly once; further ticks do nothing
        assert_eq!(timer.tick(), TickOutcome::Noop);
        assert_eq!(timer.state(), TimerState::Expired);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut timer = ExerciseTimer::new();
        timer.start("1-2", 10).unwrap();

        timer.tick();
        timer.toggle();
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.tick(), TickOutcome::Noop);
        assert_eq!(timer.remaining(), Some(9));

        timer.toggle();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.tick(), TickOutcome::Counting { remaining: 8 });
    }

    #[test]
    fn test_toggle_without_session_is_noop() {
        let mut timer = ExerciseTimer::new();
        timer.toggle();
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_reset_rewinds_without_running() {
        let mut timer = ExerciseTimer::new();
        timer.start("1-2", 30).unwrap();
        timer.tick();
        timer.tick();

        timer.reset(30);
        assert_eq!(timer.remaining(), Some(30));
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.tick(), TickOutcome::Noop);

        // Still bound to the same exercise, so it can resume
        assert_eq!(timer.exercise_id(), Some("1-2"));
        timer.toggle();
        assert_eq!(timer.tick(), TickOutcome::Counting { remaining: 29 });
    }

    #[test]
    fn test_reset_without_session_is_noop() {
        let mut timer = ExerciseTimer::new();
        timer.reset(45);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_starting_replaces_previous_session() {
        let mut timer = ExerciseTimer::new();
        timer.start("1-2", 30).unwrap();
        timer.tick();

        timer.start("4-2", 60).unwrap();
        assert_eq!(timer.exercise_id(), Some("4-2"));
        assert_eq!(timer.remaining(), Some(60));

        // Expiry of the replaced session never fires
        assert_eq!(timer.tick(), TickOutcome::Counting { remaining: 59 });
    }

    #[test]
    fn test_start_after_expiry_begins_fresh() {
        let mut timer = ExerciseTimer::new();
        timer.start("1-2", 1).unwrap();
        assert!(matches!(timer.tick(), TickOutcome::Expired { .. }));

        timer.start("1-2", 5).unwrap();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining(), Some(5));
    }
}
