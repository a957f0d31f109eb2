//! Workout session execution.
//!
//! A session steps through a list of exercises while its timer runs.
//! Finishing on the last exercise credits the workout to the progress
//! store; cancelling discards it.

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::progress::ProgressStore;

use super::timer::WorkoutTimer;
use super::types::{Exercise, SessionStatus, WorkoutError, WorkoutSummary};

/// Default calorie burn rate for timed workouts.
pub const DEFAULT_CALORIES_PER_MINUTE: u32 = 10;

/// Calories credited for a workout: whole minutes times the burn rate.
pub fn calories_for(elapsed_seconds: u64, calories_per_minute: u32) -> u32 {
    let calories = (elapsed_seconds / 60).saturating_mul(u64::from(calories_per_minute));
    u32::try_from(calories).unwrap_or(u32::MAX)
}

/// A running workout bound to a progress store.
#[derive(Debug)]
pub struct WorkoutSession {
    store: ProgressStore,
    exercises: Vec<Exercise>,
    current_index: usize,
    status: SessionStatus,
    timer: WorkoutTimer,
    calories_per_minute: u32,
    started_at: DateTime<Utc>,
}

impl WorkoutSession {
    /// Start a session and its timer. Must be called from within a tokio runtime.
    pub fn start(
        store: ProgressStore,
        exercises: Vec<Exercise>,
        calories_per_minute: u32,
    ) -> Result<Self, WorkoutError> {
        Self::start_with_timer(store, exercises, calories_per_minute, WorkoutTimer::start)
    }

    /// Start a session using `make_timer` to create the timer.
    pub fn start_with_timer(
        store: ProgressStore,
        exercises: Vec<Exercise>,
        calories_per_minute: u32,
        make_timer: impl FnOnce() -> WorkoutTimer,
    ) -> Result<Self, WorkoutError> {
        if exercises.is_empty() {
            return Err(WorkoutError::NoExercises);
        }

        tracing::info!(
            exercises = exercises.len(),
            first = %exercises[0],
            "Workout session started"
        );

        Ok(Self {
            store,
            exercises,
            current_index: 0,
            status: SessionStatus::InProgress,
            timer: make_timer(),
            calories_per_minute,
            started_at: Utc::now(),
        })
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Exercise currently being performed.
    pub fn current_exercise(&self) -> Exercise {
        self.exercises[self.current_index]
    }

    pub fn is_last_exercise(&self) -> bool {
        self.current_index + 1 >= self.exercises.len()
    }

    /// Exercises after the current one.
    pub fn remaining_exercises(&self) -> usize {
        self.exercises.len() - self.current_index - 1
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    /// Observe the elapsed-seconds counter.
    pub fn subscribe_elapsed(&self) -> watch::Receiver<u64> {
        self.timer.subscribe()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    fn ensure_in_progress(&self) -> Result<(), WorkoutError> {
        if self.status != SessionStatus::InProgress {
            return Err(WorkoutError::NotInProgress);
        }
        Ok(())
    }

    /// Move on to the next exercise.
    pub fn next_exercise(&mut self) -> Result<Exercise, WorkoutError> {
        self.ensure_in_progress()?;
        if self.is_last_exercise() {
            return Err(WorkoutError::AlreadyAtLastExercise);
        }

        self.current_index += 1;
        let exercise = self.current_exercise();
        tracing::debug!(exercise = %exercise, index = self.current_index, "Next exercise");
        Ok(exercise)
    }

    /// Stop the timer and log the workout. Only allowed on the last exercise.
    pub fn finish(&mut self) -> Result<WorkoutSummary, WorkoutError> {
        self.ensure_in_progress()?;
        if !self.is_last_exercise() {
            return Err(WorkoutError::ExercisesRemaining(self.remaining_exercises()));
        }

        let elapsed_seconds = self.timer.stop();
        let calories_burned = calories_for(elapsed_seconds, self.calories_per_minute);
        self.status = SessionStatus::Completed;
        self.store.log_workout(calories_burned);

        tracing::info!(elapsed_seconds, calories_burned, "Workout session finished");

        Ok(WorkoutSummary {
            exercises: self.exercises.clone(),
            elapsed_seconds,
            calories_burned,
            started_at: self.started_at,
        })
    }

    /// Stop the timer without logging anything.
    pub fn cancel(&mut self) {
        if self.status != SessionStatus::InProgress {
            return;
        }
        let elapsed_seconds = self.timer.stop();
        self.status = SessionStatus::Cancelled;
        tracing::info!(elapsed_seconds, "Workout session cancelled");
    }
}
