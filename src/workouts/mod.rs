//! Workout module for timed exercise sessions.
//!
//! Provides the built-in exercise catalog, the custom workout library and
//! the session/timer pair that credits finished workouts to progress.

pub mod library;
pub mod session;
pub mod timer;
pub mod types;

pub use library::{parse_exercise_list, CustomWorkoutLibrary};
pub use session::{calories_for, WorkoutSession, DEFAULT_CALORIES_PER_MINUTE};
pub use timer::{format_elapsed, WorkoutTimer, TICK_PERIOD};
pub use types::{
    CustomWorkout, Exercise, SessionStatus, WorkoutCategory, WorkoutError, WorkoutSummary,
    MAX_CUSTOM_EXERCISES,
};
