//! FitTune - Fitness Progress Tracking
//!
//! Keeps a user's profile, workout progress and nutrition progress in an
//! observable in-memory store, with timed workout sessions, meal logging
//! and goal editing built on top of it.

pub mod console;
pub mod input;
pub mod meals;
pub mod progress;
pub mod settings;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use meals::MealLog;
pub use progress::{NutritionProgress, Profile, ProgressStore, WorkoutProgress};
pub use storage::config::AppConfig;
pub use workouts::{CustomWorkoutLibrary, WorkoutSession};
