//! Workout types and enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of exercises in a custom workout.
pub const MAX_CUSTOM_EXERCISES: usize = 3;

/// A single exercise from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Squats,
    Deadlifts,
    BenchPress,
    Running,
    Cycling,
    Rowing,
    Yoga,
    Pilates,
    Stretching,
}

impl Exercise {
    /// Every exercise, grouped by category order.
    pub const ALL: [Exercise; 9] = [
        Exercise::Squats,
        Exercise::Deadlifts,
        Exercise::BenchPress,
        Exercise::Running,
        Exercise::Cycling,
        Exercise::Rowing,
        Exercise::Yoga,
        Exercise::Pilates,
        Exercise::Stretching,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Exercise::Squats => "Squats",
            Exercise::Deadlifts => "Deadlifts",
            Exercise::BenchPress => "Bench Press",
            Exercise::Running => "Running",
            Exercise::Cycling => "Cycling",
            Exercise::Rowing => "Rowing",
            Exercise::Yoga => "Yoga",
            Exercise::Pilates => "Pilates",
            Exercise::Stretching => "Stretching",
        }
    }

    /// Category this exercise belongs to.
    pub fn category(&self) -> WorkoutCategory {
        match self {
            Exercise::Squats | Exercise::Deadlifts | Exercise::BenchPress => {
                WorkoutCategory::Strength
            }
            Exercise::Running | Exercise::Cycling | Exercise::Rowing => WorkoutCategory::Cardio,
            Exercise::Yoga | Exercise::Pilates | Exercise::Stretching => {
                WorkoutCategory::Flexibility
            }
        }
    }

    /// Look up an exercise by display name, ignoring case and spacing.
    pub fn from_name(name: &str) -> Option<Exercise> {
        let wanted = normalize(name);
        Exercise::ALL
            .into_iter()
            .find(|exercise| normalize(exercise.display_name()) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Built-in workout category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    Strength,
    Cardio,
    Flexibility,
}

impl WorkoutCategory {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutCategory::Strength => "Strength",
            WorkoutCategory::Cardio => "Cardio",
            WorkoutCategory::Flexibility => "Flexibility",
        }
    }

    /// Get all categories.
    pub fn all() -> [WorkoutCategory; 3] {
        [
            WorkoutCategory::Strength,
            WorkoutCategory::Cardio,
            WorkoutCategory::Flexibility,
        ]
    }

    /// Exercises performed in a workout of this category.
    pub fn exercises(&self) -> Vec<Exercise> {
        Exercise::ALL
            .into_iter()
            .filter(|exercise| exercise.category() == *self)
            .collect()
    }

    /// Parse a category name (case-insensitive).
    pub fn from_name(name: &str) -> Option<WorkoutCategory> {
        let name = name.trim();
        WorkoutCategory::all()
            .into_iter()
            .find(|category| category.display_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A user-assembled workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWorkout {
    /// Display name ("Custom Workout N")
    pub name: String,
    /// Exercises in execution order
    pub exercises: Vec<Exercise>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl CustomWorkout {
    /// Create a new custom workout. Exercises are not validated here.
    pub fn new(name: String, exercises: Vec<Exercise>) -> Self {
        Self {
            name,
            exercises,
            created_at: Utc::now(),
        }
    }

    /// Comma separated exercise names.
    pub fn exercise_summary(&self) -> String {
        self.exercises
            .iter()
            .map(Exercise::display_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Lifecycle of a workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Timer running
    InProgress,
    /// Finished and logged
    Completed,
    /// Dismissed without logging
    Cancelled,
}

/// Result of finishing a workout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Exercises performed
    pub exercises: Vec<Exercise>,
    /// Wall time on the timer in seconds
    pub elapsed_seconds: u64,
    /// Calories credited to the progress store
    pub calories_burned: u32,
    /// When the session started
    pub started_at: DateTime<Utc>,
}

/// Errors related to workout operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkoutError {
    /// Custom workout not found
    #[error("Workout not found: {0}")]
    NotFound(String),

    /// Unknown exercise name
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// Exercise listed twice
    #[error("Exercise listed more than once: {0}")]
    DuplicateExercise(Exercise),

    /// Custom workout over the exercise limit
    #[error("A custom workout holds at most 3 exercises, got {0}")]
    TooManyExercises(usize),

    /// Empty exercise list
    #[error("Workout has no exercises")]
    NoExercises,

    /// Tried to advance past the final exercise
    #[error("Already on the last exercise")]
    AlreadyAtLastExercise,

    /// Tried to finish before reaching the final exercise
    #[error("{0} exercise(s) remaining")]
    ExercisesRemaining(usize),

    /// Session no longer running
    #[error("Workout session is not in progress")]
    NotInProgress,
}
