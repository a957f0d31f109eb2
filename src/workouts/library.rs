//! Custom workout library.
//!
//! Keeps the user's custom workouts for the session. Names are assigned
//! from the current count, so removing a workout can produce a later
//! duplicate name; lookups return the first match.

use super::types::{CustomWorkout, Exercise, WorkoutError, MAX_CUSTOM_EXERCISES};

/// Session-scoped list of custom workouts.
#[derive(Debug, Default)]
pub struct CustomWorkoutLibrary {
    workouts: Vec<CustomWorkout>,
}

impl CustomWorkoutLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a workout named after the current count ("Custom Workout N").
    pub fn add(&mut self, exercises: Vec<Exercise>) -> Result<&CustomWorkout, WorkoutError> {
        validate_exercises(&exercises)?;

        let name = format!("Custom Workout {}", self.workouts.len() + 1);
        tracing::info!(name = %name, exercises = exercises.len(), "Custom workout added");
        self.workouts.push(CustomWorkout::new(name, exercises));

        // Just pushed
        Ok(&self.workouts[self.workouts.len() - 1])
    }

    /// Replace the exercises of the named workout.
    pub fn update(&mut self, name: &str, exercises: Vec<Exercise>) -> Result<(), WorkoutError> {
        validate_exercises(&exercises)?;

        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.name == name)
            .ok_or_else(|| WorkoutError::NotFound(name.to_string()))?;
        workout.exercises = exercises;

        tracing::info!(name, "Custom workout updated");
        Ok(())
    }

    /// Remove the named workout.
    pub fn remove(&mut self, name: &str) -> Result<CustomWorkout, WorkoutError> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.name == name)
            .ok_or_else(|| WorkoutError::NotFound(name.to_string()))?;

        tracing::info!(name, "Custom workout removed");
        Ok(self.workouts.remove(index))
    }

    /// Get a workout by name.
    pub fn get(&self, name: &str) -> Option<&CustomWorkout> {
        self.workouts.iter().find(|w| w.name == name)
    }

    /// All workouts in creation order.
    pub fn list(&self) -> &[CustomWorkout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Parse a comma separated list of exercise names.
pub fn parse_exercise_list(text: &str) -> Result<Vec<Exercise>, WorkoutError> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Exercise::from_name(name).ok_or_else(|| WorkoutError::UnknownExercise(name.to_string())))
        .collect()
}

fn validate_exercises(exercises: &[Exercise]) -> Result<(), WorkoutError> {
    if exercises.is_empty() {
        return Err(WorkoutError::NoExercises);
    }
    if exercises.len() > MAX_CUSTOM_EXERCISES {
        return Err(WorkoutError::TooManyExercises(exercises.len()));
    }
    for (i, exercise) in exercises.iter().enumerate() {
        if exercises[..i].contains(exercise) {
            return Err(WorkoutError::DuplicateExercise(*exercise));
        }
    }
    Ok(())
}
