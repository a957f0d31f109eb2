//! Plain-text reports for the console.

use std::fmt::Write;

use serde::Serialize;

use crate::meals::LoggedMeal;
use crate::progress::{display_ratio, NutritionProgress, Profile, WorkoutProgress};
use crate::settings::account_info;
use crate::workouts::{format_elapsed, CustomWorkout, WorkoutSession, WorkoutSummary};

use super::command::CommandError;

/// Stored ratio as a whole percentage, clamped to 0..=100.
pub fn percent(ratio: f32) -> u32 {
    (display_ratio(ratio) * 100.0).round() as u32
}

/// Workout and nutrition progress summary.
pub fn progress_report(workout: &WorkoutProgress, nutrition: &NutritionProgress) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Workouts: {}/{} ({}%)",
        workout.workouts_completed,
        workout.weekly_goal,
        percent(workout.workout_completion_percentage())
    );
    let _ = writeln!(
        out,
        "Calories burned: {}/{} ({}%)",
        workout.calories_burned,
        workout.calorie_goal,
        percent(workout.calorie_completion_percentage())
    );
    let _ = writeln!(
        out,
        "Consumed: {} kcal, remaining: {} kcal ({}% of daily goal)",
        nutrition.consumed_calories,
        nutrition.remaining_calories,
        percent(nutrition.calorie_percentage)
    );
    if nutrition.over_goal() {
        let _ = writeln!(out, "Daily calorie goal exceeded");
    }
    let _ = write!(
        out,
        "Protein: {}g, carbs: {}g, fats: {}g",
        nutrition.protein, nutrition.carbs, nutrition.fats
    );
    out
}

/// Pretty-printed JSON of any serializable record.
pub fn json_report<T: Serialize>(value: &T) -> Result<String, CommandError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        tracing::warn!(error = %e, "Failed to serialize report");
        CommandError::Render(e.to_string())
    })
}

/// Account details followed by goals.
pub fn profile_report(profile: &Profile) -> String {
    let mut out = String::new();
    for (label, value) in account_info(profile) {
        let _ = writeln!(out, "{label}: {value}");
    }
    let _ = writeln!(out, "Daily calories goal: {}", profile.daily_calories_goal);
    let _ = write!(out, "Weekly workouts goal: {}", profile.weekly_workout_goal);
    out
}

/// Current state of a running workout.
pub fn session_report(session: &WorkoutSession) -> String {
    let mut out = format!(
        "Current exercise: {} ({}/{})\nTime elapsed: {}\nStarted at: {}",
        session.current_exercise(),
        session.current_index() + 1,
        session.exercises().len(),
        format_elapsed(session.elapsed_seconds()),
        session.started_at().format("%H:%M:%S UTC")
    );
    if session.is_last_exercise() {
        out.push_str("\nLast exercise, use 'workout finish' when done");
    }
    out
}

pub fn summary_report(summary: &WorkoutSummary) -> String {
    format!(
        "Workout complete: {} in {}, {} kcal burned",
        summary
            .exercises
            .iter()
            .map(|e| e.display_name())
            .collect::<Vec<_>>()
            .join(", "),
        format_elapsed(summary.elapsed_seconds),
        summary.calories_burned
    )
}

pub fn custom_list_report(workouts: &[CustomWorkout]) -> String {
    if workouts.is_empty() {
        return "No custom workouts available.".to_string();
    }
    workouts
        .iter()
        .map(|w| format!("{}: {}", w.name, w.exercise_summary()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn meals_report(meals: &[LoggedMeal]) -> String {
    if meals.is_empty() {
        return "No meals logged yet.".to_string();
    }
    meals
        .iter()
        .map(|m| {
            format!(
                "{} ({} kcal, {}g carbs, {}g protein, {}g fats)",
                m.entry.name, m.entry.calories, m.entry.carbs, m.entry.proteins, m.entry.fats
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
