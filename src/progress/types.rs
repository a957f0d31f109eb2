//! Progress record definitions.
//!
//! Profile, workout progress and nutrition progress records plus the
//! derived ratios computed from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ratio of `value` to `goal`, or 0 when the goal is 0.
///
/// The result is not clamped: logging past the goal yields values above 1.0.
pub fn ratio(value: u32, goal: u32) -> f32 {
    if goal > 0 {
        value as f32 / goal as f32
    } else {
        0.0
    }
}

/// Clamp a stored ratio into `[0, 1]` for progress bars.
pub fn display_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// User profile with personal details and goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Body weight as entered (free text, e.g. "180 lbs")
    pub weight: String,
    /// Height as entered (free text, e.g. "70 in")
    pub height: String,
    /// Daily calorie intake goal in kcal
    pub daily_calories_goal: u32,
    /// Workouts per week goal
    pub weekly_workout_goal: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            weight: "180 lbs".to_string(),
            height: "70 in".to_string(),
            daily_calories_goal: 2000,
            weekly_workout_goal: 4,
        }
    }
}

/// Workout progress for the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutProgress {
    /// Workouts logged since the last reset
    pub workouts_completed: u32,
    /// Mirrors `Profile::weekly_workout_goal`
    pub weekly_goal: u32,
    /// Calories burned since the last reset
    pub calories_burned: u32,
    /// Mirrors `Profile::daily_calories_goal`
    pub calorie_goal: u32,
}

impl WorkoutProgress {
    /// Fresh progress for the given profile goals.
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            workouts_completed: 0,
            weekly_goal: profile.weekly_workout_goal,
            calories_burned: 0,
            calorie_goal: profile.daily_calories_goal,
        }
    }

    /// Completed workouts as a fraction of the weekly goal.
    pub fn workout_completion_percentage(&self) -> f32 {
        ratio(self.workouts_completed, self.weekly_goal)
    }

    /// Burned calories as a fraction of the calorie goal.
    pub fn calorie_completion_percentage(&self) -> f32 {
        ratio(self.calories_burned, self.calorie_goal)
    }

    /// Whether the weekly workout goal has been reached.
    pub fn weekly_goal_reached(&self) -> bool {
        self.weekly_goal > 0 && self.workouts_completed >= self.weekly_goal
    }
}

/// Nutrition progress for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionProgress {
    /// Calories consumed since the last reset
    pub consumed_calories: u32,
    /// Calories left before reaching the daily goal (never negative)
    pub remaining_calories: u32,
    /// Consumed calories as a fraction of the daily goal
    pub calorie_percentage: f32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fats in grams
    pub fats: u32,
}

impl NutritionProgress {
    /// Fresh nutrition progress for the given profile goal.
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            remaining_calories: profile.daily_calories_goal,
            ..Default::default()
        }
    }

    /// Recompute remaining calories and percentage against `daily_goal`.
    pub fn sync_goal(&mut self, daily_goal: u32) {
        self.remaining_calories = daily_goal.saturating_sub(self.consumed_calories);
        self.calorie_percentage = ratio(self.consumed_calories, daily_goal);
    }

    /// Whether intake has passed the daily goal.
    pub fn over_goal(&self) -> bool {
        self.calorie_percentage > 1.0
    }
}

/// Point-in-time copy of all three records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub profile: Profile,
    pub workout: WorkoutProgress,
    pub nutrition: NutritionProgress,
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
}

/// Mutation notifications published by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// A workout was logged
    WorkoutLogged {
        calories_burned: u32,
        progress: WorkoutProgress,
    },
    /// A meal was logged
    MealLogged {
        calories: u32,
        daily_goal: u32,
        progress: NutritionProgress,
    },
    /// The profile was replaced and goals re-synchronized
    ProfileUpdated(Profile),
    /// Accumulators were zeroed
    ProgressReset,
}
