//! Meal entries and the recent-meal log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::parse_or_zero;
use crate::progress::ProgressStore;

/// Name used when a meal is logged without one.
pub const UNNAMED_MEAL: &str = "Unnamed meal";

/// A meal with its calorie and macronutrient content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealEntry {
    pub name: String,
    /// Energy in kcal
    pub calories: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Protein in grams
    pub proteins: u32,
    /// Fat in grams
    pub fats: u32,
}

impl MealEntry {
    /// Build an entry from raw form fields; unparsable numbers become 0.
    pub fn from_form(name: &str, calories: &str, carbs: &str, proteins: &str, fats: &str) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                UNNAMED_MEAL.to_string()
            } else {
                name.to_string()
            },
            calories: parse_or_zero(calories),
            carbs: parse_or_zero(carbs),
            proteins: parse_or_zero(proteins),
            fats: parse_or_zero(fats),
        }
    }
}

/// A meal as recorded in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub entry: MealEntry,
    pub logged_at: DateTime<Utc>,
}

/// Recent meals for the session, forwarding totals to the progress store.
#[derive(Debug)]
pub struct MealLog {
    store: ProgressStore,
    meals: Vec<LoggedMeal>,
}

impl MealLog {
    pub fn new(store: ProgressStore) -> Self {
        Self {
            store,
            meals: Vec::new(),
        }
    }

    /// Record the meal and add its totals to nutrition progress.
    pub fn log(&mut self, entry: MealEntry) -> &LoggedMeal {
        self.store
            .log_meal(entry.calories, entry.proteins, entry.carbs, entry.fats);
        tracing::debug!(meal = %entry.name, "Meal added to recent list");

        self.meals.push(LoggedMeal {
            entry,
            logged_at: Utc::now(),
        });
        &self.meals[self.meals.len() - 1]
    }

    /// Logged meals, oldest first.
    pub fn recent(&self) -> &[LoggedMeal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
