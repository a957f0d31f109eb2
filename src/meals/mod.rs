//! Meal logging.
//!
//! Converts meal form input into macro totals and keeps the list of meals
//! logged this session.

pub mod log;

pub use log::{LoggedMeal, MealEntry, MealLog, UNNAMED_MEAL};
