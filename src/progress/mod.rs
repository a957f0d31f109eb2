//! Progress tracking module.
//!
//! Keeps the user's profile together with workout and nutrition progress:
//! - Running totals for workouts, burned calories and consumed macros
//! - Goal ratios derived from the profile goals
//! - Latest-value and event subscriptions for front-ends

pub mod alerts;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use alerts::{goal_alert, spawn_goal_alerts};
pub use store::ProgressStore;
pub use types::{
    display_ratio, ratio, NutritionProgress, Profile, ProgressEvent, ProgressSnapshot,
    WorkoutProgress,
};
