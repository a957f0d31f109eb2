//! Goal and account editing.
//!
//! Each edit reads the current profile, changes only the requested fields
//! and writes the whole profile back through `ProgressStore::update_profile`.

use serde::{Deserialize, Serialize};

use crate::input::parse_non_blank;
use crate::progress::{Profile, ProgressStore};

/// Which goal a settings edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Daily calorie intake goal
    Calories,
    /// Weekly workouts goal
    Workouts,
}

impl GoalKind {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalKind::Calories => "Calories Goal",
            GoalKind::Workouts => "Workouts Goal",
        }
    }

    /// Parse a goal name ("calories" / "workouts").
    pub fn from_name(name: &str) -> Option<GoalKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "calories" | "calorie" => Some(GoalKind::Calories),
            "workouts" | "workout" => Some(GoalKind::Workouts),
            _ => None,
        }
    }
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Set one goal from text input.
///
/// Blank input leaves the profile untouched and returns `None`. Any other
/// input is coerced (non-numeric becomes 0) and the new value is returned.
pub fn edit_goal(store: &ProgressStore, goal: GoalKind, input: &str) -> Option<u32> {
    let value = parse_non_blank(input)?;

    let mut profile = store.profile();
    match goal {
        GoalKind::Calories => profile.daily_calories_goal = value,
        GoalKind::Workouts => profile.weekly_workout_goal = value,
    }
    store.update_profile(profile);

    tracing::info!(goal = %goal, value, "Goal edited");
    Some(value)
}

/// Account fields to change; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
}

impl AccountUpdate {
    /// Set a field by its label (case-insensitive). Returns false for unknown labels.
    pub fn set(&mut self, label: &str, value: String) -> bool {
        let slot = match label.trim().to_ascii_lowercase().as_str() {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "weight" => &mut self.weight,
            "height" => &mut self.height,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == AccountUpdate::default()
    }

    fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(phone) = self.phone {
            profile.phone = phone;
        }
        if let Some(weight) = self.weight {
            profile.weight = weight;
        }
        if let Some(height) = self.height {
            profile.height = height;
        }
    }
}

/// Apply account changes; goals are kept as they are.
pub fn edit_account(store: &ProgressStore, update: AccountUpdate) -> Profile {
    let mut profile = store.profile();
    update.apply(&mut profile);
    store.update_profile(profile.clone());

    tracing::info!("Account information edited");
    profile
}

/// Account details as ordered (label, value) pairs.
pub fn account_info(profile: &Profile) -> Vec<(&'static str, &str)> {
    vec![
        ("Name", profile.name.as_str()),
        ("Email", profile.email.as_str()),
        ("Phone", profile.phone.as_str()),
        ("Weight", profile.weight.as_str()),
        ("Height", profile.height.as_str()),
    ]
}
