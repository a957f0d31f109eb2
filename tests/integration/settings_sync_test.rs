//! Integration tests for settings edits and goal re-synchronization.

use fittune::meals::{MealEntry, MealLog};
use fittune::progress::ProgressStore;
use fittune::settings::{edit_account, edit_goal, AccountUpdate, GoalKind};

#[test]
fn test_goal_edits_resync_progress() {
    let store = ProgressStore::new();
    let mut meals = MealLog::new(store.clone());
    let mut nutrition_rx = store.subscribe_nutrition();

    meals.log(MealEntry::from_form("Breakfast", "600", "80", "25", "20"));
    store.log_workout(300);
    nutrition_rx.borrow_and_update();

    edit_goal(&store, GoalKind::Calories, "1200");
    edit_goal(&store, GoalKind::Workouts, "2");

    assert!(nutrition_rx.has_changed().unwrap());
    let nutrition = *nutrition_rx.borrow_and_update();
    assert_eq!(nutrition.remaining_calories, 600);
    assert_eq!(nutrition.calorie_percentage, 0.5);

    let workout = store.workout_progress();
    assert_eq!(workout.weekly_goal, 2);
    assert_eq!(workout.calorie_goal, 1200);
    assert_eq!(workout.workout_completion_percentage(), 0.5);
    assert_eq!(workout.calorie_completion_percentage(), 0.25);
}

#[test]
fn test_zero_goal_from_settings() {
    let store = ProgressStore::new();
    let mut meals = MealLog::new(store.clone());
    meals.log(MealEntry::from_form("Lunch", "700", "", "", ""));

    assert_eq!(edit_goal(&store, GoalKind::Calories, "0"), Some(0));

    let nutrition = store.nutrition_progress();
    assert_eq!(nutrition.calorie_percentage, 0.0);
    assert_eq!(nutrition.remaining_calories, 0);

    meals.log(MealEntry::from_form("Snack", "150", "", "", ""));
    assert_eq!(store.nutrition_progress().consumed_calories, 850);
    assert_eq!(store.nutrition_progress().calorie_percentage, 0.0);
}

#[test]
fn test_account_edit_preserves_progress() {
    let store = ProgressStore::new();
    store.log_workout(250);
    store.log_meal(400, 20, 40, 10);

    let mut update = AccountUpdate::default();
    update.set("email", "jane@example.com".to_string());
    edit_account(&store, update);

    assert_eq!(store.profile().email, "jane@example.com");
    assert_eq!(store.workout_progress().workouts_completed, 1);
    assert_eq!(store.nutrition_progress().consumed_calories, 400);
    assert_eq!(store.nutrition_progress().remaining_calories, 1600);
}
