//! Unit tests for ProgressStore bookkeeping.

use fittune::progress::{Profile, ProgressStore};

fn store_with_goals(daily_calories_goal: u32, weekly_workout_goal: u32) -> ProgressStore {
    ProgressStore::with_profile(Profile {
        daily_calories_goal,
        weekly_workout_goal,
        ..Profile::default()
    })
}

#[test]
fn test_log_workout_increments_by_one_and_adds_calories() {
    let store = ProgressStore::new();

    for calories in [0, 1, 250, 999] {
        let before = store.workout_progress();
        store.log_workout(calories);
        let after = store.workout_progress();

        assert_eq!(after.workouts_completed, before.workouts_completed + 1);
        assert_eq!(after.calories_burned, before.calories_burned + calories);
    }
}

#[test]
fn test_log_meal_accumulates_and_tracks_remaining() {
    let store = store_with_goals(1800, 3);
    let meals = [(600, 30, 70, 20), (0, 0, 0, 0), (900, 45, 100, 30), (700, 10, 90, 25)];

    let mut consumed = 0u32;
    for (calories, protein, carbs, fats) in meals {
        let before = store.nutrition_progress();
        store.log_meal(calories, protein, carbs, fats);
        let after = store.nutrition_progress();
        consumed += calories;

        assert_eq!(after.consumed_calories, consumed);
        assert_eq!(after.protein, before.protein + protein);
        assert_eq!(after.carbs, before.carbs + carbs);
        assert_eq!(after.fats, before.fats + fats);
        assert_eq!(after.remaining_calories, 1800u32.saturating_sub(consumed));
    }

    // 2200 of 1800
    let nutrition = store.nutrition_progress();
    assert_eq!(nutrition.remaining_calories, 0);
    assert!(nutrition.calorie_percentage > 1.0);
}

#[test]
fn test_meal_scenario_three_meals() {
    let store = store_with_goals(2000, 4);
    for _ in 0..3 {
        store.log_meal(500, 20, 60, 15);
    }

    let nutrition = store.nutrition_progress();
    assert_eq!(nutrition.consumed_calories, 1500);
    assert_eq!(nutrition.remaining_calories, 500);
    assert!((nutrition.calorie_percentage - 0.75).abs() < f32::EPSILON);
}

#[test]
fn test_workout_scenario_weekly_goal() {
    let store = store_with_goals(2000, 4);
    for _ in 0..4 {
        store.log_workout(300);
    }

    let workout = store.workout_progress();
    assert_eq!(workout.workouts_completed, 4);
    assert_eq!(workout.workout_completion_percentage(), 1.0);
    assert_eq!(workout.calories_burned, 1200);
    assert!(workout.weekly_goal_reached());
}

#[test]
fn test_reset_zeroes_accumulators_only() {
    let store = store_with_goals(2400, 5);
    store.log_workout(450);
    store.log_meal(800, 40, 90, 30);
    let goals_before = store.profile();

    store.reset_progress();

    let workout = store.workout_progress();
    let nutrition = store.nutrition_progress();
    assert_eq!(workout.workouts_completed, 0);
    assert_eq!(workout.calories_burned, 0);
    assert_eq!(nutrition.consumed_calories, 0);
    assert_eq!(nutrition.protein, 0);
    assert_eq!(nutrition.carbs, 0);
    assert_eq!(nutrition.fats, 0);
    assert_eq!(nutrition.remaining_calories, 2400);
    assert_eq!(store.profile(), goals_before);
    assert_eq!(workout.weekly_goal, 5);
}

#[test]
fn test_zero_calorie_goal_does_not_produce_nan() {
    let store = ProgressStore::new();
    store.log_meal(1200, 0, 0, 0);

    store.update_profile(Profile {
        daily_calories_goal: 0,
        ..store.profile()
    });

    let nutrition = store.nutrition_progress();
    assert!(nutrition.calorie_percentage.is_finite());
    assert_eq!(nutrition.calorie_percentage, 0.0);
    assert_eq!(store.workout_progress().calorie_completion_percentage(), 0.0);

    store.log_meal(300, 0, 0, 0);
    assert_eq!(store.nutrition_progress().calorie_percentage, 0.0);
}

#[test]
fn test_snapshot_is_consistent() {
    let store = ProgressStore::new();
    store.log_workout(200);
    store.log_meal(400, 10, 50, 12);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.workout, store.workout_progress());
    assert_eq!(snapshot.nutrition, store.nutrition_progress());
    assert_eq!(snapshot.profile, store.profile());
}
