//! Unit tests for the exercise catalog and custom workout library.

use fittune::workouts::{
    parse_exercise_list, CustomWorkoutLibrary, Exercise, WorkoutCategory, WorkoutError,
    MAX_CUSTOM_EXERCISES,
};

#[test]
fn test_catalog_covers_all_exercises() {
    let mut from_categories: Vec<Exercise> = WorkoutCategory::all()
        .iter()
        .flat_map(|c| c.exercises())
        .collect();
    from_categories.dedup();

    assert_eq!(from_categories, Exercise::ALL.to_vec());
    for category in WorkoutCategory::all() {
        assert_eq!(category.exercises().len(), 3);
    }
}

#[test]
fn test_names_follow_count_after_removal() {
    let mut library = CustomWorkoutLibrary::new();
    library.add(vec![Exercise::Squats]).unwrap();
    library.add(vec![Exercise::Running]).unwrap();
    library.remove("Custom Workout 1").unwrap();

    let added = library.add(vec![Exercise::Yoga]).unwrap();
    assert_eq!(added.name, "Custom Workout 2");

    // First match wins for duplicate names.
    assert_eq!(
        library.get("Custom Workout 2").unwrap().exercises,
        vec![Exercise::Running]
    );
}

#[test]
fn test_update_validates_like_add() {
    let mut library = CustomWorkoutLibrary::new();
    library.add(vec![Exercise::Pilates]).unwrap();

    let too_many = parse_exercise_list("squats,deadlifts,bench press,rowing").unwrap();
    assert_eq!(too_many.len(), MAX_CUSTOM_EXERCISES + 1);
    assert_eq!(
        library.update("Custom Workout 1", too_many).unwrap_err(),
        WorkoutError::TooManyExercises(4)
    );
    assert_eq!(
        library.update("Custom Workout 7", vec![Exercise::Yoga]).unwrap_err(),
        WorkoutError::NotFound("Custom Workout 7".to_string())
    );
    assert_eq!(
        library.get("Custom Workout 1").unwrap().exercises,
        vec![Exercise::Pilates]
    );
}
