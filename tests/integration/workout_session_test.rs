//! Integration tests for timed workout sessions.
//!
//! Runs sessions on a paused tokio clock and checks that finished
//! workouts reach the progress store and its subscribers.

use std::time::Duration;

use fittune::progress::{ProgressEvent, ProgressStore};
use fittune::workouts::{
    CustomWorkoutLibrary, Exercise, SessionStatus, WorkoutCategory, WorkoutError, WorkoutSession,
    WorkoutTimer,
};
use tokio::time;

#[tokio::test(start_paused = true)]
async fn test_full_strength_workout() {
    let store = ProgressStore::new();
    let mut workout_rx = store.subscribe_workout();
    let mut session =
        WorkoutSession::start(store.clone(), WorkoutCategory::Strength.exercises(), 10).unwrap();

    time::sleep(Duration::from_millis(60_500)).await;
    session.next_exercise().unwrap();
    time::sleep(Duration::from_secs(60)).await;
    session.next_exercise().unwrap();
    time::sleep(Duration::from_secs(60)).await;
    assert_eq!(session.elapsed_seconds(), 180);

    let summary = session.finish().unwrap();
    assert_eq!(summary.calories_burned, 30);
    assert_eq!(summary.exercises.len(), 3);

    assert!(workout_rx.has_changed().unwrap());
    let progress = *workout_rx.borrow_and_update();
    assert_eq!(progress.workouts_completed, 1);
    assert_eq!(progress.calories_burned, 30);
}

#[tokio::test(start_paused = true)]
async fn test_short_workout_logs_zero_calories() {
    let store = ProgressStore::new();
    let mut session = WorkoutSession::start(store.clone(), vec![Exercise::Stretching], 10).unwrap();

    time::sleep(Duration::from_millis(45_500)).await;
    let summary = session.finish().unwrap();

    assert_eq!(summary.elapsed_seconds, 45);
    assert_eq!(summary.calories_burned, 0);
    // Still counts as a completed workout.
    assert_eq!(store.workout_progress().workouts_completed, 1);
}

#[tokio::test(start_paused = true)]
async fn test_custom_workout_session() {
    let store = ProgressStore::new();
    let mut library = CustomWorkoutLibrary::new();
    library.add(vec![Exercise::Rowing, Exercise::Yoga]).unwrap();

    let exercises = library.get("Custom Workout 1").unwrap().exercises.clone();
    let mut session = WorkoutSession::start(store.clone(), exercises, 12).unwrap();
    let mut events = store.subscribe_events();

    time::sleep(Duration::from_millis(300_500)).await;
    assert_eq!(
        session.finish().unwrap_err(),
        WorkoutError::ExercisesRemaining(1)
    );
    session.next_exercise().unwrap();
    let summary = session.finish().unwrap();

    assert_eq!(summary.calories_burned, 60);
    assert!(matches!(
        events.try_recv().unwrap(),
        ProgressEvent::WorkoutLogged {
            calories_burned: 60,
            ..
        }
    ));
}

#[tokio::test(start_paused = true)]
async fn test_dropped_session_stops_timer() {
    let store = ProgressStore::new();
    let session = WorkoutSession::start(store.clone(), vec![Exercise::Cycling], 10).unwrap();
    let mut elapsed_rx = session.subscribe_elapsed();

    time::sleep(Duration::from_millis(2_500)).await;
    drop(session);
    time::sleep(Duration::from_secs(30)).await;

    assert_eq!(*elapsed_rx.borrow_and_update(), 2);
    assert!(elapsed_rx.changed().await.is_err());
    assert_eq!(store.workout_progress().workouts_completed, 0);
}

#[tokio::test(start_paused = true)]
async fn test_custom_tick_period() {
    let store = ProgressStore::new();
    let mut session = WorkoutSession::start_with_timer(
        store.clone(),
        vec![Exercise::Running],
        10,
        || WorkoutTimer::start_with_period(Duration::from_millis(100)),
    )
    .unwrap();

    // 600 ticks of 100ms count as ten minutes.
    time::sleep(Duration::from_millis(60_050)).await;
    let summary = session.finish().unwrap();

    assert_eq!(summary.elapsed_seconds, 600);
    assert_eq!(summary.calories_burned, 100);
    assert_eq!(session.status(), SessionStatus::Completed);
}
