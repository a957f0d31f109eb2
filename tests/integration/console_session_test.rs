//! Integration tests for a scripted console session.

use std::time::Duration;

use fittune::console::{CommandError, ConsoleApp, Reply};
use fittune::progress::ProgressStore;
use fittune::storage::config::AppConfig;
use tokio::time;

fn run(app: &mut ConsoleApp, line: &str) -> String {
    match app.handle_line(line) {
        Ok(Reply::Text(text)) => text,
        Ok(Reply::Quit) => panic!("unexpected quit for {line}"),
        Err(e) => panic!("{line} failed: {e}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_day_of_tracking() {
    let mut config = AppConfig::default();
    config.workout.calories_per_minute = 8;
    let store = ProgressStore::with_profile(config.profile.clone());
    let mut app = ConsoleApp::new(store.clone(), &config);

    run(&mut app, "custom add running, yoga");
    assert_eq!(run(&mut app, "custom list"), "Custom Workout 1: Running, Yoga");

    let started = run(&mut app, "workout start custom Custom Workout 1");
    assert!(started.starts_with("Current exercise: Running (1/2)"));
    assert!(started.contains("\nStarted at: "));

    time::sleep(Duration::from_millis(600_500)).await;
    assert!(matches!(
        app.handle_line("workout finish"),
        Err(CommandError::Workout(_))
    ));
    assert!(run(&mut app, "workout next").contains("Last exercise"));
    let finished = run(&mut app, "workout finish");
    assert_eq!(
        finished,
        "Workout complete: Running, Yoga in 10 min 0 sec, 80 kcal burned"
    );

    run(&mut app, "meal Oatmeal;450;70;15;9");
    run(&mut app, "meal ;300;abc;;");
    assert_eq!(
        run(&mut app, "meals"),
        "Oatmeal (450 kcal, 70g carbs, 15g protein, 9g fats)\n\
         Unnamed meal (300 kcal, 0g carbs, 0g protein, 0g fats)"
    );

    let status = run(&mut app, "status");
    assert!(status.contains("Workouts: 1/4 (25%)"));
    assert!(status.contains("Calories burned: 80/2000 (4%)"));
    assert!(status.contains("Consumed: 750 kcal, remaining: 1250 kcal"));

    run(&mut app, "goal calories 700");
    let status = run(&mut app, "status");
    assert!(status.contains("remaining: 0 kcal (100% of daily goal)"));
    assert!(status.contains("Daily calorie goal exceeded"));
    assert!(store.nutrition_progress().calorie_percentage > 1.0);

    assert_eq!(run(&mut app, "reset"), "Progress reset");
    let workout = store.workout_progress();
    assert_eq!(workout.workouts_completed, 0);
    assert_eq!(store.profile().daily_calories_goal, 700);
    assert_eq!(store.nutrition_progress().remaining_calories, 700);

    assert_eq!(app.handle_line("quit").unwrap(), Reply::Quit);
}

#[test]
fn test_errors_do_not_change_state() {
    let store = ProgressStore::new();
    let mut app = ConsoleApp::new(store.clone(), &AppConfig::default());

    assert!(app.handle_line("custom add squats,squats").is_err());
    assert!(app.handle_line("account shoe=42").is_err());
    assert!(app.handle_line("goal steps 9000").is_err());
    assert!(app.handle_line("fly").is_err());

    assert_eq!(run(&mut app, "custom list"), "No custom workouts available.");
    assert_eq!(store.profile(), fittune::Profile::default());
}

#[test]
fn test_profile_and_account() {
    let mut app = ConsoleApp::new(ProgressStore::new(), &AppConfig::default());
    let report = run(&mut app, "account name=Jane Roe;phone=555-0100");
    assert!(report.starts_with("Name: Jane Roe\nEmail: johndoe@example.com\nPhone: 555-0100"));
    assert!(run(&mut app, "profile").contains("Daily calories goal: 2000"));
}
