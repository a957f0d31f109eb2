//! Goal alerts derived from store events.

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use super::store::ProgressStore;
use super::types::ProgressEvent;

/// Message for events that cross a goal, if any.
pub fn goal_alert(event: &ProgressEvent) -> Option<String> {
    match event {
        ProgressEvent::WorkoutLogged { progress, .. }
            if progress.weekly_goal > 0 && progress.workouts_completed == progress.weekly_goal =>
        {
            Some(format!(
                "Weekly workout goal reached: {}/{}",
                progress.workouts_completed, progress.weekly_goal
            ))
        }
        ProgressEvent::MealLogged {
            calories,
            daily_goal,
            progress,
        } if *daily_goal > 0
            && progress.consumed_calories > *daily_goal
            && progress.consumed_calories.saturating_sub(*calories) <= *daily_goal =>
        {
            Some(format!(
                "Daily calorie goal exceeded: {} kcal consumed",
                progress.consumed_calories
            ))
        }
        _ => None,
    }
}

/// Log goal alerts for every store event until the runtime shuts down.
pub fn spawn_goal_alerts(store: &ProgressStore) -> JoinHandle<()> {
    let mut events = store.subscribe_events();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some(message) = goal_alert(&event) {
                        tracing::info!("{}", message);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Goal alerts lagged behind store events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
