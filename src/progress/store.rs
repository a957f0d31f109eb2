//! Observable progress store.
//!
//! Holds the profile, workout progress and nutrition progress records and
//! publishes every change to subscribers. The store is a cheap clonable
//! handle; all clones share the same state.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tokio::sync::{broadcast, watch};

use super::types::{NutritionProgress, Profile, ProgressEvent, ProgressSnapshot, WorkoutProgress};

/// Capacity of the mutation event channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The three records guarded together so cross-record updates stay consistent.
#[derive(Debug)]
struct StoreState {
    profile: Profile,
    workout: WorkoutProgress,
    nutrition: NutritionProgress,
}

impl StoreState {
    fn publish(&self, channels: &StoreChannels) {
        channels.profile_tx.send_replace(self.profile.clone());
        channels.workout_tx.send_replace(self.workout);
        channels.nutrition_tx.send_replace(self.nutrition);
    }
}

#[derive(Debug)]
struct StoreChannels {
    profile_tx: watch::Sender<Profile>,
    workout_tx: watch::Sender<WorkoutProgress>,
    nutrition_tx: watch::Sender<NutritionProgress>,
    event_tx: broadcast::Sender<ProgressEvent>,
}

#[derive(Debug)]
struct StoreInner {
    state: Mutex<StoreState>,
    channels: StoreChannels,
}

/// Shared holder of profile, workout and nutrition progress.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    inner: Arc<StoreInner>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore {
    /// Create a store seeded with the default profile.
    pub fn new() -> Self {
        Self::with_profile(Profile::default())
    }

    /// Create a store seeded with `profile`; accumulators start at zero.
    pub fn with_profile(profile: Profile) -> Self {
        let workout = WorkoutProgress::for_profile(&profile);
        let nutrition = NutritionProgress::for_profile(&profile);

        let (profile_tx, _) = watch::channel(profile.clone());
        let (workout_tx, _) = watch::channel(workout);
        let (nutrition_tx, _) = watch::channel(nutrition);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        tracing::debug!(
            daily_calories_goal = profile.daily_calories_goal,
            weekly_workout_goal = profile.weekly_workout_goal,
            "Progress store created"
        );

        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(StoreState {
                    profile,
                    workout,
                    nutrition,
                }),
                channels: StoreChannels {
                    profile_tx,
                    workout_tx,
                    nutrition_tx,
                    event_tx,
                },
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        // Records are plain data; a poisoned lock is still usable.
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Called with the state lock held so events keep mutation order.
    fn emit(&self, event: ProgressEvent) {
        // No subscribers is fine.
        let _ = self.inner.channels.event_tx.send(event);
    }

    /// Log a completed workout.
    pub fn log_workout(&self, calories_burned: u32) {
        let progress = {
            let mut state = self.state();
            let workout = &mut state.workout;
            workout.workouts_completed = workout.workouts_completed.saturating_add(1);
            workout.calories_burned = workout.calories_burned.saturating_add(calories_burned);
            let progress = state.workout;
            self.inner.channels.workout_tx.send_replace(progress);
            self.emit(ProgressEvent::WorkoutLogged {
                calories_burned,
                progress,
            });
            progress
        };

        tracing::info!(
            calories_burned,
            workouts_completed = progress.workouts_completed,
            weekly_goal = progress.weekly_goal,
            "Workout logged"
        );
    }

    /// Log a meal's calories and macronutrients.
    pub fn log_meal(&self, consumed_calories: u32, protein: u32, carbs: u32, fats: u32) {
        let progress = {
            let mut state = self.state();
            let daily_goal = state.profile.daily_calories_goal;
            let nutrition = &mut state.nutrition;
            nutrition.consumed_calories = nutrition.consumed_calories.saturating_add(consumed_calories);
            nutrition.protein = nutrition.protein.saturating_add(protein);
            nutrition.carbs = nutrition.carbs.saturating_add(carbs);
            nutrition.fats = nutrition.fats.saturating_add(fats);
            nutrition.sync_goal(daily_goal);
            let progress = state.nutrition;
            self.inner.channels.nutrition_tx.send_replace(progress);
            self.emit(ProgressEvent::MealLogged {
                calories: consumed_calories,
                daily_goal,
                progress,
            });
            progress
        };

        tracing::info!(
            consumed_calories,
            protein,
            carbs,
            fats,
            remaining_calories = progress.remaining_calories,
            "Meal logged"
        );
    }

    /// Replace the profile and re-synchronize progress goals with it.
    pub fn update_profile(&self, profile: Profile) {
        {
            let mut state = self.state();
            state.profile = profile.clone();
            state.workout.weekly_goal = profile.weekly_workout_goal;
            state.workout.calorie_goal = profile.daily_calories_goal;
            state.nutrition.sync_goal(profile.daily_calories_goal);
            state.publish(&self.inner.channels);
            self.emit(ProgressEvent::ProfileUpdated(profile.clone()));
        }

        if profile.daily_calories_goal == 0 {
            tracing::debug!("Daily calorie goal is zero, calorie percentage pinned to 0");
        }
        tracing::info!(
            daily_calories_goal = profile.daily_calories_goal,
            weekly_workout_goal = profile.weekly_workout_goal,
            "Profile updated"
        );
    }

    /// Zero all accumulators while keeping the current goals.
    pub fn reset_progress(&self) {
        {
            let mut state = self.state();
            state.workout = WorkoutProgress::for_profile(&state.profile);
            state.nutrition = NutritionProgress::for_profile(&state.profile);
            state.publish(&self.inner.channels);
            self.emit(ProgressEvent::ProgressReset);
        }

        tracing::info!("Progress reset");
    }

    /// Current profile.
    pub fn profile(&self) -> Profile {
        self.state().profile.clone()
    }

    /// Current workout progress.
    pub fn workout_progress(&self) -> WorkoutProgress {
        self.state().workout
    }

    /// Current nutrition progress.
    pub fn nutrition_progress(&self) -> NutritionProgress {
        self.state().nutrition
    }

    /// Consistent copy of all three records.
    pub fn snapshot(&self) -> ProgressSnapshot {
        let state = self.state();
        ProgressSnapshot {
            profile: state.profile.clone(),
            workout: state.workout,
            nutrition: state.nutrition,
            taken_at: Utc::now(),
        }
    }

    /// Subscribe to the latest profile.
    pub fn subscribe_profile(&self) -> watch::Receiver<Profile> {
        self.inner.channels.profile_tx.subscribe()
    }

    /// Subscribe to the latest workout progress.
    pub fn subscribe_workout(&self) -> watch::Receiver<WorkoutProgress> {
        self.inner.channels.workout_tx.subscribe()
    }

    /// Subscribe to the latest nutrition progress.
    pub fn subscribe_nutrition(&self) -> watch::Receiver<NutritionProgress> {
        self.inner.channels.nutrition_tx.subscribe()
    }

    /// Subscribe to mutation events.
    ///
    /// Events arrive in mutation order, even when clones of the store are
    /// mutated from several threads.
    pub fn subscribe_events(&self) -> broadcast::Receiver<ProgressEvent> {
        self.inner.channels.event_tx.subscribe()
    }
}
