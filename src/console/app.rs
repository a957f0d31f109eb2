//! Console application state.
//!
//! Owns the transient front-end state (custom workouts, recent meals, the
//! running workout) and routes commands to the shared progress store.

use std::time::Duration;

use crate::meals::MealLog;
use crate::progress::ProgressStore;
use crate::settings::{edit_account, edit_goal};
use crate::storage::config::AppConfig;
use crate::workouts::{
    CustomWorkoutLibrary, SessionStatus, WorkoutError, WorkoutSession, WorkoutTimer,
};

use super::command::{Command, CommandError, WorkoutChoice, HELP};
use super::report;

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user
    Text(String),
    /// End the session
    Quit,
}

/// Console front-end bound to a progress store.
#[derive(Debug)]
pub struct ConsoleApp {
    store: ProgressStore,
    meals: MealLog,
    custom_workouts: CustomWorkoutLibrary,
    workout: Option<WorkoutSession>,
    calories_per_minute: u32,
    tick_period: Duration,
}

impl ConsoleApp {
    /// Create the console for `store` using settings from `config`.
    pub fn new(store: ProgressStore, config: &AppConfig) -> Self {
        Self {
            meals: MealLog::new(store.clone()),
            store,
            custom_workouts: CustomWorkoutLibrary::new(),
            workout: None,
            calories_per_minute: config.workout.calories_per_minute,
            tick_period: config.workout.tick_period(),
        }
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Running workout, if any.
    pub fn active_workout(&self) -> Option<&WorkoutSession> {
        self.workout.as_ref()
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, CommandError> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Execute a command. Workout commands must run inside a tokio runtime.
    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        tracing::debug!(?command, "Executing command");

        let text = match command {
            Command::Status { json: false } => {
                let snapshot = self.store.snapshot();
                report::progress_report(&snapshot.workout, &snapshot.nutrition)
            }
            Command::Status { json: true } => report::json_report(&self.store.snapshot())?,
            Command::Profile => report::profile_report(&self.store.profile()),
            Command::WorkoutStart(choice) => self.start_workout(choice)?,
            Command::WorkoutNext => {
                let session = self.workout.as_mut().ok_or(CommandError::NoActiveWorkout)?;
                session.next_exercise()?;
                report::session_report(session)
            }
            Command::WorkoutFinish => {
                let session = self.workout.as_mut().ok_or(CommandError::NoActiveWorkout)?;
                let summary = session.finish()?;
                self.workout = None;
                report::summary_report(&summary)
            }
            Command::WorkoutCancel => {
                let mut session = self.workout.take().ok_or(CommandError::NoActiveWorkout)?;
                session.cancel();
                "Workout cancelled".to_string()
            }
            Command::WorkoutStatus => {
                let session = self.workout.as_ref().ok_or(CommandError::NoActiveWorkout)?;
                report::session_report(session)
            }
            Command::CustomAdd(exercises) => {
                let workout = self.custom_workouts.add(exercises)?;
                format!("Added {}: {}", workout.name, workout.exercise_summary())
            }
            Command::CustomEdit { name, exercises } => {
                self.custom_workouts.update(&name, exercises)?;
                format!("Updated {name}")
            }
            Command::CustomRemove(name) => {
                let removed = self.custom_workouts.remove(&name)?;
                format!("Removed {}", removed.name)
            }
            Command::CustomList => report::custom_list_report(self.custom_workouts.list()),
            Command::Meal(entry) => {
                let logged = self.meals.log(entry);
                let nutrition = self.store.nutrition_progress();
                format!(
                    "Logged {} ({} kcal). Remaining today: {} kcal",
                    logged.entry.name, logged.entry.calories, nutrition.remaining_calories
                )
            }
            Command::Meals => report::meals_report(self.meals.recent()),
            Command::Goal { kind, input } => match edit_goal(&self.store, kind, &input) {
                Some(value) => format!("{kind} set to {value}"),
                None => format!("{kind} unchanged"),
            },
            Command::Account(update) => {
                let profile = edit_account(&self.store, update);
                report::profile_report(&profile)
            }
            Command::Reset => {
                self.store.reset_progress();
                "Progress reset".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => {
                if let Some(mut session) = self.workout.take() {
                    session.cancel();
                }
                return Ok(Reply::Quit);
            }
        };

        Ok(Reply::Text(text))
    }

    fn start_workout(&mut self, choice: WorkoutChoice) -> Result<String, CommandError> {
        if self
            .workout
            .as_ref()
            .is_some_and(|s| s.status() == SessionStatus::InProgress)
        {
            return Err(CommandError::WorkoutInProgress);
        }

        let exercises = match choice {
            WorkoutChoice::Category(category) => category.exercises(),
            WorkoutChoice::Custom(name) => self
                .custom_workouts
                .get(&name)
                .map(|w| w.exercises.clone())
                .ok_or(WorkoutError::NotFound(name))?,
        };

        let tick_period = self.tick_period;
        let session = WorkoutSession::start_with_timer(
            self.store.clone(),
            exercises,
            self.calories_per_minute,
            || WorkoutTimer::start_with_period(tick_period),
        )?;
        let text = report::session_report(&session);
        self.workout = Some(session);
        Ok(text)
    }
}
