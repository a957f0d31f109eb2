//! Console command grammar.
//!
//! One command per line; the leading keyword is case-insensitive.

use thiserror::Error;

use crate::meals::MealEntry;
use crate::settings::{AccountUpdate, GoalKind};
use crate::workouts::{parse_exercise_list, Exercise, WorkoutCategory, WorkoutError};

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  status [json]                         progress summary
  profile                               account information and goals
  workout start <strength|cardio|flexibility>
  workout start custom <name>           start a custom workout
  workout next | finish | cancel | status
  custom add <exercise>[,<exercise>...] create a custom workout (max 3)
  custom edit <name>=<exercise>[,...]   replace a custom workout's exercises
  custom remove <name> | custom list
  meal <name>;<kcal>;<carbs>;<protein>;<fats>
  meals                                 recent meals
  goal <calories|workouts> <value>
  account <field>=<value>[;<field>=<value>...]
  reset                                 zero all progress, keep goals
  help | quit";

/// What to run when starting a workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutChoice {
    /// Built-in category
    Category(WorkoutCategory),
    /// Custom workout by name
    Custom(String),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status { json: bool },
    Profile,
    WorkoutStart(WorkoutChoice),
    WorkoutNext,
    WorkoutFinish,
    WorkoutCancel,
    WorkoutStatus,
    CustomAdd(Vec<Exercise>),
    CustomEdit { name: String, exercises: Vec<Exercise> },
    CustomRemove(String),
    CustomList,
    Meal(MealEntry),
    Meals,
    Goal { kind: GoalKind, input: String },
    Account(AccountUpdate),
    Reset,
    Help,
    Quit,
}

/// Console command errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown workout category: {0}")]
    UnknownCategory(String),

    #[error("Unknown goal: {0} (expected calories or workouts)")]
    UnknownGoal(String),

    #[error("Unknown account field: {0}")]
    UnknownAccountField(String),

    #[error("No workout in progress")]
    NoActiveWorkout,

    #[error("A workout is already in progress")]
    WorkoutInProgress,

    #[error("Failed to render report: {0}")]
    Render(String),

    #[error(transparent)]
    Workout(#[from] WorkoutError),
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (text, ""),
    }
}

impl Command {
    /// Parse a single input line.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let (keyword, rest) = split_word(line);
        if keyword.is_empty() {
            return Err(CommandError::Empty);
        }

        match keyword.to_ascii_lowercase().as_str() {
            "status" => Ok(Command::Status {
                json: rest.eq_ignore_ascii_case("json"),
            }),
            "profile" => Ok(Command::Profile),
            "workout" => parse_workout(rest),
            "custom" => parse_custom(rest),
            "meal" => parse_meal(rest),
            "meals" => Ok(Command::Meals),
            "goal" => parse_goal(rest),
            "account" => parse_account(rest),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_workout(args: &str) -> Result<Command, CommandError> {
    let (action, rest) = split_word(args);
    match action.to_ascii_lowercase().as_str() {
        "start" => {
            let (kind, name) = split_word(rest);
            if kind.is_empty() {
                return Err(CommandError::MissingArgument("workout category"));
            }
            if kind.eq_ignore_ascii_case("custom") {
                if name.is_empty() {
                    return Err(CommandError::MissingArgument("custom workout name"));
                }
                return Ok(Command::WorkoutStart(WorkoutChoice::Custom(name.to_string())));
            }
            WorkoutCategory::from_name(rest)
                .map(|category| Command::WorkoutStart(WorkoutChoice::Category(category)))
                .ok_or_else(|| CommandError::UnknownCategory(rest.to_string()))
        }
        "next" => Ok(Command::WorkoutNext),
        "finish" => Ok(Command::WorkoutFinish),
        "cancel" => Ok(Command::WorkoutCancel),
        "status" | "" => Ok(Command::WorkoutStatus),
        other => Err(CommandError::UnknownCommand(format!("workout {other}"))),
    }
}

fn parse_custom(args: &str) -> Result<Command, CommandError> {
    let (action, rest) = split_word(args);
    match action.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::CustomAdd(parse_exercise_list(rest)?)),
        "edit" => {
            let (name, exercises) = rest
                .split_once('=')
                .ok_or(CommandError::MissingArgument("<name>=<exercises>"))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(CommandError::MissingArgument("custom workout name"));
            }
            Ok(Command::CustomEdit {
                name: name.to_string(),
                exercises: parse_exercise_list(exercises)?,
            })
        }
        "remove" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("custom workout name"));
            }
            Ok(Command::CustomRemove(rest.to_string()))
        }
        "list" | "" => Ok(Command::CustomList),
        other => Err(CommandError::UnknownCommand(format!("custom {other}"))),
    }
}

fn parse_meal(args: &str) -> Result<Command, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument("meal fields"));
    }
    let mut fields = args.split(';');
    let mut next = || fields.next().unwrap_or("");
    let (name, calories, carbs, proteins, fats) = (next(), next(), next(), next(), next());
    Ok(Command::Meal(MealEntry::from_form(
        name, calories, carbs, proteins, fats,
    )))
}

fn parse_goal(args: &str) -> Result<Command, CommandError> {
    let (goal, input) = split_word(args);
    if goal.is_empty() {
        return Err(CommandError::MissingArgument("goal"));
    }
    let kind = GoalKind::from_name(goal).ok_or_else(|| CommandError::UnknownGoal(goal.to_string()))?;
    Ok(Command::Goal {
        kind,
        input: input.to_string(),
    })
}

fn parse_account(args: &str) -> Result<Command, CommandError> {
    let mut update = AccountUpdate::default();
    for pair in args.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (field, value) = pair
            .split_once('=')
            .ok_or(CommandError::MissingArgument("<field>=<value>"))?;
        if !update.set(field, value.trim().to_string()) {
            return Err(CommandError::UnknownAccountField(field.trim().to_string()));
        }
    }
    if update.is_empty() {
        return Err(CommandError::MissingArgument("<field>=<value>"));
    }
    Ok(Command::Account(update))
}
