//! Line-oriented console front-end.
//!
//! Parses text commands, runs them against the progress store and renders
//! plain-text replies.

pub mod app;
pub mod command;
pub mod report;

pub use app::{ConsoleApp, Reply};
pub use command::{Command, CommandError, WorkoutChoice, HELP};
