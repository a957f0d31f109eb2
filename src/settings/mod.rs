//! Settings: goal and account editing on top of the progress store.

pub mod editor;

pub use editor::{account_info, edit_account, edit_goal, AccountUpdate, GoalKind};
