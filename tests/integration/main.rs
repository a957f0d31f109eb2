//! Integration test modules.

mod console_session_test;
mod settings_sync_test;
mod workout_session_test;
