//! Unit test modules.

mod progress_store_test;
mod workout_library_test;
