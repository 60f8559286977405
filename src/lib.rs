//! zwocreate - Zwift workout file builder
//!
//! Turns a workout script (warm-ups, VO2 repeats, cadence drills and the like)
//! into the flat list of segments a `.zwo` file holds, and writes that file.

pub mod app;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use storage::config::AppConfig;
pub use workouts::engine::{assemble, expand};
pub use workouts::exercise::{Exercise, WorkoutScript};
pub use workouts::types::WorkoutDocument;
