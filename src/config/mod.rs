//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the employee roster and the late-arrival policy from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} employees", config.roster().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendancePolicy, RosterConfig, default_first_punch_late_after,
    default_third_punch_late_after,
};
