//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! and attendance policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Roster;

use super::types::{AttendancePolicy, RosterConfig};

/// Loads and provides access to the attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── roster.yaml   # Employees, in declaration order (required)
/// └── policy.yaml   # Late-arrival thresholds (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{} employees", loader.roster().len());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    roster: Roster,
    policy: AttendancePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `roster.yaml` is missing, if any present file
    /// contains invalid YAML, or if the roster fails validation. A missing
    /// `policy.yaml` falls back to [`AttendancePolicy::default`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let roster_config = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;
        let roster = Roster::new(roster_config.employees)?;

        let policy_path = path.join("policy.yaml");
        let policy = if policy_path.exists() {
            Self::load_yaml::<AttendancePolicy>(&policy_path)?
        } else {
            debug!(path = %policy_path.display(), "No policy file, using default thresholds");
            AttendancePolicy::default()
        };

        Ok(Self { roster, policy })
    }

    /// Builds a loader from already-constructed parts.
    pub fn from_parts(roster: Roster, policy: AttendancePolicy) -> Self {
        Self { roster, policy }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the late-arrival policy.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }
}
