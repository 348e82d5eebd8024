//! Run configuration loaded from TOML.
//!
//! ```toml
//! goal = [10.0, 0.0, -5.0]
//! point_count = 40
//!
//! [reference]
//! start = [0.0, 0.0, 0.0]
//! apex = [5.0, 0.0, 5.0]
//! end = [10.0, 0.0, 0.0]
//!
//! [motion]
//! speed = 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::{Point3, UnitQuaternion};
use crate::motion::{MotionParams, Pose, RaceController};
use crate::route::{GenerateArcRoute, ReferencePoints, Route, DEFAULT_POINT_COUNT};

/// Everything needed to set up one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceConfig {
    pub reference: ReferencePoints,
    pub goal: Point3,
    #[serde(default = "default_point_count")]
    pub point_count: usize,
    #[serde(default)]
    pub route_height: f64,
    #[serde(default)]
    pub motion: MotionParams,
}

fn default_point_count() -> usize {
    DEFAULT_POINT_COUNT
}

impl RaceConfig {
    /// Creates a configuration with default point count, height and motion.
    #[must_use]
    pub fn new(reference: ReferencePoints, goal: Point3) -> Self {
        Self {
            reference,
            goal,
            point_count: DEFAULT_POINT_COUNT,
            route_height: 0.0,
            motion: MotionParams::default(),
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e).into())
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Generates the waypoint route for this run.
    ///
    /// # Errors
    ///
    /// Returns any error from [`GenerateArcRoute::execute`].
    pub fn build_route(&self) -> Result<Route> {
        GenerateArcRoute::new(self.reference, self.point_count)
            .with_height(self.route_height)
            .execute()
    }

    /// Builds a controller with the agent standing on the start point.
    ///
    /// # Errors
    ///
    /// Returns route generation errors, or any error from
    /// [`RaceController::new`].
    pub fn build_controller(&self) -> Result<RaceController> {
        let route = self.build_route()?;
        let pose = Pose::new(self.reference.start, UnitQuaternion::identity());
        Ok(RaceController::new(route, self.goal, self.motion)?.with_pose(pose))
    }
}
