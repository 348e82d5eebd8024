mod controller;
mod params;

pub use controller::RaceController;
pub use params::MotionParams;

use std::fmt;

use crate::math::{Point3, UnitQuaternion, UnitVector3};

/// Locomotion phase of the agent.
///
/// Phases only ever advance in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Following the generated arc waypoints.
    ArcFollow,
    /// Heading straight for the goal point.
    Approach,
    /// Coasting past the goal for a fixed duration.
    Overshoot,
    /// Terminal; no further updates.
    Stopped,
}

impl Phase {
    /// Returns `true` for the terminal phase.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Stopped
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArcFollow => "arc-follow",
            Self::Approach => "approach",
            Self::Overshoot => "overshoot",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// World-space position and orientation of the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point3,
    pub orientation: UnitQuaternion,
}

impl Pose {
    /// Creates a new pose.
    #[must_use]
    pub fn new(position: Point3, orientation: UnitQuaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Orientation as `(roll, pitch, yaw)` Euler angles in radians.
    #[must_use]
    pub fn euler_angles(&self) -> (f64, f64, f64) {
        self.orientation.euler_angles()
    }
}

/// A phase transition reported by [`RaceController::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

/// Mutable per-agent state, owned by a [`RaceController`].
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pose: Pose,
    phase: Phase,
    route_index: usize,
    overshoot_timer: f64,
    overshoot_direction: Option<UnitVector3>,
}

impl MotionState {
    fn new(pose: Pose) -> Self {
        Self {
            pose,
            phase: Phase::ArcFollow,
            route_index: 0,
            overshoot_timer: 0.0,
            overshoot_direction: None,
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the waypoint currently being targeted.
    #[must_use]
    pub fn route_index(&self) -> usize {
        self.route_index
    }

    /// Time spent in the overshoot phase so far.
    #[must_use]
    pub fn overshoot_timer(&self) -> f64 {
        self.overshoot_timer
    }

    /// Direction of the overshoot run, or `None` if it was undefined.
    #[must_use]
    pub fn overshoot_direction(&self) -> Option<&UnitVector3> {
        self.overshoot_direction.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_ordered() {
        assert!(Phase::ArcFollow < Phase::Approach);
        assert!(Phase::Approach < Phase::Overshoot);
        assert!(Phase::Overshoot < Phase::Stopped);
        assert!(Phase::Stopped.is_terminal());
        assert!(!Phase::Overshoot.is_terminal());
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::ArcFollow.to_string(), "arc-follow");
        assert_eq!(Phase::Stopped.to_string(), "stopped");
    }

    #[test]
    fn identity_pose_has_zero_euler_angles() {
        let pose = Pose::new(Point3::origin(), UnitQuaternion::identity());
        assert_eq!(pose.euler_angles(), (0.0, 0.0, 0.0));
    }
}
