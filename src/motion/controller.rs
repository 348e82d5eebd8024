use tracing::{info, trace, warn};

use crate::error::{MotionError, Result};
use crate::math::steering::{horizontal, move_towards, turn_towards, unit_direction};
use crate::math::{is_finite_point, Point3, UnitQuaternion};
use crate::route::Route;

use super::{MotionParams, MotionState, Phase, PhaseChange, Pose};

/// Drives one agent along a [`Route`], then straight to a goal, then past it.
///
/// The host calls [`RaceController::update`] once per frame with the
/// elapsed time. Each call runs exactly one step of the current phase:
///
/// * `ArcFollow` steers toward `route[route_index]`, advancing the index on
///   arrival; once the index runs off the end the next step enters `Approach`.
/// * `Approach` steers toward the goal; on arrival it fixes the overshoot
///   direction (goal minus last waypoint) and enters `Overshoot`.
/// * `Overshoot` runs at constant velocity for `overshoot_duration`, then
///   the next step enters `Stopped`.
/// * `Stopped` ignores further updates.
#[derive(Debug, Clone)]
pub struct RaceController {
    route: Route,
    goal: Point3,
    params: MotionParams,
    threshold: f64,
    state: MotionState,
}

impl RaceController {
    /// Creates a controller with the agent placed on the first waypoint,
    /// facing local `+Z`.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidGoal`] if the goal is not finite, or the
    /// error from [`MotionParams::validate`].
    pub fn new(route: Route, goal: Point3, params: MotionParams) -> Result<Self> {
        params.validate()?;
        if !is_finite_point(&goal) {
            return Err(MotionError::InvalidGoal.into());
        }
        let start = route.first().copied().unwrap_or_else(Point3::origin);
        let threshold = params.arrival_threshold();

        Ok(Self {
            route,
            goal,
            params,
            threshold,
            state: MotionState::new(Pose::new(start, UnitQuaternion::identity())),
        })
    }

    /// Replaces the initial pose of the agent.
    #[must_use]
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.state.pose = pose;
        self
    }

    /// Returns the full motion state.
    #[must_use]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Returns the current pose of the agent.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.state.pose
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Returns `true` once the agent has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase.is_terminal()
    }

    /// Returns the waypoint route.
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the goal point.
    #[must_use]
    pub fn goal(&self) -> &Point3 {
        &self.goal
    }

    /// Returns the motion parameters.
    #[must_use]
    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Returns the arrival radius in use.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Advances the agent by `dt` seconds.
    ///
    /// Returns the phase change this step made, if any. Negative or
    /// non-finite time steps are ignored.
    pub fn update(&mut self, dt: f64) -> Option<PhaseChange> {
        if self.state.phase.is_terminal() {
            return None;
        }
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "ignoring invalid time step");
            return None;
        }

        match self.state.phase {
            Phase::ArcFollow => self.follow_arc(dt),
            Phase::Approach => self.approach(dt),
            Phase::Overshoot => self.overshoot(dt),
            Phase::Stopped => None,
        }
    }

    fn follow_arc(&mut self, dt: f64) -> Option<PhaseChange> {
        let Some(target) = self.route.get(self.state.route_index).copied() else {
            return Some(self.enter(Phase::Approach));
        };

        self.step_towards(&target, dt);
        if nalgebra::distance(&self.state.pose.position, &target) < self.threshold {
            self.state.route_index += 1;
            trace!(
                route_index = self.state.route_index,
                waypoints = self.route.len(),
                "reached waypoint"
            );
        }
        None
    }

    fn approach(&mut self, dt: f64) -> Option<PhaseChange> {
        let goal = self.goal;
        self.step_towards(&goal, dt);
        if nalgebra::distance(&self.state.pose.position, &goal) >= self.threshold {
            return None;
        }

        let last = self.route.last().copied().unwrap_or(goal);
        self.state.overshoot_direction = match unit_direction(&(goal - last)) {
            Ok(dir) => Some(dir),
            Err(err) => {
                warn!(%err, "goal coincides with route end, overshooting without direction");
                None
            }
        };
        self.state.overshoot_timer = 0.0;
        Some(self.enter(Phase::Overshoot))
    }

    fn overshoot(&mut self, dt: f64) -> Option<PhaseChange> {
        self.state.overshoot_timer += dt;
        if self.state.overshoot_timer > self.params.overshoot_duration {
            return Some(self.enter(Phase::Stopped));
        }

        if let Some(dir) = self.state.overshoot_direction {
            self.state.pose.position += dir.into_inner() * self.params.speed * dt;
            if dir.norm_squared() > self.params.turn_epsilon_sq {
                self.state.pose.orientation = turn_towards(
                    &self.state.pose.orientation,
                    &dir,
                    self.params.angular_gain,
                    dt,
                );
            }
        }
        None
    }

    /// Turns toward `target` on the ground plane, then moves toward it
    /// without passing it.
    fn step_towards(&mut self, target: &Point3, dt: f64) {
        let pose = &mut self.state.pose;
        let flat = horizontal(&(target - pose.position));
        if flat.norm_squared() > self.threshold * self.threshold {
            if let Ok(dir) = unit_direction(&flat) {
                pose.orientation =
                    turn_towards(&pose.orientation, &dir, self.params.angular_gain, dt);
            }
        }
        pose.position = move_towards(&pose.position, target, self.params.speed * dt);
    }

    fn enter(&mut self, to: Phase) -> PhaseChange {
        let from = self.state.phase;
        self.state.phase = to;
        let p = self.state.pose.position;
        info!(%from, %to, x = p.x, y = p.y, z = p.z, "phase change");
        PhaseChange { from, to }
    }
}
