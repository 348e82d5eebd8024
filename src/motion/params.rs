use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Parameters controlling agent motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Linear speed in units per second.
    pub speed: f64,
    /// Spherical interpolation gain applied per second when turning.
    pub angular_gain: f64,
    /// How long the agent keeps running past the goal.
    pub overshoot_duration: f64,
    /// Lower bound of the arrival radius.
    pub min_arrival_threshold: f64,
    /// Arrival radius as a multiple of `speed`.
    pub arrival_speed_factor: f64,
    /// Overshoot directions with a smaller squared length do not turn the agent.
    pub turn_epsilon_sq: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            speed: 0.25,
            angular_gain: 6.0,
            overshoot_duration: 2.0,
            min_arrival_threshold: 0.03,
            arrival_speed_factor: 1.5,
            turn_epsilon_sq: 0.001,
        }
    }
}

impl MotionParams {
    /// Default parameters running at `speed`.
    #[must_use]
    pub fn with_speed(speed: f64) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Distance below which a target counts as reached.
    ///
    /// `max(min_arrival_threshold, speed * arrival_speed_factor)`: faster
    /// agents get a wider radius so they don't orbit the target.
    #[must_use]
    pub fn arrival_threshold(&self) -> f64 {
        self.min_arrival_threshold
            .max(self.speed * self.arrival_speed_factor)
    }

    /// Checks that all parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidSpeed`] for a non-positive or non-finite
    /// speed, [`MotionError::InvalidDuration`] for a negative or non-finite
    /// overshoot duration, and [`MotionError::InvalidParameter`] for any other
    /// negative or non-finite value.
    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(MotionError::InvalidSpeed(self.speed));
        }
        if !self.overshoot_duration.is_finite() || self.overshoot_duration < 0.0 {
            return Err(MotionError::InvalidDuration(self.overshoot_duration));
        }
        for (parameter, value) in [
            ("angular_gain", self.angular_gain),
            ("min_arrival_threshold", self.min_arrival_threshold),
            ("arrival_speed_factor", self.arrival_speed_factor),
            ("turn_epsilon_sq", self.turn_epsilon_sq),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MotionError::InvalidParameter { parameter, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_floor_applies_at_low_speed() {
        let params = MotionParams::with_speed(0.01);
        assert!((params.arrival_threshold() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn threshold_scales_with_speed() {
        let params = MotionParams::with_speed(1.0);
        assert!((params.arrival_threshold() - 1.5).abs() < 1e-12);
        let default = MotionParams::default();
        assert!((default.arrival_threshold() - 0.375).abs() < 1e-12);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(MotionParams::default().validate().is_ok());
    }

    #[test]
    fn non_positive_speed_rejected() {
        assert!(matches!(
            MotionParams::with_speed(0.0).validate(),
            Err(MotionError::InvalidSpeed(_))
        ));
        assert!(matches!(
            MotionParams::with_speed(f64::NAN).validate(),
            Err(MotionError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn negative_duration_rejected() {
        let params = MotionParams {
            overshoot_duration: -1.0,
            ..MotionParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(MotionError::InvalidDuration(_))
        ));
    }

    #[test]
    fn negative_gain_rejected() {
        let params = MotionParams {
            angular_gain: -6.0,
            ..MotionParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(MotionError::InvalidParameter {
                parameter: "angular_gain",
                ..
            })
        ));
    }
}
