pub mod config;
pub mod error;
pub mod math;
pub mod motion;
pub mod route;

pub use config::RaceConfig;
pub use error::{Result, TrackrunError};
pub use motion::{MotionParams, MotionState, Phase, PhaseChange, Pose, RaceController};
pub use route::{GenerateArcRoute, ReferencePoints, Route};
