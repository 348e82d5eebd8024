mod generate_arc;

pub use generate_arc::{GenerateArcRoute, DEFAULT_POINT_COUNT, RECOMMENDED_POINT_COUNTS};

use serde::{Deserialize, Serialize};

use crate::math::{Circle2D, Point2, Point3};

/// The three points that define the curved section of a course.
///
/// Only the horizontal `(x, z)` components take part in the circle fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoints {
    /// Where the arc begins (and where the agent starts).
    pub start: Point3,
    /// A point the arc passes through between start and end.
    pub apex: Point3,
    /// Where the arc ends.
    pub end: Point3,
}

impl ReferencePoints {
    /// Creates a new set of reference points.
    #[must_use]
    pub fn new(start: Point3, apex: Point3, end: Point3) -> Self {
        Self { start, apex, end }
    }
}

/// An immutable, ordered sequence of waypoints sampled along an arc.
///
/// Holds `point_count + 1` points from start to end together with the
/// circle and the angular range they were sampled from.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Point3>,
    circle: Circle2D,
    start_angle: f64,
    end_angle: f64,
}

impl Route {
    /// Returns all waypoints in order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the waypoint at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point3> {
        self.points.get(index)
    }

    /// Returns the first waypoint.
    #[must_use]
    pub fn first(&self) -> Option<&Point3> {
        self.points.first()
    }

    /// Returns the last waypoint.
    #[must_use]
    pub fn last(&self) -> Option<&Point3> {
        self.points.last()
    }

    /// Returns the center of the fitted circle in the horizontal plane.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        self.circle.center()
    }

    /// Returns the radius of the fitted circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    /// Returns the fitted circle.
    #[must_use]
    pub fn circle(&self) -> &Circle2D {
        &self.circle
    }

    /// Polar angle of the first waypoint.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Polar angle of the last waypoint.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Total length of the polyline through all waypoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum()
    }
}
