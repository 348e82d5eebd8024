use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::math::{is_finite_point, lift, project_horizontal, Circle2D};

use super::{ReferencePoints, Route};

/// Point count used when none is configured.
pub const DEFAULT_POINT_COUNT: usize = 50;

/// Point counts outside this range still work but are unusual.
pub const RECOMMENDED_POINT_COUNTS: RangeInclusive<usize> = 20..=80;

/// Samples a circular arc through three reference points into a [`Route`].
///
/// The circle is fitted to the horizontal projections of the points. The
/// polar angle is interpolated linearly from the start angle to the end
/// angle, so the sweep direction is whichever way that plain `lerp` goes;
/// the apex only shapes the circle. Every sample sits at the same height.
pub struct GenerateArcRoute {
    points: ReferencePoints,
    point_count: usize,
    height: f64,
}

impl GenerateArcRoute {
    /// Creates a new `GenerateArcRoute` operation producing `point_count + 1`
    /// waypoints at height `0.0`.
    #[must_use]
    pub fn new(points: ReferencePoints, point_count: usize) -> Self {
        Self {
            points,
            point_count,
            height: 0.0,
        }
    }

    /// Sets the constant vertical coordinate of every waypoint.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Executes the operation, returning the sampled route.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPointCount`] for a zero point count,
    /// [`GeometryError::NonFinite`] for NaN or infinite input, and
    /// [`GeometryError::DegenerateTriangle`] if the projected points are
    /// collinear or coincident.
    pub fn execute(&self) -> Result<Route> {
        if self.point_count == 0 {
            return Err(GeometryError::InvalidPointCount(self.point_count).into());
        }
        if !RECOMMENDED_POINT_COUNTS.contains(&self.point_count) {
            warn!(
                point_count = self.point_count,
                "route point count outside recommended range {:?}",
                RECOMMENDED_POINT_COUNTS
            );
        }
        for (name, p) in [
            ("start", &self.points.start),
            ("apex", &self.points.apex),
            ("end", &self.points.end),
        ] {
            if !is_finite_point(p) {
                return Err(GeometryError::NonFinite(name).into());
            }
        }
        if !self.height.is_finite() {
            return Err(GeometryError::NonFinite("height").into());
        }

        let a = project_horizontal(&self.points.start);
        let b = project_horizontal(&self.points.apex);
        let c = project_horizontal(&self.points.end);

        let circle = Circle2D::through_points(&a, &b, &c)?;
        let start_angle = circle.angle_of(&a);
        let end_angle = circle.angle_of(&c);

        #[allow(clippy::cast_precision_loss)]
        let n = self.point_count as f64;
        let points = (0..=self.point_count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / n;
                let angle = start_angle + (end_angle - start_angle) * t;
                lift(&circle.point_at(angle), self.height)
            })
            .collect::<Vec<_>>();

        debug!(
            center_x = circle.center().x,
            center_z = circle.center().y,
            radius = circle.radius(),
            start_angle,
            end_angle,
            waypoints = points.len(),
            "generated arc route"
        );

        Ok(Route {
            points,
            circle,
            start_angle,
            end_angle,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use super::*;
    use crate::error::TrackrunError;
    use crate::math::Point3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn half_circle() -> ReferencePoints {
        ReferencePoints::new(p(0.0, 0.0, 0.0), p(5.0, 0.0, 5.0), p(10.0, 0.0, 0.0))
    }

    #[test]
    fn route_has_count_plus_one_points() {
        let route = GenerateArcRoute::new(half_circle(), 20).execute().unwrap();
        assert_eq!(route.len(), 21);
        assert!(!route.is_empty());
    }

    #[test]
    fn endpoints_match_start_and_end() {
        let route = GenerateArcRoute::new(half_circle(), 20).execute().unwrap();
        assert_relative_eq!(*route.first().unwrap(), p(0.0, 0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(*route.last().unwrap(), p(10.0, 0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(route.start_angle(), PI, epsilon = 1e-12);
        assert_relative_eq!(route.end_angle(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn every_point_lies_on_circle() {
        let refs = ReferencePoints::new(p(-4.0, 1.0, 2.0), p(1.5, 3.0, 6.0), p(7.0, -2.0, 1.0));
        let route = GenerateArcRoute::new(refs, 50).execute().unwrap();
        for q in route.points() {
            let d = nalgebra::distance(&project_horizontal(q), route.center());
            assert_relative_eq!(d, route.radius(), epsilon = 1e-4);
        }
    }

    #[test]
    fn half_circle_passes_through_apex() {
        let route = GenerateArcRoute::new(half_circle(), 20).execute().unwrap();
        assert_relative_eq!(*route.center(), crate::math::Point2::new(5.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(route.radius(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(*route.get(10).unwrap(), p(5.0, 0.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn height_is_flattened() {
        let refs = ReferencePoints::new(p(0.0, 3.0, 0.0), p(5.0, 9.0, 5.0), p(10.0, -1.0, 0.0));
        let route = GenerateArcRoute::new(refs, 30)
            .with_height(0.25)
            .execute()
            .unwrap();
        assert!(route.points().iter().all(|q| (q.y - 0.25).abs() < 1e-12));
    }

    #[test]
    fn length_approximates_half_circumference() {
        let route = GenerateArcRoute::new(half_circle(), 80).execute().unwrap();
        assert_relative_eq!(route.length(), 5.0 * PI, epsilon = 1e-2);
    }

    #[test]
    fn collinear_projection_is_degenerate() {
        // Differs only in height, so the projections are collinear.
        let refs = ReferencePoints::new(p(0.0, 0.0, 0.0), p(1.0, 5.0, 0.0), p(2.0, 0.0, 0.0));
        let err = GenerateArcRoute::new(refs, 20).execute().unwrap_err();
        assert!(matches!(
            err,
            TrackrunError::Geometry(GeometryError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn zero_point_count_rejected() {
        let err = GenerateArcRoute::new(half_circle(), 0).execute().unwrap_err();
        assert!(matches!(
            err,
            TrackrunError::Geometry(GeometryError::InvalidPointCount(0))
        ));
    }

    #[test]
    fn non_finite_input_rejected() {
        let mut refs = half_circle();
        refs.apex.x = f64::NAN;
        let err = GenerateArcRoute::new(refs, 20).execute().unwrap_err();
        assert!(matches!(
            err,
            TrackrunError::Geometry(GeometryError::NonFinite("apex"))
        ));
    }

    #[test]
    fn small_point_count_still_generates() {
        let route = GenerateArcRoute::new(half_circle(), 2).execute().unwrap();
        assert_eq!(route.len(), 3);
    }
}
