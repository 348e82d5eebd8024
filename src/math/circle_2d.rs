use crate::error::{GeometryError, Result};

use super::{Point2, Vector2};

/// Below this magnitude the circumcircle determinant is treated as zero.
pub const DEGENERATE_DETERMINANT: f64 = 1e-9;

/// A circle in the horizontal plane.
///
/// Built from three points with [`Circle2D::through_points`]; the center is
/// equidistant from all three and `radius` is measured to the first one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2D {
    center: Point2,
    radius: f64,
}

impl Circle2D {
    /// Computes the circumcircle of the triangle `(a, b, c)`.
    ///
    /// Uses the determinant closed form
    /// `d = 2 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y))`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateTriangle`] if `|d|` is below
    /// [`DEGENERATE_DETERMINANT`] (collinear or coincident points).
    pub fn through_points(a: &Point2, b: &Point2, c: &Point2) -> Result<Self> {
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if !d.is_finite() || d.abs() < DEGENERATE_DETERMINANT {
            return Err(GeometryError::DegenerateTriangle { determinant: d }.into());
        }

        let a_sq = a.coords.norm_squared();
        let b_sq = b.coords.norm_squared();
        let c_sq = c.coords.norm_squared();

        let center = Point2::new(
            (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
            (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
        );
        let radius = nalgebra::distance(a, &center);

        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Polar angle of `p` around the center, in `(-pi, pi]`.
    #[must_use]
    pub fn angle_of(&self, p: &Point2) -> f64 {
        (p.y - self.center.y).atan2(p.x - self.center.x)
    }

    /// Point on the circle at polar angle `angle`.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }
}
