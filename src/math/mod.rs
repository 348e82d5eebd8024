pub mod circle_2d;
pub mod steering;

pub use circle_2d::Circle2D;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit-length 3D vector type.
pub type UnitVector3 = nalgebra::UnitVector3<f64>;

/// Rotation type used for agent orientation.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Drops the vertical (Y) component, mapping world `(x, y, z)` to plane `(x, z)`.
#[must_use]
pub fn project_horizontal(p: &Point3) -> Point2 {
    Point2::new(p.x, p.z)
}

/// Lifts a plane point `(x, z)` back into world space at height `y`.
#[must_use]
pub fn lift(p: &Point2, y: f64) -> Point3 {
    Point3::new(p.x, y, p.y)
}

/// Returns `true` if every coordinate of `p` is finite.
#[must_use]
pub fn is_finite_point(p: &Point3) -> bool {
    p.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_drops_height() {
        let p = project_horizontal(&Point3::new(1.0, 7.0, -2.0));
        assert_eq!(p, Point2::new(1.0, -2.0));
    }

    #[test]
    fn lift_restores_plane_axes() {
        let p = lift(&Point2::new(3.0, 4.0), 0.5);
        assert_eq!(p, Point3::new(3.0, 0.5, 4.0));
    }

    #[test]
    fn non_finite_points_detected() {
        assert!(is_finite_point(&Point3::new(0.0, 1.0, 2.0)));
        assert!(!is_finite_point(&Point3::new(f64::NAN, 1.0, 2.0)));
        assert!(!is_finite_point(&Point3::new(0.0, f64::INFINITY, 2.0)));
    }
}
