#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A 2D coordinate.
///
/// Equality is field-wise numeric equality, so a point holding NaN is never
/// equal to anything, itself included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sets both coordinates. When `y` is `None` it takes the value of `x`.
    pub fn set(&mut self, x: f64, y: Option<f64>) {
        self.x = x;
        self.y = y.unwrap_or(x);
    }

    /// Overwrites this point with the coordinates of `other`.
    pub fn copy_from(&mut self, other: &Point) {
        self.set(other.x, Some(other.y));
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn set_without_y_mirrors_x() {
        let mut p = Point::default();
        p.set(300.0, None);
        assert_eq!(p, Point::new(300.0, 300.0));
    }

    #[test]
    fn set_with_explicit_zero_y() {
        let mut p = Point::new(1.0, 1.0);
        p.set(5.0, Some(0.0));
        assert_eq!(p, Point::new(5.0, 0.0));
    }

    #[test]
    fn copy_from_overwrites_fields() {
        let src = Point::new(-2.5, 8.0);
        let mut p = Point::new(1.0, 1.0);
        p.copy_from(&src);
        assert_eq!(p, src);
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn clone_is_independent() {
        let p = Point::new(3.0, 4.0);
        let mut c = p.clone();
        assert_eq!(c, p);
        c.set(0.0, None);
        assert_eq!(p, Point::new(3.0, 4.0));
        assert_ne!(c, p);
    }

    #[test]
    fn equality_is_numeric() {
        assert_eq!(Point::new(0.0, 0.0), Point::new(-0.0, 0.0));
        assert_ne!(Point::new(f64::NAN, 0.0), Point::new(f64::NAN, 0.0));
    }

    #[test]
    fn nalgebra_interop() {
        let p = Point::new(1.0, 2.0);
        let na: Point2 = p.into();
        assert_eq!(Point::from(na), p);
    }
}
