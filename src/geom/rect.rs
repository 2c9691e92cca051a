#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;

/// An axis-aligned rectangle given by its top-left corner and its size.
///
/// Negative sizes are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Sets all four fields. When `height` is `None` it takes the value of
    /// `width`.
    pub fn set(&mut self, x: f64, y: f64, width: f64, height: Option<f64>) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height.unwrap_or(width);
    }

    /// Overwrites this rectangle with the fields of `other`.
    pub fn copy_from(&mut self, other: &Rect) {
        self.set(other.x, other.y, other.width, Some(other.height));
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height as a [`Point`].
    #[must_use]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_without_height_mirrors_width() {
        let mut r = Rect::default();
        r.set(5.0, 10.0, 200.0, None);
        assert_eq!(r, Rect::new(5.0, 10.0, 200.0, 200.0));
    }

    #[test]
    fn set_with_explicit_zero_height() {
        let mut r = Rect::new(1.0, 1.0, 1.0, 1.0);
        r.set(0.0, 0.0, 50.0, Some(0.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 50.0, 0.0));
    }

    #[test]
    fn negative_sizes_are_kept() {
        let r = Rect::new(0.0, 0.0, -10.0, -20.0);
        assert_eq!(r.size(), Point::new(-10.0, -20.0));
    }

    #[test]
    fn copy_from_and_equality() {
        let src = Rect::new(1.0, 2.0, 3.0, 4.0);
        let mut r = Rect::default();
        assert_ne!(r, src);
        r.copy_from(&src);
        assert_eq!(r, src);
        assert_eq!(r.position(), Point::new(1.0, 2.0));
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn clone_is_independent() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let mut c = r.clone();
        c.set(0.0, 0.0, 9.0, None);
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(c, Rect::new(0.0, 0.0, 9.0, 9.0));
    }
}
