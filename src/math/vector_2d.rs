#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::operand::{impl_elementwise_ops, Operand};
use super::Vector2;

/// A two-component vector.
///
/// The chaining methods ([`add`](Self::add), [`subtract`](Self::subtract),
/// ...) mutate the receiver and return it. For a new value, chain on a copy:
/// `*v.clone().add(2.0)`. The compound-assignment operators (`+=`, `-=`,
/// `*=`, `/=`) and unary `-` are also implemented.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl_elementwise_ops!(Vector2d { x, y });

impl Vector2d {
    /// Creates a new vector from its components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the components as `[x, y]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Adds a scalar to both components, or another vector component-wise.
    pub fn add(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        match rhs.into() {
            Operand::Scalar(n) => *self += n,
            Operand::Value(v) => *self += v,
        }
        self
    }

    /// Subtracts a scalar from both components, or another vector component-wise.
    pub fn subtract(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        match rhs.into() {
            Operand::Scalar(n) => *self -= n,
            Operand::Value(v) => *self -= v,
        }
        self
    }

    /// Multiplies both components by a scalar, or by another vector component-wise.
    pub fn multiply(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        match rhs.into() {
            Operand::Scalar(n) => *self *= n,
            Operand::Value(v) => *self *= v,
        }
        self
    }

    /// Divides both components by a scalar, or by another vector component-wise.
    ///
    /// Division by zero follows IEEE 754 and yields infinities or NaN.
    pub fn divide(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        match rhs.into() {
            Operand::Scalar(n) => *self /= n,
            Operand::Value(v) => *self /= v,
        }
        self
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// Returns a new unit-length vector pointing in the same direction.
    ///
    /// The receiver is not modified. A zero vector has no direction: every
    /// component of the result is NaN.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut unit = *self;
        unit /= self.magnitude();
        unit
    }

    /// Euclidean distance between the two vectors' end points.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let mut diff = *self;
        diff -= *other;
        diff.magnitude()
    }

    /// Inner product of the two vectors.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Angle of the vector in radians, computed as `atan(y / x)`.
    ///
    /// The quadrant is not corrected: `(-1, -1)` and `(1, 1)` share the same
    /// angle. With `x == 0` the ratio is infinite and the result is `±π/2`,
    /// or NaN for the zero vector.
    #[must_use]
    pub fn radians(&self) -> f64 {
        (self.y / self.x).atan()
    }

    /// Angle of the vector in degrees. See [`radians`](Self::radians).
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.radians().to_degrees()
    }
}

impl From<Vector2d> for [f64; 2] {
    fn from(v: Vector2d) -> Self {
        v.to_array()
    }
}

impl From<[f64; 2]> for Vector2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for Vector2d {
    fn from(v: Vector2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector2d> for Vector2 {
    fn from(v: Vector2d) -> Self {
        Vector2::new(v.x, v.y)
    }
}
