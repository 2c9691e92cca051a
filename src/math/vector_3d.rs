#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::operand::{impl_elementwise_ops, Operand};
use super::Vector3;

/// A three-component vector.
///
/// Arithmetic works as for [`Vector2d`](super::Vector2d): chaining methods
/// that mutate in place, plus the compound-assignment operators and unary `-`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl_elementwise_ops!(Vector3d { x, y, z });

impl Vector3d {
    /// Creates a new vector from its components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns the components as `[x, y, z]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Adds a scalar to every component, or another vector component-wise.
    pub fn add(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        match rhs.into() {
            Operand::Scalar(n) => *self += n,
            Operand::Value(v) => *self += v,
        }
        self
    }

    /// Subtracts a scalar from every component, or another vector component-wise.
    pub fn subtract(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        match rhs.into() {
            Operand::Scalar(n) => *self -= n,
            Operand::Value(v) => *self -= v,
        }
        self
    }

    /// Multiplies every component by a scalar, or by another vector component-wise.
    pub fn multiply(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        match rhs.into() {
            Operand::Scalar(n) => *self *= n,
            Operand::Value(v) => *self *= v,
        }
        self
    }

    /// Divides every component by a scalar, or by another vector component-wise.
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
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns a new unit-length vector; NaN components for the zero vector.
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
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl From<Vector3d> for [f64; 3] {
    fn from(v: Vector3d) -> Self {
        v.to_array()
    }
}

impl From<[f64; 3]> for Vector3d {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for Vector3d {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vector3d> for Vector3 {
    fn from(v: Vector3d) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}
