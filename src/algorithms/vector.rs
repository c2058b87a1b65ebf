//! Three-component real vector
//!
//! Value type used for view directions and rotation-matrix rows. Every
//! operation except [`Vector3::normalize`] and [`Vector3::zero`] returns a new
//! value and leaves its operands untouched.

use crate::core::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 3D vector with exact `PartialEq` and tolerance-based [`Vector3::close`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn negated(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn divide(self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }

    /// Right-handed cross product
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Angle between two vectors in radians.
    ///
    /// NaN when either vector has zero length; callers check lengths first.
    pub fn angle(self, other: Self) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        // rounding can push parallel vectors just past +/-1
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Unit vector in the same direction, or the zero vector for zero length
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::zeros();
        }
        self.divide(len)
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    pub fn zero(&mut self) {
        *self = Self::zeros();
    }

    /// Component-wise comparison against `tol`
    pub fn close(self, other: Self, tol: f64) -> bool {
        (self.x - other.x).abs() < tol
            && (self.y - other.y).abs() < tol
            && (self.z - other.z).abs() < tol
    }

    /// [`Vector3::close`] with the default tolerance of 1e-7
    pub fn approx_eq(self, other: Self) -> bool {
        self.close(other, DEFAULT_TOLERANCE)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::sub(self, rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.negated()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        self.scale(rhs)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Vector3 {
        self.divide(rhs)
    }
}
