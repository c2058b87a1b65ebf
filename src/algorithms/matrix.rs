//! 3x3 real matrix stored as three row vectors
//!
//! Provides the direction-cosine matrix used to turn a body-frame
//! reference vector into a level-frame view direction.

use crate::algorithms::vector::Vector3;
use crate::validation::error::{FootprintError, FootprintResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Row-major 3x3 matrix; `a`, `b` and `c` are the rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3 {
    pub a: Vector3,
    pub b: Vector3,
    pub c: Vector3,
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix3 {
    pub const fn identity() -> Self {
        Self {
            a: Vector3::new(1.0, 0.0, 0.0),
            b: Vector3::new(0.0, 1.0, 0.0),
            c: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    pub const fn from_rows(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self { a, b, c }
    }

    /// Body-to-world rotation for aerospace Euler angles in radians.
    ///
    /// Roll about X is applied first, then pitch about Y, then yaw about Z,
    /// giving `Rz(yaw) * Ry(pitch) * Rx(roll)`.
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        let mut m = Self::identity();
        m.set_from_euler(roll, pitch, yaw);
        m
    }

    /// In-place variant of [`Matrix3::from_euler`]
    pub fn set_from_euler(&mut self, roll: f64, pitch: f64, yaw: f64) {
        let (sr, cr) = roll.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();

        self.a = Vector3::new(cp * cy, sr * sp * cy - cr * sy, cr * sp * cy + sr * sy);
        self.b = Vector3::new(cp * sy, sr * sp * sy + cr * cy, cr * sp * sy - sr * cy);
        self.c = Vector3::new(-sp, sr * cp, cr * cp);
    }

    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    pub fn transposed(self) -> Self {
        Self::from_rows(
            Vector3::new(self.a.x, self.b.x, self.c.x),
            Vector3::new(self.a.y, self.b.y, self.c.y),
            Vector3::new(self.a.z, self.b.z, self.c.z),
        )
    }

    pub fn determinant(self) -> f64 {
        self.a.x * (self.b.y * self.c.z - self.b.z * self.c.y)
            + self.a.y * (self.b.z * self.c.x - self.b.x * self.c.z)
            + self.a.z * (self.b.x * self.c.y - self.b.y * self.c.x)
    }

    /// Inverse via the adjugate. Fails only when the determinant is exactly zero.
    pub fn invert(self) -> FootprintResult<Self> {
        let d = self.determinant();
        if d == 0.0 {
            debug!("matrix {} has no inverse", self);
            return Err(FootprintError::SingularMatrix { determinant: d });
        }

        let (a, b, c) = (self.a, self.b, self.c);
        Ok(Self::from_rows(
            Vector3::new(
                (b.y * c.z - c.y * b.z) / d,
                (a.z * c.y - a.y * c.z) / d,
                (a.y * b.z - a.z * b.y) / d,
            ),
            Vector3::new(
                (b.z * c.x - b.x * c.z) / d,
                (a.x * c.z - a.z * c.x) / d,
                (a.z * b.x - a.x * b.z) / d,
            ),
            Vector3::new(
                (b.x * c.y - c.x * b.y) / d,
                (a.y * c.x - a.x * c.y) / d,
                (a.x * b.y - b.x * a.y) / d,
            ),
        ))
    }

    pub fn add(self, other: Self) -> Self {
        Self::from_rows(self.a.add(other.a), self.b.add(other.b), self.c.add(other.c))
    }

    pub fn sub(self, other: Self) -> Self {
        Self::from_rows(self.a.sub(other.a), self.b.sub(other.b), self.c.sub(other.c))
    }

    /// Matrix product with `self` on the left
    pub fn matmul(self, other: Self) -> Self {
        let cols = other.transposed();
        let row = |r: Vector3| Vector3::new(r.dot(cols.a), r.dot(cols.b), r.dot(cols.c));
        Self::from_rows(row(self.a), row(self.b), row(self.c))
    }

    /// Matrix-vector product
    pub fn apply(self, v: Vector3) -> Vector3 {
        Vector3::new(self.a.dot(v), self.b.dot(v), self.c.dot(v))
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::from_rows(self.a.scale(factor), self.b.scale(factor), self.c.scale(factor))
    }

    /// Row-wise [`Vector3::close`]
    pub fn close(self, other: Self, tol: f64) -> bool {
        self.a.close(other.a, tol) && self.b.close(other.b, tol) && self.c.close(other.c, tol)
    }
}

impl From<nalgebra::Matrix3<f64>> for Matrix3 {
    fn from(m: nalgebra::Matrix3<f64>) -> Self {
        Self::from_rows(
            Vector3::new(m[(0, 0)], m[(0, 1)], m[(0, 2)]),
            Vector3::new(m[(1, 0)], m[(1, 1)], m[(1, 2)]),
            Vector3::new(m[(2, 0)], m[(2, 1)], m[(2, 2)]),
        )
    }
}

impl From<Matrix3> for nalgebra::Matrix3<f64> {
    fn from(m: Matrix3) -> Self {
        nalgebra::Matrix3::new(
            m.a.x, m.a.y, m.a.z,
            m.b.x, m.b.y, m.b.z,
            m.c.x, m.c.y, m.c.z,
        )
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix3(({:.2}, {:.2}, {:.2}), ({:.2}, {:.2}, {:.2}), ({:.2}, {:.2}, {:.2}))",
            self.a.x, self.a.y, self.a.z,
            self.b.x, self.b.y, self.b.z,
            self.c.x, self.c.y, self.c.z
        )
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;

    fn add(self, rhs: Matrix3) -> Matrix3 {
        Matrix3::add(self, rhs)
    }
}

impl Sub for Matrix3 {
    type Output = Matrix3;

    fn sub(self, rhs: Matrix3) -> Matrix3 {
        Matrix3::sub(self, rhs)
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        self.matmul(rhs)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply(rhs)
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: f64) -> Matrix3 {
        self.scale(rhs)
    }
}
