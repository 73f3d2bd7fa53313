use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec3;

use crate::EPSILON;

/// A three dimensional vector: a direction and magnitude, or a point
/// expressed as its offset from the origin.
///
/// Equality is approximate: two vectors are equal when every component
/// differs by less than [`EPSILON`]. The relation is not transitive, so
/// `Vector` implements neither `Eq` nor `Hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector(DVec3);

impl Vector {
    pub const ZERO: Vector = Vector(DVec3::ZERO);
    pub const X: Vector = Vector(DVec3::X);
    pub const Y: Vector = Vector(DVec3::Y);
    pub const Z: Vector = Vector(DVec3::Z);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// The underlying glam vector.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product with the sign flipped relative to the right-hand rule:
    /// `a.cross(b) == -(a × b)`.
    ///
    /// [`Vector::rotate`] is written against this convention.
    #[inline]
    pub fn cross(&self, other: Vector) -> Vector {
        Vector(-self.0.cross(other.0))
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.squared().sqrt()
    }

    /// Squared length (the vector dotted with itself).
    #[inline]
    pub fn squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Scale to unit length.
    ///
    /// The result is non-finite for a zero-length vector; use
    /// [`Vector::try_normalize`] when the input is not known to be
    /// non-degenerate.
    #[inline]
    pub fn normalize(&self) -> Vector {
        *self / self.length()
    }

    /// Scale to unit length, or `None` when the length is zero or not finite.
    pub fn try_normalize(&self) -> Option<Vector> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(*self / len)
        } else {
            None
        }
    }

    /// Rotate about a unit `axis` by `radians`, using Rodrigues' formula:
    /// `v cos θ + (axis × v) sin θ + axis (axis · v)(1 − cos θ)`.
    pub fn rotate(&self, axis: Vector, radians: f64) -> Vector {
        let (sin, cos) = radians.sin_cos();

        let first = *self * cos;
        let second = axis.cross(*self) * sin;
        let third = axis * axis.dot(*self) * (1.0 - cos);

        first + second + third
    }

    /// Mirror this direction about a unit surface normal: `v − 2(n·v)n`.
    #[inline]
    pub fn reflect(&self, normal: Vector) -> Vector {
        *self - normal * (2.0 * normal.dot(*self))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        (self.0.x - other.0.x).abs() < EPSILON
            && (self.0.y - other.0.y).abs() < EPSILON
            && (self.0.z - other.0.z).abs() < EPSILON
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, scalar: f64) -> Vector {
        Vector(self.0 * scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, divisor: f64) -> Vector {
        Vector(self.0 / divisor)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.2}, {:.2}, {:.2}>", self.0.x, self.0.y, self.0.z)
    }
}
