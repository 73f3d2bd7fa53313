//! Ray type for tracing.
//!
//! A ray is a starting point and a unit direction.

use stingray_math::Vector;

use crate::{TraceError, TraceResult};

/// A ray with an origin and a normalised direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vector,
    /// Unit direction vector
    direction: Vector,
}

impl Ray {
    /// Create a new ray, normalising `direction`.
    ///
    /// Fails when `direction` has zero length.
    pub fn new(origin: Vector, direction: Vector) -> TraceResult<Self> {
        let direction = direction
            .try_normalize()
            .ok_or(TraceError::DegenerateVector("ray direction has zero length"))?;

        Ok(Self { origin, direction })
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vector {
        self.origin
    }

    /// Get the ray's unit direction.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Compute the point `distance` units along the ray.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn point_at(&self, distance: f64) -> Vector {
        self.origin + self.direction * distance
    }
}
