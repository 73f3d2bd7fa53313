//! Camera position and orientation.

use std::fmt;

use stingray_math::Vector;

use crate::{TraceError, TraceResult};

/// Eye position and view basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vector,
    direction: Vector,
    up: Vector,
    right: Vector,
}

impl Camera {
    /// Camera at `position` looking toward `look_at`, with `Y` up and `X` right.
    pub fn new(position: Vector, look_at: Vector) -> TraceResult<Self> {
        Self::with_basis(position, look_at, Vector::Y, Vector::X)
    }

    /// Camera with an explicit up and right vector. All directions are normalised.
    pub fn with_basis(
        position: Vector,
        look_at: Vector,
        up: Vector,
        right: Vector,
    ) -> TraceResult<Self> {
        let direction = (look_at - position)
            .try_normalize()
            .ok_or(TraceError::DegenerateVector("camera looks at its own position"))?;
        let up = up
            .try_normalize()
            .ok_or(TraceError::DegenerateVector("camera up vector has zero length"))?;
        let right = right
            .try_normalize()
            .ok_or(TraceError::DegenerateVector("camera right vector has zero length"))?;

        Ok(Self {
            position,
            direction,
            up,
            right,
        })
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    /// Unit look direction.
    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn up(&self) -> Vector {
        self.up
    }

    pub fn right(&self) -> Vector {
        self.right
    }

    /// Angles `(pitch, yaw)` that turn the canonical `Z` axis onto the look
    /// direction: rotate about `X` by `pitch`, then about `Y` by `yaw`.
    ///
    /// Pitch is the elevation of the look direction above its `XZ`
    /// projection; yaw is the signed angle of that projection from `Z`.
    pub fn view_angles(&self) -> (f64, f64) {
        let d = self.direction;
        let horizontal = (d.x() * d.x() + d.z() * d.z()).sqrt();

        let pitch = d.y().atan2(horizontal);
        // Positive rotation about Y carries Z toward -X
        let yaw = (-d.x()).atan2(d.z());

        (pitch, yaw)
    }

    /// Turn a camera-space direction (looking down `Z`) into world space.
    pub fn orient(&self, direction: Vector) -> Vector {
        let (pitch, yaw) = self.view_angles();
        direction.rotate(Vector::X, pitch).rotate(Vector::Y, yaw)
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera[position: {}; look at: {}; up: {}; right: {}]",
            self.position, self.direction, self.up, self.right
        )
    }
}
