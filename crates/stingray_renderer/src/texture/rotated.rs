use std::sync::Arc;

use stingray_math::Vector;

use super::{Finish, Pigment, Texture};
use crate::{TraceError, TraceResult};

/// Rotates another texture's pattern about an axis through the origin.
///
/// The query point is rotated before it reaches the inner texture, so the
/// pattern turns while the geometry stays put.
#[derive(Debug, Clone)]
pub struct RotatedTexture {
    inner: Arc<dyn Texture>,
    axis: Vector,
    radians: f64,
}

impl RotatedTexture {
    /// Rotate `inner` by `degrees` about `axis`.
    pub fn new(inner: Arc<dyn Texture>, axis: Vector, degrees: f64) -> TraceResult<Self> {
        let axis = axis
            .try_normalize()
            .ok_or(TraceError::DegenerateVector("rotation axis has zero length"))?;

        Ok(Self {
            inner,
            axis,
            radians: degrees.to_radians(),
        })
    }

    fn adjust(&self, point: Vector) -> Vector {
        point.rotate(self.axis, self.radians)
    }
}

impl Texture for RotatedTexture {
    fn pigment_at(&self, point: Vector) -> &dyn Pigment {
        self.inner.pigment_at(self.adjust(point))
    }

    fn finish_at(&self, point: Vector) -> Finish {
        self.inner.finish_at(self.adjust(point))
    }
}
