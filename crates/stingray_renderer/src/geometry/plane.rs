//! Infinite plane primitive.

use std::sync::Arc;

use stingray_math::{Colour, Vector};

use crate::{
    lighting, Geometry, Intersection, IntersectionList, Light, Ray, RenderContext, Texture,
    TraceError, TraceResult,
};

/// The plane `normal · p = offset`.
///
/// Rays only strike the side the normal faces. A plane has no interior.
#[derive(Debug, Clone)]
pub struct Plane {
    normal: Vector,
    offset: f64,
    texture: Arc<dyn Texture>,
}

impl Plane {
    /// Create a new plane. `normal` is normalised and must be non-zero.
    pub fn new(normal: Vector, offset: f64, texture: Arc<dyn Texture>) -> TraceResult<Self> {
        let normal = normal
            .try_normalize()
            .ok_or(TraceError::DegenerateVector("plane normal has zero length"))?;

        Ok(Self {
            normal,
            offset,
            texture,
        })
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The same plane moved by `offset`.
    pub fn translated(&self, offset: Vector) -> Plane {
        Plane {
            normal: self.normal,
            offset: self.offset + self.normal.dot(offset),
            texture: self.texture.clone(),
        }
    }
}

impl Geometry for Plane {
    fn intersect<'a>(&'a self, ray: &Ray, intersections: &mut IntersectionList<'a>) {
        let denominator = self.normal.dot(ray.direction());

        // Only rays travelling against the normal can hit
        if denominator < 0.0 {
            let numerator = -(self.normal.dot(ray.origin()) - self.offset);
            intersections.add(self, numerator / denominator);
        }
    }

    fn contains(&self, _point: Vector) -> bool {
        false
    }

    fn surface_normal(&self, _intersection: &Intersection<'_>) -> TraceResult<Vector> {
        Ok(self.normal)
    }

    fn colour_at(
        &self,
        context: &mut RenderContext<'_>,
        depth: u32,
        intersection: &Intersection<'_>,
        lights: &[&Light],
    ) -> TraceResult<Colour> {
        lighting::colour(
            context,
            depth,
            intersection,
            self.normal,
            lights,
            self.texture.as_ref(),
        )
    }

    fn translate(&self, offset: Vector) -> Box<dyn Geometry> {
        Box::new(self.translated(offset))
    }
}
