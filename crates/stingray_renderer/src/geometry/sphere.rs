//! Sphere primitive for ray tracing.

use std::sync::Arc;

use stingray_math::{quadratic, Colour, Vector, EPSILON};

use crate::{
    lighting, Geometry, Intersection, IntersectionList, Light, Ray, RenderContext, Texture,
    TraceResult,
};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    centre: Vector,
    radius: f64,
    texture: Arc<dyn Texture>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(centre: Vector, radius: f64, texture: Arc<dyn Texture>) -> Self {
        Self {
            centre,
            radius,
            texture,
        }
    }

    pub fn centre(&self) -> Vector {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The same sphere with its centre moved by `offset`.
    pub fn translated(&self, offset: Vector) -> Sphere {
        Sphere::new(self.centre + offset, self.radius, self.texture.clone())
    }
}

impl Geometry for Sphere {
    fn intersect<'a>(&'a self, ray: &Ray, intersections: &mut IntersectionList<'a>) {
        // Solve with the sphere moved to the origin
        let local_origin = ray.origin() - self.centre;

        if let Some((t1, t2)) = quadratic::solve(local_origin, ray.direction(), self.radius) {
            // Negative roots lie behind the ray
            if t1 > 0.0 {
                intersections.add(self, t1);
            }
            if t2 > 0.0 {
                intersections.add(self, t2);
            }
        }
    }

    fn contains(&self, point: Vector) -> bool {
        (point - self.centre).length() - self.radius <= EPSILON
    }

    fn surface_normal(&self, intersection: &Intersection<'_>) -> TraceResult<Vector> {
        Ok((intersection.point() - self.centre).normalize())
    }

    fn colour_at(
        &self,
        context: &mut RenderContext<'_>,
        depth: u32,
        intersection: &Intersection<'_>,
        lights: &[&Light],
    ) -> TraceResult<Colour> {
        let normal = self.surface_normal(intersection)?;
        lighting::colour(
            context,
            depth,
            intersection,
            normal,
            lights,
            self.texture.as_ref(),
        )
    }

    fn translate(&self, offset: Vector) -> Box<dyn Geometry> {
        Box::new(self.translated(offset))
    }
}
