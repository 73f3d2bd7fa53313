//! Geometry trait and the shapes that implement it.

mod csg;
mod plane;
mod sphere;

pub use csg::{CsgDifference, CsgIntersection};
pub use plane::Plane;
pub use sphere::Sphere;

use std::fmt;

use stingray_math::{Colour, Vector};

use crate::{Intersection, IntersectionList, Light, Ray, RenderContext, TraceResult};

/// A solid or surface that rays can strike and that can shade its own hits.
///
/// Implementations are immutable once built; [`Geometry::translate`]
/// produces a moved copy.
pub trait Geometry: Send + Sync + fmt::Debug {
    /// Record every point where `ray` strikes this geometry.
    fn intersect<'a>(&'a self, ray: &Ray, intersections: &mut IntersectionList<'a>);

    /// Whether `point` lies inside or on the solid.
    fn contains(&self, point: Vector) -> bool;

    /// Unit surface normal at the hit point.
    fn surface_normal(&self, intersection: &Intersection<'_>) -> TraceResult<Vector>;

    /// Colour seen along the intersection's ray, lit by `lights`.
    fn colour_at(
        &self,
        context: &mut RenderContext<'_>,
        depth: u32,
        intersection: &Intersection<'_>,
        lights: &[&Light],
    ) -> TraceResult<Colour>;

    /// A copy of this geometry moved by `offset`.
    fn translate(&self, offset: Vector) -> Box<dyn Geometry>;
}
