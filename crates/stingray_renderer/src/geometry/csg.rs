//! Constructive solid geometry combinators.
//!
//! Both combinators filter their operands' hits with [`Geometry::contains`],
//! so they only behave correctly when the operands can answer containment
//! (spheres). Planes and nested CSG report no interior, which makes every
//! hit against them look like it lies outside.

use std::sync::Arc;

use stingray_math::{Colour, Vector};

use crate::{
    lighting, Geometry, Intersection, IntersectionList, Light, Ray, RenderContext, Texture,
    TraceError, TraceResult,
};

/// The region inside both `first` and `second`.
#[derive(Debug)]
pub struct CsgIntersection {
    first: Box<dyn Geometry>,
    second: Box<dyn Geometry>,
    texture: Arc<dyn Texture>,
}

impl CsgIntersection {
    pub fn new(
        first: Box<dyn Geometry>,
        second: Box<dyn Geometry>,
        texture: Arc<dyn Texture>,
    ) -> Self {
        Self {
            first,
            second,
            texture,
        }
    }
}

impl Geometry for CsgIntersection {
    fn intersect<'a>(&'a self, ray: &Ray, intersections: &mut IntersectionList<'a>) {
        let mut candidates = IntersectionList::new(*ray);
        self.first.intersect(ray, &mut candidates);
        self.second.intersect(ray, &mut candidates);

        for hit in &candidates {
            let point = hit.point();
            if self.first.contains(point) && self.second.contains(point) {
                intersections.add_surface(self, hit.surface(), hit.distance());
            }
        }
    }

    fn contains(&self, _point: Vector) -> bool {
        false
    }

    fn surface_normal(&self, _intersection: &Intersection<'_>) -> TraceResult<Vector> {
        Err(TraceError::Unsupported("surface normal of a CSG intersection"))
    }

    fn colour_at(
        &self,
        context: &mut RenderContext<'_>,
        depth: u32,
        intersection: &Intersection<'_>,
        lights: &[&Light],
    ) -> TraceResult<Colour> {
        let normal = intersection.surface().surface_normal(intersection)?;
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
        Box::new(CsgIntersection::new(
            self.first.translate(offset),
            self.second.translate(offset),
            self.texture.clone(),
        ))
    }
}

/// The region inside `primary` but outside `clip`.
#[derive(Debug)]
pub struct CsgDifference {
    primary: Box<dyn Geometry>,
    clip: Box<dyn Geometry>,
    texture: Arc<dyn Texture>,
}

impl CsgDifference {
    pub fn new(
        primary: Box<dyn Geometry>,
        clip: Box<dyn Geometry>,
        texture: Arc<dyn Texture>,
    ) -> Self {
        Self {
            primary,
            clip,
            texture,
        }
    }
}

impl Geometry for CsgDifference {
    fn intersect<'a>(&'a self, ray: &Ray, intersections: &mut IntersectionList<'a>) {
        let mut candidates = IntersectionList::new(*ray);
        self.primary.intersect(ray, &mut candidates);
        for hit in &candidates {
            if !self.clip.contains(hit.point()) {
                intersections.add_surface(self, hit.surface(), hit.distance());
            }
        }

        // The clip's surface is exposed wherever it lies inside the primary
        let mut candidates = IntersectionList::new(*ray);
        self.clip.intersect(ray, &mut candidates);
        for hit in &candidates {
            if self.primary.contains(hit.point()) {
                intersections.add_surface(self, hit.surface(), hit.distance());
            }
        }
    }

    fn contains(&self, _point: Vector) -> bool {
        false
    }

    fn surface_normal(&self, _intersection: &Intersection<'_>) -> TraceResult<Vector> {
        Err(TraceError::Unsupported("surface normal of a CSG difference"))
    }

    fn colour_at(
        &self,
        context: &mut RenderContext<'_>,
        depth: u32,
        intersection: &Intersection<'_>,
        lights: &[&Light],
    ) -> TraceResult<Colour> {
        let normal = intersection.surface().surface_normal(intersection)?;

        // Hits on the clip see its inside, so the normal faces inward
        let normal = if self.clip.contains(intersection.point()) {
            -normal
        } else {
            normal
        };

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
        Box::new(CsgDifference::new(
            self.primary.translate(offset),
            self.clip.translate(offset),
            self.texture.clone(),
        ))
    }
}
