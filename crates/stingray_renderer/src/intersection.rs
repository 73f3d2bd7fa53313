//! Intersection records and the per-ray sorted intersection list.

use std::fmt;

use stingray_math::{Vector, EPSILON};

use crate::{Geometry, Ray, TraceError, TraceResult};

/// A point where a ray strikes a piece of geometry.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    ray: Ray,
    /// Geometry that shades this hit
    geometry: &'a dyn Geometry,
    /// Primitive surface actually struck (differs from `geometry` under CSG)
    surface: &'a dyn Geometry,
    distance: f64,
}

impl<'a> Intersection<'a> {
    /// Record a hit `distance` units along `ray`.
    ///
    /// Fails when `distance` is negative.
    pub fn new(ray: Ray, geometry: &'a dyn Geometry, distance: f64) -> TraceResult<Self> {
        Self::with_surface(ray, geometry, geometry, distance)
    }

    /// Record a hit on `surface` that `geometry` is responsible for shading.
    pub fn with_surface(
        ray: Ray,
        geometry: &'a dyn Geometry,
        surface: &'a dyn Geometry,
        distance: f64,
    ) -> TraceResult<Self> {
        if distance < 0.0 {
            return Err(TraceError::NegativeDistance(distance));
        }

        Ok(Self {
            ray,
            geometry,
            surface,
            distance,
        })
    }

    #[inline]
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    #[inline]
    pub fn geometry(&self) -> &'a dyn Geometry {
        self.geometry
    }

    #[inline]
    pub fn surface(&self) -> &'a dyn Geometry {
        self.surface
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The world-space hit point.
    #[inline]
    pub fn point(&self) -> Vector {
        self.ray.point_at(self.distance)
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("ray", &self.ray)
            .field("geometry", &self.geometry)
            .field("distance", &self.distance)
            .finish()
    }
}

/// All intersections of a single ray, nearest first.
///
/// Hits within [`EPSILON`] of the ray origin are discarded so that rays
/// leaving a surface do not immediately strike it again.
pub struct IntersectionList<'a> {
    ray: Ray,
    intersections: Vec<Intersection<'a>>,
}

impl<'a> IntersectionList<'a> {
    /// Create an empty list for `ray`.
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            intersections: Vec::new(),
        }
    }

    /// The ray these intersections lie on.
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Record a hit on `geometry` at `distance`.
    pub fn add(&mut self, geometry: &'a dyn Geometry, distance: f64) {
        self.add_surface(geometry, geometry, distance);
    }

    /// Record a hit on `surface`, shaded by `geometry`, at `distance`.
    pub fn add_surface(
        &mut self,
        geometry: &'a dyn Geometry,
        surface: &'a dyn Geometry,
        distance: f64,
    ) {
        // NaN fails this test too
        if !(distance > EPSILON) {
            return;
        }

        let intersection = Intersection {
            ray: self.ray,
            geometry,
            surface,
            distance,
        };

        // Equal distances keep insertion order
        let index = self
            .intersections
            .partition_point(|existing| existing.distance <= distance);
        self.intersections.insert(index, intersection);
    }

    /// The nearest intersection.
    ///
    /// Fails when nothing was recorded; check [`IntersectionList::is_empty`] first.
    pub fn closest(&self) -> TraceResult<&Intersection<'a>> {
        self.intersections.first().ok_or(TraceError::NoIntersection)
    }

    /// Get the number of intersections.
    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    /// Iterate nearest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.intersections.iter()
    }
}

impl<'l, 'a> IntoIterator for &'l IntersectionList<'a> {
    type Item = &'l Intersection<'a>;
    type IntoIter = std::slice::Iter<'l, Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlainTexture, Sphere};
    use std::sync::Arc;

    fn sphere() -> Sphere {
        Sphere::new(Vector::ZERO, 1.0, Arc::new(PlainTexture::default()))
    }

    fn ray() -> Ray {
        Ray::new(Vector::ZERO, Vector::Z).unwrap()
    }

    #[test]
    fn test_negative_distance_rejected() {
        let s = sphere();
        let result = Intersection::new(ray(), &s, -0.5);
        assert!(matches!(result, Err(TraceError::NegativeDistance(_))));

        assert!(Intersection::new(ray(), &s, 0.0).is_ok());
    }

    #[test]
    fn test_sorted_nearest_first() {
        let s = sphere();
        let mut list = IntersectionList::new(ray());
        list.add(&s, 7.0);
        list.add(&s, 2.0);
        list.add(&s, 4.5);

        let distances: Vec<f64> = list.iter().map(|i| i.distance()).collect();
        assert_eq!(distances, vec![2.0, 4.5, 7.0]);
        assert_eq!(list.closest().unwrap().distance(), 2.0);
    }

    #[test]
    fn test_near_origin_hits_discarded() {
        let s = sphere();
        let mut list = IntersectionList::new(ray());
        list.add(&s, 0.0);
        list.add(&s, EPSILON);
        list.add(&s, -3.0);
        list.add(&s, f64::NAN);
        assert!(list.is_empty());

        list.add(&s, 2.0 * EPSILON);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_closest_of_empty_list() {
        let list = IntersectionList::new(ray());
        assert!(matches!(list.closest(), Err(TraceError::NoIntersection)));
    }

    #[test]
    fn test_ties_are_stable() {
        let first = sphere();
        let second = sphere();
        let mut list = IntersectionList::new(ray());
        list.add(&first, 3.0);
        list.add(&second, 3.0);

        let closest = list.closest().unwrap();
        assert!(std::ptr::addr_eq(closest.geometry(), &first as &dyn Geometry));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_point() {
        let s = sphere();
        let i = Intersection::new(ray(), &s, 4.0).unwrap();
        assert_eq!(i.point(), Vector::new(0.0, 0.0, 4.0));
    }
}
