//! Ray/sphere quadratic solver.

use crate::Vector;

/// Solve `|u + t·v|² = radius²` for `t`.
///
/// `u` is the ray origin relative to the sphere centre and `v` the ray
/// direction. Returns both real roots, or `None` when the discriminant is
/// negative or `v` has zero length.
///
/// The first root picks the sign that avoids cancellation against `b`; the
/// second is recovered from the product of roots, `t1 · t2 = c / a`.
pub fn solve(u: Vector, v: Vector, radius: f64) -> Option<(f64, f64)> {
    let a = v.squared();
    let b = 2.0 * u.dot(v);
    let c = u.squared() - radius * radius;

    if a == 0.0 {
        return None;
    }

    let bb = b * b;
    let ac4 = 4.0 * a * c;
    if bb < ac4 {
        return None;
    }

    let root = (bb - ac4).sqrt();
    let t1 = if b > 0.0 {
        (-b - root) / (2.0 * a)
    } else {
        (-b + root) / (2.0 * a)
    };
    let t2 = c / (a * t1);

    Some((t1, t2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_through_centre() {
        // Origin 100 units from the centre, looking straight at it
        let u = Vector::new(0.0, 0.0, -100.0);
        let v = Vector::Z;

        let (t1, t2) = solve(u, v, 40.0).unwrap();
        let (near, far) = (t1.min(t2), t1.max(t2));
        assert!((near - 60.0).abs() < 1e-9);
        assert!((far - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_miss() {
        let u = Vector::new(50.0, 0.0, -100.0);
        assert!(solve(u, Vector::Z, 40.0).is_none());
    }

    #[test]
    fn test_origin_inside() {
        // One root behind the origin, one ahead
        let (t1, t2) = solve(Vector::ZERO, Vector::X, 2.0).unwrap();
        assert!((t1.min(t2) + 2.0).abs() < 1e-9);
        assert!((t1.max(t2) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_stable_for_distant_sphere() {
        let u = Vector::new(0.0, 0.0, -1e6);
        let (t1, t2) = solve(u, Vector::Z, 1.0).unwrap();
        assert!((t1.min(t2) - (1e6 - 1.0)).abs() < 1e-6);
        assert!((t1.max(t2) - (1e6 + 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_direction() {
        assert!(solve(Vector::new(0.0, 0.0, -10.0), Vector::ZERO, 1.0).is_none());
    }
}
