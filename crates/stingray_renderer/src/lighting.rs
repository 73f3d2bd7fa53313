//! Surface shading: Phong terms for ordinary finishes, a recursive bounce
//! for mirrors.

use stingray_math::{Colour, Vector};

use crate::{Finish, Intersection, Light, Ray, RenderContext, Texture, TraceResult};

/// Colour seen at `intersection`.
///
/// `lights` must already exclude lights that are shadowed at the hit point.
/// Reflective finishes ignore the lights entirely and return whatever the
/// mirror bounce sees, with black for a miss.
pub fn colour(
    context: &mut RenderContext<'_>,
    depth: u32,
    intersection: &Intersection<'_>,
    normal: Vector,
    lights: &[&Light],
    texture: &dyn Texture,
) -> TraceResult<Colour> {
    let finish = texture.finish_at(intersection.point());

    if finish.is_reflective() {
        mirror(context, depth, intersection, normal)
    } else {
        Ok(regular(intersection, normal, lights, texture, finish))
    }
}

fn mirror(
    context: &mut RenderContext<'_>,
    depth: u32,
    intersection: &Intersection<'_>,
    normal: Vector,
) -> TraceResult<Colour> {
    let reflected = intersection.ray().direction().reflect(normal);
    let ray = Ray::new(intersection.point(), reflected)?;

    context
        .stage()
        .colour_for(context, &ray, depth + 1, Colour::BLACK)
}

fn regular(
    intersection: &Intersection<'_>,
    normal: Vector,
    lights: &[&Light],
    texture: &dyn Texture,
    finish: Finish,
) -> Colour {
    let point = intersection.point();
    let view = intersection.ray().direction();
    let pigment = texture.pigment_at(point).colour_at(point);

    let mut colour = pigment.scale(finish.ambient);

    for light in lights {
        // A light sitting exactly on the surface has no direction
        let Some(to_light) = (light.position() - point).try_normalize() else {
            continue;
        };

        let diffuse = normal.dot(to_light);
        if diffuse > 0.0 {
            colour = colour + light.colour().scale(diffuse * finish.diffuse) * pigment;
        }

        // Highlights take the light's colour, not the pigment's
        let specular = view.dot(to_light.reflect(normal));
        if specular > 0.0 {
            let brightness = specular.powi(finish.shininess) * finish.specular();
            colour = colour + light.colour().scale(brightness);
        }
    }

    colour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, PlainTexture, Sphere, Stage};
    use std::sync::Arc;

    fn empty_stage() -> Stage {
        Stage::new(Camera::new(Vector::ZERO, Vector::Z).unwrap())
    }

    /// A hit on a unit sphere at the origin, seen from +Z looking down -Z.
    fn shade(finish: Finish, pigment: Colour, lights: &[&Light]) -> Colour {
        let stage = empty_stage();
        let texture = PlainTexture::new(pigment, finish);
        let sphere = Sphere::new(Vector::ZERO, 1.0, Arc::new(PlainTexture::default()));
        let ray = Ray::new(Vector::new(0.0, 0.0, 10.0), -Vector::Z).unwrap();
        let hit = Intersection::new(ray, &sphere, 9.0).unwrap();

        let mut context = RenderContext::new(&stage);
        colour(&mut context, 0, &hit, Vector::Z, lights, &texture).unwrap()
    }

    #[test]
    fn test_ambient_only_without_lights() {
        let c = shade(Finish::new(0.5, 0.5, 1, 0.0), Colour::new(0.8, 0.4, 0.2), &[]);
        assert_eq!(c, Colour::new(0.4, 0.2, 0.1));
    }

    #[test]
    fn test_diffuse_tinted_by_pigment() {
        // Light straight along the normal: N.L = 1. Light off to the side of
        // the view so the specular reflection points away from the eye.
        let light = Light::new(Vector::new(0.0, 0.0, 100.0), Colour::WHITE);
        let finish = Finish::new(0.0, 1.0, 1, 0.0);
        let c = shade(finish, Colour::new(0.25, 0.5, 0.75), &[&light]);

        assert!((c.red() - 0.25).abs() < 1e-6);
        assert!((c.green() - 0.5).abs() < 1e-6);
        assert!((c.blue() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let light = Light::new(Vector::new(0.0, 0.0, -100.0), Colour::WHITE);
        let c = shade(Finish::new(0.1, 0.5, 10, 0.0), Colour::WHITE, &[&light]);
        assert_eq!(c, Colour::WHITE.scale(0.1));
    }

    #[test]
    fn test_specular_is_untinted() {
        // With diffuse 0 and a black pigment only the highlight remains.
        // Reflecting the light direction (+Z) about +Z gives -Z, which runs
        // along the view ray, so the highlight is at full strength.
        let light = Light::new(Vector::new(0.0, 0.0, 100.0), Colour::RED);
        let c = shade(Finish::new(0.0, 0.0, 20, 0.0), Colour::BLACK, &[&light]);
        assert_eq!(c, Colour::RED);
    }

    #[test]
    fn test_mirror_with_nothing_to_see_is_black() {
        let light = Light::new(Vector::new(0.0, 0.0, 100.0), Colour::WHITE);
        let c = shade(Finish::MIRROR, Colour::WHITE, &[&light]);
        assert_eq!(c, Colour::BLACK);
    }

    #[test]
    fn test_mirror_sees_the_scene() {
        // A green matte sphere behind the camera is visible in a mirror ahead
        let mut stage = empty_stage();
        stage.add_geometry(Box::new(Sphere::new(
            Vector::new(0.0, 0.0, -20.0),
            5.0,
            Arc::new(PlainTexture::new(Colour::GREEN, Finish::new(1.0, 0.0, 1, 0.0))),
        )));
        stage.add_geometry(Box::new(Sphere::new(
            Vector::new(0.0, 0.0, 20.0),
            5.0,
            Arc::new(PlainTexture::new(Colour::WHITE, Finish::MIRROR)),
        )));

        let ray = Ray::new(Vector::ZERO, Vector::Z).unwrap();
        let mut context = RenderContext::new(&stage);
        let c = stage.colour_for(&mut context, &ray, 0, Colour::BLUE).unwrap();

        assert_eq!(c, Colour::GREEN);
    }
}
