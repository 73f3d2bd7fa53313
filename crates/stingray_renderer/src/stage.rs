//! The scene container and the render loop.

use std::fmt;

use stingray_math::{Colour, Vector};

use crate::{
    Camera, Geometry, IntersectionList, Light, Ray, RenderConfig, RenderContext, Rendering,
    TraceResult,
};

/// A camera, the geometry it looks at, and the lights that illuminate it.
#[derive(Debug)]
pub struct Stage {
    camera: Camera,
    geometry: Vec<Box<dyn Geometry>>,
    lights: Vec<Light>,
}

impl Stage {
    /// Create an empty stage viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            geometry: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_geometry(&mut self, geometry: Box<dyn Geometry>) {
        self.geometry.push(geometry);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn geometry(&self) -> &[Box<dyn Geometry>] {
        &self.geometry
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Every intersection of `ray` with the stage, nearest first.
    fn intersect<'a>(&'a self, ray: &Ray) -> IntersectionList<'a> {
        let mut intersections = IntersectionList::new(*ray);
        for geometry in &self.geometry {
            geometry.intersect(ray, &mut intersections);
        }
        intersections
    }

    /// Colour seen along `ray`, or `miss` if it strikes nothing.
    ///
    /// `depth` counts mirror bounces so far. Rays deeper than the context's
    /// limit return `miss` without being traced.
    pub fn colour_for(
        &self,
        context: &mut RenderContext<'_>,
        ray: &Ray,
        depth: u32,
        miss: Colour,
    ) -> TraceResult<Colour> {
        if depth > context.max_depth() {
            return Ok(miss);
        }

        let intersections = self.intersect(ray);
        if intersections.is_empty() {
            return Ok(miss);
        }

        let closest = intersections.closest()?;
        let lights = self.illuminating_lights(context, closest.point())?;

        closest
            .geometry()
            .colour_at(context, depth, closest, &lights)
    }

    /// Lights with a clear line of sight to `point`.
    ///
    /// Geometry beyond a light does not shadow it.
    pub fn illuminating_lights(
        &self,
        context: &mut RenderContext<'_>,
        point: Vector,
    ) -> TraceResult<Vec<&Light>> {
        let mut visible = Vec::with_capacity(self.lights.len());

        for light in &self.lights {
            let to_light = light.position() - point;
            let distance = to_light.length();

            // A light on the surface itself cannot be blocked
            if to_light.try_normalize().is_none() {
                visible.push(light);
                continue;
            }

            let shadow_ray = Ray::new(point, to_light)?;
            context.statistics_mut().inc_shadow_rays_cast();

            let intersections = self.intersect(&shadow_ray);
            if intersections.is_empty() || intersections.closest()?.distance() > distance {
                visible.push(light);
            }
        }

        Ok(visible)
    }

    /// Render at `width` x `height` with the default configuration.
    pub fn render(&self, name: &str, width: u32, height: u32) -> TraceResult<Rendering> {
        self.render_with(name, width, height, &RenderConfig::default())
    }

    /// Render at `width` x `height`.
    ///
    /// The camera looks down `Z` through a viewplane `width / 2` units away,
    /// one unit per pixel, with pixel `(0, 0)` at the bottom left. Each
    /// pixel is sampled at every anti-aliasing offset and the samples are
    /// blended into the rendering as they arrive.
    pub fn render_with(
        &self,
        name: &str,
        width: u32,
        height: u32,
        config: &RenderConfig,
    ) -> TraceResult<Rendering> {
        log::debug!(
            "Rendering '{}' at {}x{}, {} samples per pixel",
            name,
            width,
            height,
            config.antialias.offsets().len()
        );
        log::debug!("{}", self);

        if self.lights.is_empty() {
            log::warn!("Stage '{}' has no lights; only ambient light will show", name);
        }

        let mut rendering = Rendering::new(name, width, height);
        let mut context = RenderContext::new(self).with_max_depth(config.max_depth);
        context.statistics_mut().start();

        let half_width = f64::from(width / 2);
        let half_height = f64::from(height / 2);
        let bottom_left = Vector::new(-half_width, -half_height, half_width);
        let origin = self.camera.position();

        for x in 0..width {
            for y in 0..height {
                let pixel = bottom_left + Vector::new(f64::from(x), f64::from(y), 0.0);

                for offset in config.antialias.offsets() {
                    let direction = self.camera.orient(pixel + *offset);
                    let ray = Ray::new(origin, direction)?;

                    context.statistics_mut().inc_rays_cast();
                    let colour = self.colour_for(&mut context, &ray, 0, config.miss)?;
                    rendering.set(x, y, colour);
                }
            }
        }

        let mut statistics = context.into_statistics();
        statistics.end();
        log::info!("Rendered '{}': {}", name, statistics);

        rendering.set_statistics(statistics);
        Ok(rendering)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stage[{}; {} geometry; {} lights]",
            self.camera,
            self.geometry.len(),
            self.lights.len()
        )
    }
}
