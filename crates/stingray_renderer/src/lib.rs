//! Stingray Renderer - recursive Whitted ray tracing
//!
//! A single-threaded, deterministic ray tracer: spheres, one-sided planes,
//! and CSG combinations of them, shaded with Phong lighting, hard shadows
//! from point lights, and mirror reflection.
//!
//! Build a [`Stage`], add geometry and lights, then call [`Stage::render`]
//! to get a [`Rendering`] that can be saved as PNG.

mod camera;
mod error;
mod geometry;
mod intersection;
mod light;
pub mod lighting;
mod ray;
mod render;
mod rendering;
mod stage;
mod texture;

pub use camera::Camera;
pub use error::{TraceError, TraceResult};
pub use geometry::{CsgDifference, CsgIntersection, Geometry, Plane, Sphere};
pub use intersection::{Intersection, IntersectionList};
pub use light::Light;
pub use ray::Ray;
pub use render::{AntiAlias, RenderConfig, RenderContext, Statistics, MAX_RECURSE};
pub use rendering::Rendering;
pub use stage::Stage;
pub use texture::{CheckerTexture, Finish, Pigment, PlainTexture, RotatedTexture, Texture};

/// Re-export the math types from stingray_math
pub use stingray_math::{Colour, Vector, EPSILON};
