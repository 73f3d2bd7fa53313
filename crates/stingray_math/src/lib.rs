// Re-export glam for convenience
pub use glam::{DVec3, Vec3};

// Stingray math types
mod colour;
pub mod quadratic;
mod vector;

pub use colour::Colour;
pub use vector::Vector;

/// Numerical tolerance used for approximate vector equality and for
/// discarding self-intersections at a ray's origin.
pub const EPSILON: f64 = 0.00001;
