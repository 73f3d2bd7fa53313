//! Procedural surface textures.
//!
//! A [`Texture`] maps a world-space point to a [`Pigment`] (base colour) and
//! a [`Finish`] (how the surface responds to light). The two lookups are
//! independent: combinators recompute both from the same point each time.

mod checker;
mod finish;
mod rotated;

pub use checker::CheckerTexture;
pub use finish::Finish;
pub use rotated::RotatedTexture;

use std::fmt;

use stingray_math::{Colour, Vector};

/// Base colour of a surface, before lighting.
pub trait Pigment: Send + Sync + fmt::Debug {
    fn colour_at(&self, point: Vector) -> Colour;
}

/// A solid colour is the simplest pigment.
impl Pigment for Colour {
    fn colour_at(&self, _point: Vector) -> Colour {
        *self
    }
}

/// Point-indexed pigment and finish lookup.
pub trait Texture: Send + Sync + fmt::Debug {
    fn pigment_at(&self, point: Vector) -> &dyn Pigment;

    fn finish_at(&self, point: Vector) -> Finish;
}

/// The same pigment and finish everywhere.
#[derive(Debug)]
pub struct PlainTexture {
    pigment: Box<dyn Pigment>,
    finish: Finish,
}

impl PlainTexture {
    pub fn new(pigment: impl Pigment + 'static, finish: Finish) -> Self {
        Self {
            pigment: Box::new(pigment),
            finish,
        }
    }
}

impl Default for PlainTexture {
    /// Matte white.
    fn default() -> Self {
        Self::new(Colour::WHITE, Finish::MATTE)
    }
}

impl Texture for PlainTexture {
    fn pigment_at(&self, _point: Vector) -> &dyn Pigment {
        self.pigment.as_ref()
    }

    fn finish_at(&self, _point: Vector) -> Finish {
        self.finish
    }
}
