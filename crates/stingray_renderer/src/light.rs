use stingray_math::{Colour, Vector};

/// A point light with no falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vector,
    colour: Colour,
}

impl Light {
    pub fn new(position: Vector, colour: Colour) -> Self {
        Self { position, colour }
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn colour(&self) -> Colour {
        self.colour
    }
}
