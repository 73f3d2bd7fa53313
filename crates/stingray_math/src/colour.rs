use std::fmt;
use std::ops::{Add, Mul};

use glam::Vec3;

/// An RGB colour with channels nominally in `[0, 1]`.
///
/// Construction stores the channels as given; every arithmetic operation
/// clamps its result back into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour(Vec3);

impl Colour {
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);
    pub const RED: Colour = Colour::new(1.0, 0.0, 0.0);
    pub const GREEN: Colour = Colour::new(0.0, 1.0, 0.0);
    pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0);
    pub const YELLOW: Colour = Colour::new(1.0, 1.0, 0.0);
    pub const CYAN: Colour = Colour::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Colour = Colour::new(1.0, 0.0, 1.0);
    pub const GREY: Colour = Colour::new(0.5, 0.5, 0.5);
    pub const DARK_GREY: Colour = Colour::new(0.2, 0.2, 0.2);

    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self(Vec3::new(red, green, blue))
    }

    #[inline]
    pub fn red(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn green(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn blue(&self) -> f32 {
        self.0.z
    }

    /// Unpack the RGB channels of a packed `0xAARRGGBB` pixel. Alpha is ignored.
    pub fn from_argb(argb: u32) -> Self {
        let r = (argb >> 16) & 0xFF;
        let g = (argb >> 8) & 0xFF;
        let b = argb & 0xFF;

        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Pack into an opaque `0xAARRGGBB` pixel.
    ///
    /// Channels are truncated, not rounded: `0.999` becomes `254`.
    pub fn to_argb(&self) -> u32 {
        // float -> u8 casts saturate, so out-of-range channels cannot spill
        let r = (255.0 * self.0.x) as u8 as u32;
        let g = (255.0 * self.0.y) as u8 as u32;
        let b = (255.0 * self.0.z) as u8 as u32;

        0xFF00_0000 | r << 16 | g << 8 | b
    }

    /// Multiply every channel by a double-precision factor.
    #[inline]
    pub fn scale(&self, factor: f64) -> Colour {
        *self * factor as f32
    }

    #[inline]
    fn clamped(v: Vec3) -> Colour {
        Colour(v.clamp(Vec3::ZERO, Vec3::ONE))
    }
}

impl Add for Colour {
    type Output = Colour;

    fn add(self, rhs: Colour) -> Colour {
        Colour::clamped(self.0 + rhs.0)
    }
}

impl Mul for Colour {
    type Output = Colour;

    fn mul(self, rhs: Colour) -> Colour {
        Colour::clamped(self.0 * rhs.0)
    }
}

impl Mul<f32> for Colour {
    type Output = Colour;

    fn mul(self, factor: f32) -> Colour {
        Colour::clamped(self.0 * factor)
    }
}

impl From<[f32; 3]> for Colour {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r:{:.2}, g:{:.2}, b:{:.2})",
            self.0.x, self.0.y, self.0.z
        )
    }
}
