/// How a surface responds to light.
///
/// Specular strength is not stored; it is whatever the diffuse term leaves,
/// `1 - diffuse`. Any `reflection > 0` turns the surface into a pure mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    /// Fraction of the pigment visible without any light
    pub ambient: f64,
    /// Lambertian weight
    pub diffuse: f64,
    /// Phong highlight exponent
    pub shininess: i32,
    /// Mirror coefficient
    pub reflection: f64,
}

impl Finish {
    /// Flat, chalky surface with a faint highlight.
    pub const MATTE: Finish = Finish::new(0.1, 0.9, 1, 0.0);

    /// Plastic-like surface with a tight highlight.
    pub const SHINY: Finish = Finish::new(0.1, 0.6, 50, 0.0);

    /// Perfect mirror.
    pub const MIRROR: Finish = Finish::new(0.0, 0.0, 1, 1.0);

    pub const fn new(ambient: f64, diffuse: f64, shininess: i32, reflection: f64) -> Self {
        Self {
            ambient,
            diffuse,
            shininess,
            reflection,
        }
    }

    /// Specular weight, `1 - diffuse`.
    #[inline]
    pub fn specular(&self) -> f64 {
        1.0 - self.diffuse
    }

    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.reflection > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specular_is_derived() {
        let finish = Finish::new(0.2, 0.75, 10, 0.0);
        assert!((finish.specular() - 0.25).abs() < 1e-12);
        assert!(!finish.is_reflective());
    }

    #[test]
    fn test_mirror_is_reflective() {
        assert!(Finish::MIRROR.is_reflective());
        assert!(!Finish::MATTE.is_reflective());
    }
}
