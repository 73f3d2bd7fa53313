use std::sync::Arc;

use stingray_math::Vector;

use super::{Finish, Pigment, Texture};

/// Alternates between two textures on a 3D grid of cubes.
///
/// Cells are `size` units along each edge. The cells either side of each
/// axis plane differ, so the board continues through the origin instead of
/// mirroring about it.
#[derive(Debug, Clone)]
pub struct CheckerTexture {
    first: Arc<dyn Texture>,
    second: Arc<dyn Texture>,
    size: f64,
}

impl CheckerTexture {
    pub fn new(first: Arc<dyn Texture>, second: Arc<dyn Texture>, size: f64) -> Self {
        Self {
            first,
            second,
            size,
        }
    }

    fn texture_for(&self, point: Vector) -> &dyn Texture {
        let odd = odd_cell(point.x(), self.size)
            ^ odd_cell(point.y(), self.size)
            ^ odd_cell(point.z(), self.size);

        if odd {
            self.second.as_ref()
        } else {
            self.first.as_ref()
        }
    }
}

/// Parity of the cell holding `coord` along one axis.
///
/// The cell index truncates toward zero, so `[-size, 0)` and `[0, size)`
/// share index 0; flipping negative coordinates tells them apart.
fn odd_cell(coord: f64, size: f64) -> bool {
    let odd = (coord / size) as i64 % 2 != 0;
    odd ^ (coord < 0.0)
}

impl Texture for CheckerTexture {
    fn pigment_at(&self, point: Vector) -> &dyn Pigment {
        self.texture_for(point).pigment_at(point)
    }

    fn finish_at(&self, point: Vector) -> Finish {
        self.texture_for(point).finish_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlainTexture;
    use stingray_math::Colour;

    fn board(size: f64) -> CheckerTexture {
        CheckerTexture::new(
            Arc::new(PlainTexture::new(Colour::WHITE, Finish::MATTE)),
            Arc::new(PlainTexture::new(Colour::BLACK, Finish::MIRROR)),
            size,
        )
    }

    fn colour(texture: &CheckerTexture, x: f64, y: f64, z: f64) -> Colour {
        let p = Vector::new(x, y, z);
        texture.pigment_at(p).colour_at(p)
    }

    #[test]
    fn test_alternates_along_x() {
        let t = board(1.0);
        assert_eq!(colour(&t, 0.5, 0.5, 0.5), Colour::WHITE);
        assert_eq!(colour(&t, 1.5, 0.5, 0.5), Colour::BLACK);
        assert_eq!(colour(&t, 2.5, 0.5, 0.5), Colour::WHITE);
    }

    #[test]
    fn test_continues_through_origin() {
        let t = board(1.0);
        assert_eq!(colour(&t, 0.5, 0.5, 0.5), Colour::WHITE);
        assert_eq!(colour(&t, -0.5, 0.5, 0.5), Colour::BLACK);
        assert_eq!(colour(&t, -1.5, 0.5, 0.5), Colour::WHITE);
        assert_eq!(colour(&t, -2.5, 0.5, 0.5), Colour::BLACK);
    }

    #[test]
    fn test_axes_combine() {
        let t = board(2.0);
        // One odd axis -> second, two odd axes -> first, three -> second
        assert_eq!(colour(&t, 3.0, 1.0, 1.0), Colour::BLACK);
        assert_eq!(colour(&t, 3.0, 3.0, 1.0), Colour::WHITE);
        assert_eq!(colour(&t, 3.0, 3.0, 3.0), Colour::BLACK);
        assert_eq!(colour(&t, -1.0, -1.0, 1.0), Colour::WHITE);
    }

    #[test]
    fn test_finish_follows_cell() {
        let t = board(1.0);
        assert_eq!(t.finish_at(Vector::new(0.5, 0.5, 0.5)), Finish::MATTE);
        assert_eq!(t.finish_at(Vector::new(1.5, 0.5, 0.5)), Finish::MIRROR);
    }
}
