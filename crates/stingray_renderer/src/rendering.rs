//! Finished image storage and PNG export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use stingray_math::Colour;

use crate::{Statistics, TraceResult};

const OPAQUE_BLACK: u32 = 0xFF00_0000;

/// A rendered raster of ARGB pixels.
///
/// Pixel `(0, 0)` is the bottom-left corner, matching the viewplane.
#[derive(Debug, Clone)]
pub struct Rendering {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    filled: Vec<bool>,
    statistics: Statistics,
}

impl Rendering {
    /// Create a new rendering filled with opaque black.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            name: name.into(),
            width,
            height,
            pixels: vec![OPAQUE_BLACK; len],
            filled: vec![false; len],
            statistics: Statistics::new(),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Store a sample at `(x, y)`.
    ///
    /// The first sample is stored as is. Later samples are mixed half and
    /// half with what is already there, so each new sample weighs as much as
    /// everything before it combined.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        let index = self.index(x, y);

        let colour = if self.filled[index] {
            Colour::from_argb(self.pixels[index]).scale(0.5) + colour.scale(0.5)
        } else {
            colour
        };

        self.pixels[index] = colour.to_argb();
        self.filled[index] = true;
    }

    /// Get the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Colour {
        Colour::from_argb(self.argb(x, y))
    }

    /// Packed ARGB value at `(x, y)`.
    pub fn argb(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Whether any sample has landed on `(x, y)`.
    pub fn is_filled(&self, x: u32, y: u32) -> bool {
        self.filled[self.index(x, y)]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn set_statistics(&mut self, statistics: Statistics) {
        self.statistics = statistics;
    }

    /// Convert to an RGBA image with the usual top-left origin.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |col, row| {
            let argb = self.argb(col, self.height - 1 - row);
            let [a, r, g, b] = argb.to_be_bytes();
            Rgba([r, g, b, a])
        })
    }

    /// Encode as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: W) -> TraceResult<()> {
        let image = self.to_image();
        PngEncoder::new(writer).write_image(
            image.as_raw(),
            self.width,
            self.height,
            ColorType::Rgba8,
        )?;
        Ok(())
    }

    /// Save as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> TraceResult<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_png(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
