//! Output pixel surface.

use crate::color::{to_rgb8, BLACK};
use crate::Color;
use parking_lot::Mutex;

/// A width x height grid of RGB colors, initialized to black.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Convert to packed 8-bit RGB, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&color| to_rgb8(color)).collect()
    }

    /// Hand the pixels to the `image` crate for encoding.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(to_rgb8(self.get(x, y))))
    }

    /// A writer that can be shared by many threads. Writes are serialized.
    pub fn writer(&mut self) -> FramebufferWriter<'_> {
        FramebufferWriter {
            target: Mutex::new(self),
        }
    }
}

/// Shared, lock-guarded write access to a [`Framebuffer`].
pub struct FramebufferWriter<'a> {
    target: Mutex<&'a mut Framebuffer>,
}

impl FramebufferWriter<'_> {
    pub fn write(&self, x: u32, y: u32, color: Color) {
        self.target.lock().set(x, y, color);
    }
}
