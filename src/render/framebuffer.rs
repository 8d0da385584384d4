//! In-memory frame buffer.
//!
//! Owns an ARGB color buffer with width/height metadata and provides
//! bounds-checked 2D pixel access. Out-of-bounds writes are dropped, which is
//! what lets the rasterizer stay free of screen clipping.

use std::path::Path;

use image::RgbaImage;

use super::surface::Surface;
use crate::colors::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a buffer cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::rgba(0, 0, 0, 0))
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            color_buffer: vec![color.to_argb(); (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.color_buffer[i] = color.to_argb();
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_argb(self.color_buffer[i]))
    }

    /// Raw ARGB pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::from_argb(self.color_buffer[(y * self.width + x) as usize]);
            image::Rgba([c.r, c.g, c.b, c.a])
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
    }
}

impl Surface for FrameBuffer {
    #[inline]
    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel(x, y, color);
    }
}
