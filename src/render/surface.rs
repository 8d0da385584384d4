//! The drawing surface the rasterizer writes into.

use crate::colors::Color;

/// Anything that accepts single-pixel writes.
///
/// The color travels with every write, so a surface never holds a "current
/// draw color" that the rasterizer would have to save and restore. Writes
/// overwrite; surfaces must not blend.
pub trait Surface {
    fn draw_point(&mut self, x: i32, y: i32, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        (**self).draw_point(x, y, color);
    }
}

/// SDL canvases keep a stateful draw color. It is saved before each write and
/// restored after, so callers drawing UI on the same canvas are unaffected.
#[cfg(feature = "sdl")]
impl<T: sdl2::render::RenderTarget> Surface for sdl2::render::Canvas<T> {
    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        let previous = self.draw_color();
        self.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
        if let Err(e) = sdl2::render::Canvas::draw_point(self, sdl2::rect::Point::new(x, y)) {
            log::warn!("Failed to draw point ({}, {}): {}", x, y, e);
        }
        self.set_draw_color(previous);
    }
}
