//! Drawing surfaces and triangle rasterization.

pub mod framebuffer;
pub mod rasterizer;
pub mod surface;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    BoundingBox, EdgeFunctionRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType,
    ScanlineRasterizer, TriangleSetup,
};
pub use surface::Surface;

use crate::error::RasterError;
use crate::triangle::Triangle;

/// Rasterizes one triangle with the default seeded scanline rasterizer.
///
/// Returns the number of pixels written. Rejected triangles are logged and
/// leave the surface untouched.
pub fn rasterize<S: Surface + ?Sized>(
    surface: &mut S,
    triangle: &Triangle,
    light_factor: f64,
) -> Result<usize, RasterError> {
    ScanlineRasterizer::new().fill_triangle(triangle, surface, light_factor)
}
