//! Edge function and the brute-force bounding box rasterizer.
//!
//! # Edge Function
//!
//! For a directed edge from A to B and a test point P:
//!
//! ```text
//! E(A, B, P) = (B.x - A.x) * (P.y - A.y) - (B.y - A.y) * (P.x - A.x)
//! ```
//!
//! This is the 2D cross product (B - A) x (P - A). Its sign tells which side
//! of the line A->B the point lies on, and its magnitude is twice the signed
//! area of triangle (A, B, P).
//!
//! # Winding Order
//!
//! `E(A, B, C)` over the triangle's own vertices is the signed area. This
//! crate accepts only negative areas (clockwise in y-down screen space). For
//! such a triangle a point is inside, or on the boundary, when all three edge
//! values are `<= 0`. There is no epsilon and no tie-break rule, so pixels
//! exactly on an edge shared by two triangles are drawn by both.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use super::shader::GouraudShader;
use super::{prepare, Rasterizer};
use crate::colors::ChannelMode;
use crate::error::RasterError;
use crate::math::vec2::Vec2;
use crate::render::surface::Surface;
use crate::triangle::Triangle;

/// Computes the edge function value for point `p` relative to edge `a -> b`.
///
/// Negative on the clockwise side, positive on the counter-clockwise side,
/// zero on the line.
#[inline]
pub fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f64 {
    (b - a).cross(p - a)
}

/// Boundary-inclusive containment test for a clockwise triangle.
#[inline]
pub fn is_inside(edges: [f64; 3]) -> bool {
    edges[0] <= 0.0 && edges[1] <= 0.0 && edges[2] <= 0.0
}

/// Triangle rasterizer that tests every pixel of the bounding box.
///
/// Simple and always correct; it is the reference the seeded
/// [`ScanlineRasterizer`](super::ScanlineRasterizer) is checked against. Thin
/// or diagonal triangles waste most of their tests on empty box area.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeFunctionRasterizer {
    channel_mode: ChannelMode,
}

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel_mode(channel_mode: ChannelMode) -> Self {
        Self { channel_mode }
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle<S: Surface + ?Sized>(
        &self,
        triangle: &Triangle,
        surface: &mut S,
        light_factor: f64,
    ) -> Result<usize, RasterError> {
        let setup = prepare(triangle)?;
        let shader = GouraudShader::new(setup.colors, light_factor, self.channel_mode);
        let bounds = setup.bounds;

        let mut written = 0;
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                if setup.plot(&shader, surface, x, y) {
                    written += 1;
                }
            }
        }

        log::trace!("Edge function pass wrote {} pixels", written);
        Ok(written)
    }
}
