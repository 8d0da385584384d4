//! Per-pixel color computation.
//!
//! The rasterizer decides coverage and produces barycentric weights; the
//! shader turns those weights into the final 8-bit color.

use crate::colors::{ChannelMode, Color};
use crate::math::vec3::Vec3;

/// Gouraud shader - interpolates vertex colors using barycentric coordinates,
/// then scales by a light factor.
///
/// Channels are quantized with the configured [`ChannelMode`]; alpha is
/// always 255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GouraudShader {
    /// Vertex colors, channels nominally in [0, 255]
    colors: [Vec3; 3],
    light_factor: f64,
    channel_mode: ChannelMode,
}

impl GouraudShader {
    pub fn new(colors: [Vec3; 3], light_factor: f64, channel_mode: ChannelMode) -> Self {
        Self {
            colors,
            light_factor,
            channel_mode,
        }
    }

    /// Compute the color for a pixel given its barycentric coordinates.
    ///
    /// `lambda` holds the weights of vertices A, B, C and sums to 1 for any
    /// point inside the triangle.
    #[inline]
    pub fn shade(&self, lambda: [f64; 3]) -> Color {
        let [a, b, c] = self.colors;
        let mixed = (a * lambda[0] + b * lambda[1] + c * lambda[2]) * self.light_factor;
        Color::rgb(
            self.channel_mode.quantize(mixed.x),
            self.channel_mode.quantize(mixed.y),
            self.channel_mode.quantize(mixed.z),
        )
    }
}
