//! Triangle rasterization algorithms.
//!
//! Both rasterizers share the same setup ([`prepare`]), coverage predicate and
//! shader; they differ only in which pixels they bother to test.
//!
//! Available algorithms:
//! - [`ScanlineRasterizer`]: per-row span search grown from a seed pixel
//! - [`EdgeFunctionRasterizer`]: bounding box iteration with edge function tests

mod edgefunction;
mod scanline;
mod shader;

#[cfg(test)]
mod tests;

pub use edgefunction::{edge_function, is_inside, EdgeFunctionRasterizer};
pub use scanline::ScanlineRasterizer;
pub use shader::GouraudShader;

use serde::{Deserialize, Serialize};

use super::surface::Surface;
use crate::config::RasterConfig;
use crate::error::RasterError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

/// Trait for triangle rasterization algorithms.
///
/// Implementors validate the triangle, decide which pixels it covers, and
/// write each covered pixel exactly once with its interpolated color.
pub trait Rasterizer {
    /// Fill a triangle into the surface.
    ///
    /// Returns the number of pixels written. A rejected triangle (missing or
    /// malformed vectors, counter-clockwise winding, zero area) logs a warning,
    /// writes nothing, and returns the reason.
    ///
    /// # Arguments
    /// * `triangle` - The triangle to rasterize
    /// * `surface` - The surface to draw into
    /// * `light_factor` - Scalar applied to the interpolated color
    fn fill_triangle<S: Surface + ?Sized>(
        &self,
        triangle: &Triangle,
        surface: &mut S,
        light_factor: f64,
    ) -> Result<usize, RasterError>;
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterizerType {
    /// Seeded scanline search. Touches little more than the covered pixels.
    #[default]
    Scanline,
    /// Tests every pixel in the bounding box.
    EdgeFunction,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Scanline => write!(f, "scanline"),
            RasterizerType::EdgeFunction => write!(f, "edge_function"),
        }
    }
}

impl std::str::FromStr for RasterizerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scanline" => Ok(RasterizerType::Scanline),
            "edge_function" | "edge-function" => Ok(RasterizerType::EdgeFunction),
            other => Err(format!(
                "unknown rasterizer '{}' (expected scanline or edge_function)",
                other
            )),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    edge_function: EdgeFunctionRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(config: &RasterConfig) -> Self {
        Self {
            scanline: ScanlineRasterizer::with_channel_mode(config.channel_mode),
            edge_function: EdgeFunctionRasterizer::with_channel_mode(config.channel_mode),
            active: config.rasterizer,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle<S: Surface + ?Sized>(
        &self,
        triangle: &Triangle,
        surface: &mut S,
        light_factor: f64,
    ) -> Result<usize, RasterError> {
        match self.active {
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, surface, light_factor),
            RasterizerType::EdgeFunction => {
                self.edge_function
                    .fill_triangle(triangle, surface, light_factor)
            }
        }
    }
}

/// Inclusive integer pixel rectangle around a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Smallest pixel rectangle containing every integer point of the
    /// triangle. Floor/ceil rather than truncation, so vertices with negative
    /// coordinates still get a conservative box.
    pub fn of(points: &[Vec2; 3]) -> Self {
        let [a, b, c] = points;
        Self {
            min_x: a.x.min(b.x).min(c.x).floor() as i32,
            min_y: a.y.min(b.y).min(c.y).floor() as i32,
            max_x: a.x.max(b.x).max(c.x).ceil() as i32,
            max_y: a.y.max(b.y).max(c.y).ceil() as i32,
        }
    }

    #[inline]
    pub fn contains_x(&self, x: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.contains_x(x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// A triangle that passed validation, unpacked into fixed-size vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSetup {
    pub points: [Vec2; 3],
    pub colors: [Vec3; 3],
    /// Signed area `edge(A, B, C)`. Always strictly negative.
    pub area: f64,
    pub bounds: BoundingBox,
}

impl TriangleSetup {
    /// Validates colors, then vertices, then winding.
    pub fn new(triangle: &Triangle) -> Result<Self, RasterError> {
        let mut colors = [Vec3::ZERO; 3];
        for (index, (slot, color)) in colors.iter_mut().zip(triangle.colors).enumerate() {
            let color = color.ok_or(RasterError::MissingColor { index })?;
            *slot = color.to_vec3().map_err(|_| RasterError::ColorShape {
                index,
                rows: color.rows(),
                cols: color.cols(),
            })?;
        }

        let mut points = [Vec2::ZERO; 3];
        for (index, (slot, vertex)) in points.iter_mut().zip(triangle.vertices).enumerate() {
            *slot = vertex.to_vec2().map_err(|_| RasterError::VertexShape {
                index,
                rows: vertex.rows(),
                cols: vertex.cols(),
            })?;
        }

        let [a, b, c] = points;
        let area = edge_function(a, b, c);
        if area > 0.0 {
            return Err(RasterError::CounterClockwise { area });
        }
        // Zero, NaN and infinite areas cannot be divided by
        if !(area < 0.0 && area.is_finite()) {
            return Err(RasterError::Degenerate { area });
        }

        Ok(Self {
            points,
            colors,
            area,
            bounds: BoundingBox::of(&points),
        })
    }

    /// Index of the vertex with the smallest y. Ties go to the lowest index.
    pub fn top_vertex(&self) -> usize {
        let mut top = 0;
        for i in 1..3 {
            if self.points[i].y < self.points[top].y {
                top = i;
            }
        }
        top
    }

    /// Edge values at `p`, ordered by the vertex opposite each edge:
    /// `[E(B, C, P), E(C, A, P), E(A, B, P)]`.
    #[inline]
    pub fn edges(&self, p: Vec2) -> [f64; 3] {
        let [a, b, c] = self.points;
        [
            edge_function(b, c, p),
            edge_function(c, a, p),
            edge_function(a, b, p),
        ]
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        is_inside(self.edges(p))
    }

    /// Barycentric weights of A, B and C for the given edge values.
    #[inline]
    pub fn barycentric(&self, edges: [f64; 3]) -> [f64; 3] {
        edges.map(|e| e / self.area)
    }

    /// Tests pixel (x, y) and, if covered, shades and writes it.
    ///
    /// Returns whether the pixel was covered.
    #[inline]
    pub(crate) fn plot<S: Surface + ?Sized>(
        &self,
        shader: &GouraudShader,
        surface: &mut S,
        x: i32,
        y: i32,
    ) -> bool {
        let edges = self.edges(Vec2::new(x as f64, y as f64));
        if !is_inside(edges) {
            return false;
        }
        surface.draw_point(x, y, shader.shade(self.barycentric(edges)));
        true
    }
}

/// [`TriangleSetup::new`] that reports rejected triangles to the log.
pub fn prepare(triangle: &Triangle) -> Result<TriangleSetup, RasterError> {
    TriangleSetup::new(triangle).inspect_err(|e| log::warn!("Skipping triangle: {}", e))
}
