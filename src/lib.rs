//! A CPU triangle rasterizer with barycentric color interpolation.
//!
//! Given three screen-space vertex positions and three per-vertex colors, the
//! rasterizer finds every covered pixel with edge-function sign tests and
//! writes it with a color blended from the vertex colors, scaled by a light
//! factor. Rows are searched from a seed pixel carried over from the row
//! above, so a well-behaved triangle costs little more than its own area.
//!
//! # Quick Start
//!
//! ```
//! use trifill::prelude::*;
//!
//! let vertices = [
//!     Matrix::column(&[0.0, 0.0]),
//!     Matrix::column(&[0.0, 4.0]),
//!     Matrix::column(&[4.0, 0.0]),
//! ];
//! let colors = [
//!     Matrix::column(&[255.0, 0.0, 0.0]),
//!     Matrix::column(&[0.0, 255.0, 0.0]),
//!     Matrix::column(&[0.0, 0.0, 255.0]),
//! ];
//! let triangle = Triangle::new(
//!     [&vertices[0], &vertices[1], &vertices[2]],
//!     [&colors[0], &colors[1], &colors[2]],
//! );
//!
//! let mut frame = FrameBuffer::new(8, 8);
//! let written = rasterize(&mut frame, &triangle, 1.0)?;
//! assert_eq!(written, 15);
//! assert_eq!(frame.get_pixel(0, 0), Some(Color::rgb(255, 0, 0)));
//! # Ok::<(), trifill::RasterError>(())
//! ```
//!
//! # Conventions
//!
//! - Screen space has y growing downward; pixels are sampled at integer
//!   coordinates.
//! - Triangles must be listed clockwise (negative signed area). Others are
//!   rejected with a [`RasterError`] and a logged warning, and nothing is
//!   drawn.
//! - Diagnostics go through the [`log`] facade; install a logger (the
//!   `trifill` binary uses `env_logger`) to see them.

pub mod colors;
pub mod config;
pub mod error;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod triangle;

#[cfg(feature = "sdl")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use colors::{ChannelMode, Color};
pub use config::RasterConfig;
pub use error::{MatrixError, MeshError, RasterError, SceneError};
pub use mesh::{Face, Mesh};
pub use render::{rasterize, FrameBuffer, Rasterizer, RasterizerType, Surface};
pub use scene::Scene;
pub use triangle::Triangle;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use trifill::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::math::matrix::Matrix;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::{Face, Mesh};
    pub use crate::triangle::Triangle;

    // Rendering
    pub use crate::colors::{ChannelMode, Color};
    pub use crate::config::RasterConfig;
    pub use crate::render::{
        rasterize, EdgeFunctionRasterizer, FrameBuffer, Rasterizer, RasterizerDispatcher,
        RasterizerType, ScanlineRasterizer, Surface,
    };
}
