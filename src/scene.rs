//! Scene files: a canvas, shared vertex data, and faces to rasterize.
//!
//! ```toml
//! width = 64
//! height = 48
//! background = [16, 16, 16]
//! light_factor = 1.0
//! vertices = [[4.0, 4.0], [4.0, 40.0], [56.0, 4.0]]
//! colors = [[255.0, 0.0, 0.0], [0.0, 255.0, 0.0], [0.0, 0.0, 255.0]]
//!
//! [[faces]]
//! vertices = [0, 1, 2]
//! colors = [0, 1, 2]
//!
//! [raster]
//! rasterizer = "scanline"
//! channel_mode = "wrap"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::colors::Color;
use crate::config::RasterConfig;
use crate::error::{RasterError, SceneError};
use crate::math::matrix::Matrix;
use crate::mesh::{Face, Mesh};
use crate::render::{FrameBuffer, Rasterizer, RasterizerDispatcher, Surface};

fn default_light_factor() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background: [u8; 3],
    #[serde(default = "default_light_factor")]
    pub light_factor: f64,
    pub vertices: Vec<[f64; 2]>,
    pub colors: Vec<[f64; 3]>,
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(default)]
    pub raster: RasterConfig,
}

/// Outcome of drawing every face of a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub skipped: usize,
    pub pixels: usize,
}

impl Scene {
    pub fn from_toml_str(source: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(source)?;
        if scene.width == 0 || scene.height == 0 {
            return Err(SceneError::Invalid(format!(
                "canvas must be non-empty, got {}x{}",
                scene.width, scene.height
            )));
        }
        Ok(scene)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_toml_str(&source)?;
        log::info!(
            "Loaded scene {} ({}x{}, {} faces)",
            path.display(),
            scene.width,
            scene.height,
            scene.faces.len()
        );
        Ok(scene)
    }

    pub fn background(&self) -> Color {
        let [r, g, b] = self.background;
        Color::rgb(r, g, b)
    }

    /// Builds the shared-storage mesh described by the scene.
    pub fn mesh(&self) -> Mesh {
        Mesh::new(
            self.vertices.iter().map(|v| Matrix::column(v)).collect(),
            self.colors.iter().map(|c| Matrix::column(c)).collect(),
            self.faces.clone(),
        )
    }

    /// Rasterizes every face into `surface`.
    ///
    /// Faces the rasterizer rejects are logged and counted as skipped. A face
    /// referencing a vertex that does not exist aborts the draw.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<RenderStats, SceneError> {
        let mesh = self.mesh();
        let rasterizer = RasterizerDispatcher::new(&self.raster);
        let mut stats = RenderStats::default();

        for (index, triangle) in mesh.triangles().enumerate() {
            let triangle = triangle?;
            match rasterizer.fill_triangle(&triangle, surface, self.light_factor) {
                Ok(pixels) => {
                    stats.drawn += 1;
                    stats.pixels += pixels;
                }
                Err(e @ (RasterError::CounterClockwise { .. } | RasterError::Degenerate { .. })) => {
                    log::debug!("Face {} skipped: {}", index, e);
                    stats.skipped += 1;
                }
                Err(e) => {
                    log::warn!("Face {} is malformed: {}", index, e);
                    stats.skipped += 1;
                }
            }
        }

        log::debug!(
            "Drew {} faces ({} skipped, {} pixels) with {} rasterizer",
            stats.drawn,
            stats.skipped,
            stats.pixels,
            self.raster.rasterizer
        );
        Ok(stats)
    }

    /// Renders the scene into a new frame buffer cleared to the background.
    pub fn render(&self) -> Result<(FrameBuffer, RenderStats), SceneError> {
        let mut frame = FrameBuffer::filled(self.width, self.height, self.background());
        let stats = self.draw(&mut frame)?;
        Ok((frame, stats))
    }

    /// Renders the scene and writes it to `path` as a PNG.
    pub fn render_png<P: AsRef<Path>>(&self, path: P) -> Result<RenderStats, SceneError> {
        let (frame, stats) = self.render()?;
        frame.save_png(path)?;
        Ok(stats)
    }
}
