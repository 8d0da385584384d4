//! Error types for every fallible layer of the crate.
//!
//! Rasterization never panics on bad input: malformed vectors, wrong winding
//! and zero-area triangles come back as [`RasterError`] and nothing is drawn.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`Matrix`](crate::math::matrix::Matrix) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("index ({row},{col}) out of bounds in {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("expected a {expected} matrix, got {rows}x{cols}")]
    Shape {
        expected: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("expected {expected} values, got {got}")]
    ValueCount { expected: usize, got: usize },

    #[error("invalid operand sizes for {op}: {left_rows}x{left_cols} and {right_rows}x{right_cols}")]
    Mismatch {
        op: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
}

/// Reasons a triangle is rejected before any pixel is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    #[error("vertex {index} has no color")]
    MissingColor { index: usize },

    #[error("color {index} must be 3x1, got {rows}x{cols}")]
    ColorShape {
        index: usize,
        rows: usize,
        cols: usize,
    },

    #[error("vertex {index} must be a column vector with at least 2 rows, got {rows}x{cols}")]
    VertexShape {
        index: usize,
        rows: usize,
        cols: usize,
    },

    #[error("triangle has counter-clockwise winding (signed area {area})")]
    CounterClockwise { area: f64 },

    #[error("triangle is degenerate (signed area {area})")]
    Degenerate { area: f64 },
}

/// Errors raised while resolving mesh faces into triangles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("face {index} out of range ({len} faces)")]
    FaceOutOfRange { index: usize, len: usize },

    #[error("face {face} references vertex {vertex}, mesh has {len}")]
    VertexOutOfRange { face: usize, vertex: usize, len: usize },
}

/// Errors from loading and rendering scene files.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scene: {0}")]
    Invalid(String),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
