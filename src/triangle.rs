use crate::math::matrix::Matrix;

// A triangle borrows its vertex and color vectors from the caller (usually a
// Mesh, where vertices are shared between faces). Vertex i pairs with color i.
// Points should be listed clockwise in screen space (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<'a> {
    pub vertices: [&'a Matrix; 3],
    pub colors: [Option<&'a Matrix>; 3],
}

impl<'a> Triangle<'a> {
    pub fn new(vertices: [&'a Matrix; 3], colors: [&'a Matrix; 3]) -> Self {
        Self {
            vertices,
            colors: colors.map(Some),
        }
    }

    /// Triangle whose colors may be missing. Missing colors are rejected at
    /// rasterization time.
    pub fn with_optional_colors(vertices: [&'a Matrix; 3], colors: [Option<&'a Matrix>; 3]) -> Self {
        Self { vertices, colors }
    }

    /// The same triangle listed in the opposite order. Colors stay paired with
    /// their positions.
    pub fn reversed(&self) -> Self {
        let [v0, v1, v2] = self.vertices;
        let [c0, c1, c2] = self.colors;
        Self {
            vertices: [v0, v2, v1],
            colors: [c0, c2, c1],
        }
    }
}
