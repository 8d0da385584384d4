//! Shared vertex storage and the faces that index into it.

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::math::matrix::Matrix;
use crate::triangle::Triangle;

// A face refers to three positions and three colors by index into the owning
// Mesh. Vertex data is shared, so neighbouring faces reuse the same vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Face {
    pub vertices: [usize; 3],
    pub colors: [usize; 3],
}

impl Face {
    pub fn new(vertices: [usize; 3], colors: [usize; 3]) -> Self {
        Self { vertices, colors }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Matrix>,
    colors: Vec<Matrix>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Matrix>, colors: Vec<Matrix>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            colors,
            faces,
        }
    }

    pub fn vertices(&self) -> &[Matrix] {
        &self.vertices
    }

    pub fn colors(&self) -> &[Matrix] {
        &self.colors
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    /// Replaces face `index`.
    pub fn set_face(&mut self, index: usize, face: Face) -> Result<(), MeshError> {
        let len = self.faces.len();
        let slot = self
            .faces
            .get_mut(index)
            .ok_or(MeshError::FaceOutOfRange { index, len })?;
        *slot = face;
        Ok(())
    }

    pub fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Resolves face `index` into a borrowing triangle.
    ///
    /// Vertex indices must be valid. A color index past the end yields a
    /// missing color, which the rasterizer rejects with a diagnostic.
    pub fn triangle(&self, index: usize) -> Result<Triangle<'_>, MeshError> {
        let face = self.faces.get(index).ok_or(MeshError::FaceOutOfRange {
            index,
            len: self.faces.len(),
        })?;

        let vertex = |vertex: usize| {
            self.vertices
                .get(vertex)
                .ok_or(MeshError::VertexOutOfRange {
                    face: index,
                    vertex,
                    len: self.vertices.len(),
                })
        };
        let [a, b, c] = face.vertices;
        let vertices = [vertex(a)?, vertex(b)?, vertex(c)?];

        let colors = face.colors.map(|c| self.colors.get(c));
        Ok(Triangle::with_optional_colors(vertices, colors))
    }

    /// Iterates over every face, resolved into triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Result<Triangle<'_>, MeshError>> + '_ {
        (0..self.faces.len()).map(move |i| self.triangle(i))
    }
}
