//! Vector algebra used by the rasterizer.
//!
//! [`matrix::Matrix`] is the general collaborator type that callers build
//! triangles from. [`vec2::Vec2`] and [`vec3::Vec3`] are the fixed-size forms
//! the rasterizer works with once a triangle has been validated.

pub mod matrix;
pub mod vec2;
pub mod vec3;
