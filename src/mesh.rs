//! Decoded mesh model.

use crate::types::Scalar;

/// One decoded mesh, produced from a single RIP file in one pass and
/// read-only afterward.
///
/// The position, normal and texcoord sequences always have the same length,
/// one entry per vertex record. Face indices are 0-based and local to this
/// mesh; the exporter renumbers them when merging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[Scalar; 3]>,
    pub normals: Vec<[Scalar; 3]>,
    pub texcoords: Vec<[Scalar; 2]>,
    /// Triangle faces as vertex index triples.
    pub faces: Vec<[u32; 3]>,
    /// Texture filenames referenced by the capture.
    pub texture_files: Vec<String>,
    /// Shader filenames referenced by the capture.
    pub shader_files: Vec<String>,
}

impl Mesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh holds no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.faces.is_empty()
    }
}
