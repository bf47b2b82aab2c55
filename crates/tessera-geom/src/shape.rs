//! Shape attribute data and interleaved GPU buffers.
//!
//! Generators return a [`ShapeData`]: one array per vertex attribute plus
//! triangle and line index lists. The interleaved buffer types pick which
//! attributes end up in the vertex buffer:
//!
//! | type | layout per vertex | floats |
//! |------|-------------------|--------|
//! | [`BasicShape`] | position | 3 |
//! | [`TexturedShape`] | position, uv | 5 |
//! | [`DebugShape`] | position, uv, normal (+ line indices) | 8 |
//!
//! Indices are `u16`, matching `gl.UNSIGNED_SHORT` element buffers.
//!
//! # Example
//!
//! ```rust
//! use tessera_geom::{quad, Shape, TexturedShape};
//!
//! let shape = TexturedShape::from(&quad()?);
//! assert_eq!(shape.num_vertices(), 4);
//! assert_eq!(shape.num_triangles(), 2);
//! assert_eq!(shape.vertex_bytes().len(), 4 * 5 * 4);
//! # Ok::<(), tessera_geom::GeomError>(())
//! ```

use crate::{lines_from_triangles, GeomError, GeomResult};
use tessera_math::{Vec2, Vec3};

/// Largest vertex count addressable with `u16` indices.
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Per-vertex attributes and index lists of a generated shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeData {
    /// Positions.
    pub vertices: Vec<Vec3>,
    /// Texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Unit normals.
    pub normals: Vec<Vec3>,
    /// Unit tangents, zero where undefined.
    pub tangents: Vec<Vec3>,
    /// Triangles as vertex index triples, counter-clockwise seen from outside.
    pub triangles: Vec<[u16; 3]>,
    /// Unique edges as vertex index pairs.
    pub lines: Vec<[u16; 2]>,
}

impl ShapeData {
    /// Validates attribute arrays and narrows indices to `u16`.
    ///
    /// Lines are derived from the triangles.
    ///
    /// # Errors
    ///
    /// - [`GeomError::TooManyVertices`] above [`MAX_VERTICES`]
    /// - [`GeomError::AttributeMismatch`] if an attribute array is not one
    ///   entry per vertex
    /// - [`GeomError::IndexOutOfRange`] if a triangle refers past the end
    pub fn new(
        vertices: Vec<Vec3>,
        uvs: Vec<Vec2>,
        normals: Vec<Vec3>,
        tangents: Vec<Vec3>,
        triangles: Vec<[u32; 3]>,
    ) -> GeomResult<Self> {
        let count = vertices.len();
        if count > MAX_VERTICES {
            return Err(GeomError::TooManyVertices { count });
        }
        let attributes = [
            ("uvs", uvs.len()),
            ("normals", normals.len()),
            ("tangents", tangents.len()),
        ];
        for (attribute, len) in attributes {
            if len != count {
                return Err(GeomError::AttributeMismatch {
                    attribute,
                    len,
                    expected: count,
                });
            }
        }
        if let Some(&index) = triangles.iter().flatten().find(|&&i| i as usize >= count) {
            return Err(GeomError::IndexOutOfRange { index, count });
        }

        // Every index is below count <= MAX_VERTICES, so it fits in u16
        let lines = lines_from_triangles(&triangles)
            .into_iter()
            .map(|l| l.map(|i| i as u16))
            .collect();
        let triangles = triangles.into_iter().map(|t| t.map(|i| i as u16)).collect();

        Ok(Self {
            vertices,
            uvs,
            normals,
            tangents,
            triangles,
            lines,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Number of unique edges.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }
}

// ============================================================================
// Interleaved buffers
// ============================================================================

/// An interleaved vertex buffer with a triangle index buffer.
pub trait Shape {
    /// Floats per vertex.
    const VERTEX_SIZE: usize;

    /// Interleaved vertex data.
    fn vertices(&self) -> &[f32];

    /// Flat triangle indices, three per triangle.
    fn triangles(&self) -> &[u16];

    /// Floats per vertex, from an instance.
    #[inline]
    fn vertex_size(&self) -> usize {
        Self::VERTEX_SIZE
    }

    /// Number of vertices.
    #[inline]
    fn num_vertices(&self) -> usize {
        self.vertices().len() / Self::VERTEX_SIZE
    }

    /// Number of triangles.
    #[inline]
    fn num_triangles(&self) -> usize {
        self.triangles().len() / 3
    }

    /// Memory footprint of the buffers in bytes.
    #[inline]
    fn bytes(&self) -> usize {
        self.vertices().len() * 4 + self.triangles().len() * 2
    }

    /// Vertex buffer as raw bytes.
    #[inline]
    fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }

    /// Triangle index buffer as raw bytes.
    #[inline]
    fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.triangles())
    }
}

fn flatten_triangles(data: &ShapeData) -> Vec<u16> {
    data.triangles.as_flattened().to_vec()
}

/// Positions only.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicShape {
    vertices: Vec<f32>,
    triangles: Vec<u16>,
}

impl From<&ShapeData> for BasicShape {
    fn from(data: &ShapeData) -> Self {
        let vertices = data.vertices.iter().flat_map(|v| v.to_array()).collect();
        Self {
            vertices,
            triangles: flatten_triangles(data),
        }
    }
}

impl Shape for BasicShape {
    const VERTEX_SIZE: usize = 3;

    fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    fn triangles(&self) -> &[u16] {
        &self.triangles
    }
}

/// Positions and texture coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedShape {
    vertices: Vec<f32>,
    triangles: Vec<u16>,
}

impl From<&ShapeData> for TexturedShape {
    fn from(data: &ShapeData) -> Self {
        let mut vertices = Vec::with_capacity(data.num_vertices() * Self::VERTEX_SIZE);
        for (p, uv) in data.vertices.iter().zip(&data.uvs) {
            vertices.extend_from_slice(p.as_slice());
            vertices.extend_from_slice(uv.as_slice());
        }
        Self {
            vertices,
            triangles: flatten_triangles(data),
        }
    }
}

impl Shape for TexturedShape {
    const VERTEX_SIZE: usize = 5;

    fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    fn triangles(&self) -> &[u16] {
        &self.triangles
    }
}

/// Positions, texture coordinates and normals, plus an edge list for
/// wireframe drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugShape {
    vertices: Vec<f32>,
    triangles: Vec<u16>,
    lines: Vec<u16>,
}

impl DebugShape {
    /// Flat line indices, two per edge.
    #[inline]
    pub fn lines(&self) -> &[u16] {
        &self.lines
    }

    /// Number of edges.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.lines.len() / 2
    }

    /// Line index buffer as raw bytes.
    #[inline]
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }
}

impl From<&ShapeData> for DebugShape {
    fn from(data: &ShapeData) -> Self {
        let mut vertices = Vec::with_capacity(data.num_vertices() * Self::VERTEX_SIZE);
        for ((p, uv), n) in data.vertices.iter().zip(&data.uvs).zip(&data.normals) {
            vertices.extend_from_slice(p.as_slice());
            vertices.extend_from_slice(uv.as_slice());
            vertices.extend_from_slice(n.as_slice());
        }
        Self {
            vertices,
            triangles: flatten_triangles(data),
            lines: data.lines.as_flattened().to_vec(),
        }
    }
}

impl Shape for DebugShape {
    const VERTEX_SIZE: usize = 8;

    fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    fn triangles(&self) -> &[u16] {
        &self.triangles
    }

    fn bytes(&self) -> usize {
        self.vertices.len() * 4 + self.triangles.len() * 2 + self.lines.len() * 2
    }
}
