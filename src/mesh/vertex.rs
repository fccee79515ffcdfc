//! Packed vertex layout for triangle meshes.

use bytemuck::{Pod, Zeroable};

use crate::geometry::Point;

/// GPU vertex with position, normal and color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position.
    pub position: [f32; 3],
    /// Normal.
    pub normal: [f32; 3],
    /// Color rgb (alpha is not carried).
    pub color: [f32; 3],
}

/// One attribute of [`Vertex`] as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute name.
    pub name: &'static str,
    /// Byte offset inside the vertex.
    pub offset: usize,
    /// Number of `f32` components.
    pub components: usize,
}

impl Vertex {
    /// Distance in bytes between consecutive vertices.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Attribute layout of the vertex buffer.
    pub fn attributes() -> [VertexAttribute; 3] {
        [
            VertexAttribute {
                name: "position",
                offset: 0,
                components: 3,
            },
            VertexAttribute {
                name: "normal",
                offset: std::mem::size_of::<[f32; 3]>(),
                components: 3,
            },
            VertexAttribute {
                name: "color",
                offset: std::mem::size_of::<[f32; 3]>() * 2,
                components: 3,
            },
        ]
    }
}

impl From<&Point> for Vertex {
    fn from(p: &Point) -> Self {
        Self {
            position: [p.position.x, p.position.y, p.position.z],
            normal: [p.normal.x, p.normal.y, p.normal.z],
            color: [p.color[0], p.color[1], p.color[2]],
        }
    }
}
