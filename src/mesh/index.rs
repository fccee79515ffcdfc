//! Index types for triangle index buffers.
//!
//! Buffers are generic over the index integer so a mesh can use 16-bit
//! indices when its vertices fit and 32-bit indices otherwise. The width is
//! chosen once per mesh; a buffer never mixes widths.

use std::fmt::Debug;
use std::hash::Hash;

use bytemuck::Pod;

/// Largest vertex count that still uses 16-bit indices.
pub const MAX_U16_VERTICES: usize = 1 << 16;

/// Trait for integer types stored in an index buffer.
///
/// Implemented for `u16` and `u32`.
pub trait MeshIndex: Copy + Clone + Eq + Ord + Hash + Debug + Pod + Send + Sync + 'static {
    /// The buffer width this type represents.
    const WIDTH: IndexWidth;

    /// Convert a point index to this type.
    ///
    /// Values that do not fit are truncated; callers pick the width from the
    /// vertex count so in-range indices always fit.
    fn from_u32(v: u32) -> Self;

    /// Convert to `u32`.
    fn to_u32(self) -> u32;

    /// Convert to usize.
    #[inline]
    fn to_usize(self) -> usize {
        self.to_u32() as usize
    }
}

impl MeshIndex for u16 {
    const WIDTH: IndexWidth = IndexWidth::U16;

    #[inline]
    fn from_u32(v: u32) -> Self {
        v as u16
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
}

impl MeshIndex for u32 {
    const WIDTH: IndexWidth = IndexWidth::U32;

    #[inline]
    fn from_u32(v: u32) -> Self {
        v
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }
}

/// Width of each triangle-corner reference in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexWidth {
    /// 16-bit unsigned indices.
    U16,
    /// 32-bit unsigned indices.
    U32,
}

impl IndexWidth {
    /// Pick the width for a mesh with `num_vertices` vertices.
    ///
    /// 16-bit iff `num_vertices <= 65536`.
    pub fn for_vertex_count(num_vertices: usize) -> Self {
        if num_vertices <= MAX_U16_VERTICES {
            IndexWidth::U16
        } else {
            IndexWidth::U32
        }
    }

    /// Size of one index in bytes.
    pub fn bytes(self) -> usize {
        match self {
            IndexWidth::U16 => std::mem::size_of::<u16>(),
            IndexWidth::U32 => std::mem::size_of::<u32>(),
        }
    }
}

/// A flat triangle index buffer of a single width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    /// 16-bit indices.
    U16(Vec<u16>),
    /// 32-bit indices.
    U32(Vec<u32>),
}

impl IndexBuffer {
    /// The width of every index in the buffer.
    pub fn width(&self) -> IndexWidth {
        match self {
            IndexBuffer::U16(_) => IndexWidth::U16,
            IndexBuffer::U32(_) => IndexWidth::U32,
        }
    }

    /// Number of indices (three per triangle).
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(v) => v.len(),
            IndexBuffer::U32(v) => v.len(),
        }
    }

    /// Whether the buffer has no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index at position `i`, widened to `u32`.
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            IndexBuffer::U16(v) => v.get(i).map(|&x| x.to_u32()),
            IndexBuffer::U32(v) => v.get(i).copied(),
        }
    }

    /// Iterate over all indices, widened to `u32`.
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            IndexBuffer::U16(v) => Box::new(v.iter().map(|&x| x.to_u32())),
            IndexBuffer::U32(v) => Box::new(v.iter().copied()),
        }
    }

    /// Raw bytes for upload, native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IndexBuffer::U16(v) => bytemuck::cast_slice(v),
            IndexBuffer::U32(v) => bytemuck::cast_slice(v),
        }
    }
}

impl From<Vec<u16>> for IndexBuffer {
    fn from(v: Vec<u16>) -> Self {
        IndexBuffer::U16(v)
    }
}

impl From<Vec<u32>> for IndexBuffer {
    fn from(v: Vec<u32>) -> Self {
        IndexBuffer::U32(v)
    }
}
