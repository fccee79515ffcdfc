//! Polygon records.

/// Maximum number of vertices a [`Polygon`] stores.
pub const MAX_POLY_VERTS: usize = 4;

/// A face referencing up to [`MAX_POLY_VERTS`] points by index.
///
/// Indices keep the winding order of the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Polygon {
    len: usize,
    indices: [u32; MAX_POLY_VERTS],
}

impl Polygon {
    /// Create an empty polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a triangle.
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self {
            len: 3,
            indices: [a, b, c, 0],
        }
    }

    /// Create a quad.
    pub fn quad(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self {
            len: 4,
            indices: [a, b, c, d],
        }
    }

    /// Create a polygon from a slice of indices, keeping at most
    /// [`MAX_POLY_VERTS`] of them.
    pub fn from_indices(indices: &[u32]) -> Self {
        let mut polygon = Self::new();
        for &index in indices {
            if !polygon.push(index) {
                break;
            }
        }
        polygon
    }

    /// Append a vertex index.
    ///
    /// Returns `false` and leaves the polygon unchanged if it already holds
    /// [`MAX_POLY_VERTS`] indices.
    pub fn push(&mut self, index: u32) -> bool {
        if self.len == MAX_POLY_VERTS {
            return false;
        }
        self.indices[self.len] = index;
        self.len += 1;
        true
    }

    /// Number of stored vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.len
    }

    /// The stored vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices[..self.len]
    }

    /// Whether the polygon is a triangle.
    pub fn is_triangle(&self) -> bool {
        self.len == 3
    }

    /// Whether the polygon is a quad.
    pub fn is_quad(&self) -> bool {
        self.len == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_stops_at_max() {
        let mut p = Polygon::new();
        for i in 0..MAX_POLY_VERTS as u32 {
            assert!(p.push(i));
        }
        assert!(!p.push(99));
        assert_eq!(p.num_vertices(), MAX_POLY_VERTS);
        assert_eq!(p.indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_from_indices_clips() {
        let p = Polygon::from_indices(&[5, 6, 7, 8, 9, 10]);
        assert!(p.is_quad());
        assert_eq!(p.indices(), &[5, 6, 7, 8]);

        let t = Polygon::from_indices(&[1, 2, 3]);
        assert_eq!(t, Polygon::triangle(1, 2, 3));
        assert!(t.is_triangle());
    }

    #[test]
    fn test_empty() {
        let p = Polygon::new();
        assert_eq!(p.num_vertices(), 0);
        assert!(p.indices().is_empty());
    }
}
