//! Polygon triangulation into an index buffer.
//!
//! Triangles pass through unchanged. Quads are split along one of their two
//! diagonals; the choice depends on how the quad bends:
//!
//! ```text
//! e0 = v0 - v1   e1 = v1 - v2   e2 = v2 - v3   e3 = v3 - v0
//! (e1 x e2) . (e3 x e0) > 0   =>  split along v1-v3: (v0 v1 v3) (v1 v2 v3)
//! otherwise                   =>  split along v0-v2: (v0 v1 v2) (v0 v2 v3)
//! ```
//!
//! The rule is a heuristic for keeping the two triangles of a non-planar quad
//! close to the quad's shape. Polygons with any other vertex count produce no
//! triangles.

use nalgebra::Point3;

use super::index::{IndexBuffer, IndexWidth, MeshIndex};
use super::vertex::Vertex;
use crate::geometry::{Geometry, Polygon};

/// Diagonal chosen to split a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadSplit {
    /// Split along v0-v2: triangles (v0 v1 v2) and (v0 v2 v3).
    Diagonal02,
    /// Split along v1-v3: triangles (v0 v1 v3) and (v1 v2 v3).
    Diagonal13,
}

impl QuadSplit {
    /// Quad corner positions (0..4) of the two triangles.
    pub fn corners(self) -> [usize; 6] {
        match self {
            QuadSplit::Diagonal02 => [0, 1, 2, 0, 2, 3],
            QuadSplit::Diagonal13 => [0, 1, 3, 1, 2, 3],
        }
    }
}

/// Choose the diagonal for a quad with corners `v` in winding order.
pub fn quad_split(v: &[Point3<f32>; 4]) -> QuadSplit {
    let e0 = v[0] - v[1];
    let e1 = v[1] - v[2];
    let e2 = v[2] - v[3];
    let e3 = v[3] - v[0];

    if e1.cross(&e2).dot(&e3.cross(&e0)) > 0.0 {
        QuadSplit::Diagonal13
    } else {
        QuadSplit::Diagonal02
    }
}

/// Up to two triangles produced from one polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolygonTriangles {
    corners: [u32; 6],
    count: usize,
}

impl PolygonTriangles {
    /// Number of triangles (0, 1 or 2).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Triangle corner point indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.corners[..self.count * 3]
    }
}

/// Triangulate a single polygon of `geometry`.
///
/// Corner positions of indices outside the geometry are read as the origin;
/// the indices themselves are emitted unchanged.
pub fn polygon_triangles(geometry: &Geometry, polygon: &Polygon) -> PolygonTriangles {
    let indices = polygon.indices();
    match indices.len() {
        3 => PolygonTriangles {
            corners: [indices[0], indices[1], indices[2], 0, 0, 0],
            count: 1,
        },
        4 => {
            let positions = [0, 1, 2, 3].map(|i| point_position(geometry, indices[i]));
            let corners = quad_split(&positions).corners().map(|c| indices[c]);
            PolygonTriangles { corners, count: 2 }
        }
        _ => PolygonTriangles::default(),
    }
}

fn point_position(geometry: &Geometry, index: u32) -> Point3<f32> {
    geometry
        .point(index.to_usize())
        .map(|p| p.position)
        .unwrap_or_else(Point3::origin)
}

/// Number of triangles `geometry` triangulates into.
pub fn count_triangles(geometry: &Geometry) -> usize {
    geometry
        .polygons()
        .iter()
        .map(|p| match p.num_vertices() {
            3 => 1,
            4 => 2,
            _ => 0,
        })
        .sum()
}

/// Triangle mesh buffers derived from a [`Geometry`].
///
/// Holds one [`Vertex`] per point and a flat index buffer whose width is
/// chosen from the vertex count.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    vertices: Vec<Vertex>,
    indices: IndexBuffer,
    num_triangles: usize,
}

impl TriangleMesh {
    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.num_triangles
    }

    /// Width of the index buffer.
    pub fn index_width(&self) -> IndexWidth {
        self.indices.width()
    }

    /// Whether indices are 16-bit.
    pub fn is_index16(&self) -> bool {
        self.index_width() == IndexWidth::U16
    }

    /// Vertex buffer, one entry per point in point order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw vertex buffer bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer, three indices per triangle.
    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Corner indices of triangle `i`.
    pub fn triangle(&self, i: usize) -> Option<[u32; 3]> {
        if i >= self.num_triangles {
            return None;
        }
        let base = i * 3;
        Some([
            self.indices.get(base)?,
            self.indices.get(base + 1)?,
            self.indices.get(base + 2)?,
        ])
    }

    /// Iterate over the corner indices of all triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.num_triangles).filter_map(move |i| self.triangle(i))
    }
}

/// Triangulate every polygon of `geometry`.
///
/// Returns `None` if the geometry has no points, no polygons, or no polygon
/// yields a triangle.
///
/// # Example
///
/// ```
/// use tabgeo::geometry::{Geometry, Point, Polygon};
/// use tabgeo::mesh::{triangulate, IndexWidth};
///
/// let geometry = Geometry::from_parts(
///     vec![
///         Point::at(0.0, 0.0, 0.0),
///         Point::at(1.0, 0.0, 0.0),
///         Point::at(1.0, 1.0, 0.0),
///         Point::at(0.0, 1.0, 0.0),
///     ],
///     vec![Polygon::quad(0, 1, 2, 3)],
/// );
///
/// let mesh = triangulate(&geometry).unwrap();
/// assert_eq!(mesh.num_triangles(), 2);
/// assert_eq!(mesh.index_width(), IndexWidth::U16);
/// ```
pub fn triangulate(geometry: &Geometry) -> Option<TriangleMesh> {
    if geometry.num_points() == 0 || geometry.num_polygons() == 0 {
        return None;
    }

    let num_triangles = count_triangles(geometry);
    if num_triangles == 0 {
        return None;
    }

    let indices = match IndexWidth::for_vertex_count(geometry.num_points()) {
        IndexWidth::U16 => IndexBuffer::U16(collect_indices(geometry, num_triangles)),
        IndexWidth::U32 => IndexBuffer::U32(collect_indices(geometry, num_triangles)),
    };
    let vertices = geometry.points().iter().map(Vertex::from).collect();

    log::debug!(
        "Triangulated {} polygons into {} triangles ({:?} indices)",
        geometry.num_polygons(),
        num_triangles,
        indices.width()
    );

    Some(TriangleMesh {
        vertices,
        indices,
        num_triangles,
    })
}

fn collect_indices<I: MeshIndex>(geometry: &Geometry, num_triangles: usize) -> Vec<I> {
    let mut indices = Vec::with_capacity(num_triangles * 3);
    for polygon in geometry.polygons() {
        let triangles = polygon_triangles(geometry, polygon);
        indices.extend(triangles.indices().iter().map(|&i| I::from_u32(i)));
    }
    indices
}
