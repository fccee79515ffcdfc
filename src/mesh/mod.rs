//! Triangle mesh buffers.
//!
//! This module turns a [`Geometry`](crate::geometry::Geometry) into the
//! vertex and index buffers a renderer uploads.
//!
//! # Index Width
//!
//! The index buffer uses `u16` when the mesh has at most 65536 vertices and
//! `u32` otherwise ([`IndexWidth::for_vertex_count`]). The [`MeshIndex`] trait
//! lets the triangulator fill either buffer with the same code.
//!
//! # Example
//!
//! ```
//! use tabgeo::geometry::{Geometry, Point, Polygon};
//! use tabgeo::mesh::triangulate;
//!
//! let geometry = Geometry::from_parts(
//!     vec![Point::at(0.0, 0.0, 0.0), Point::at(1.0, 0.0, 0.0), Point::at(0.0, 1.0, 0.0)],
//!     vec![Polygon::triangle(0, 1, 2)],
//! );
//! let mesh = triangulate(&geometry).unwrap();
//! assert_eq!(mesh.indices().iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

mod index;
mod triangulate;
mod vertex;

pub use index::{IndexBuffer, IndexWidth, MeshIndex, MAX_U16_VERTICES};
pub use triangulate::{
    count_triangles, polygon_triangles, quad_split, triangulate, PolygonTriangles, QuadSplit,
    TriangleMesh,
};
pub use vertex::{Vertex, VertexAttribute};
