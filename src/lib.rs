//! # tabgeo
//!
//! Loader, triangulator and converter for meshes stored as a pair of
//! tab-delimited tables.
//!
//! A geometry folder holds `pnt.txt`, one point per row with columns named
//! `P(0)`, `N(1)`, `Cd(2)`, `uv(0)` and so on, and `pol.txt`, one polygon per
//! row with its point indices in the `vertices` column.
//!
//! ## Features
//!
//! - **Column-mapped loader**: unknown point columns are skipped, missing
//!   attributes default to zero
//! - **Quad-aware triangulation**: each quad is split along the diagonal picked
//!   from its bending
//! - **Index width selection**: 16-bit indices up to 65536 vertices, 32-bit
//!   above
//! - **PGEOMETRY output**: text dump of points and polygons
//!
//! ## Quick Start
//!
//! ```no_run
//! use tabgeo::prelude::*;
//!
//! let geometry = tabgeo::io::load_folder("data/geo").unwrap();
//! println!("Points: {}", geometry.num_points());
//! println!("Polygons: {}", geometry.num_polygons());
//!
//! if let Some(mesh) = triangulate(&geometry) {
//!     println!("Triangles: {} ({:?} indices)", mesh.num_triangles(), mesh.index_width());
//! }
//!
//! tabgeo::io::geo::save(&geometry, "dump.geo").unwrap();
//! ```
//!
//! ## Building Geometry Programmatically
//!
//! ```
//! use tabgeo::prelude::*;
//!
//! let points = vec![
//!     Point::at(0.0, 0.0, 0.0),
//!     Point::at(1.0, 0.0, 0.0),
//!     Point::at(1.0, 1.0, 0.0),
//!     Point::at(0.0, 1.0, 0.0),
//! ];
//! let polygons = vec![Polygon::quad(0, 1, 2, 3)];
//!
//! let geometry = Geometry::from_parts(points, polygons);
//! let mesh = triangulate(&geometry).unwrap();
//! assert_eq!(mesh.num_triangles(), 2);
//! assert_eq!(mesh.indices().len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod geometry;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// ```
/// use tabgeo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GeoError, LoadWarning, Result};
    pub use crate::geometry::{BoundingBox, Geometry, Point, Polygon, MAX_POLY_VERTS};
    pub use crate::mesh::{triangulate, IndexBuffer, IndexWidth, TriangleMesh, Vertex};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
