//! The geometry store.
//!
//! A [`Geometry`] owns the points and polygons read from a table pair
//! (`pnt.txt` + `pol.txt`) together with the bounding box of its points.
//!
//! # Lifecycle
//!
//! A geometry is created empty, populated by [`Geometry::load`] and treated as
//! immutable afterwards. [`Geometry::unload`] returns it to the empty state.
//!
//! ```no_run
//! use tabgeo::geometry::Geometry;
//!
//! let mut geo = Geometry::new();
//! geo.load("data/pnt.txt", "data/pol.txt").unwrap();
//! println!("{} points, {} polygons", geo.num_points(), geo.num_polygons());
//! if let Some(bbox) = geo.bbox() {
//!     println!("bbox: {:?} .. {:?}", bbox.min, bbox.max);
//! }
//! geo.unload();
//! assert!(geo.is_empty());
//! ```

mod bbox;
mod point;
mod polygon;

pub use bbox::BoundingBox;
pub use point::{Point, PointColumn};
pub use polygon::{Polygon, MAX_POLY_VERTS};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{GeoError, LoadWarning, Result};
use crate::io::{points, polygons};

/// Points, polygons and the derived bounding box of one mesh.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    points: Vec<Point>,
    polygons: Vec<Polygon>,
    bbox: Option<BoundingBox>,
    warnings: Vec<LoadWarning>,
}

impl Geometry {
    /// Create an empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a geometry from already parsed points and polygons.
    pub fn from_parts(points: Vec<Point>, polygons: Vec<Polygon>) -> Self {
        let bbox = BoundingBox::from_points(points.iter().map(|p| &p.position));
        Self {
            points,
            polygons,
            bbox,
            warnings: Vec::new(),
        }
    }

    /// Load the points table and then the polygons table.
    ///
    /// The polygons table is only read if the points table loaded. If the
    /// polygons table fails, the new points stay loaded and the geometry has
    /// no polygons.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        points_path: P,
        polygons_path: Q,
    ) -> Result<()> {
        let points_path = points_path.as_ref();
        let polygons_path = polygons_path.as_ref();

        if let Err(e) = self.load_points(points_path) {
            log::error!("Can't load points from {}: {}", points_path.display(), e);
            return Err(e);
        }
        // Polygons of a previous load must not index into the new points
        self.polygons.clear();
        self.warnings.clear();
        if let Err(e) = self.load_polygons(polygons_path) {
            log::error!("Can't load polygons from {}: {}", polygons_path.display(), e);
            return Err(e);
        }

        log::info!(
            "Loaded {} points, {} polygons",
            self.num_points(),
            self.num_polygons()
        );
        Ok(())
    }

    /// Replace the points with the contents of a points table.
    pub fn load_points<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GeoError::file_not_found(path, e))?;
        self.points.clear();
        self.bbox = None;

        self.points = points::read_points(BufReader::new(file))?;
        self.bbox = BoundingBox::from_points(self.points.iter().map(|p| &p.position));
        log::debug!("Read {} points from {}", self.points.len(), path.display());
        Ok(())
    }

    /// Replace the polygons with the contents of a polygons table.
    ///
    /// Once the file is open the old polygons and warnings are dropped, even
    /// if the table then fails to parse.
    pub fn load_polygons<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GeoError::file_not_found(path, e))?;
        self.polygons.clear();
        self.warnings.clear();

        let table = polygons::read_polygons(BufReader::new(file))?;
        self.polygons = table.polygons;
        self.warnings = table.warnings;
        log::debug!(
            "Read {} polygons from {}",
            self.polygons.len(),
            path.display()
        );
        Ok(())
    }

    /// Release all points, polygons and warnings.
    pub fn unload(&mut self) {
        self.points = Vec::new();
        self.polygons = Vec::new();
        self.warnings = Vec::new();
        self.bbox = None;
    }

    /// Whether the geometry holds neither points nor polygons.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.polygons.is_empty()
    }

    /// Number of points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of polygons.
    #[inline]
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Get a point by index.
    #[inline]
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Get a polygon by index.
    #[inline]
    pub fn polygon(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// All points in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// All polygons in table order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Bounding box of all points, `None` if there are no points.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// Warnings collected while reading the polygons table.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }
}
