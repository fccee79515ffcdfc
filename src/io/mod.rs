//! Table I/O.
//!
//! This module reads the two-table mesh description and writes geometry back
//! out as text.
//!
//! # Files
//!
//! | File | Contents | Read | Write |
//! |------|----------|------|-------|
//! | `pnt.txt` | One point per row, columns named in the header | ✓ | ✗ |
//! | `pol.txt` | One polygon per row, indices in the `vertices` column | ✓ | ✗ |
//! | `*.geo` | `PGEOMETRY V5` text | ✗ | ✓ |
//!
//! # Usage
//!
//! ```no_run
//! use tabgeo::io;
//!
//! // A folder holding pnt.txt and pol.txt
//! let geometry = io::load_folder("data/geo").unwrap();
//!
//! // Or an explicit pair of tables
//! let geometry = io::load("data/geo/pnt.txt", "data/geo/pol.txt").unwrap();
//!
//! io::geo::save(&geometry, "dump.geo").unwrap();
//! ```

pub mod geo;
pub mod points;
pub mod polygons;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::geometry::Geometry;

/// Default file name of the points table inside a geometry folder.
pub const POINTS_FILE_NAME: &str = "pnt.txt";

/// Default file name of the polygons table inside a geometry folder.
pub const POLYGONS_FILE_NAME: &str = "pol.txt";

/// Options for locating the tables of a geometry folder.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File name of the points table.
    pub points_file: String,

    /// File name of the polygons table.
    pub polygons_file: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadOptions {
    /// Options using `pnt.txt` and `pol.txt`.
    pub fn new() -> Self {
        Self {
            points_file: POINTS_FILE_NAME.to_string(),
            polygons_file: POLYGONS_FILE_NAME.to_string(),
        }
    }

    /// Set the points table file name.
    pub fn with_points_file<S: Into<String>>(mut self, name: S) -> Self {
        self.points_file = name.into();
        self
    }

    /// Set the polygons table file name.
    pub fn with_polygons_file<S: Into<String>>(mut self, name: S) -> Self {
        self.polygons_file = name.into();
        self
    }

    /// Paths of the points and polygons tables inside `folder`.
    pub fn table_paths<P: AsRef<Path>>(&self, folder: P) -> (PathBuf, PathBuf) {
        let folder = folder.as_ref();
        (
            folder.join(&self.points_file),
            folder.join(&self.polygons_file),
        )
    }
}

/// Load a geometry from a points table and a polygons table.
///
/// # Example
///
/// ```no_run
/// use tabgeo::io::load;
///
/// let geometry = load("pnt.txt", "pol.txt").unwrap();
/// ```
pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(points_path: P, polygons_path: Q) -> Result<Geometry> {
    let mut geometry = Geometry::new();
    geometry.load(points_path, polygons_path)?;
    Ok(geometry)
}

/// Load `pnt.txt` and `pol.txt` from `folder`.
pub fn load_folder<P: AsRef<Path>>(folder: P) -> Result<Geometry> {
    load_folder_with(folder, &LoadOptions::new())
}

/// Load a geometry folder using custom table file names.
pub fn load_folder_with<P: AsRef<Path>>(folder: P, options: &LoadOptions) -> Result<Geometry> {
    let (points_path, polygons_path) = options.table_paths(folder);
    load(points_path, polygons_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GeoError, LoadWarning};
    use nalgebra::Point3;
    use std::fs;

    const POINTS: &str = "P(0)\tP(1)\tP(2)\tN(0)\tN(1)\tN(2)\n\
                          0\t0\t0\t0\t0\t1\n\
                          1\t0\t0\t0\t0\t1\n\
                          1\t1\t0\t0\t0\t1\n\
                          0\t1\t0\t0\t0\t1\n\
                          2\t0.5\t0\t0\t0\t1\n";

    const POLYGONS: &str = "index\tvertices\n\
                            0\t0 1 2 3\n\
                            1\t1 4 2\n";

    fn write_tables(dir: &Path, points: &str, polygons: &str) {
        fs::write(dir.join(POINTS_FILE_NAME), points).unwrap();
        fs::write(dir.join(POLYGONS_FILE_NAME), polygons).unwrap();
    }

    #[test]
    fn test_load_folder() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), POINTS, POLYGONS);

        let geometry = load_folder(dir.path()).unwrap();
        assert_eq!(geometry.num_points(), 5);
        assert_eq!(geometry.num_polygons(), 2);
        assert!(geometry.warnings().is_empty());

        let bbox = geometry.bbox().unwrap();
        assert_eq!(bbox.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bbox.max, Point3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_load_custom_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("points.tsv"), POINTS).unwrap();
        fs::write(dir.path().join("polys.tsv"), POLYGONS).unwrap();

        let options = LoadOptions::new()
            .with_points_file("points.tsv")
            .with_polygons_file("polys.tsv");
        let geometry = load_folder_with(dir.path(), &options).unwrap();
        assert_eq!(geometry.num_points(), 5);

        // Default names are not present in this folder
        assert!(matches!(
            load_folder(dir.path()),
            Err(GeoError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_polygons_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(POINTS_FILE_NAME), POINTS).unwrap();

        let (points_path, polygons_path) = LoadOptions::new().table_paths(dir.path());
        let mut geometry = Geometry::new();
        let err = geometry.load(&points_path, &polygons_path).unwrap_err();
        match err {
            GeoError::FileNotFound { path, .. } => assert_eq!(path, polygons_path),
            other => panic!("unexpected error: {:?}", other),
        }

        // Points survive a polygons failure
        assert_eq!(geometry.num_points(), 5);
        assert_eq!(geometry.num_polygons(), 0);
    }

    #[test]
    fn test_missing_vertices_column() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), POINTS, "index\tclose\n0\t1\n");

        let err = load_folder(dir.path()).unwrap_err();
        assert!(matches!(err, GeoError::MissingVerticesColumn));
    }

    #[test]
    fn test_overflow_warning_kept_on_geometry() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), POINTS, "vertices\n0 1 2 3 4\n");

        let geometry = load_folder(dir.path()).unwrap();
        assert_eq!(geometry.polygon(0).unwrap().indices(), &[0, 1, 2, 3]);
        assert_eq!(
            geometry.warnings(),
            &[LoadWarning::PolygonVertexOverflow { polygon: 0, line: 2 }]
        );
    }

    #[test]
    fn test_reload_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), POINTS, POLYGONS);
        let (points_path, polygons_path) = LoadOptions::new().table_paths(dir.path());

        let mut geometry = Geometry::new();
        geometry.load(&points_path, &polygons_path).unwrap();
        geometry.load(&points_path, &polygons_path).unwrap();
        assert_eq!(geometry.num_points(), 5);
        assert_eq!(geometry.num_polygons(), 2);

        geometry.unload();
        assert!(geometry.is_empty());
    }
}
