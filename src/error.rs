//! Error types for tabgeo.
//!
//! This module defines the fatal load/save errors and the non-fatal warnings
//! collected while reading the point and polygon tables.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while loading or saving geometry.
#[derive(Error, Debug)]
pub enum GeoError {
    /// A table file could not be opened.
    #[error("can't open {path}: {source}")]
    FileNotFound {
        /// The file path.
        path: PathBuf,
        /// The underlying open error.
        #[source]
        source: std::io::Error,
    },

    /// The polygons table header has no `vertices` column.
    #[error("polygons table has no `vertices` column")]
    MissingVerticesColumn,

    /// Read or write error after a file was opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeoError {
    /// Create a [`GeoError::FileNotFound`] for `path`.
    pub fn file_not_found<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        GeoError::FileNotFound {
            path: path.into(),
            source,
        }
    }
}

/// Non-fatal conditions reported while loading.
///
/// Warnings are logged as they happen and kept on the
/// [`Geometry`](crate::geometry::Geometry) for later inspection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadWarning {
    /// A polygon listed more than [`MAX_POLY_VERTS`](crate::geometry::MAX_POLY_VERTS)
    /// vertices and was clipped to a quad.
    #[error("polygon #{line} is an n-gon, it was clipped to a quad")]
    PolygonVertexOverflow {
        /// Index of the clipped polygon.
        polygon: usize,
        /// 1-based line number in the polygons table (header is line 1).
        line: usize,
    },
}
