//! Polygons table reader.
//!
//! The header names the columns; the one called `vertices` holds the point
//! indices of each polygon as a whitespace-separated list. Data rows are
//! split on tabs to reach that cell.

use std::io::BufRead;

use crate::error::{GeoError, LoadWarning, Result};
use crate::geometry::Polygon;

/// Header name of the column holding polygon vertex indices.
pub const VERTICES_COLUMN: &str = "vertices";

/// Polygons read from a table, with the warnings raised on the way.
#[derive(Debug, Clone, Default)]
pub struct PolygonTable {
    /// Polygons in row order.
    pub polygons: Vec<Polygon>,
    /// Non-fatal problems, in row order.
    pub warnings: Vec<LoadWarning>,
}

/// Read a polygons table.
///
/// Fails with [`GeoError::MissingVerticesColumn`] if the header has no
/// `vertices` column. Polygons with more than
/// [`MAX_POLY_VERTS`](crate::geometry::MAX_POLY_VERTS) indices are clipped to
/// a quad and reported as [`LoadWarning::PolygonVertexOverflow`].
///
/// # Example
///
/// ```
/// use tabgeo::io::polygons::read_polygons;
///
/// let table = "index\tvertices\n0\t0 1 2\n1\t2 1 3 4\n";
/// let table = read_polygons(table.as_bytes()).unwrap();
/// assert_eq!(table.polygons.len(), 2);
/// assert_eq!(table.polygons[1].indices(), &[2, 1, 3, 4]);
/// assert!(table.warnings.is_empty());
/// ```
pub fn read_polygons<R: BufRead>(reader: R) -> Result<PolygonTable> {
    let mut lines = reader.lines().enumerate();

    let column = match lines.next() {
        Some((_, header)) => {
            find_vertices_column(&header?).ok_or(GeoError::MissingVerticesColumn)?
        }
        None => return Err(GeoError::MissingVerticesColumn),
    };

    let mut table = PolygonTable::default();
    for (row, line) in lines {
        let line = line?;
        let cell = line.split('\t').nth(column).unwrap_or("");
        let (polygon, clipped) = parse_vertices(cell);
        if clipped {
            let warning = LoadWarning::PolygonVertexOverflow {
                polygon: table.polygons.len(),
                line: row + 1,
            };
            log::warn!("Warning: {}", warning);
            table.warnings.push(warning);
        }
        table.polygons.push(polygon);
    }

    Ok(table)
}

/// Position of the `vertices` column among the header's whitespace tokens.
pub fn find_vertices_column(header: &str) -> Option<usize> {
    header
        .split_whitespace()
        .position(|name| name == VERTICES_COLUMN)
}

/// Parse a vertices cell. Returns the polygon and whether it was clipped.
fn parse_vertices(cell: &str) -> (Polygon, bool) {
    let mut polygon = Polygon::new();
    for token in cell.split_whitespace() {
        let Ok(index) = token.parse::<u32>() else {
            break;
        };
        if !polygon.push(index) {
            return (polygon, true);
        }
    }
    (polygon, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MAX_POLY_VERTS;

    #[test]
    fn test_vertices_column_lookup() {
        assert_eq!(find_vertices_column("vertices"), Some(0));
        assert_eq!(find_vertices_column("index\tclose\tvertices"), Some(2));
        assert_eq!(find_vertices_column("index close"), None);
        assert_eq!(find_vertices_column("Vertices"), None);
    }

    #[test]
    fn test_triangles_and_quads() {
        let table = "index\tclose\tvertices\n\
                     0\t1\t0 1 2\n\
                     1\t1\t0 2 3 4\n";
        let table = read_polygons(table.as_bytes()).unwrap();

        assert_eq!(table.polygons.len(), 2);
        assert_eq!(table.polygons[0], Polygon::triangle(0, 1, 2));
        assert_eq!(table.polygons[1], Polygon::quad(0, 2, 3, 4));
        assert!(table.warnings.is_empty());
    }

    #[test]
    fn test_missing_vertices_column() {
        let err = read_polygons("index\tclose\n0\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GeoError::MissingVerticesColumn));

        let err = read_polygons("".as_bytes()).unwrap_err();
        assert!(matches!(err, GeoError::MissingVerticesColumn));
    }

    #[test]
    fn test_five_vertices_clipped_to_quad() {
        let table = "vertices\n0 1 2 3 4\n";
        let table = read_polygons(table.as_bytes()).unwrap();

        // The fifth index raises the warning and is not stored
        assert_eq!(table.polygons.len(), 1);
        assert_eq!(table.polygons[0].num_vertices(), MAX_POLY_VERTS);
        assert_eq!(table.polygons[0].indices(), &[0, 1, 2, 3]);
        assert_eq!(
            table.warnings,
            vec![LoadWarning::PolygonVertexOverflow { polygon: 0, line: 2 }]
        );
    }

    #[test]
    fn test_exactly_four_vertices_no_warning() {
        let table = read_polygons("vertices\n7 8 9 10\n".as_bytes()).unwrap();
        assert!(table.warnings.is_empty());
        assert_eq!(table.polygons[0].indices(), &[7, 8, 9, 10]);
    }

    #[test]
    fn test_overflow_reports_each_row() {
        let table = "vertices\n0 1 2\n0 1 2 3 4 5\n3 4 5\n6 7 8 9 10\n";
        let table = read_polygons(table.as_bytes()).unwrap();

        assert_eq!(table.polygons.len(), 4);
        assert_eq!(
            table.warnings,
            vec![
                LoadWarning::PolygonVertexOverflow { polygon: 1, line: 3 },
                LoadWarning::PolygonVertexOverflow { polygon: 3, line: 5 },
            ]
        );
    }

    #[test]
    fn test_short_row_gives_empty_polygon() {
        let table = "index\tvertices\n0\n1\t0 1 2\n";
        let table = read_polygons(table.as_bytes()).unwrap();
        assert_eq!(table.polygons.len(), 2);
        assert_eq!(table.polygons[0].num_vertices(), 0);
        assert_eq!(table.polygons[1].indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_blank_row_gives_empty_polygon() {
        let table = "index\tvertices\n0\t0 1 2\n\n2\t2 3 4 5\n";
        let table = read_polygons(table.as_bytes()).unwrap();
        assert_eq!(table.polygons.len(), 3);
        assert_eq!(table.polygons[1].num_vertices(), 0);
        assert_eq!(table.polygons[2], Polygon::quad(2, 3, 4, 5));
    }

    #[test]
    fn test_cell_stops_at_non_integer() {
        let table = read_polygons("vertices\n0 1 x 2\n".as_bytes()).unwrap();
        assert_eq!(table.polygons[0].indices(), &[0, 1]);
    }
}
