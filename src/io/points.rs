//! Points table reader.
//!
//! The first row names the columns (`P(0)`, `N(1)`, `Cd(3)`, `uv(0)`, ...).
//! Every following row holds one point as whitespace-separated numbers.

use std::io::BufRead;

use crate::error::Result;
use crate::geometry::{Point, PointColumn};

/// Read a points table.
///
/// Unknown columns are skipped, missing attributes stay zero and a row stops
/// at its first non-numeric token. Every data row is one point, so a blank
/// row yields a zeroed point and later rows keep their index.
///
/// # Example
///
/// ```
/// use tabgeo::io::points::read_points;
///
/// let table = "P(0)\tP(1)\tP(2)\tCd(0)\n1.0\t2.0\t3.0\t0.5\n";
/// let points = read_points(table.as_bytes()).unwrap();
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].position.y, 2.0);
/// assert_eq!(points[0].color[0], 0.5);
/// ```
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut lines = reader.lines();

    let columns = match lines.next() {
        Some(header) => parse_header(&header?),
        None => return Ok(Vec::new()),
    };

    let mut points = Vec::new();
    for line in lines {
        points.push(parse_row(&columns, &line?));
    }

    Ok(points)
}

/// Map each header token to the point field it fills.
pub fn parse_header(header: &str) -> Vec<PointColumn> {
    header
        .split_whitespace()
        .map(|name| {
            let column = PointColumn::from_header(name);
            if !column.is_mapped() {
                log::debug!("Ignoring points column {}", name);
            }
            column
        })
        .collect()
}

fn parse_row(columns: &[PointColumn], row: &str) -> Point {
    let mut point = Point::default();
    for (&column, token) in columns.iter().zip(row.split_whitespace()) {
        let Ok(value) = token.parse::<f32>() else {
            break;
        };
        point.set(column, value);
    }
    point
}
