//! Classic `PGEOMETRY V5` text output.
//!
//! Points are written with their normal, uv and color attributes; polygons
//! are written as a single `Poly` run with their indices reversed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::geometry::Geometry;

/// Write `geometry` as `PGEOMETRY V5` text.
///
/// # Example
///
/// ```
/// use tabgeo::geometry::{Geometry, Point, Polygon};
/// use tabgeo::io::geo;
///
/// let geometry = Geometry::from_parts(
///     vec![Point::at(0.0, 0.0, 0.0), Point::at(1.0, 0.0, 0.0), Point::at(0.0, 1.0, 0.0)],
///     vec![Polygon::triangle(0, 1, 2)],
/// );
/// let mut out = Vec::new();
/// geo::write(&geometry, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("PGEOMETRY V5\nNPoints 3 NPrims 1\n"));
/// assert!(text.contains(" 3 < 2 1 0\n"));
/// ```
pub fn write<W: Write>(geometry: &Geometry, mut writer: W) -> Result<()> {
    writeln!(writer, "PGEOMETRY V5")?;
    writeln!(
        writer,
        "NPoints {} NPrims {}",
        geometry.num_points(),
        geometry.num_polygons()
    )?;
    writeln!(writer, "NPointGroups 0 NPrimGroups 0")?;
    writeln!(writer, "NPointAttrib 3 NVertexAttrib 0 NPrimAttrib 0 NAttrib 0")?;
    writeln!(writer, "PointAttrib")?;
    writeln!(writer, "N 3 vector 0 0 0")?;
    writeln!(writer, "uv 3 float 0 0 0")?;
    writeln!(writer, "Cd 3 float 1 1 1")?;

    for p in geometry.points() {
        writeln!(
            writer,
            "{} {} {} 1 ({} {} {}  {} {} 1  {} {} {})",
            fmt_g(p.position.x),
            fmt_g(p.position.y),
            fmt_g(p.position.z),
            fmt_g(p.normal.x),
            fmt_g(p.normal.y),
            fmt_g(p.normal.z),
            fmt_g(p.uv[0]),
            fmt_g(p.uv[1]),
            fmt_g(p.color[0]),
            fmt_g(p.color[1]),
            fmt_g(p.color[2]),
        )?;
    }

    writeln!(writer, "Run {} Poly", geometry.num_polygons())?;
    for polygon in geometry.polygons() {
        write!(writer, " {} <", polygon.num_vertices())?;
        for index in polygon.indices().iter().rev() {
            write!(writer, " {}", index)?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "beginExtra")?;
    writeln!(writer, "endExtra")?;
    Ok(())
}

/// Save `geometry` to a `PGEOMETRY V5` text file.
pub fn save<P: AsRef<Path>>(geometry: &Geometry, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write(geometry, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Significant digits of the default stream float format.
const PRECISION: i32 = 6;

/// Format a float like `printf("%g")`: six significant digits, trailing
/// zeros removed, scientific notation for very small or large exponents.
pub(crate) fn fmt_g(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let s = if value < 0.0 { "-inf" } else { "inf" };
        return s.to_string();
    }
    if value == 0.0 {
        let s = if value.is_sign_negative() { "-0" } else { "0" };
        return s.to_string();
    }

    let value = value as f64;
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
