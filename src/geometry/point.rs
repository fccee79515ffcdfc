//! Point records and the column kinds of the points table.

use nalgebra::{Point3, Vector3};

/// A mesh vertex record.
///
/// Every attribute defaults to zero; the points table only overwrites the
/// fields it has columns for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Position.
    pub position: Point3<f32>,
    /// Normal (not normalized, taken as-is from the table).
    pub normal: Vector3<f32>,
    /// Color as `[r, g, b, a]`.
    pub color: [f32; 4],
    /// Texture coordinate as `[u, v]`.
    pub uv: [f32; 2],
}

impl Default for Point {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            normal: Vector3::zeros(),
            color: [0.0; 4],
            uv: [0.0; 2],
        }
    }
}

impl Point {
    /// Create a point at `position` with every other attribute zeroed.
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            ..Default::default()
        }
    }

    /// Write `value` into the field selected by `column`.
    ///
    /// [`PointColumn::Ignore`] leaves the point untouched.
    #[inline]
    pub fn set(&mut self, column: PointColumn, value: f32) {
        match column {
            PointColumn::PositionX => self.position.x = value,
            PointColumn::PositionY => self.position.y = value,
            PointColumn::PositionZ => self.position.z = value,
            PointColumn::NormalX => self.normal.x = value,
            PointColumn::NormalY => self.normal.y = value,
            PointColumn::NormalZ => self.normal.z = value,
            PointColumn::ColorR => self.color[0] = value,
            PointColumn::ColorG => self.color[1] = value,
            PointColumn::ColorB => self.color[2] = value,
            PointColumn::ColorA => self.color[3] = value,
            PointColumn::U => self.uv[0] = value,
            PointColumn::V => self.uv[1] = value,
            PointColumn::Ignore => {}
        }
    }
}

/// The field a points-table column writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointColumn {
    /// `P(0)`
    PositionX,
    /// `P(1)`
    PositionY,
    /// `P(2)`
    PositionZ,
    /// `N(0)`
    NormalX,
    /// `N(1)`
    NormalY,
    /// `N(2)`
    NormalZ,
    /// `Cd(0)`
    ColorR,
    /// `Cd(1)`
    ColorG,
    /// `Cd(2)`
    ColorB,
    /// `Cd(3)`
    ColorA,
    /// `uv(0)`
    U,
    /// `uv(1)`
    V,
    /// Any header the loader does not know.
    Ignore,
}

impl PointColumn {
    /// Map a header token to its column kind.
    pub fn from_header(name: &str) -> Self {
        match name {
            "P(0)" => PointColumn::PositionX,
            "P(1)" => PointColumn::PositionY,
            "P(2)" => PointColumn::PositionZ,
            "N(0)" => PointColumn::NormalX,
            "N(1)" => PointColumn::NormalY,
            "N(2)" => PointColumn::NormalZ,
            "Cd(0)" => PointColumn::ColorR,
            "Cd(1)" => PointColumn::ColorG,
            "Cd(2)" => PointColumn::ColorB,
            "Cd(3)" => PointColumn::ColorA,
            "uv(0)" => PointColumn::U,
            "uv(1)" => PointColumn::V,
            _ => PointColumn::Ignore,
        }
    }

    /// Whether values in this column are written into the point.
    pub fn is_mapped(self) -> bool {
        self != PointColumn::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let p = Point::default();
        assert_eq!(p.position, Point3::origin());
        assert_eq!(p.normal, Vector3::zeros());
        assert_eq!(p.color, [0.0; 4]);
        assert_eq!(p.uv, [0.0; 2]);
    }

    #[test]
    fn test_header_mapping() {
        for name in [
            "P(0)", "P(1)", "P(2)", "N(0)", "N(1)", "N(2)", "Cd(0)", "Cd(1)", "Cd(2)", "Cd(3)",
            "uv(0)", "uv(1)",
        ] {
            let column = PointColumn::from_header(name);
            assert!(column.is_mapped(), "{} should be mapped", name);
        }

        // Case and spelling must match exactly
        assert_eq!(PointColumn::from_header("p(0)"), PointColumn::Ignore);
        assert_eq!(PointColumn::from_header("uv(2)"), PointColumn::Ignore);
        assert_eq!(PointColumn::from_header("index"), PointColumn::Ignore);
        assert!(!PointColumn::Ignore.is_mapped());
    }

    #[test]
    fn test_set_fields() {
        let mut p = Point::default();
        p.set(PointColumn::PositionY, 2.0);
        p.set(PointColumn::NormalZ, -1.0);
        p.set(PointColumn::ColorA, 0.25);
        p.set(PointColumn::V, 0.75);
        p.set(PointColumn::Ignore, 99.0);

        assert_eq!(p.position, Point3::new(0.0, 2.0, 0.0));
        assert_eq!(p.normal, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(p.color, [0.0, 0.0, 0.0, 0.25]);
        assert_eq!(p.uv, [0.0, 0.75]);
    }
}
