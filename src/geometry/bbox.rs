//! Axis-aligned bounding boxes.

use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box over a set of positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point3<f32>,
    /// Maximum corner.
    pub max: Point3<f32>,
}

impl BoundingBox {
    /// A degenerate box containing only `p`.
    pub fn from_point(p: Point3<f32>) -> Self {
        Self { min: p, max: p }
    }

    /// Compute the box of all positions, or `None` if there are none.
    ///
    /// The box starts at the first position and is folded with a
    /// componentwise min/max over the rest.
    pub fn from_points<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<f32>>,
    {
        let mut iter = positions.into_iter();
        let mut bbox = Self::from_point(*iter.next()?);
        for p in iter {
            bbox.include(p);
        }
        Some(bbox)
    }

    /// Grow the box to contain `p`.
    pub fn include(&mut self, p: &Point3<f32>) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Largest extent over the three axes.
    pub fn max_extent(&self) -> f32 {
        self.size().max()
    }
}
