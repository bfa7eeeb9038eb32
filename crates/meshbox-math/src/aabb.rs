use crate::{Point3, Vector3};
use meshbox_core::{MeshboxError, Result};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
///
/// `extent` is kept equal to `max - min` by every constructor and
/// expansion step, so `extent[i] >= 0` and `min[i] <= max[i]` hold for
/// any box built through this API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
    pub extent: Vector3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self {
            min,
            max,
            extent: max - min,
        }
    }

    /// Seed box enclosing a single point (`min == max == p`).
    ///
    /// Incremental construction must start here, never from a literal
    /// zero box: a zero seed would clamp min/max to the origin whenever
    /// all real points lie on one side of it.
    pub fn from_point(p: Point3) -> Self {
        Self {
            min: p,
            max: p,
            extent: Vector3::ZERO,
        }
    }

    /// Compute the componentwise extrema of a point set.
    ///
    /// Seeds from the first point and folds the rest, which agrees with
    /// a one-pass reduction over the full set. Rejects empty input.
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or_else(|| MeshboxError::EmptyPointSet("axis-aligned box of no points".into()))?;
        let mut aabb = Self::from_point(*first);
        for &p in rest {
            aabb.expand_to_include(p);
        }
        Ok(aabb)
    }

    /// Grow the box to enclose `p` and refresh `extent`.
    pub fn expand_to_include(&mut self, p: Point3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
        self.extent = self.max - self.min;
    }

    /// Grow the box to enclose another box and refresh `extent`.
    pub fn expand_to_include_box(&mut self, b: &Aabb3) {
        self.min = self.min.min(b.min);
        self.max = self.max.max(b.max);
        self.extent = self.max - self.min;
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    /// Index of the axis with the largest extent (0 = X, 1 = Y, 2 = Z).
    pub fn max_dimension(&self) -> usize {
        let mut result = 0;
        if self.extent.y > self.extent.x {
            result = 1;
        }
        if self.extent.z > self.extent.y && self.extent.z > self.extent.x {
            result = 2;
        }
        result
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }
}
