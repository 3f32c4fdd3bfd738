//! Axis-aligned bounding volumes

use glam::Vec3;

/// Axis-Aligned Bounding Box aggregated across plan content.
///
/// A fresh box starts [`EMPTY`](Self::EMPTY) and grows through the
/// encapsulate operations. The empty box is an explicit degenerate sentinel
/// (`min = +INF`, `max = -INF`), so encapsulating a single point yields a
/// zero-size box at that point rather than one stretched to the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner of the bounding box.
    pub min: Vec3,
    /// Maximum corner of the bounding box.
    pub max: Vec3,
}

impl Bounds {
    /// The empty (degenerate) box; identity element of encapsulation.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Creates a new box from min and max corners.
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Builds the tightest box containing all given points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bounds = Self::EMPTY;
        for point in points {
            bounds.encapsulate_point(point);
        }
        bounds
    }

    /// True while no point or box has been encapsulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to contain `point`.
    #[inline]
    pub fn encapsulate_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grows the box to contain `other`. Encapsulating an empty box is a
    /// no-op.
    #[inline]
    pub fn encapsulate(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Returns the center point. Meaningful only for non-empty boxes.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the full extents. Meaningful only for non-empty boxes.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}
