//! Axis-aligned bounding boxes.
//!
//! [`Aabb`] is derived from an entity's [`Position`] (top-left corner) and
//! [`Size`]. Screen space: `x` grows right, `y` grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use sim_component::{Position, Size};

/// An axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Aabb {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from its top-left corner and extent.
    #[must_use]
    pub fn from_corner_extent(corner: Vec2, extent: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + extent,
        }
    }

    /// Create the box covered by an entity's spatial components.
    #[must_use]
    pub fn from_components(position: &Position, size: &Size) -> Self {
        Self::from_corner_extent(
            Vec2::new(position.x, position.y),
            Vec2::new(size.width, size.height),
        )
    }

    /// Returns `true` if the interiors of the two boxes intersect.
    ///
    /// Edges that merely touch do not count as an overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Width and height of the box.
    #[must_use]
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_components(&Position::new(x, y), &Size::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes() {
        assert!(rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_disjoint_boxes() {
        assert!(!rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(20.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0.0, 0.0, 50.0, 90.0);
        let b = rect(40.0, 80.0, 50.0, 90.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(rect(0.0, 0.0, 100.0, 100.0).overlaps(&rect(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_extent() {
        assert_eq!(rect(3.0, 4.0, 50.0, 90.0).extent(), Vec2::new(50.0, 90.0));
    }
}
