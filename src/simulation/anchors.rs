//! Corner anchor computation
//!
//! Every corner of the container gets an `Anchor`: the point its spring
//! field pulls toward, plus the rectangular region over which the field
//! falls off. Anchors are recomputed from scratch on every bounds change:
//! - point at distance `d = inset + half extent` from the corner, per axis
//! - region sized `(w - 2*dx, h - 2*dy)` centered on the point
//!
//! Roles are a fixed enum so fields are looked up by name, never by a raw
//! integer index

use std::ops::Index;

use crate::simulation::states::{Bounds, NVec2};

/// The four corner roles, in stable order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRole {
    TopLeft = 0,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl AnchorRole {
    pub const ALL: [AnchorRole; 4] = [
        AnchorRole::TopLeft,
        AnchorRole::TopRight,
        AnchorRole::BottomLeft,
        AnchorRole::BottomRight,
    ];
}

/// One corner attraction target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub role: AnchorRole, // which corner this anchor belongs to
    pub point: NVec2, // center of the spring field
    pub region: NVec2, // full width/height of the falloff rectangle
}

/// Fixed set of four anchors, indexable by [`AnchorRole`]
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSet {
    anchors: [Anchor; 4],
}

impl AnchorSet {
    /// Compute the four anchors for the given container and item geometry
    ///
    /// With `dx = inset + half.x` and `dy = inset + half.y` the points sit at
    /// `(dx,dy)`, `(w-dx,dy)`, `(dx,h-dy)`, `(w-dx,h-dy)`. All four fields
    /// share one region size, `(w - 2*dx, h - 2*dy)`, centered on each
    /// anchor's own point; a container too small to carry a field at all
    /// degrades to an empty region rather than a negative one
    pub fn compute(bounds: Bounds, half_extent: NVec2, inset: f64) -> Self {
        let w = bounds.w;
        let h = bounds.h;
        let dx = inset + half_extent.x;
        let dy = inset + half_extent.y;

        // Shared falloff region for all four fields
        let region = NVec2::new((w - 2.0 * dx).max(0.0), (h - 2.0 * dy).max(0.0));

        let anchors = [
            Anchor {
                role: AnchorRole::TopLeft,
                point: NVec2::new(dx, dy),
                region,
            },
            Anchor {
                role: AnchorRole::TopRight,
                point: NVec2::new(w - dx, dy),
                region,
            },
            Anchor {
                role: AnchorRole::BottomLeft,
                point: NVec2::new(dx, h - dy),
                region,
            },
            Anchor {
                role: AnchorRole::BottomRight,
                point: NVec2::new(w - dx, h - dy),
                region,
            },
        ];

        Self { anchors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    /// Anchor whose point is closest to `p`, ties broken by role order
    pub fn nearest(&self, p: NVec2) -> &Anchor {
        let mut best = &self.anchors[0];
        let mut best_d2 = (best.point - p).norm_squared();
        for a in &self.anchors[1..] {
            let d2 = (a.point - p).norm_squared();
            if d2 < best_d2 {
                best = a;
                best_d2 = d2;
            }
        }
        best
    }
}

impl Index<AnchorRole> for AnchorSet {
    type Output = Anchor;

    fn index(&self, role: AnchorRole) -> &Anchor {
        &self.anchors[role as usize]
    }
}
