//! Boundary constraint keeping the box inside the container
//!
//! A pure per-axis clamp plus the collision response used by the integrator:
//! - `clamp_axis` / `clamp_position` return the corrected position
//! - `BoundaryConstraint::apply` clamps the item in place and reflects the
//!   velocity on each axis that was still driving into a wall, scaled by
//!   elasticity
//!
//! A container too small for the item plus inset has an empty clamp range;
//! the policy for that axis is to park it at the container center

use crate::simulation::states::{Bounds, Item, NVec2};

/// Clamp one axis to `[inset + half, len - inset - half]`
///
/// An empty range (container too small for the item plus inset) parks the
/// axis at `len / 2` instead
pub fn clamp_axis(p: f64, half: f64, len: f64, inset: f64) -> f64 {
    let lo = inset + half;
    let hi = len - inset - half;
    if hi < lo {
        return 0.5 * len;
    }
    p.clamp(lo, hi)
}

/// Clamp both axes independently; pure, no side effects
pub fn clamp_position(p: NVec2, half: NVec2, bounds: Bounds, inset: f64) -> NVec2 {
    NVec2::new(
        clamp_axis(p.x, half.x, bounds.w, inset),
        clamp_axis(p.y, half.y, bounds.h, inset),
    )
}

/// Collision boundary with a fixed inset from the container edges
#[derive(Debug, Clone, Copy)]
pub struct BoundaryConstraint {
    pub inset: f64, // margin between container edge and the box's resting edge
}

impl BoundaryConstraint {
    pub fn new(inset: f64) -> Self {
        Self { inset }
    }

    /// Clamp `item` into the container, bouncing off the walls
    ///
    /// A velocity component is reflected (and scaled by `elasticity`) only
    /// when it still points into the wall the clamp pushed away from; a
    /// component already separating is left alone. Returns true if either
    /// axis had to be corrected
    pub fn apply(&self, item: &mut Item, bounds: Bounds, elasticity: f64) -> bool {
        let half = item.half_extent();
        let clamped = clamp_position(item.x, half, bounds, self.inset);

        let hit_x = clamped.x != item.x.x;
        let hit_y = clamped.y != item.x.y;

        // correction and velocity pointing opposite ways = driving into the wall
        if hit_x && (clamped.x - item.x.x) * item.v.x < 0.0 {
            item.v.x = -elasticity * item.v.x;
        }
        if hit_y && (clamped.y - item.x.y) * item.v.y < 0.0 {
            item.v.y = -elasticity * item.v.y;
        }

        item.x = clamped;

        hit_x || hit_y
    }
}
