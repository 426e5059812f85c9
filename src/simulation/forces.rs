//! Force contributors for the sticky-box engine
//!
//! Defines the force trait and its aggregation, plus the two concrete
//! terms: per-corner spring fields and linear velocity damping

use crate::simulation::anchors::AnchorRole;
use crate::simulation::states::{NVec2, System};

/// Collection of force terms (corner springs, damping, etc)
/// Each term implements [`Force`] and their contributions are summed
/// into a single net force on the item
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the net force on the item at time `t`
    /// - `out` will be set to the sum of contributions from all terms
    pub fn accumulate(&self, t: f64, sys: &System, out: &mut NVec2) {
        // Zero the accumulator
        *out = NVec2::zeros();
        // Iterate over all force contributors
        for term in &self.terms {
            term.force(t, sys, out);
        }
    }
}

/// Trait for force sources acting on the item in a [`System`]
/// Implementations add their contribution into `out`
pub trait Force {
    fn force(&self, t: f64, sys: &System, out: &mut NVec2);
}

/// Per-axis linear falloff over half the region size
///
/// Full weight on the anchor point, zero at (and beyond) the region edge.
/// An empty region carries no field at all
fn falloff(d: NVec2, region: NVec2) -> f64 {
    // Region is stored as a full width/height; the falloff runs over the
    // half extents either side of the anchor point
    let rx = 0.5 * region.x;
    let ry = 0.5 * region.y;
    if rx <= 0.0 || ry <= 0.0 {
        return 0.0;
    }

    // Weight decays linearly to zero along each axis independently
    let wx = 1.0 - (d.x.abs() / rx).min(1.0);
    let wy = 1.0 - (d.y.abs() / ry).min(1.0);

    wx * wy
}

/// Hookean spring field pulling the item toward one corner anchor
///
/// All four fields are registered and evaluated every tick; there is no
/// corner-selection branch anywhere. Each field pulls with
/// `F = -strength * w(d) * d`, where `d` is the displacement from the
/// anchor point and `w` the falloff weight over the field's region, so the
/// nearest field dominates simply because the other three have decayed to
/// nothing by the time it captures the box
pub struct SpringField {
    pub role: AnchorRole, // which corner this field is bound to
    pub strength: f64, // spring constant, force per unit displacement
}

impl Force for SpringField {
    fn force(&self, _t: f64, sys: &System, out: &mut NVec2) {
        // The anchor this field is centered on (recomputed on bounds changes)
        let anchor = &sys.anchors[self.role];

        // Displacement from the field center to the box
        let d = sys.item.x - anchor.point;

        // Falloff weight over the field's region
        let w = falloff(d, anchor.region);
        if w == 0.0 {
            // Box is outside this field's reach
            return;
        }

        // -------------------------
        // Hooke's law toward the anchor:
        // F = -strength * w * d
        // (d points away from the anchor, so the force points back at it)
        // -------------------------
        *out -= self.strength * w * d;
    }
}

/// Velocity damping during free motion
///
/// Friction and resistance both act as damping coefficients on the
/// velocity. The force scales with the item's mass so the resulting
/// deceleration is `(resistance + friction) * v` regardless of density
pub struct LinearDamping {
    pub density: f64, // relative mass density of the item
    pub resistance: f64, // velocity damping
    pub friction: f64, // also damps velocity while the box moves free
}

impl Force for LinearDamping {
    fn force(&self, _t: f64, sys: &System, out: &mut NVec2) {
        let m = sys.item.mass(self.density);

        // F = -m * (resistance + friction) * v, always opposing the motion
        *out -= m * (self.resistance + self.friction) * sys.item.v;
    }
}
