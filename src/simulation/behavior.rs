//! The sticky-corner behavior: force composition plus state machine
//!
//! `StickyBehavior` bundles the boundary constraint, the item dynamics and
//! the four corner spring fields under one parent, and owns the
//! `Free` / `UserControlled` transitions:
//! - drag start/move/end (external input drives the box)
//! - bounds changes (anchors recomputed first, box re-seated, forces
//!   suspended until the host's transition completes)
//! - the per-tick step while the box moves free

use crate::simulation::anchors::{AnchorRole, AnchorSet};
use crate::simulation::boundary::BoundaryConstraint;
use crate::simulation::forces::{ForceSet, LinearDamping, SpringField};
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Bounds, NVec2, SimState, System};

/// Composition of the independent constraint/force modules acting on the
/// box, evaluated in a fixed order each tick: corner springs and damping
/// first, boundary clamp last
pub struct StickyBehavior {
    pub parameters: Parameters,
    pub boundary: BoundaryConstraint,
    forces: ForceSet,
}

impl StickyBehavior {
    /// Build the full composition for the given parameters: one spring
    /// field per corner plus the damping term, mirrored by the boundary
    /// constraint at the same inset
    pub fn new(parameters: Parameters) -> Self {
        let boundary = BoundaryConstraint::new(parameters.inset);

        // Forces: one spring field per corner role
        let mut forces = ForceSet::new();
        for role in AnchorRole::ALL {
            forces = forces.with(SpringField {
                role,
                strength: parameters.spring_strength,
            });
        }

        // Item dynamics: friction and resistance damp the velocity
        forces = forces.with(LinearDamping {
            density: parameters.density,
            resistance: parameters.resistance,
            friction: parameters.friction,
        });

        Self {
            parameters,
            boundary,
            forces,
        }
    }

    /// Advance one tick; does nothing while external input owns the box
    pub fn tick(&self, sys: &mut System) {
        integrator::step(sys, &self.forces, &self.boundary, &self.parameters);
    }

    /// Drag started: simulated forces are suspended, input takes over
    pub fn drag_began(&self, sys: &mut System) {
        sys.state = SimState::UserControlled;
        sys.item.v = NVec2::zeros();
    }

    /// Drag moved: the box follows the pointer directly, unclamped
    pub fn drag_moved(&self, sys: &mut System, p: NVec2) {
        if sys.state == SimState::UserControlled {
            sys.item.x = p;
        }
    }

    /// Drag ended or cancelled: the box is pulled back inside the boundary
    /// and forces resume from wherever it was let go
    pub fn drag_ended(&self, sys: &mut System) {
        sys.state = SimState::Free;
        self.boundary
            .apply(&mut sys.item, sys.bounds, self.parameters.elasticity);
    }

    /// Container bounds changed (rotation, resize)
    ///
    /// Anchors are recomputed before anything reads them again, then the box
    /// is re-seated at its default center with forces suspended for the
    /// duration of the transition. [`Self::transition_finished`] hands the
    /// box back to the simulation
    pub fn bounds_changed(&self, sys: &mut System, new_bounds: Bounds) {
        sys.bounds = new_bounds;
        sys.anchors = AnchorSet::compute(new_bounds, sys.item.half_extent(), self.boundary.inset);

        sys.state = SimState::UserControlled;
        sys.item.x = sys.item.default_center();
        sys.item.v = NVec2::zeros();
    }

    /// The host's transition animation completed: free motion resumes
    pub fn transition_finished(&self, sys: &mut System) {
        sys.state = SimState::Free;
    }
}
