//! Fixed-step time integrator for the sticky-box system
//!
//! Advances the item by one tick of semi-implicit Euler, driven by a
//! `ForceSet`, a `BoundaryConstraint` and `Parameters`. A single force
//! evaluation per step, with the boundary applied after the position update

use super::boundary::BoundaryConstraint;
use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec2, SimState, System};

/// Advance the system by one step of `params.h0`
///
/// Forces act only while the box moves free: under external control the
/// call is a no-op, so nothing accumulates or replays across a drag or a
/// bounds transition
pub fn step(sys: &mut System, forces: &ForceSet, boundary: &BoundaryConstraint, params: &Parameters) {
    if sys.state != SimState::Free {
        // External input owns the item right now
        return;
    }

    let dt = params.h0; // time step dt, one display tick

    // Net force at the current state
    let mut f = NVec2::zeros();
    forces.accumulate(sys.t, &*sys, &mut f);

    // a = F / m with the density-derived mass
    let m = sys.item.mass(params.density);
    let a = f / m;

    // Kick: v_n+1 = v_n + dt * a_n
    sys.item.v += dt * a;

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    sys.item.x += dt * sys.item.v;

    // Increment the system time by one full step
    sys.t += dt;

    // Keep the box inside the container, bouncing with elasticity
    boundary.apply(&mut sys.item, sys.bounds, params.elasticity);
}
