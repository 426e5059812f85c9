//! Core state types for the sticky-box simulation.
//!
//! Defines the moving box, its container, and the runtime system:
//! - `Item`     the draggable box (center position, velocity, fixed size)
//! - `Bounds`   the container rectangle (origin top-left, y pointing down)
//! - `SimState` who currently drives the box (forces vs external input)
//! - `System`   the full mutable state advanced tick by tick
//!
//! The system holds the current anchor set and the simulation time `t`.

use nalgebra::Vector2;

use crate::simulation::anchors::AnchorSet;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Item {
    pub x: NVec2, // center position
    pub v: NVec2, // velocity
    pub size: NVec2, // width/height, fixed at construction
}

impl Item {
    /// Half width / half height of the box
    pub fn half_extent(&self) -> NVec2 {
        0.5 * self.size
    }

    /// Effective mass from a relative density: `mass = density * area`
    pub fn mass(&self, density: f64) -> f64 {
        density * self.size.x * self.size.y
    }

    /// Default center used at startup and when a bounds transition re-seats
    /// the box: top-left corner flush with the container origin
    pub fn default_center(&self) -> NVec2 {
        self.half_extent()
    }
}

/// Axis-aligned container rectangle, origin at top-left, y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub w: f64, // width
    pub h: f64, // height
}

impl Bounds {
    pub fn center(&self) -> NVec2 {
        NVec2::new(0.5 * self.w, 0.5 * self.h)
    }
}

/// Who drives the box right now
///
/// Forces only act while `Free`. `UserControlled` means external input sets
/// the position directly (a drag, or the host's bounds-transition animation);
/// force integration is halted for as long as it lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Free,
    UserControlled,
}

#[derive(Debug, Clone)]
pub struct System {
    pub item: Item, // the single simulated box
    pub bounds: Bounds, // container rectangle
    pub anchors: AnchorSet, // four corner attraction targets
    pub state: SimState, // current driver of the box
    pub t: f64, // time
}

impl System {
    /// Fresh system state at `t = 0`, free-moving, with anchors computed for
    /// the starting bounds
    pub fn new(item: Item, bounds: Bounds, inset: f64) -> Self {
        let anchors = AnchorSet::compute(bounds, item.half_extent(), inset);
        Self {
            item,
            bounds,
            anchors,
            state: SimState::Free,
            t: 0.0,
        }
    }
}
