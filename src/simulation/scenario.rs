//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - the sticky behavior (parameters + boundary + corner fields)
//! - system state (`System` with the box seated at t = 0)
//! - the host-facing debug overlay flag
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! tick, input and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::behavior::StickyBehavior;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Bounds, Item, NVec2, System};

/// Bevy resource representing a fully-initialized sticky-box scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the behavior (parameters plus the force/constraint
/// composition), the current system state, and the debug flag
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for input, integration, visualization, etc
#[derive(Resource)]
pub struct Scenario {
    pub behavior: StickyBehavior,
    pub system: System,
    pub debug_enabled: bool, // overlay toggle, no effect on the physics
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Item: runtime box from the config, seated at its default center
        // unless the scenario pins it somewhere
        let size = NVec2::new(cfg.item.width, cfg.item.height);
        let mut item = Item {
            x: 0.5 * size,
            v: NVec2::zeros(),
            size,
        };
        if let (Some(x), Some(y)) = (cfg.item.x, cfg.item.y) {
            item.x = NVec2::new(x, y);
        }

        // Container bounds
        let bounds = Bounds {
            w: cfg.container.width,
            h: cfg.container.height,
        };

        // Parameters (runtime) from ParametersConfig; the inset defaults to
        // half the item width when the scenario leaves it out
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            density: p_cfg.density,
            elasticity: p_cfg.elasticity,
            friction: p_cfg.friction,
            resistance: p_cfg.resistance,
            spring_strength: p_cfg.spring_strength,
            inset: p_cfg.inset.unwrap_or(0.5 * cfg.item.width),
        };

        // Behavior: boundary + item dynamics + one spring field per corner
        let behavior = StickyBehavior::new(parameters);

        // Initial system state: anchors computed for the starting bounds
        let system = System::new(item, bounds, behavior.boundary.inset);

        Self {
            behavior,
            system,
            debug_enabled: cfg.debug.unwrap_or(false),
        }
    }
}
