pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Bounds, Item, NVec2, SimState, System};
pub use simulation::anchors::{Anchor, AnchorRole, AnchorSet};
pub use simulation::boundary::{clamp_axis, clamp_position, BoundaryConstraint};
pub use simulation::forces::{Force, ForceSet, LinearDamping, SpringField};
pub use simulation::integrator::step;
pub use simulation::behavior::StickyBehavior;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ContainerConfig, ItemConfig, ParametersConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_settle, bench_step};
