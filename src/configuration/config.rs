//! Configuration types for loading sticky-box scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ContainerConfig`]  – the container rectangle the box lives in
//! - [`ItemConfig`]       – box geometry and optional starting position
//! - [`ParametersConfig`] – numerical parameters and dynamics tunables
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! container:
//!   width: 320.0
//!   height: 480.0
//!
//! item:
//!   width: 32.0
//!   height: 32.0
//!   # x: 160.0            # optional starting center; omitted -> default seat
//!   # y: 240.0
//!
//! parameters:
//!   h0: 0.0166667         # step size, one 60 Hz display tick
//!   density: 0.01         # relative mass density
//!   elasticity: 0.5       # restitution on boundary hits
//!   friction: 0.1         # velocity damping
//!   resistance: 10.0      # velocity damping
//!   spring_strength: 250.0
//!   # inset: 16.0         # omitted -> half the item width
//!
//! debug: false            # start with the field overlay visible
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation

use serde::Deserialize;

/// Container rectangle for a scenario
#[derive(Deserialize, Debug)]
pub struct ContainerConfig {
    pub width: f64, // container width
    pub height: f64, // container height
}

/// Configuration for the draggable box
#[derive(Deserialize, Debug)]
pub struct ItemConfig {
    pub width: f64, // box width
    pub height: f64, // box height
    pub x: Option<f64>, // optional starting center x
    pub y: Option<f64>, // optional starting center y
}

/// Global numerical and dynamics parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64, // time step size, one display tick
    pub density: f64, // relative mass density, mass = density * area
    pub elasticity: f64, // restitution on boundary collisions
    pub friction: f64, // velocity damping during free motion
    pub resistance: f64, // velocity damping during free motion
    pub spring_strength: f64, // corner field spring constant
    pub inset: Option<f64>, // boundary/field inset; None -> half the item width
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub container: ContainerConfig, // container rectangle
    pub item: ItemConfig, // the draggable box
    pub parameters: ParametersConfig, // numerical and dynamics tunables
    pub debug: Option<bool>, // start with the debug overlay enabled
}
