//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime tunables:
//! - integration step size (one display tick),
//! - item dynamics (density, elasticity, friction, resistance),
//! - corner field strength and the boundary inset

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size, one display tick
    pub density: f64, // relative mass density, mass = density * area
    pub elasticity: f64, // restitution on boundary collisions
    pub friction: f64, // velocity damping during free motion
    pub resistance: f64, // velocity damping during free motion
    pub spring_strength: f64, // corner field spring constant
    pub inset: f64, // margin between container edge and the box's resting edge
}
