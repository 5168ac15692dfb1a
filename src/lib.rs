//! Bounce Arena - a 2D bouncing-ball simulation
//!
//! Circular balls confined to a rectangular arena, subject to gravity,
//! wall reflection, and pairwise elastic collisions. The crate is a pure
//! in-process library: an external driver constructs a [`World`], calls
//! [`World::step`] once per frame with a time delta, and reads back ball
//! positions and radii for drawing.
//!
//! Core module:
//! - `sim`: Deterministic simulation (ball state, collisions, stepping)

pub mod sim;

pub use sim::{Ball, World, balls_overlap, resolve_elastic};

/// Simulation configuration constants
pub mod consts {
    /// Default gravitational acceleration (units/s², y increases upward)
    pub const GRAVITY: f64 = -9.82;

    /// Density scaling factor applied to the sphere-volume mass formula.
    /// Tunable, not physical: changing it changes collision dynamics.
    pub const BALL_DENSITY: f64 = 4.0;

    /// Center distance below which a colliding pair is treated as
    /// coincident and resolution is skipped (singular collision basis)
    pub const CONTACT_EPSILON: f64 = 1e-9;
}
