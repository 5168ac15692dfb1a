//! Deterministic ball simulation
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Single-threaded, runs to completion per step
//! - Stable iteration order (roster order drives pair resolution)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{balls_overlap, resolve_elastic};
pub use state::{Ball, World};
