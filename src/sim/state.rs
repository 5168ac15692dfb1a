//! Ball and world state
//!
//! Plain data for the simulation. Positions and velocities mutate only
//! through [`World::step`]; radius and mass are fixed at construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_DENSITY, GRAVITY};

/// A circular ball entity
///
/// `pos` and `vel` are public because the step function rewrites them in
/// place every frame. Radius and mass never change after construction and
/// are only readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    radius: f64,
    mass: f64,
}

impl Ball {
    /// Create a ball with mass derived from its radius:
    /// `(4/3) * π * r³ * BALL_DENSITY`
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        let mass = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3) * BALL_DENSITY;
        Self {
            pos,
            vel,
            radius,
            mass,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Translational kinetic energy, ½mv²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Linear momentum, mv
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }
}

/// The rectangular arena and its ball roster
///
/// Coordinates are y-up with the floor at y = 0, so the default gravity
/// constant is negative. Balls may transiently poke outside the arena
/// between steps; the step corrects velocity direction, never position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    area_width: f64,
    area_height: f64,
    /// Vertical acceleration applied each step (negative = downward)
    pub gravity: f64,
    pub(crate) balls: Vec<Ball>,
}

impl World {
    /// Create a world with the reference configuration of three balls
    pub fn new(width: f64, height: f64) -> Self {
        let balls = vec![
            Ball::new(DVec2::new(width / 3.0, height * 0.5), DVec2::new(0.5, 0.0), 0.2),
            Ball::new(
                DVec2::new(2.0 * width / 3.0, height * 0.7),
                DVec2::new(-0.5, 0.0),
                0.3,
            ),
            Ball::new(
                DVec2::new(2.0 * width / 3.0, height * 0.2),
                DVec2::new(0.5, 0.0),
                0.4,
            ),
        ];
        Self::with_balls(width, height, balls)
    }

    /// Create a world with an explicit ball roster
    ///
    /// Roster order is fixed for the lifetime of the world and determines
    /// collision pair iteration order.
    pub fn with_balls(width: f64, height: f64, balls: Vec<Ball>) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "arena must have positive area");
        log::debug!("arena {}x{} with {} balls", width, height, balls.len());
        Self {
            area_width: width,
            area_height: height,
            gravity: GRAVITY,
            balls,
        }
    }

    pub fn area_width(&self) -> f64 {
        self.area_width
    }

    pub fn area_height(&self) -> f64 {
        self.area_height
    }

    /// Read-only view of the roster (for drawing and tests)
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }
}
