//! Fixed-increment simulation step
//!
//! Advances every ball by one time increment: wall reflection first, then
//! the all-pairs collision scan, then forward Euler integration. The
//! per-ball ordering is part of the model and must not be reordered.

use super::collision::{balls_overlap, resolve_elastic};
use super::state::{Ball, World};

impl World {
    /// Advance the simulation by one increment of `delta_t` seconds.
    ///
    /// `delta_t` must be positive; the function does not guard against
    /// zero or negative increments in release builds. Each ball in roster
    /// order gets, in this order:
    ///
    /// 1. Wall bounce: within one radius of a wall and still moving
    ///    outward, the outward velocity component is negated. Positions
    ///    are never clamped, so a ball may sit slightly outside the arena
    ///    for a frame.
    /// 2. Collision scan against every other ball; overlapping pairs are
    ///    resolved elastically. A resolved pair is separating afterward,
    ///    so the partner's own scan later in the same step skips it.
    /// 3. Forward Euler integration: position moves by the pre-step
    ///    velocity, then gravity is applied to the vertical velocity.
    pub fn step(&mut self, delta_t: f64) {
        debug_assert!(delta_t > 0.0, "step increment must be positive");

        for i in 0..self.balls.len() {
            self.bounce_walls(i);

            for j in 0..self.balls.len() {
                if j == i {
                    continue;
                }
                let (b1, b2) = pair_mut(&mut self.balls, i, j);
                if balls_overlap(b1, b2) {
                    resolve_elastic(b1, b2);
                }
            }

            let ball = &mut self.balls[i];
            ball.pos += ball.vel * delta_t;
            ball.vel.y += self.gravity * delta_t;
        }
    }

    /// Flip velocity components that point further out of the arena while
    /// the ball is within one radius of the corresponding wall. The two
    /// axes are checked independently.
    fn bounce_walls(&mut self, i: usize) {
        let width = self.area_width();
        let height = self.area_height();
        let ball = &mut self.balls[i];
        let r = ball.radius();

        if (ball.pos.x <= r && ball.vel.x < 0.0)
            || (ball.pos.x >= width - r && ball.vel.x > 0.0)
        {
            ball.vel.x = -ball.vel.x;
        }
        if (ball.pos.y <= r && ball.vel.y < 0.0)
            || (ball.pos.y >= height - r && ball.vel.y > 0.0)
        {
            ball.vel.y = -ball.vel.y;
        }
    }
}

/// Mutable references to two distinct balls of the roster
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert!(i != j);
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn one_ball_world(pos: DVec2, vel: DVec2, radius: f64) -> World {
        World::with_balls(4.0, 4.0, vec![Ball::new(pos, vel, radius)])
    }

    #[test]
    fn test_gravity_only_step() {
        // Ball at rest at arena center: one step with dt=1 leaves the
        // position unchanged (integration uses pre-step velocity) and
        // pulls vy down by one gravity increment
        let mut world = one_ball_world(DVec2::new(2.0, 2.0), DVec2::ZERO, 0.2);
        world.step(1.0);

        let ball = &world.balls()[0];
        assert_eq!(ball.pos, DVec2::new(2.0, 2.0));
        assert!((ball.vel.y - (-9.82)).abs() < 1e-12);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn test_straight_line_without_gravity() {
        let mut world = one_ball_world(DVec2::new(1.0, 2.0), DVec2::new(0.5, 0.25), 0.2);
        world.gravity = 0.0;

        for _ in 0..4 {
            world.step(0.5);
        }

        let ball = &world.balls()[0];
        assert!((ball.pos.x - 2.0).abs() < 1e-12);
        assert!((ball.pos.y - 2.5).abs() < 1e-12);
        assert_eq!(ball.vel, DVec2::new(0.5, 0.25));
    }

    #[test]
    fn test_left_wall_flips_before_position_update() {
        // Ball just inside the left margin moving left: the reflection
        // happens before integration, so the step moves it right
        let mut world = one_ball_world(DVec2::new(0.19, 2.0), DVec2::new(-0.5, 0.0), 0.2);
        world.gravity = 0.0;
        world.step(0.1);

        let ball = &world.balls()[0];
        assert!(ball.vel.x > 0.0);
        assert!((ball.pos.x - 0.24).abs() < 1e-12);
    }

    #[test]
    fn test_reflection_is_idempotent_within_margin() {
        // After one flip the ball still sits within a radius of the wall,
        // but it is now moving inward, so the next step must not flip back
        let mut world = one_ball_world(DVec2::new(0.1, 2.0), DVec2::new(-0.5, 0.0), 0.2);
        world.gravity = 0.0;

        world.step(0.01);
        assert!(world.balls()[0].vel.x > 0.0);
        world.step(0.01);
        assert!(world.balls()[0].vel.x > 0.0);
    }

    #[test]
    fn test_floor_and_ceiling_bounce() {
        let mut world = one_ball_world(DVec2::new(2.0, 0.15), DVec2::new(0.0, -1.0), 0.2);
        world.gravity = 0.0;
        world.step(0.01);
        assert!(world.balls()[0].vel.y > 0.0);

        let mut world = one_ball_world(DVec2::new(2.0, 3.9), DVec2::new(0.0, 1.0), 0.2);
        world.gravity = 0.0;
        world.step(0.01);
        assert!(world.balls()[0].vel.y < 0.0);
    }

    #[test]
    fn test_single_ball_never_self_collides() {
        // A one-ball world must never take the resolution path: dropping
        // under gravity for many steps stays finite and on the vertical
        let mut world = one_ball_world(DVec2::new(2.0, 3.0), DVec2::ZERO, 0.2);
        for _ in 0..2000 {
            world.step(1.0 / 120.0);
        }

        let ball = &world.balls()[0];
        assert!(ball.pos.is_finite() && ball.vel.is_finite());
        assert_eq!(ball.pos.x, 2.0);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn test_overlapping_pair_swaps_in_step() {
        // Equal-mass head-on pair found overlapping during the step:
        // velocities swap, then integration moves them apart
        let balls = vec![
            Ball::new(DVec2::new(1.0, 1.0), DVec2::new(1.0, 0.0), 0.2),
            Ball::new(DVec2::new(1.3, 1.0), DVec2::new(-1.0, 0.0), 0.2),
        ];
        let mut world = World::with_balls(4.0, 4.0, balls);
        world.gravity = 0.0;
        world.step(0.001);

        let (a, b) = (&world.balls()[0], &world.balls()[1]);
        assert!((a.vel.x - (-1.0)).abs() < 1e-12);
        assert!((b.vel.x - 1.0).abs() < 1e-12);
        // One step of drift apart
        assert!((a.pos.x - 0.999).abs() < 1e-12);
        assert!((b.pos.x - 1.301).abs() < 1e-12);
    }

    #[test]
    fn test_soft_containment_over_many_steps() {
        // Reference scene under gravity: balls stay within one radius of
        // the arena and finite over a long run
        let mut world = World::new(6.0, 4.0);
        for _ in 0..5000 {
            world.step(1.0 / 120.0);
        }

        for ball in world.balls() {
            let r = ball.radius();
            assert!(ball.pos.is_finite() && ball.vel.is_finite());
            assert!(ball.pos.x > -r && ball.pos.x < world.area_width() + r);
            assert!(ball.pos.y > -r && ball.pos.y < world.area_height() + r);
        }
    }
}
