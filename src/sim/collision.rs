//! Pairwise collision detection and elastic resolution
//!
//! The tricky part of the simulation: two circles can meet at any angle,
//! so resolution re-expresses both velocities in a basis aligned with the
//! line between the centers. In that frame the impact is a 1D elastic
//! collision along the first axis; the perpendicular component is carried
//! through untouched (no friction, no spin).

use glam::{DMat2, DVec2};

use super::state::Ball;
use crate::consts::CONTACT_EPSILON;

/// Two balls overlap when their center distance is less than the sum of
/// their radii
pub fn balls_overlap(a: &Ball, b: &Ball) -> bool {
    let radius_sum = a.radius() + b.radius();
    a.pos.distance_squared(b.pos) < radius_sum * radius_sum
}

/// Resolve an elastic collision between two overlapping balls in place.
///
/// Conserves momentum and kinetic energy. Pairs that are separating (or
/// moving parallel) along the collision normal are left untouched, so
/// calling this repeatedly while two balls still overlap geometrically
/// does not re-resolve them. Coincident centers would make the collision
/// basis singular; that case is skipped entirely rather than dividing by
/// a zero determinant.
pub fn resolve_elastic(b1: &mut Ball, b2: &mut Ball) {
    let normal = b2.pos - b1.pos;
    if normal.length_squared() < CONTACT_EPSILON * CONTACT_EPSILON {
        log::trace!("skipping collision with coincident centers at {}", b1.pos);
        return;
    }

    // Basis columns: the collision normal and its 90° rotation
    let basis = DMat2::from_cols(normal, DVec2::new(-normal.y, normal.x));
    let inverse = basis.inverse();
    let vm1 = inverse * b1.vel;
    let vm2 = inverse * b2.vel;

    // Only resolve when the balls approach each other along the normal
    if vm1.x <= vm2.x {
        return;
    }

    let (m1, m2) = (b1.mass(), b2.mass());
    let momentum = m1 * vm1.x + m2 * vm2.x;
    let relative = vm1.x - vm2.x;
    let new_v1 = (momentum - m2 * relative) / (m1 + m2);
    let new_v2 = relative + new_v1;

    // Back to the standard basis, perpendicular components unchanged
    b1.vel = basis * DVec2::new(new_v1, vm1.y);
    b2.vel = basis * DVec2::new(new_v2, vm2.y);
}
