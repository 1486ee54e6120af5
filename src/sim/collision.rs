//! Axis-aligned collision detection
//!
//! Every entity shares the same square collision box, so every check in the
//! game reduces to one AABB test between two equal squares.

use glam::Vec2;

/// AABB overlap between two squares of side `size` anchored at their
/// top-left corners.
///
/// Strict inequalities on purpose: boxes that share only an edge or a corner
/// do not collide. Contact must be a genuine overlap.
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2, size: f32) -> bool {
    a.x < b.x + size && a.x + size > b.x && a.y < b.y + size && a.y + size > b.y
}
