//! Orb primitive SDF
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to an orb measured from `center`
///
/// The orb node passes its already-local point together with its own
/// position as `center`, so a translated orb sits twice as far from the
/// origin as its position says. Scenes are authored against that placement.
#[inline(always)]
pub fn sdf_orb(local: Vec3, center: Vec3, radius: f32) -> f32 {
    local.distance(center) - radius
}
