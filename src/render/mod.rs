//! 3D orbit visualization.
//!
//! A deliberately simple presentation scene: Earth at the origin, an
//! asteroid circling it at a radius driven by the distance slider, scaled by
//! the size slider, and advancing with the velocity slider. The scene reads
//! simulator state and returns nothing.

mod orbit;
mod scene;

use bevy::prelude::*;

pub use orbit::OrbitingAsteroid;
pub use scene::Earth;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                scene::setup_camera,
                scene::spawn_scene,
                scene::spawn_starfield,
                scene::spawn_lighting,
            ),
        )
        .add_systems(
            Update,
            (
                orbit::animate_asteroid,
                orbit::rotate_earth,
                orbit::draw_orbit_ring,
            ),
        );
    }
}
