//! Asteroid animation and orbit path drawing.

use bevy::prelude::*;

use crate::types::SimulatorParameters;

use super::scene::Earth;

/// Scene units of orbit radius per astronomical unit of approach distance.
const ORBIT_RADIUS_PER_AU: f32 = 8.0;
/// Scene units of asteroid radius per kilometer of body diameter.
const ASTEROID_SCALE_PER_KM: f32 = 0.3;
/// Smallest rendered asteroid radius, so sub-100 m bodies stay visible.
const MIN_ASTEROID_SCALE: f32 = 0.12;

/// The asteroid circling Earth in the visualization.
#[derive(Component, Default)]
pub struct OrbitingAsteroid {
    /// Current orbital phase in radians.
    pub angle: f32,
}

/// Advance the asteroid along its circular path.
///
/// Orbit radius tracks the distance slider, angular speed tracks the velocity
/// slider, and the rendered size tracks the size slider. A gentle vertical
/// bob keeps the motion from reading as flat.
pub fn animate_asteroid(
    time: Res<Time>,
    params: Res<SimulatorParameters>,
    mut asteroids: Query<(&mut OrbitingAsteroid, &mut Transform)>,
) {
    let radius = (params.distance_au as f32) * ORBIT_RADIUS_PER_AU;
    let angular_speed = (params.velocity_km_s as f32) / 10.0;
    let scale = ((params.size_km as f32) * ASTEROID_SCALE_PER_KM).max(MIN_ASTEROID_SCALE);

    for (mut asteroid, mut transform) in asteroids.iter_mut() {
        asteroid.angle += angular_speed * time.delta_secs();
        asteroid.angle %= std::f32::consts::TAU;

        transform.translation = Vec3::new(
            radius * asteroid.angle.cos(),
            (asteroid.angle * 2.0).sin() * 0.5,
            radius * asteroid.angle.sin(),
        );
        transform.scale = Vec3::splat(scale);
    }
}

/// Slowly spin Earth about its axis.
pub fn rotate_earth(time: Res<Time>, mut earths: Query<&mut Transform, With<Earth>>) {
    for mut transform in earths.iter_mut() {
        transform.rotate_y(0.1 * time.delta_secs());
    }
}

/// Draw the asteroid's path as a dashed ring in the orbital plane.
pub fn draw_orbit_ring(params: Res<SimulatorParameters>, mut gizmos: Gizmos) {
    let radius = (params.distance_au as f32) * ORBIT_RADIUS_PER_AU;
    let color = Color::srgba(0.7, 0.7, 0.8, 0.6);

    const SEGMENTS: usize = 96;
    let step = std::f32::consts::TAU / SEGMENTS as f32;

    // Draw every other segment for the dashed look
    for i in (0..SEGMENTS).step_by(2) {
        let a0 = i as f32 * step;
        let a1 = a0 + step;
        let p0 = Vec3::new(radius * a0.cos(), 0.0, radius * a0.sin());
        let p1 = Vec3::new(radius * a1.cos(), 0.0, radius * a1.sin());
        gizmos.line(p0, p1, color);
    }
}
