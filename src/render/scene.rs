//! Scene setup: camera, Earth, asteroid, starfield, and lighting.

use bevy::prelude::*;
use rand::Rng;

use super::orbit::OrbitingAsteroid;

/// Earth's render radius in scene units. Everything else is sized around it.
pub const EARTH_RADIUS: f32 = 2.0;

/// Marker component for the Earth mesh.
#[derive(Component)]
pub struct Earth;

/// Spawn the main camera looking down at the scene from an angle.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 7.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Spawn Earth and the orbiting asteroid.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Earth - blue, slightly rough sphere at the origin
    let earth_mesh = meshes.add(Sphere::new(EARTH_RADIUS));
    let earth_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.5, 0.8),
        perceptual_roughness: 0.7,
        metallic: 0.0,
        ..default()
    });
    commands.spawn((
        Earth,
        Mesh3d(earth_mesh),
        MeshMaterial3d(earth_material),
        Transform::from_translation(Vec3::ZERO),
    ));

    // Asteroid - unit sphere; scale and position are driven each frame from
    // the simulator parameters
    let asteroid_mesh = meshes.add(Sphere::new(1.0));
    let asteroid_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.55, 0.5),
        perceptual_roughness: 0.9,
        metallic: 0.1,
        ..default()
    });
    commands.spawn((
        OrbitingAsteroid::default(),
        Mesh3d(asteroid_mesh),
        MeshMaterial3d(asteroid_material),
        Transform::from_xyz(8.0, 0.0, 0.0).with_scale(Vec3::splat(0.3)),
    ));
}

/// Spawn a starfield background with randomly placed stars.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.06));

    let mut rng = rand::thread_rng();

    // Stars on a distant shell so they never intersect the orbit
    for _ in 0..400 {
        let theta = rng.gen_range(0.0..std::f32::consts::TAU);
        let phi = rng.gen_range(-1.0f32..1.0).acos();
        let radius = rng.gen_range(60.0..90.0);

        let pos = Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        );

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(pos),
        ));
    }
}

/// Spawn directional and ambient lighting.
pub fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 12.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });
}
