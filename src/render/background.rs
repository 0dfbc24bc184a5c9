//! Background rendering for the orrery.
//!
//! Provides the starfield shell and the asteroid belt. Both are scattered from
//! the configured seed so the scene looks the same on every run.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::OrreryConfig;

/// Number of background stars.
const STAR_COUNT: usize = 1500;

/// Radius of the starfield shell and its depth.
const STAR_SHELL_RADIUS: f32 = 100.0;
const STAR_SHELL_DEPTH: f32 = 50.0;

/// Number of belt rocks.
const BELT_COUNT: usize = 400;

/// Belt sits between Mars and Jupiter.
const BELT_INNER_RADIUS: f32 = 15.5;
const BELT_WIDTH: f32 = 2.5;
const BELT_VERTICAL_SPREAD: f32 = 1.5;
const BELT_TILT: f32 = 0.2;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_asteroid_belt));
    }
}

/// Uniform point on a spherical shell.
fn shell_point(rng: &mut impl Rng, radius: f32, depth: f32) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..1.0);
    let theta: f32 = rng.gen_range(0.0..TAU);
    let r = radius + rng.gen_range(0.0..depth);
    let ring = (1.0 - z * z).sqrt();
    Vec3::new(ring * theta.cos(), z, ring * theta.sin()) * r
}

/// Point inside the belt annulus, before tilt.
fn belt_point(rng: &mut impl Rng) -> Vec3 {
    let angle: f32 = rng.gen_range(0.0..TAU);
    let radius = BELT_INNER_RADIUS + rng.gen_range(0.0..BELT_WIDTH);
    let y = (rng.gen_range(0.0..1.0) - 0.5) * BELT_VERTICAL_SPREAD;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Spawn a starfield shell with seeded placement.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<OrreryConfig>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.15));

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed ^ 0x57A2);

    for _ in 0..STAR_COUNT {
        let position = shell_point(&mut rng, STAR_SHELL_RADIUS, STAR_SHELL_DEPTH);
        let scale = rng.gen_range(0.5..1.5);
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {STAR_COUNT} background stars");
}

/// Spawn the static asteroid belt.
fn spawn_asteroid_belt(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<OrreryConfig>,
) {
    let rock_material = materials.add(StandardMaterial {
        base_color: Color::srgba_u8(0x88, 0x88, 0x88, 0x99),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    let rock_mesh = meshes.add(Sphere::new(0.05));

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed ^ 0xBE17);

    commands
        .spawn((
            Name::new("Asteroid belt"),
            Transform::from_rotation(Quat::from_rotation_x(BELT_TILT)),
            Visibility::default(),
        ))
        .with_children(|belt| {
            for _ in 0..BELT_COUNT {
                belt.spawn((
                    Mesh3d(rock_mesh.clone()),
                    MeshMaterial3d(rock_material.clone()),
                    Transform::from_translation(belt_point(&mut rng)),
                ));
            }
        });
}
