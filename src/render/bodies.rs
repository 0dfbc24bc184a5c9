//! Body and star meshes.
//!
//! Simulated body entities are spawned by the orbit plugin with only a
//! transform. Here they get a spinning sphere child, an optional atmosphere
//! shell and an optional ring, all parented so they follow the orbit.

use bevy::prelude::*;

use crate::catalog::{BodyCatalog, BodyData};
use crate::orbit::OrbitingBody;

/// Radius of the central star.
pub const SUN_RADIUS: f32 = 2.5;

/// Ring tilt away from the orbital plane (radians).
const RING_TILT: f32 = 0.4;

/// Child mesh that carries the body's self-rotation.
#[derive(Component)]
pub struct SpinningMesh;

/// Translucent shell around rocky bodies with an atmosphere.
#[derive(Component)]
pub struct AtmosphereGlow;

/// Marker for the central star.
#[derive(Component)]
pub struct Sun;

/// Plugin providing body and star visuals.
pub struct BodyVisualPlugin;

impl Plugin for BodyVisualPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sun)
            .add_systems(Update, attach_body_visuals);
    }
}

fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sphere = meshes.add(Sphere::new(SUN_RADIUS));

    let core = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xFF, 0xD0, 0x00),
        emissive: LinearRgba::rgb(4.0, 3.0, 0.2),
        unlit: true,
        ..default()
    });
    let inner_glow = materials.add(glow_material(Color::srgb_u8(0xFF, 0x55, 0x00), 0.3));
    let corona = materials.add(glow_material(Color::srgb_u8(0xFF, 0xAA, 0x00), 0.1));

    commands
        .spawn((
            Name::new("Sun"),
            Sun,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((Mesh3d(sphere.clone()), MeshMaterial3d(core)));
            parent.spawn((
                Mesh3d(sphere.clone()),
                MeshMaterial3d(inner_glow),
                Transform::from_scale(Vec3::splat(1.2)),
            ));
            parent.spawn((
                Mesh3d(sphere),
                MeshMaterial3d(corona),
                Transform::from_scale(Vec3::splat(2.5)),
            ));
            parent.spawn(PointLight {
                intensity: 4_000_000.0,
                range: 100.0,
                color: Color::srgb_u8(0xFF, 0xF8, 0xE7),
                shadows_enabled: false,
                ..default()
            });
        });
}

/// Additive, unlit, visible from inside.
fn glow_material(color: Color, alpha: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(alpha),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        cull_mode: None,
        ..default()
    }
}

fn body_material(body: &BodyData) -> StandardMaterial {
    let color = body.render_color();
    let (roughness, metallic) = if body.is_gas_giant() {
        (0.4, 0.1)
    } else {
        (0.7, 0.2)
    };
    StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 0.1,
        perceptual_roughness: roughness,
        metallic,
        ..default()
    }
}

/// Give newly spawned bodies their meshes.
fn attach_body_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<BodyCatalog>,
    added: Query<(Entity, &OrbitingBody), Added<OrbitingBody>>,
) {
    for (entity, orbiting) in added.iter() {
        let Some(body) = catalog.get(orbiting.id.as_str()) else {
            continue;
        };

        let sphere = meshes.add(Sphere::new(body.radius).mesh().uv(64, 32));
        let material = materials.add(body_material(body));

        let atmosphere = body.has_atmosphere().then(|| {
            (
                meshes.add(Sphere::new(body.radius)),
                materials.add(glow_material(body.render_color(), 0.15)),
            )
        });

        let rings = body.has_ring.then(|| {
            (
                meshes.add(Annulus::new(body.radius * 1.4, body.radius * 2.2)),
                materials.add(StandardMaterial {
                    base_color: Color::srgb_u8(0xC5, 0xAB, 0x6E).with_alpha(0.8),
                    alpha_mode: AlphaMode::Blend,
                    cull_mode: None,
                    double_sided: true,
                    ..default()
                }),
                meshes.add(Annulus::new(body.radius * 1.5, body.radius * 1.6)),
                materials.add(StandardMaterial {
                    base_color: Color::srgb_u8(0x44, 0x44, 0x44).with_alpha(0.5),
                    unlit: true,
                    alpha_mode: AlphaMode::Blend,
                    cull_mode: None,
                    double_sided: true,
                    ..default()
                }),
            )
        });

        commands.entity(entity).with_children(|parent| {
            parent.spawn((SpinningMesh, Mesh3d(sphere), MeshMaterial3d(material)));

            if let Some((mesh, material)) = atmosphere {
                parent.spawn((
                    AtmosphereGlow,
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::from_scale(Vec3::splat(1.2)),
                ));
            }

            if let Some((main, main_material, gap, gap_material)) = rings {
                // Annulus meshes lie in XY; lay them down and tilt.
                let tilt = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2 + RING_TILT);
                parent.spawn((
                    Mesh3d(main),
                    MeshMaterial3d(main_material),
                    Transform::from_rotation(tilt),
                ));
                parent.spawn((
                    Mesh3d(gap),
                    MeshMaterial3d(gap_material),
                    Transform::from_rotation(tilt),
                ));
            }
        });
    }
}
