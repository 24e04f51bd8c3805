use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::{mesh::PrimitiveTopology, view::NoFrustumCulling};
use rand::Rng;
use std::f32::consts::FRAC_PI_4;

use constants::motion::{STARFIELD_COUNT, STARFIELD_EXTENT, STARFIELD_SPIN_RATE};
use constants::palette::STARFIELD_TINT;

/// Slowly drifting star points behind the trophy.
#[derive(Component)]
pub struct Starfield;

pub fn create_backdrop_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 50.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 1.0, -FRAC_PI_4)),
    ));
}

/// Scatter the starfield once over a fixed cube; positions never change,
/// only the group rotation does.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    rng: &mut impl Rng,
) {
    let positions: Vec<[f32; 3]> = (0..STARFIELD_COUNT)
        .map(|_| {
            [
                rng.random_range(-STARFIELD_EXTENT..STARFIELD_EXTENT),
                rng.random_range(-STARFIELD_EXTENT..STARFIELD_EXTENT),
                rng.random_range(-STARFIELD_EXTENT..STARFIELD_EXTENT),
            ]
        })
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    let material = materials.add(StandardMaterial {
        base_color: STARFIELD_TINT,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Visibility::Visible,
        NoFrustumCulling,
        Starfield,
    ));
}

pub fn spin_starfield(time: Res<Time>, mut query: Query<&mut Transform, With<Starfield>>) {
    for mut transform in &mut query {
        transform.rotate_y(STARFIELD_SPIN_RATE * time.delta_secs());
    }
}
