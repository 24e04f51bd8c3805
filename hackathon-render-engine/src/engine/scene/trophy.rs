use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::{mesh::PrimitiveTopology, view::NoFrustumCulling};
use std::f32::consts::{PI, TAU};

use crate::engine::motion::scroll::ScrollState;
use crate::engine::scene::particles::spawn_fireworks;
use constants::motion::{
    EMITTER_SPIN_RATE, RIG_DROP, RIG_RETREAT, RIG_SCROLL_RANGE, RIG_TILT, TROPHY_CUP_BASE_RADIUS,
    TROPHY_CUP_BULGE, TROPHY_POINT_COUNT, TROPHY_RING_FRACTION, TROPHY_RING_RADIUS, TROPHY_SCALE,
    TROPHY_TILT,
};
use constants::palette::TROPHY_GOLD;

/// Root of the trophy group; scroll-linked motion is applied here.
#[derive(Component)]
pub struct TrophyRig {
    pub base_y: f32,
    pub base_z: f32,
}

/// Inner group spinning at a constant rate, carrying the trophy points and
/// the firework emitter.
#[derive(Component)]
pub struct TrophySpinner;

#[derive(Component)]
pub struct TrophyPoints;

/// Trophy silhouette from a closed-form parametric curve: a base ring
/// followed by a tapering spiral forming the cup. Generated once, never
/// mutated afterwards.
pub fn generate_trophy_points() -> Vec<[f32; 3]> {
    let total = TROPHY_POINT_COUNT;
    let ring_count = total as f32 * TROPHY_RING_FRACTION;
    let cup_count = total as f32 * (1.0 - TROPHY_RING_FRACTION);
    let mut points = Vec::with_capacity(total);

    for i in 0..total {
        if (i as f32) < ring_count {
            let angle = i as f32 / ring_count * TAU;
            points.push([
                angle.cos() * TROPHY_RING_RADIUS,
                -0.5,
                angle.sin() * TROPHY_RING_RADIUS,
            ]);
        } else {
            let t = (i as f32 - ring_count) / cup_count;
            let angle = t * TAU;
            let radius = TROPHY_CUP_BASE_RADIUS + (t * PI).sin() * TROPHY_CUP_BULGE;
            points.push([angle.cos() * radius, t - 0.5, angle.sin() * radius]);
        }
    }

    points
}

pub fn create_trophy_mesh() -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, generate_trophy_points());
    mesh
}

/// Spawn the rig -> tilt -> spinner hierarchy with the trophy points and
/// the firework emitter under the spinner, so both share its rotation.
pub fn spawn_trophy(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: TROPHY_GOLD,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let points = commands
        .spawn((
            Mesh3d(meshes.add(create_trophy_mesh())),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            Visibility::Visible,
            NoFrustumCulling,
            TrophyPoints,
        ))
        .id();

    let fireworks = spawn_fireworks(commands, meshes, materials);

    let spinner = commands
        .spawn((TrophySpinner, Transform::IDENTITY, Visibility::default()))
        .id();
    commands.entity(spinner).add_children(&[points, fireworks]);

    let tilt = commands
        .spawn((
            Transform::from_rotation(Quat::from_rotation_z(TROPHY_TILT)),
            Visibility::default(),
        ))
        .id();
    commands.entity(tilt).add_children(&[spinner]);

    let rig = commands
        .spawn((
            TrophyRig {
                base_y: 0.0,
                base_z: 0.0,
            },
            Transform::from_scale(Vec3::splat(TROPHY_SCALE)),
            Visibility::default(),
        ))
        .id();
    commands.entity(rig).add_children(&[tilt]);
}

/// Constant-rate spin of the trophy and emitter group.
pub fn spin_trophy(time: Res<Time>, mut query: Query<&mut Transform, With<TrophySpinner>>) {
    for mut transform in &mut query {
        transform.rotate_y(EMITTER_SPIN_RATE * time.delta_secs());
    }
}

/// Scroll-linked rig motion: as the page scrolls through its range the rig
/// drops, pitches forward, and retreats from the camera.
pub fn rig_scroll_motion(
    scroll: Res<ScrollState>,
    mut query: Query<(&TrophyRig, &mut Transform)>,
) {
    let viewport = scroll.viewport_height();
    if viewport <= 0.0 {
        return;
    }
    let progress = (scroll.offset() / (viewport * RIG_SCROLL_RANGE)).clamp(0.0, 1.0);

    for (rig, mut transform) in &mut query {
        transform.translation.y = rig.base_y - RIG_DROP * progress;
        transform.translation.z = rig.base_z - RIG_RETREAT * progress;
        transform.rotation = Quat::from_rotation_x(RIG_TILT * PI * progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_full_point_budget() {
        assert_eq!(generate_trophy_points().len(), TROPHY_POINT_COUNT);
    }

    #[test]
    fn ring_points_sit_on_the_base_circle() {
        let points = generate_trophy_points();
        let ring_count = (TROPHY_POINT_COUNT as f32 * TROPHY_RING_FRACTION) as usize;
        for point in &points[..ring_count] {
            assert_eq!(point[1], -0.5);
            let radius = (point[0] * point[0] + point[2] * point[2]).sqrt();
            assert!((radius - TROPHY_RING_RADIUS).abs() < 1e-4);
        }
    }

    #[test]
    fn cup_radius_stays_within_the_taper_bounds() {
        let points = generate_trophy_points();
        let ring_count = (TROPHY_POINT_COUNT as f32 * TROPHY_RING_FRACTION) as usize;
        for point in &points[ring_count..] {
            let radius = (point[0] * point[0] + point[2] * point[2]).sqrt();
            assert!(radius >= TROPHY_CUP_BASE_RADIUS - 1e-4);
            assert!(radius <= TROPHY_CUP_BASE_RADIUS + TROPHY_CUP_BULGE + 1e-4);
        }
    }

    #[test]
    fn silhouette_spans_the_unit_height() {
        let points = generate_trophy_points();
        for point in &points {
            assert!(point[1] >= -0.5);
            assert!(point[1] <= 0.5);
        }
    }
}
