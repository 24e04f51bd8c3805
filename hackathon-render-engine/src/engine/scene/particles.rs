use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::{mesh::PrimitiveTopology, view::NoFrustumCulling};
use rand::Rng;

use constants::motion::{
    PARTICLE_BASE_LIFETIME, PARTICLE_COUNT, PARTICLE_GRAVITY, PARTICLE_LIFT, PARTICLE_SPREAD,
};
use constants::palette::TROPHY_GOLD;

/// One slot of the firework pool. Slots are reused in place for the whole
/// session; respawn rewrites a slot rather than allocating a new one.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub age: f32,
    pub max_age: f32,
}

impl Particle {
    fn new(rng: &mut impl Rng) -> Self {
        let mut particle = Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            age: 0.0,
            max_age: PARTICLE_BASE_LIFETIME,
        };
        particle.respawn(rng);
        particle
    }

    /// Reset this slot at the origin with a fresh velocity and lifetime.
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.position = Vec3::ZERO;
        self.velocity = Vec3::new(
            (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            rng.random::<f32>() * PARTICLE_LIFT,
            (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
        );
        self.age = 0.0;
        self.max_age = PARTICLE_BASE_LIFETIME + rng.random::<f32>();
    }

    pub fn expired(&self) -> bool {
        self.age > self.max_age
    }
}

/// Fixed-size firework pool behind the hero content.
#[derive(Resource)]
pub struct FireworkPool {
    particles: Vec<Particle>,
}

impl FireworkPool {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::new(rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every slot by one tick: age, respawn expired slots in place,
    /// then integrate position and apply gravity to the vertical velocity.
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            particle.age += dt;
            if particle.expired() {
                particle.respawn(rng);
            }
            particle.position += particle.velocity;
            particle.velocity.y -= PARTICLE_GRAVITY * dt;
        }
    }

    /// Positions in mesh attribute layout.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.particles
            .iter()
            .map(|p| [p.position.x, p.position.y, p.position.z])
            .collect()
    }
}

#[derive(Component)]
pub struct FireworkPoints;

/// Point mesh the pool writes into every frame. Kept readable on the main
/// world so the position attribute can be rewritten.
pub fn create_firework_mesh(count: usize) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0_f32, 0.0, 0.0]; count]);
    mesh
}

pub fn spawn_fireworks(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Entity {
    let material = materials.add(StandardMaterial {
        base_color: TROPHY_GOLD,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(meshes.add(create_firework_mesh(PARTICLE_COUNT))),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            Visibility::Visible,
            NoFrustumCulling,
            FireworkPoints,
        ))
        .id()
}

/// Per-frame pool update feeding the point mesh.
pub fn update_fireworks(
    time: Res<Time>,
    mut pool: ResMut<FireworkPool>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Mesh3d, With<FireworkPoints>>,
) {
    let mut rng = rand::rng();
    pool.advance(time.delta_secs(), &mut rng);

    let Ok(mesh_handle) = query.single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
        return;
    };
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, pool.positions());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn respawn_resets_age_and_draws_positive_lifetime() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut particle = Particle::new(&mut rng);
        for _ in 0..50 {
            particle.age = particle.max_age + 1.0;
            particle.respawn(&mut rng);
            assert_eq!(particle.age, 0.0);
            assert_eq!(particle.position, Vec3::ZERO);
            assert!(particle.max_age > 0.0);
        }
    }

    #[test]
    fn lifetime_draw_stays_within_base_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut particle = Particle::new(&mut rng);
        for _ in 0..100 {
            particle.respawn(&mut rng);
            assert!(particle.max_age >= PARTICLE_BASE_LIFETIME);
            assert!(particle.max_age < PARTICLE_BASE_LIFETIME + 1.0);
        }
    }

    #[test]
    fn pool_size_never_changes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = FireworkPool::new(PARTICLE_COUNT, &mut rng);
        assert_eq!(pool.len(), PARTICLE_COUNT);
        // Long enough for every slot to expire and respawn several times.
        for _ in 0..600 {
            pool.advance(1.0 / 60.0, &mut rng);
        }
        assert_eq!(pool.len(), PARTICLE_COUNT);
    }

    #[test]
    fn gravity_pulls_vertical_velocity_down() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = FireworkPool::new(1, &mut rng);
        let before = pool.particles()[0].velocity.y;
        pool.advance(0.1, &mut rng);
        let after = pool.particles()[0].velocity.y;
        assert!(after < before);
    }

    #[test]
    fn expired_slots_return_to_the_origin_neighbourhood() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pool = FireworkPool::new(4, &mut rng);
        // Step far past the longest possible lifetime in one tick.
        pool.advance(10.0, &mut rng);
        for particle in pool.particles() {
            // One integration step after respawn, so at most one velocity
            // step away from the origin.
            assert!(particle.position.length() <= PARTICLE_SPREAD + PARTICLE_LIFT);
            assert_eq!(particle.age, 0.0);
        }
    }

    #[test]
    fn mesh_carries_one_point_per_slot() {
        let mesh = create_firework_mesh(PARTICLE_COUNT);
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap();
        assert_eq!(positions.len(), PARTICLE_COUNT);
    }
}
