//! Entity spawn factories.
//!
//! Builds the component bundles for enemies, the boss, and projectiles.
//! Spawn positions and program directions are the only randomized inputs;
//! everything else comes from the archetype profile.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::*;
use novastorm_core::config::BossConfig;
use novastorm_core::constants::*;
use novastorm_core::enums::*;
use novastorm_core::types::FieldSize;

use novastorm_ai::profiles::get_profile;

/// Public id form used in snapshots and contact events.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Reverse of [`entity_id`]. `None` for ids that were never valid handles.
pub fn entity_from_id(id: u64) -> Option<Entity> {
    Entity::from_bits(id)
}

/// Spawn a free-flying enemy at the field edge appropriate to its movement
/// program: sweepers enter from a side, everything else from the top.
pub fn spawn_free_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    archetype: EnemyArchetype,
    field: FieldSize,
) -> Entity {
    let profile = get_profile(archetype);
    let dir = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    let (position, move_state) = match profile.initial_state {
        MoveState::Sweep { .. } => {
            // Enter from the side the sweep direction points away from,
            // in the upper third of the field.
            let x = if dir > 0.0 {
                -SPAWN_MARGIN
            } else {
                field.width + SPAWN_MARGIN
            };
            let y = rng.gen_range(0.66 * field.height..0.92 * field.height);
            (Vec2::new(x, y), MoveState::Sweep { dir })
        }
        MoveState::Zigzag { .. } => (top_spawn(rng, field), MoveState::Zigzag { dir }),
        MoveState::Bounce { .. } => (top_spawn(rng, field), MoveState::Bounce { dir }),
        state => (top_spawn(rng, field), state),
    };

    world.spawn((
        Enemy,
        Position(position),
        Velocity::default(),
        Health::full(profile.max_health),
        Lifecycle::default(),
        BehaviorState {
            archetype,
            move_state,
            state_secs: 0.0,
        },
    ))
}

/// Spawn a formation member above the top edge with an entry flight to its
/// slot. The movement program stays idle until the member leaves formation.
pub fn spawn_formation_member(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    archetype: EnemyArchetype,
    formation: u32,
    slot: Vec2,
    field: FieldSize,
) -> Entity {
    let profile = get_profile(archetype);
    let from = top_spawn(rng, field);
    let path = novastorm_paths::entry_path(from, slot);

    world.spawn((
        Enemy,
        Position(from),
        Velocity::default(),
        Health::full(profile.max_health),
        Lifecycle {
            destroyed: false,
            in_formation: false,
            formation: Some(formation),
        },
        BehaviorState {
            archetype,
            move_state: profile.initial_state,
            state_secs: 0.0,
        },
        PathFollow::new(path, ENTRY_FLIGHT_SECS, PathMode::EntryTo(slot)),
    ))
}

/// Spawn the boss above the field, descending to its patrol line.
pub fn spawn_boss(world: &mut World, config: &BossConfig, field: FieldSize) -> Entity {
    world.spawn((
        Position(Vec2::new(
            field.center_x(),
            field.height + config.size + SPAWN_MARGIN,
        )),
        Velocity::default(),
        Health::full(config.max_health),
        BossState {
            phase: BossPhase::Entering,
            patrol_dir: 1.0,
            rest_y: BOSS_REST_FRACTION * field.height,
            speed: config.speed,
            size: config.size,
            points: config.points,
            helix_phase: 0.0,
        },
    ))
}

/// Spawn a hazard projectile.
pub fn spawn_projectile(
    world: &mut World,
    position: Vec2,
    velocity: Vec2,
    origin: ProjectileOrigin,
) -> Entity {
    world.spawn((
        Projectile { origin },
        Position(position),
        Velocity(velocity),
    ))
}

fn top_spawn(rng: &mut ChaCha8Rng, field: FieldSize) -> Vec2 {
    Vec2::new(
        rng.gen_range(WALL_MARGIN..field.width - WALL_MARGIN),
        field.height + SPAWN_MARGIN,
    )
}
