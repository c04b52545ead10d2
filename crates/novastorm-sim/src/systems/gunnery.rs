//! Enemy fire: interval-driven shots and docked burst fire.
//!
//! Interval fire runs on per-entity clock tasks keyed by public id, so the
//! cadence freezes with the clock and dies with the entity. Dock bursts are
//! program-driven: they fire the moment a docked enemy reaches its line.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::*;
use novastorm_core::constants::*;
use novastorm_core::enums::{EnemyArchetype, MoveState, ProjectileOrigin};
use novastorm_core::types::FieldSize;

use novastorm_ai::profiles::get_profile;

use crate::clock::{TaskClock, TaskKey};
use crate::engine::Task;
use crate::world_setup::{entity_id, spawn_projectile};

/// Arm the fire-interval timer for a freshly spawned enemy, if its
/// archetype fires on an interval at all.
pub fn schedule_fire(
    clock: &mut TaskClock<Task>,
    rng: &mut ChaCha8Rng,
    entity: Entity,
    archetype: EnemyArchetype,
) {
    if let Some((min, max)) = get_profile(archetype).fire_interval {
        let delay = rng.gen_range(min..=max);
        clock.after(
            delay,
            TaskKey::EnemyFire(entity_id(entity)),
            Task::EnemyFire { entity },
        );
    }
}

/// Handle a due fire task: shoot if the enemy is alive and on the field,
/// and re-arm the timer while it lives. A dead enemy's task simply lapses.
pub fn on_fire_due(
    world: &mut World,
    clock: &mut TaskClock<Task>,
    rng: &mut ChaCha8Rng,
    entity: Entity,
    field: FieldSize,
    player: Option<Vec2>,
) {
    let alive = world
        .get::<&Lifecycle>(entity)
        .map(|lc| !lc.destroyed)
        .unwrap_or(false);
    if !alive {
        return;
    }
    let Ok(position) = world.get::<&Position>(entity).map(|p| p.0) else {
        return;
    };
    let Some(archetype) = world.get::<&BehaviorState>(entity).ok().map(|b| b.archetype) else {
        return;
    };

    schedule_fire(clock, rng, entity, archetype);

    // Hold fire while entering from above or after dropping out the bottom.
    if position.y > field.height || position.y < 0.0 {
        return;
    }

    let profile = get_profile(archetype);
    let dir = shot_direction(position, profile.aimed, player);
    let muzzle = position - Vec2::new(0.0, profile.size);
    spawn_projectile(world, muzzle, ENEMY_SHOT_SPEED * dir, ProjectileOrigin::Enemy);
}

/// Per-tick system: docked enemies that reached their line fire one
/// angular burst, then hold and retreat (the program handles the rest).
pub fn run(world: &mut World, field: FieldSize, player: Option<Vec2>) {
    let dock_line = DOCK_FRACTION * field.height;
    let mut bursts: Vec<(Vec2, bool)> = Vec::new();

    for (_entity, (pos, behavior, lc)) in
        world.query_mut::<(&Position, &mut BehaviorState, &Lifecycle)>()
    {
        if lc.destroyed || lc.in_formation {
            continue;
        }
        if matches!(behavior.move_state, MoveState::Dock { fired: false })
            && pos.0.y <= dock_line + 0.5
        {
            behavior.move_state = MoveState::Dock { fired: true };
            behavior.state_secs = 0.0;
            bursts.push((pos.0, get_profile(behavior.archetype).aimed));
        }
    }

    for (position, aimed) in bursts {
        let base = shot_direction(position, aimed, player);
        let base_angle = base.y.atan2(base.x);
        for i in 0..DOCK_BURST_COUNT {
            let spread =
                (i as f32 - (DOCK_BURST_COUNT as f32 - 1.0) / 2.0) * DOCK_BURST_SPREAD;
            let angle = base_angle + spread;
            spawn_projectile(
                world,
                position,
                ENEMY_SHOT_SPEED * Vec2::new(angle.cos(), angle.sin()),
                ProjectileOrigin::Enemy,
            );
        }
    }
}

/// Unit vector toward the player, or straight down when unaimed or the
/// player position is unavailable.
pub fn shot_direction(from: Vec2, aimed: bool, player: Option<Vec2>) -> Vec2 {
    match player {
        Some(target) if aimed => (target - from).normalize_or(Vec2::NEG_Y),
        _ => Vec2::NEG_Y,
    }
}
