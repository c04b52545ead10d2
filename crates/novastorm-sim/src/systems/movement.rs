//! Movement system: path followers, free-flight programs, projectiles.
//!
//! Path followers interpolate a precomputed curve over a fixed duration,
//! then either snap into their formation slot or exit the field. Free
//! flyers step their movement program each tick. Formation holders and
//! destroyed entities do not move.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::*;
use novastorm_core::enums::PathMode;
use novastorm_core::events::GameEvent;
use novastorm_core::types::FieldSize;

use novastorm_ai::fsm::{step, MoveContext};
use novastorm_ai::profiles::get_profile;

use crate::systems::combat;
use crate::world_setup::entity_id;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    field: FieldSize,
    player: Option<Vec2>,
    dt: f32,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    follow_paths(world, dt, events, despawn);
    step_programs(world, rng, field, player, dt, events, despawn);

    // Ballistic projectile integration.
    for (_entity, (pos, vel, _proj)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        pos.0 += vel.0 * dt;
    }
}

fn follow_paths(world: &mut World, dt: f32, events: &mut Vec<GameEvent>, despawn: &mut Vec<Entity>) {
    let mut finished: Vec<(Entity, PathMode)> = Vec::new();

    for (entity, (pos, vel, path, lc)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut PathFollow, &Lifecycle)>()
    {
        if lc.destroyed {
            continue;
        }
        path.elapsed += dt;
        let t = (path.elapsed / path.duration).min(1.0);
        let next = sample(&path.waypoints, t);
        if dt > 0.0 {
            vel.0 = (next - pos.0) / dt;
        }
        pos.0 = next;
        if path.elapsed >= path.duration {
            finished.push((entity, path.mode));
        }
    }

    for (entity, mode) in finished {
        match mode {
            PathMode::EntryTo(slot) => {
                let _ = world.remove_one::<PathFollow>(entity);
                if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    pos.0 = slot;
                }
                if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
                    vel.0 = Vec2::ZERO;
                }
                if let Ok(mut lc) = world.get::<&mut Lifecycle>(entity) {
                    if !lc.destroyed {
                        lc.in_formation = true;
                    }
                }
            }
            PathMode::AttackRun => escape(world, entity, events, despawn),
        }
    }
}

fn step_programs(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    field: FieldSize,
    player: Option<Vec2>,
    dt: f32,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    let mut escaped: Vec<Entity> = Vec::new();
    let mut detonated: Vec<Entity> = Vec::new();

    for (entity, (pos, vel, behavior, lc)) in world
        .query_mut::<(&mut Position, &mut Velocity, &mut BehaviorState, &Lifecycle)>()
        .without::<&PathFollow>()
    {
        if lc.destroyed || lc.in_formation {
            vel.0 = Vec2::ZERO;
            continue;
        }

        let profile = get_profile(behavior.archetype);
        let ctx = MoveContext {
            state: behavior.move_state,
            position: pos.0,
            velocity: vel.0,
            speed: profile.speed,
            field,
            player,
            state_secs: behavior.state_secs,
            dt,
        };
        let update = step(&ctx, rng);

        if update.state != behavior.move_state {
            behavior.move_state = update.state;
            behavior.state_secs = 0.0;
        } else {
            behavior.state_secs += dt;
        }

        if update.completed {
            escaped.push(entity);
            continue;
        }
        if update.detonate {
            detonated.push(entity);
            continue;
        }

        if let Some(override_pos) = update.position_override {
            pos.0 = override_pos;
        }
        vel.0 = update.velocity;
        pos.0 += vel.0 * dt;
    }

    for entity in escaped {
        escape(world, entity, events, despawn);
    }
    for entity in detonated {
        combat::detonate_mine(world, entity, events, despawn);
    }
}

/// Mark an entity as having left the field alive. Terminal, first writer
/// wins against combat destruction; re-checked here at fire time.
fn escape(world: &mut World, entity: Entity, events: &mut Vec<GameEvent>, despawn: &mut Vec<Entity>) {
    let Ok(mut lc) = world.get::<&mut Lifecycle>(entity) else {
        return;
    };
    if lc.destroyed {
        return;
    }
    lc.destroyed = true;
    drop(lc);

    events.push(GameEvent::EnemyEscaped {
        id: entity_id(entity),
    });
    despawn.push(entity);
}

/// Sample a waypoint polyline at normalized progress `t`.
fn sample(waypoints: &[Vec2], t: f32) -> Vec2 {
    match waypoints.len() {
        0 => Vec2::ZERO,
        1 => waypoints[0],
        len => {
            let f = t.clamp(0.0, 1.0) * (len - 1) as f32;
            let i = (f as usize).min(len - 2);
            waypoints[i].lerp(waypoints[i + 1], f - i as f32)
        }
    }
}
