//! Combat resolver: turns host-reported contact pairs into health, score,
//! and removal effects.
//!
//! Contact events arrive with public `u64` ids; ids that no longer name a
//! live entity are dropped silently. Destruction is guarded by the
//! `destroyed` flag, so a second kill attempt is a no-op. Every life-loss
//! path funnels through [`player_hit`].

use std::collections::VecDeque;

use hecs::{Entity, World};

use novastorm_core::components::*;
use novastorm_core::constants::*;
use novastorm_core::contacts::ContactEvent;
use novastorm_core::enums::{BossPhase, EnemyArchetype, ProjectileOrigin};
use novastorm_core::events::GameEvent;

use novastorm_ai::profiles::get_profile;

use crate::clock::{TaskClock, TaskKey};
use crate::engine::Task;
use crate::world_setup::{entity_from_id, entity_id, spawn_projectile};

/// Lives, score, and temporary power-up state. The engine owns one per
/// encounter and exposes it through the snapshot's player view.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub lives: u32,
    pub score: u64,
    pub score_multiplier: u32,
    pub shield: bool,
    pub invulnerable: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            lives: PLAYER_START_LIVES,
            score: 0,
            score_multiplier: 1,
            shield: false,
            invulnerable: false,
        }
    }
}

/// Drain and resolve all queued contact events.
#[allow(clippy::too_many_arguments)]
pub fn resolve_contacts(
    world: &mut World,
    contacts: &mut VecDeque<ContactEvent>,
    player: &mut PlayerState,
    clock: &mut TaskClock<Task>,
    boss_pattern_count: usize,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    while let Some(contact) = contacts.pop_front() {
        match contact {
            ContactEvent::ShotHitEnemy { enemy_id } => {
                shot_hit_enemy(world, enemy_id, player, events, despawn);
            }
            ContactEvent::ShotHitBoss { boss_id } => {
                shot_hit_boss(world, boss_id, player, clock, boss_pattern_count, events);
            }
            ContactEvent::PlayerTouchedEnemy { enemy_id } => {
                player_touched_enemy(world, enemy_id, player, clock, events, despawn);
            }
            ContactEvent::HazardHitPlayer { hazard_id } => {
                hazard_hit_player(world, hazard_id, player, clock, events, despawn);
            }
        }
    }
}

fn shot_hit_enemy(
    world: &mut World,
    enemy_id: u64,
    player: &mut PlayerState,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    let Some(entity) = entity_from_id(enemy_id) else {
        return;
    };
    let archetype = match live_archetype(world, entity) {
        Some(a) => a,
        None => return,
    };

    let remaining = {
        let Ok(mut health) = world.get::<&mut Health>(entity) else {
            return;
        };
        health.current = (health.current - 1).max(0);
        health.current
    };

    if remaining > 0 {
        events.push(GameEvent::EnemyDamaged {
            id: entity_id(entity),
            remaining,
        });
    } else if archetype == EnemyArchetype::Mine {
        detonate_mine(world, entity, events, despawn);
    } else {
        destroy_enemy(world, entity, true, player, events, despawn);
    }
}

fn shot_hit_boss(
    world: &mut World,
    boss_id: u64,
    player: &mut PlayerState,
    clock: &mut TaskClock<Task>,
    boss_pattern_count: usize,
    events: &mut Vec<GameEvent>,
) {
    let Some(entity) = entity_from_id(boss_id) else {
        return;
    };
    let Ok((health, boss)) = world.query_one_mut::<(&mut Health, &mut BossState)>(entity) else {
        return;
    };

    health.current = (health.current - 1).max(0);
    if health.current > 0 {
        let remaining = health.current;
        events.push(GameEvent::BossDamaged { remaining });
        return;
    }

    // The defeated transition is only evaluated while Active, and the
    // phase write makes it fire exactly once no matter how many contacts
    // land in the emptying tick.
    if boss.phase != BossPhase::Active {
        return;
    }
    boss.phase = BossPhase::Defeated;
    let points = boss.points;

    player.score += points as u64 * player.score_multiplier as u64;
    events.push(GameEvent::BossPhaseChanged {
        phase: BossPhase::Defeated,
    });
    events.push(GameEvent::BossDefeated { points });

    for slot in 0..boss_pattern_count {
        clock.cancel(TaskKey::BossAttack(slot));
    }
    clock.after(
        BOSS_DEFEAT_PULSE_GAP_SECS,
        TaskKey::BossDefeat,
        Task::BossDefeatPulse { step: 1 },
    );
}

fn player_touched_enemy(
    world: &mut World,
    enemy_id: u64,
    player: &mut PlayerState,
    clock: &mut TaskClock<Task>,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    let Some(entity) = entity_from_id(enemy_id) else {
        return;
    };
    let archetype = match live_archetype(world, entity) {
        Some(a) => a,
        None => return,
    };

    // Mines detonate on contact no matter what; the shield only decides
    // whether the player loses a life.
    if archetype == EnemyArchetype::Mine {
        detonate_mine(world, entity, events, despawn);
    } else {
        destroy_enemy(world, entity, false, player, events, despawn);
    }

    if player.invulnerable || player.shield {
        events.push(GameEvent::ShieldAbsorbed);
    } else {
        player_hit(player, clock, events);
    }
}

fn hazard_hit_player(
    world: &mut World,
    hazard_id: u64,
    player: &mut PlayerState,
    clock: &mut TaskClock<Task>,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    let Some(entity) = entity_from_id(hazard_id) else {
        return;
    };
    // Only live hazard projectiles count; stale ids are dropped.
    let is_hazard = world
        .get::<&Projectile>(entity)
        .map(|p| {
            matches!(
                p.origin,
                ProjectileOrigin::Enemy | ProjectileOrigin::Boss | ProjectileOrigin::Shrapnel
            )
        })
        .unwrap_or(false);
    if !is_hazard {
        return;
    }
    despawn.push(entity);

    if player.invulnerable || player.shield {
        events.push(GameEvent::ShieldAbsorbed);
    } else {
        player_hit(player, clock, events);
    }
}

/// The single life-loss procedure: decrement lives, reset temporary
/// power-up state, re-arm the invulnerability window (last-writer-wins).
pub fn player_hit(player: &mut PlayerState, clock: &mut TaskClock<Task>, events: &mut Vec<GameEvent>) {
    player.lives = player.lives.saturating_sub(1);
    player.score_multiplier = 1;
    player.shield = false;
    player.invulnerable = true;
    clock.after(INVULN_SECS, TaskKey::Invulnerability, Task::InvulnerabilityEnd);
    events.push(GameEvent::PlayerHit {
        lives_remaining: player.lives,
    });
}

/// Standard destruction: mark destroyed, optionally award points, emit the
/// event, queue the despawn. Idempotent through the `destroyed` guard.
pub fn destroy_enemy(
    world: &mut World,
    entity: Entity,
    award_points: bool,
    player: &mut PlayerState,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    if !claim_destruction(world, entity) {
        return;
    }
    let Some(archetype) = archetype_of(world, entity) else {
        return;
    };

    let points = if award_points {
        get_profile(archetype).points * player.score_multiplier
    } else {
        0
    };
    player.score += points as u64;

    events.push(GameEvent::EnemyDestroyed {
        id: entity_id(entity),
        archetype,
        points,
    });
    despawn.push(entity);
}

/// Mine death: no points, a detonation event, and a radial shrapnel burst.
/// Idempotent through the same `destroyed` guard.
pub fn detonate_mine(
    world: &mut World,
    entity: Entity,
    events: &mut Vec<GameEvent>,
    despawn: &mut Vec<Entity>,
) {
    if !claim_destruction(world, entity) {
        return;
    }
    let Ok(position) = world.get::<&Position>(entity).map(|p| p.0) else {
        return;
    };

    events.push(GameEvent::MineDetonated {
        id: entity_id(entity),
        position,
    });
    for k in 0..SHRAPNEL_COUNT {
        let angle = std::f32::consts::TAU * k as f32 / SHRAPNEL_COUNT as f32;
        let velocity = SHRAPNEL_SPEED * glam::Vec2::new(angle.cos(), angle.sin());
        spawn_projectile(world, position, velocity, ProjectileOrigin::Shrapnel);
    }
    despawn.push(entity);
}

/// Flip the `destroyed` flag if this caller is the first writer.
fn claim_destruction(world: &mut World, entity: Entity) -> bool {
    match world.get::<&mut Lifecycle>(entity) {
        Ok(mut lc) => {
            if lc.destroyed {
                false
            } else {
                lc.destroyed = true;
                true
            }
        }
        Err(_) => false,
    }
}

fn archetype_of(world: &World, entity: Entity) -> Option<EnemyArchetype> {
    world
        .get::<&BehaviorState>(entity)
        .ok()
        .map(|b| b.archetype)
}

/// Archetype of a live (spawned, not yet destroyed) enemy.
fn live_archetype(world: &World, entity: Entity) -> Option<EnemyArchetype> {
    let destroyed = world.get::<&Lifecycle>(entity).ok()?.destroyed;
    if destroyed {
        return None;
    }
    archetype_of(world, entity)
}
