//! Snapshot system: builds the per-update `EncounterSnapshot`.
//!
//! Read-only over the world. Views are sorted by id so identical
//! encounters serialize identically.

use std::collections::BTreeMap;

use hecs::World;

use novastorm_core::components::*;
use novastorm_core::enums::EncounterState;
use novastorm_core::events::GameEvent;
use novastorm_core::snapshot::*;
use novastorm_core::types::SimTime;

use novastorm_ai::profiles::get_profile;

use crate::formation::Formation;
use crate::systems::combat::PlayerState;
use crate::world_setup::entity_id;

pub fn build(
    world: &World,
    time: SimTime,
    state: EncounterState,
    level: u32,
    formations: &BTreeMap<u32, Formation>,
    player: &PlayerState,
    events: Vec<GameEvent>,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time,
        state,
        level,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        boss: build_boss(world),
        formations: build_formations(world, formations),
        player: PlayerView {
            lives: player.lives,
            score: player.score,
            score_multiplier: player.score_multiplier,
            shield: player.shield,
            invulnerable: player.invulnerable,
        },
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Velocity, &Health, &BehaviorState, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, _, _, _, lc))| !lc.destroyed)
        .map(|(entity, (_, pos, vel, health, behavior, lc))| EnemyView {
            id: entity_id(entity),
            archetype: behavior.archetype,
            position: pos.0,
            velocity: vel.0,
            health: health.current,
            size: get_profile(behavior.archetype).size,
            in_formation: lc.in_formation,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (proj, pos, vel))| ProjectileView {
            id: entity_id(entity),
            origin: proj.origin,
            position: pos.0,
            velocity: vel.0,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<(&Position, &Health, &BossState)>()
        .iter()
        .next()
        .map(|(entity, (pos, health, boss))| BossView {
            id: entity_id(entity),
            phase: boss.phase,
            position: pos.0,
            health: health.current,
            max_health: health.max,
            size: boss.size,
        })
}

fn build_formations(world: &World, formations: &BTreeMap<u32, Formation>) -> Vec<FormationView> {
    formations
        .values()
        .map(|f| FormationView {
            id: f.id,
            pattern: f.pattern,
            group: f.group,
            members_alive: f.live_members(world),
            assembled: f.assembled,
            attacked: f.attacked,
        })
        .collect()
}
