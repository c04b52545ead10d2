//! Formation choreography: entry staggering, assembly polling, and the
//! group-specific attack release.
//!
//! A routed wave becomes a `Formation` whose members spawn on staggered
//! entry tasks, fly a curve into their slots, and hold until every member
//! has arrived or died. The attack delay then arms once, and the attack
//! fires exactly once, coordinated by the lead archetype's group.

use std::collections::BTreeMap;

use hecs::World;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::{BehaviorState, Lifecycle, PathFollow, Position};
use novastorm_core::config::{FormationDescriptor, WaveDescriptor};
use novastorm_core::constants::*;
use novastorm_core::enums::{AttackPatternKind, FormationGroup, MoveState, PathMode};
use novastorm_core::events::GameEvent;
use novastorm_core::types::FieldSize;

use novastorm_ai::profiles::get_profile;
use novastorm_paths::attack_path;

use crate::clock::{TaskClock, TaskKey};
use crate::engine::Task;
use crate::formation::{is_live, Formation};
use crate::systems::gunnery;
use crate::world_setup::{entity_id, spawn_formation_member};

/// Turn a formation wave into a `Formation` and schedule its staggered
/// entry spawns. Slot archetypes cycle through the wave's member list.
pub fn route_wave(
    clock: &mut TaskClock<Task>,
    formations: &mut BTreeMap<u32, Formation>,
    next_id: &mut u32,
    wave: &WaveDescriptor,
    descriptor: &FormationDescriptor,
    field: FieldSize,
) {
    let slots = novastorm_paths::layout_positions(
        descriptor.pattern,
        descriptor.count,
        field.center_x(),
        FORMATION_ANCHOR_FRACTION * field.height,
        descriptor.spacing,
    );
    let planned: Vec<_> = (0..slots.len())
        .map(|i| wave.members[i % wave.members.len()])
        .collect();
    let group = get_profile(planned[0]).group;

    let id = *next_id;
    *next_id += 1;

    for slot in 0..slots.len() {
        clock.after(
            slot as f32 * ENTRY_STAGGER_SECS,
            TaskKey::FormationEntry(id, slot),
            Task::FormationEntry {
                formation: id,
                slot,
            },
        );
    }

    let members = vec![None; slots.len()];
    formations.insert(
        id,
        Formation {
            id,
            pattern: descriptor.pattern,
            group,
            slots,
            planned,
            members,
            attack_delay: descriptor.attack_delay,
            created_at: clock.now(),
            assembled: false,
            attacked: false,
        },
    );
}

/// Handle a due entry task: spawn the member for one slot with its entry
/// flight.
#[allow(clippy::too_many_arguments)]
pub fn on_entry_due(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut TaskClock<Task>,
    formations: &mut BTreeMap<u32, Formation>,
    field: FieldSize,
    events: &mut Vec<GameEvent>,
    id: u32,
    slot: usize,
) {
    let Some(formation) = formations.get_mut(&id) else {
        return;
    };
    let Some(&slot_pos) = formation.slots.get(slot) else {
        return;
    };
    let archetype = formation.planned[slot];

    let entity = spawn_formation_member(world, rng, archetype, id, slot_pos, field);
    gunnery::schedule_fire(clock, rng, entity, archetype);
    formation.members[slot] = Some(entity);

    events.push(GameEvent::EnemySpawned {
        id: entity_id(entity),
        archetype,
    });
}

/// Per-tick poll: purge completed formations and arm the attack delay the
/// moment every member has arrived or died.
pub fn poll(
    world: &World,
    formations: &mut BTreeMap<u32, Formation>,
    clock: &mut TaskClock<Task>,
    events: &mut Vec<GameEvent>,
) {
    let done: Vec<u32> = formations
        .values()
        .filter(|f| f.completed(world))
        .map(|f| f.id)
        .collect();
    for id in done {
        if let Some(formation) = formations.remove(&id) {
            clock.cancel(TaskKey::FormationAttack(id));
            for slot in 0..formation.slots.len() {
                clock.cancel(TaskKey::FormationEntry(id, slot));
                clock.cancel(TaskKey::MemberLaunch(id, slot));
            }
        }
    }

    for formation in formations.values_mut() {
        if !formation.assembled && !formation.attacked && formation.all_arrived(world) {
            formation.assembled = true;
            events.push(GameEvent::FormationAssembled {
                formation: formation.id,
            });
            clock.after(
                formation.attack_delay,
                TaskKey::FormationAttack(formation.id),
                Task::FormationAttack {
                    formation: formation.id,
                },
            );
        }
    }
}

/// Release the formation's attack. Fires once per formation.
pub fn on_attack_due(
    world: &mut World,
    formations: &mut BTreeMap<u32, Formation>,
    clock: &mut TaskClock<Task>,
    events: &mut Vec<GameEvent>,
    id: u32,
) {
    let Some(formation) = formations.get_mut(&id) else {
        return;
    };
    if formation.attacked {
        return;
    }
    formation.attacked = true;
    events.push(GameEvent::FormationAttack { formation: id });

    use AttackPatternKind::*;
    match formation.group {
        FormationGroup::Assault => {
            stagger(world, clock, formation, ASSAULT_LAUNCH_GAP_SECS, &[Dive, Loop, Swoop]);
        }
        FormationGroup::Elite => {
            stagger(world, clock, formation, ELITE_LAUNCH_GAP_SECS, &[Dive, Loop]);
        }
        FormationGroup::Scout => {
            stagger(world, clock, formation, SCOUT_LAUNCH_GAP_SECS, &[Dive]);
        }
        FormationGroup::Bomber => {
            stagger(world, clock, formation, BOMBER_LAUNCH_GAP_SECS, &[Dive, Swoop]);
        }
        FormationGroup::Commander => {
            // Two halves by index, launched together, 1s apart, all waves.
            let half = formation.slots.len().div_ceil(2);
            for (slot, member) in formation.members.iter().enumerate() {
                if member.is_none() {
                    continue;
                }
                let delay = if slot < half {
                    0.0
                } else {
                    COMMANDER_HALF_GAP_SECS
                };
                clock.after(
                    delay,
                    TaskKey::MemberLaunch(id, slot),
                    Task::LaunchMember {
                        formation: id,
                        slot,
                        kind: Wave,
                    },
                );
            }
        }
        FormationGroup::Spinner => {
            // Synchronized orbit around the centroid first; the spiral
            // launch comes when the orbit timer elapses.
            let center = formation.centroid();
            for (slot, member) in formation.members.iter().enumerate() {
                let Some(entity) = *member else {
                    continue;
                };
                let Ok((behavior, lifecycle)) =
                    world.query_one_mut::<(&mut BehaviorState, &mut Lifecycle)>(entity)
                else {
                    continue;
                };
                if lifecycle.destroyed {
                    continue;
                }
                lifecycle.in_formation = false;
                let rel = formation.slots[slot] - center;
                behavior.move_state = MoveState::Orbit {
                    center,
                    phase: rel.y.atan2(rel.x),
                };
                behavior.state_secs = 0.0;
            }
            clock.after(
                SPINNER_ORBIT_SECS,
                TaskKey::FormationAttack(id),
                Task::SpinnerSpiral { formation: id },
            );
        }
    }
}

/// Launch one member on its attack run. A task firing for a destroyed or
/// despawned member is a silent no-op.
#[allow(clippy::too_many_arguments)]
pub fn on_launch_due(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    formations: &BTreeMap<u32, Formation>,
    field: FieldSize,
    id: u32,
    slot: usize,
    kind: AttackPatternKind,
) {
    let Some(formation) = formations.get(&id) else {
        return;
    };
    let Some(Some(entity)) = formation.members.get(slot).copied() else {
        return;
    };
    launch(world, rng, field, entity, kind);
}

/// The spinner orbit has run its course: every surviving member spirals
/// down together from wherever the orbit left it.
pub fn on_spinner_spiral(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    formations: &BTreeMap<u32, Formation>,
    field: FieldSize,
    id: u32,
) {
    let Some(formation) = formations.get(&id) else {
        return;
    };
    for member in formation.members.iter().flatten() {
        launch(world, rng, field, *member, AttackPatternKind::Spiral);
    }
}

fn launch(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    field: FieldSize,
    entity: hecs::Entity,
    kind: AttackPatternKind,
) {
    if !is_live(world, entity) {
        return;
    }
    if let Ok(mut lifecycle) = world.get::<&mut Lifecycle>(entity) {
        lifecycle.in_formation = false;
    }
    let Ok(start) = world.get::<&Position>(entity).map(|p| p.0) else {
        return;
    };
    let path = attack_path(kind, start, field, rng);
    let _ = world.insert_one(entity, PathFollow::new(path, ATTACK_RUN_SECS, PathMode::AttackRun));
}

/// Schedule one launch per surviving member, `gap` seconds apart in
/// survivor order, cycling the given attack kinds. Slots emptied by combat
/// leave no hole in the launch rhythm.
fn stagger(
    world: &World,
    clock: &mut TaskClock<Task>,
    formation: &Formation,
    gap: f32,
    kinds: &[AttackPatternKind],
) {
    let mut order = 0;
    for (slot, member) in formation.members.iter().enumerate() {
        let Some(entity) = *member else {
            continue;
        };
        if !is_live(world, entity) {
            continue;
        }
        clock.after(
            order as f32 * gap,
            TaskKey::MemberLaunch(formation.id, slot),
            Task::LaunchMember {
                formation: formation.id,
                slot,
                kind: kinds[order % kinds.len()],
            },
        );
        order += 1;
    }
}
