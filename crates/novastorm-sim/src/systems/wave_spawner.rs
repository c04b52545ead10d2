//! Wave spawning: consumes the level's ordered wave list over time.
//!
//! One clock task under `TaskKey::WaveSpawn` chains through every member of
//! every wave, so waves are strictly sequential: the next wave's delay
//! starts when the previous wave has spawned (or routed) its last member,
//! never when its members die.

use std::collections::BTreeMap;

use hecs::World;
use rand_chacha::ChaCha8Rng;

use novastorm_core::config::WaveDescriptor;
use novastorm_core::events::GameEvent;
use novastorm_core::types::FieldSize;

use crate::clock::{TaskClock, TaskKey};
use crate::engine::Task;
use crate::formation::Formation;
use crate::systems::{choreographer, gunnery};
use crate::world_setup::{entity_id, spawn_free_enemy};

/// Sequencing state for the level's wave list.
#[derive(Debug)]
pub struct WaveSpawner {
    waves: Vec<WaveDescriptor>,
    all_spawned: bool,
    stopped: bool,
}

impl WaveSpawner {
    pub fn new(waves: Vec<WaveDescriptor>) -> Self {
        Self {
            waves,
            all_spawned: false,
            stopped: false,
        }
    }

    /// Every wave has finished spawning (true immediately for an empty
    /// level).
    pub fn all_spawned(&self) -> bool {
        self.all_spawned
    }

    /// Arm the first wave's delay timer.
    pub fn start(&mut self, clock: &mut TaskClock<Task>) {
        match self.waves.first() {
            Some(wave) => clock.after(
                wave.spawn_delay,
                TaskKey::WaveSpawn,
                Task::SpawnWaveMember { wave: 0, member: 0 },
            ),
            None => self.all_spawned = true,
        }
    }

    /// Cancel all pending future spawns. Used once the boss is triggered.
    pub fn stop(&mut self, clock: &mut TaskClock<Task>) {
        self.stopped = true;
        clock.cancel(TaskKey::WaveSpawn);
    }

    /// Chain to the next wave's delay, or mark the schedule finished.
    fn advance(&mut self, clock: &mut TaskClock<Task>, from: usize) {
        let next = from + 1;
        match self.waves.get(next) {
            Some(wave) => clock.after(
                wave.spawn_delay,
                TaskKey::WaveSpawn,
                Task::SpawnWaveMember {
                    wave: next,
                    member: 0,
                },
            ),
            None => self.all_spawned = true,
        }
    }
}

/// Handle a due spawn task: spawn one member (or route a formation wave
/// whole) and schedule the next step of the chain.
#[allow(clippy::too_many_arguments)]
pub fn on_member_due(
    spawner: &mut WaveSpawner,
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut TaskClock<Task>,
    formations: &mut BTreeMap<u32, Formation>,
    next_formation_id: &mut u32,
    field: FieldSize,
    events: &mut Vec<GameEvent>,
    wave_idx: usize,
    member_idx: usize,
) {
    if spawner.stopped {
        return;
    }
    let Some(wave) = spawner.waves.get(wave_idx).cloned() else {
        return;
    };

    if member_idx == 0 {
        events.push(GameEvent::WaveStarted { index: wave_idx });
    }

    if let Some(descriptor) = &wave.formation {
        if descriptor.count > 0 && !wave.members.is_empty() {
            choreographer::route_wave(
                clock,
                formations,
                next_formation_id,
                &wave,
                descriptor,
                field,
            );
        }
        spawner.advance(clock, wave_idx);
        return;
    }

    match wave.members.get(member_idx) {
        Some(&archetype) => {
            let entity = spawn_free_enemy(world, rng, archetype, field);
            gunnery::schedule_fire(clock, rng, entity, archetype);
            events.push(GameEvent::EnemySpawned {
                id: entity_id(entity),
                archetype,
            });
            if member_idx + 1 < wave.members.len() {
                clock.after(
                    wave.spawn_interval,
                    TaskKey::WaveSpawn,
                    Task::SpawnWaveMember {
                        wave: wave_idx,
                        member: member_idx + 1,
                    },
                );
            } else {
                spawner.advance(clock, wave_idx);
            }
        }
        // Empty wave: spawn nothing, keep sequencing.
        None => spawner.advance(clock, wave_idx),
    }
}
