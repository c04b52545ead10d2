//! Encounter engine — the core of the game.
//!
//! `EncounterEngine` owns the hecs ECS world, the virtual task clock, the
//! seeded RNG, and all encounter state. The host calls `update(dt)` once
//! per frame and gets back a complete snapshot; contact pairs from the
//! host collider are queued with `report_contact` and resolved at the
//! start of the next update. Completely headless, enabling deterministic
//! testing.

use std::collections::{BTreeMap, VecDeque};

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::config::{BossConfig, EncounterConfig, LevelConfig};
use novastorm_core::constants::*;
use novastorm_core::contacts::ContactEvent;
use novastorm_core::enums::{AttackPatternKind, EncounterState};
use novastorm_core::events::GameEvent;
use novastorm_core::snapshot::EncounterSnapshot;
use novastorm_core::types::SimTime;

use crate::clock::{TaskClock, TaskKey};
use crate::formation::Formation;
use crate::levels;
use crate::systems;
use crate::systems::combat::PlayerState;
use crate::systems::wave_spawner::WaveSpawner;
use crate::world_setup;

/// Deferred work dispatched by the engine when its clock task comes due.
#[derive(Debug, Clone, Copy)]
pub enum Task {
    /// Spawn one wave member (or route the wave if it is a formation).
    SpawnWaveMember { wave: usize, member: usize },
    /// Spawn one formation member with its entry flight.
    FormationEntry { formation: u32, slot: usize },
    /// A formation's attack delay has elapsed.
    FormationAttack { formation: u32 },
    /// Launch one formation member on its attack run.
    LaunchMember {
        formation: u32,
        slot: usize,
        kind: AttackPatternKind,
    },
    /// A spinner formation's orbit is over; spiral down together.
    SpinnerSpiral { formation: u32 },
    /// One enemy's fire interval elapsed.
    EnemyFire { entity: Entity },
    /// The field stayed clear through the grace period.
    ClearGraceElapsed,
    /// The boss warning period is over.
    BossWarningElapsed,
    /// One boss volley slot fired.
    BossVolley { slot: usize },
    /// One pulse of the boss defeat sequence.
    BossDefeatPulse { step: u8 },
    /// The player's invulnerability window closed.
    InvulnerabilityEnd,
}

/// The encounter engine. Owns the ECS world and all encounter state.
pub struct EncounterEngine {
    config: EncounterConfig,
    world: World,
    time: SimTime,
    state: EncounterState,
    clock: TaskClock<Task>,
    rng: ChaCha8Rng,
    spawner: WaveSpawner,
    formations: BTreeMap<u32, Formation>,
    next_formation_id: u32,
    boss_config: BossConfig,
    player: PlayerState,
    player_pos: Option<Vec2>,
    contacts: VecDeque<ContactEvent>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    grace_armed: bool,
}

impl EncounterEngine {
    /// Start an encounter using the built-in level tables.
    pub fn new(config: EncounterConfig) -> Self {
        let level = levels::for_level(config.level);
        Self::with_level(config, level)
    }

    /// Start an encounter with an explicit level definition (host-supplied
    /// or test-crafted).
    pub fn with_level(config: EncounterConfig, level: LevelConfig) -> Self {
        let mut clock = TaskClock::new(config.time_scale);
        let mut spawner = WaveSpawner::new(level.waves);
        spawner.start(&mut clock);

        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            world: World::new(),
            time: SimTime::default(),
            state: EncounterState::default(),
            clock,
            spawner,
            formations: BTreeMap::new(),
            next_formation_id: 0,
            boss_config: level.boss,
            player: PlayerState::default(),
            player_pos: None,
            contacts: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            grace_armed: false,
            config,
        }
    }

    /// Advance the encounter by one host frame of `dt` wall seconds and
    /// return the resulting snapshot. A paused engine only re-emits the
    /// current state.
    pub fn update(&mut self, dt: f32) -> EncounterSnapshot {
        if !self.clock.is_paused() {
            systems::combat::resolve_contacts(
                &mut self.world,
                &mut self.contacts,
                &mut self.player,
                &mut self.clock,
                self.boss_config.patterns.len(),
                &mut self.events,
                &mut self.despawn_buffer,
            );

            let vdt = self.clock.advance(dt as f64) as f32;
            while let Some((_key, task)) = self.clock.pop_due() {
                self.dispatch(task);
            }

            if vdt > 0.0 {
                self.run_systems(vdt);
                self.time.advance(vdt as f64);
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.state,
            self.config.level,
            &self.formations,
            &self.player,
            events,
        )
    }

    /// Queue a contact pair from the host collider for resolution at the
    /// start of the next update.
    pub fn report_contact(&mut self, contact: ContactEvent) {
        self.contacts.push_back(contact);
    }

    /// Report the player's current position, or `None` while the player
    /// ship is unavailable (aimed fire degrades to straight-down).
    pub fn set_player_position(&mut self, position: Option<Vec2>) {
        self.player_pos = position;
    }

    /// Power-up collaborator surface: the shield is a binary flag.
    pub fn set_shield(&mut self, shield: bool) {
        self.player.shield = shield;
    }

    /// Power-up collaborator surface: score multiplier, at least 1.
    pub fn set_score_multiplier(&mut self, multiplier: u32) {
        self.player.score_multiplier = multiplier.max(1);
    }

    /// Freeze the encounter. Everything waits on the one clock, so all
    /// timers and movement freeze atomically.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Uniform slow-motion factor, clamped to `[0, MAX_TIME_SCALE]`.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.clock.set_rate(scale);
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current virtual time in seconds.
    pub fn virtual_now(&self) -> f64 {
        self.clock.now()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run all per-tick systems in order.
    fn run_systems(&mut self, dt: f32) {
        let field = self.config.field;

        // 1. Movement: path followers, programs, projectiles.
        systems::movement::run(
            &mut self.world,
            &mut self.rng,
            field,
            self.player_pos,
            dt,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 2. Dock bursts.
        systems::gunnery::run(&mut self.world, field, self.player_pos);
        // 3. Boss entry/patrol; volley timers start when entry completes.
        if systems::boss::tick(&mut self.world, field, dt, &mut self.events) {
            self.start_boss_volleys();
        }
        // 4. Formation assembly polling and purge.
        systems::choreographer::poll(
            &self.world,
            &mut self.formations,
            &mut self.clock,
            &mut self.events,
        );
        // 5. Progression.
        systems::director::run(
            &self.world,
            &mut self.state,
            &self.spawner,
            &mut self.clock,
            &mut self.grace_armed,
            &mut self.events,
        );
        // 6. Cleanup (off-field projectiles, buffered despawns).
        systems::cleanup::run(&mut self.world, field, &mut self.despawn_buffer);
    }

    /// Dispatch one due clock task.
    fn dispatch(&mut self, task: Task) {
        let field = self.config.field;
        match task {
            Task::SpawnWaveMember { wave, member } => systems::wave_spawner::on_member_due(
                &mut self.spawner,
                &mut self.world,
                &mut self.rng,
                &mut self.clock,
                &mut self.formations,
                &mut self.next_formation_id,
                field,
                &mut self.events,
                wave,
                member,
            ),
            Task::FormationEntry { formation, slot } => systems::choreographer::on_entry_due(
                &mut self.world,
                &mut self.rng,
                &mut self.clock,
                &mut self.formations,
                field,
                &mut self.events,
                formation,
                slot,
            ),
            Task::FormationAttack { formation } => systems::choreographer::on_attack_due(
                &mut self.world,
                &mut self.formations,
                &mut self.clock,
                &mut self.events,
                formation,
            ),
            Task::LaunchMember {
                formation,
                slot,
                kind,
            } => systems::choreographer::on_launch_due(
                &mut self.world,
                &mut self.rng,
                &self.formations,
                field,
                formation,
                slot,
                kind,
            ),
            Task::SpinnerSpiral { formation } => systems::choreographer::on_spinner_spiral(
                &mut self.world,
                &mut self.rng,
                &self.formations,
                field,
                formation,
            ),
            Task::EnemyFire { entity } => systems::gunnery::on_fire_due(
                &mut self.world,
                &mut self.clock,
                &mut self.rng,
                entity,
                field,
                self.player_pos,
            ),
            Task::ClearGraceElapsed => self.on_clear_grace(),
            Task::BossWarningElapsed => self.on_boss_warning_elapsed(),
            Task::BossVolley { slot } => {
                if let Some(&pattern) = self.boss_config.patterns.get(slot) {
                    systems::boss::on_volley_due(
                        &mut self.world,
                        &mut self.rng,
                        pattern,
                        self.player_pos,
                    );
                }
            }
            Task::BossDefeatPulse { step } => {
                let finished = systems::boss::on_defeat_pulse(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.clock,
                    &mut self.events,
                    step,
                );
                if finished && self.state == EncounterState::BossFight {
                    self.state = EncounterState::Complete;
                    self.events.push(GameEvent::StateChanged { state: self.state });
                    self.events.push(GameEvent::EncounterComplete {
                        level: self.config.level,
                    });
                }
            }
            Task::InvulnerabilityEnd => self.player.invulnerable = false,
        }
    }

    /// The grace window elapsed without a live enemy; re-verify the census
    /// before committing to the boss warning.
    fn on_clear_grace(&mut self) {
        self.grace_armed = false;
        if self.state != EncounterState::AwaitingClear
            || !self.spawner.all_spawned()
            || systems::director::live_enemy_census(&self.world) != 0
        {
            return;
        }

        self.spawner.stop(&mut self.clock);
        self.state = EncounterState::BossWarning;
        self.events.push(GameEvent::StateChanged { state: self.state });
        self.events.push(GameEvent::BossWarningStarted);
        self.clock.after(
            BOSS_WARNING_SECS,
            TaskKey::BossWarning,
            Task::BossWarningElapsed,
        );
    }

    fn on_boss_warning_elapsed(&mut self) {
        if self.state != EncounterState::BossWarning {
            return;
        }
        world_setup::spawn_boss(&mut self.world, &self.boss_config, self.config.field);
        self.state = EncounterState::BossFight;
        self.events.push(GameEvent::BossSpawned {
            max_health: self.boss_config.max_health,
        });
        self.events.push(GameEvent::StateChanged { state: self.state });
    }

    /// One repeating volley task per unlocked pattern, each on its own
    /// period so the rhythms stay independent.
    fn start_boss_volleys(&mut self) {
        for slot in 0..self.boss_config.patterns.len() {
            let period =
                BOSS_PATTERN_BASE_GAP_SECS + slot as f32 * BOSS_PATTERN_SLOT_OFFSET_SECS;
            self.clock
                .every(period, TaskKey::BossAttack(slot), Task::BossVolley { slot });
        }
    }
}
