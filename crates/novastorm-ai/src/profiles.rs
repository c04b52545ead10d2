//! Archetype-specific stat profiles.
//!
//! Consolidates per-archetype parameters for spawning and the movement FSM.

use novastorm_core::enums::{EnemyArchetype, FormationGroup, MoveState};

/// Stat profile for an enemy archetype.
pub struct ArchetypeProfile {
    /// Hits to destroy. 1 for everything except the Bulwark tank.
    pub max_health: i32,
    /// Nominal speed (field units per second) fed to the movement program.
    pub speed: f32,
    /// Collision footprint radius.
    pub size: f32,
    /// Base point value on destruction, before the score multiplier.
    pub points: u32,
    /// Seconds between shots as a (min, max) range, None for archetypes
    /// that never fire on an interval. Program-driven bursts (docked
    /// enemies) fire regardless of this field.
    pub fire_interval: Option<(f32, f32)>,
    /// Whether shots are aimed at the player rather than straight down.
    pub aimed: bool,
    /// Coordination group used when this archetype leads a formation.
    pub group: FormationGroup,
    /// Movement program for free-flight spawns. Direction fields are
    /// randomized at spawn time.
    pub initial_state: MoveState,
}

/// Get the stat profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> ArchetypeProfile {
    match archetype {
        EnemyArchetype::Dart => ArchetypeProfile {
            max_health: 1,
            speed: 120.0,
            size: 10.0,
            points: 50,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Striker => ArchetypeProfile {
            max_health: 1,
            speed: 90.0,
            size: 12.0,
            points: 80,
            fire_interval: Some((1.6, 2.8)),
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Raider => ArchetypeProfile {
            max_health: 1,
            speed: 85.0,
            size: 12.0,
            points: 120,
            fire_interval: Some((1.8, 3.0)),
            aimed: true,
            group: FormationGroup::Assault,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Wasp => ArchetypeProfile {
            max_health: 1,
            speed: 110.0,
            size: 10.0,
            points: 70,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Scout,
            initial_state: MoveState::Zigzag { dir: 1.0 },
        },
        EnemyArchetype::Hornet => ArchetypeProfile {
            max_health: 1,
            speed: 95.0,
            size: 11.0,
            points: 110,
            fire_interval: Some((1.5, 2.6)),
            aimed: false,
            group: FormationGroup::Scout,
            initial_state: MoveState::Zigzag { dir: 1.0 },
        },
        EnemyArchetype::Viper => ArchetypeProfile {
            max_health: 1,
            speed: 100.0,
            size: 11.0,
            points: 160,
            fire_interval: Some((1.6, 2.8)),
            aimed: true,
            group: FormationGroup::Elite,
            initial_state: MoveState::Zigzag { dir: 1.0 },
        },
        EnemyArchetype::Falcon => ArchetypeProfile {
            max_health: 1,
            speed: 150.0,
            size: 11.0,
            points: 140,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Elite,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Reaper => ArchetypeProfile {
            max_health: 1,
            speed: 105.0,
            size: 13.0,
            points: 220,
            fire_interval: Some((1.2, 2.2)),
            aimed: true,
            group: FormationGroup::Elite,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Spinner => ArchetypeProfile {
            max_health: 1,
            speed: 100.0,
            size: 11.0,
            points: 150,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Spinner,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Gyre => ArchetypeProfile {
            max_health: 1,
            speed: 110.0,
            size: 11.0,
            points: 170,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Spinner,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Vortex => ArchetypeProfile {
            max_health: 1,
            speed: 105.0,
            size: 12.0,
            points: 200,
            fire_interval: Some((2.0, 3.2)),
            aimed: false,
            group: FormationGroup::Spinner,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Commander => ArchetypeProfile {
            max_health: 1,
            speed: 80.0,
            size: 14.0,
            points: 400,
            fire_interval: Some((1.4, 2.4)),
            aimed: true,
            group: FormationGroup::Commander,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Warlord => ArchetypeProfile {
            max_health: 1,
            speed: 75.0,
            size: 15.0,
            points: 500,
            fire_interval: Some((1.1, 2.0)),
            aimed: true,
            group: FormationGroup::Commander,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Bomber => ArchetypeProfile {
            max_health: 1,
            speed: 60.0,
            size: 15.0,
            points: 200,
            fire_interval: Some((1.8, 3.0)),
            aimed: false,
            group: FormationGroup::Bomber,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Hauler => ArchetypeProfile {
            max_health: 1,
            speed: 45.0,
            size: 17.0,
            points: 300,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Bomber,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Devastator => ArchetypeProfile {
            max_health: 1,
            speed: 55.0,
            size: 16.0,
            points: 350,
            fire_interval: Some((1.4, 2.4)),
            aimed: true,
            group: FormationGroup::Bomber,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Bulwark => ArchetypeProfile {
            max_health: 2,
            speed: 50.0,
            size: 16.0,
            points: 300,
            fire_interval: Some((2.2, 3.4)),
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Juggernaut => ArchetypeProfile {
            max_health: 1,
            speed: 40.0,
            size: 18.0,
            points: 380,
            fire_interval: Some((2.0, 3.2)),
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Mine => ArchetypeProfile {
            max_health: 1,
            speed: 30.0,
            size: 10.0,
            points: 100,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::MineDrift { armed: false },
        },
        EnemyArchetype::Seeker => ArchetypeProfile {
            max_health: 1,
            speed: 70.0,
            size: 11.0,
            points: 180,
            fire_interval: Some((1.6, 2.8)),
            aimed: true,
            group: FormationGroup::Scout,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Sentry => ArchetypeProfile {
            max_health: 1,
            speed: 80.0,
            size: 12.0,
            points: 250,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Bomber,
            initial_state: MoveState::Dock { fired: false },
        },
        EnemyArchetype::Warden => ArchetypeProfile {
            max_health: 1,
            speed: 75.0,
            size: 13.0,
            points: 320,
            fire_interval: None,
            aimed: true,
            group: FormationGroup::Bomber,
            initial_state: MoveState::Dock { fired: false },
        },
        EnemyArchetype::Phantom => ArchetypeProfile {
            max_health: 1,
            speed: 90.0,
            size: 11.0,
            points: 220,
            fire_interval: Some((1.8, 3.0)),
            aimed: true,
            group: FormationGroup::Scout,
            initial_state: MoveState::Teleport { jumped: false },
        },
        EnemyArchetype::Specter => ArchetypeProfile {
            max_health: 1,
            speed: 100.0,
            size: 11.0,
            points: 260,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Scout,
            initial_state: MoveState::Teleport { jumped: false },
        },
        EnemyArchetype::Bouncer => ArchetypeProfile {
            max_health: 1,
            speed: 110.0,
            size: 11.0,
            points: 150,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::Bounce { dir: 1.0 },
        },
        EnemyArchetype::Pinball => ArchetypeProfile {
            max_health: 1,
            speed: 130.0,
            size: 10.0,
            points: 180,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::Bounce { dir: 1.0 },
        },
        EnemyArchetype::Sweeper => ArchetypeProfile {
            max_health: 1,
            speed: 120.0,
            size: 12.0,
            points: 180,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Bomber,
            initial_state: MoveState::Sweep { dir: 1.0 },
        },
        EnemyArchetype::Scythe => ArchetypeProfile {
            max_health: 1,
            speed: 110.0,
            size: 12.0,
            points: 240,
            fire_interval: Some((1.6, 2.8)),
            aimed: false,
            group: FormationGroup::Bomber,
            initial_state: MoveState::Sweep { dir: 1.0 },
        },
        EnemyArchetype::Lancer => ArchetypeProfile {
            max_health: 1,
            speed: 170.0,
            size: 10.0,
            points: 200,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Elite,
            initial_state: MoveState::Descend,
        },
        EnemyArchetype::Shade => ArchetypeProfile {
            max_health: 1,
            speed: 85.0,
            size: 10.0,
            points: 140,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Scout,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Drifter => ArchetypeProfile {
            max_health: 1,
            speed: 60.0,
            size: 11.0,
            points: 90,
            fire_interval: None,
            aimed: false,
            group: FormationGroup::Assault,
            initial_state: MoveState::Waver,
        },
        EnemyArchetype::Marauder => ArchetypeProfile {
            max_health: 1,
            speed: 95.0,
            size: 13.0,
            points: 280,
            fire_interval: Some((1.3, 2.3)),
            aimed: true,
            group: FormationGroup::Elite,
            initial_state: MoveState::Zigzag { dir: 1.0 },
        },
        EnemyArchetype::Interdictor => ArchetypeProfile {
            max_health: 1,
            speed: 90.0,
            size: 13.0,
            points: 450,
            fire_interval: Some((1.4, 2.4)),
            aimed: true,
            group: FormationGroup::Commander,
            initial_state: MoveState::Sweep { dir: 1.0 },
        },
        EnemyArchetype::Ravager => ArchetypeProfile {
            max_health: 1,
            speed: 115.0,
            size: 12.0,
            points: 320,
            fire_interval: Some((1.2, 2.2)),
            aimed: true,
            group: FormationGroup::Elite,
            initial_state: MoveState::Zigzag { dir: 1.0 },
        },
    }
}
