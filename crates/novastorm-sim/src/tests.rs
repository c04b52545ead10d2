//! Tests for the task clock, combat resolution, wave sequencing, and the
//! encounter progression machine.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use novastorm_ai::profiles::get_profile;
use novastorm_core::config::{
    BossConfig, EncounterConfig, FormationDescriptor, LevelConfig, WaveDescriptor,
};
use novastorm_core::constants::ATTACK_RUN_SECS;
use novastorm_core::contacts::ContactEvent;
use novastorm_core::enums::{
    BossAttackPattern, BossPhase, EncounterState, EnemyArchetype, FormationPattern,
    ProjectileOrigin,
};
use novastorm_core::events::GameEvent;
use novastorm_core::types::FieldSize;

use crate::clock::{TaskClock, TaskKey};
use crate::engine::EncounterEngine;
use crate::systems::movement;
use crate::world_setup::spawn_projectile;

const DT: f32 = 1.0 / 60.0;

fn seeded(seed: u64, waves: Vec<WaveDescriptor>) -> EncounterEngine {
    let config = EncounterConfig {
        seed,
        ..Default::default()
    };
    let level = LevelConfig {
        level: 1,
        waves,
        boss: test_boss(),
    };
    EncounterEngine::with_level(config, level)
}

fn test_boss() -> BossConfig {
    BossConfig {
        max_health: 3,
        speed: 80.0,
        size: 40.0,
        patterns: vec![BossAttackPattern::Spread],
        points: 1_000,
    }
}

fn plain(members: Vec<EnemyArchetype>, delay: f32, interval: f32) -> WaveDescriptor {
    WaveDescriptor {
        members,
        spawn_delay: delay,
        spawn_interval: interval,
        formation: None,
    }
}

/// Step the engine for `secs` of virtual time, collecting every event.
fn run_secs(engine: &mut EncounterEngine, secs: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let ticks = (secs / DT).round() as u32;
    for _ in 0..ticks {
        events.extend(engine.update(DT).events);
    }
    events
}

fn spawned_ids(events: &[GameEvent]) -> Vec<u64> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::EnemySpawned { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

// ---- Task clock ----

#[test]
fn test_clock_pops_in_deadline_then_registration_order() {
    let mut clock: TaskClock<u32> = TaskClock::new(1.0);
    clock.after(2.0, TaskKey::ClearGrace, 30);
    clock.after(1.0, TaskKey::WaveSpawn, 10);
    clock.after(1.0, TaskKey::BossWarning, 20);

    clock.advance(3.0);
    assert_eq!(clock.pop_due(), Some((TaskKey::WaveSpawn, 10)));
    assert_eq!(clock.pop_due(), Some((TaskKey::BossWarning, 20)));
    assert_eq!(clock.pop_due(), Some((TaskKey::ClearGrace, 30)));
    assert_eq!(clock.pop_due(), None);
}

#[test]
fn test_clock_reregistration_replaces_prior_task() {
    let mut clock: TaskClock<u32> = TaskClock::new(1.0);
    clock.after(1.0, TaskKey::WaveSpawn, 1);
    clock.after(2.0, TaskKey::WaveSpawn, 2);
    // Re-register with an earlier deadline too.
    clock.after(3.0, TaskKey::ClearGrace, 3);
    clock.after(0.5, TaskKey::ClearGrace, 4);

    clock.advance(5.0);
    assert_eq!(
        clock.pop_due(),
        Some((TaskKey::ClearGrace, 4)),
        "Later registration with the earlier deadline should win"
    );
    assert_eq!(clock.pop_due(), Some((TaskKey::WaveSpawn, 2)));
    assert_eq!(clock.pop_due(), None, "Replaced tasks must never fire");
}

#[test]
fn test_clock_cancel_is_idempotent() {
    let mut clock: TaskClock<u32> = TaskClock::new(1.0);
    clock.after(1.0, TaskKey::WaveSpawn, 1);
    assert!(clock.is_scheduled(TaskKey::WaveSpawn));

    clock.cancel(TaskKey::WaveSpawn);
    clock.cancel(TaskKey::WaveSpawn);
    clock.cancel(TaskKey::BossWarning); // never registered

    assert!(!clock.is_scheduled(TaskKey::WaveSpawn));
    clock.advance(2.0);
    assert_eq!(clock.pop_due(), None);
}

#[test]
fn test_clock_repeating_task_fires_each_period() {
    let mut clock: TaskClock<u32> = TaskClock::new(1.0);
    clock.every(1.0, TaskKey::BossAttack(0), 7);

    clock.advance(3.0);
    let mut fired = 0;
    while let Some((key, task)) = clock.pop_due() {
        assert_eq!(key, TaskKey::BossAttack(0));
        assert_eq!(task, 7);
        fired += 1;
    }
    assert_eq!(fired, 3, "Period 1.0 over 3.0 virtual seconds = 3 firings");

    clock.cancel(TaskKey::BossAttack(0));
    clock.advance(5.0);
    assert_eq!(clock.pop_due(), None, "Cancelled repeat must stop");
}

#[test]
fn test_clock_pause_and_rate_clamp() {
    let mut clock: TaskClock<u32> = TaskClock::new(1.0);
    clock.after(1.0, TaskKey::WaveSpawn, 1);

    clock.pause();
    assert_eq!(clock.advance(10.0), 0.0, "Paused clock adds no time");
    assert_eq!(clock.pop_due(), None);

    clock.resume();
    clock.set_rate(10.0);
    assert!((clock.rate() - 4.0).abs() < 1e-12, "Rate clamps to 4.0");
    clock.set_rate(-1.0);
    assert!(clock.rate().abs() < 1e-12, "Rate clamps to 0.0");

    clock.set_rate(2.0);
    let added = clock.advance(1.0);
    assert!((added - 2.0).abs() < 1e-9, "Rate 2.0 doubles virtual time");
    assert_eq!(clock.pop_due(), Some((TaskKey::WaveSpawn, 1)));
}

// ---- Movement ----

#[test]
fn test_projectile_integration() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let field = FieldSize::default();

    spawn_projectile(
        &mut world,
        Vec2::new(100.0, 300.0),
        Vec2::new(0.0, -180.0),
        ProjectileOrigin::Enemy,
    );

    let mut events = Vec::new();
    let mut despawn = Vec::new();
    for _ in 0..60 {
        movement::run(
            &mut world,
            &mut rng,
            field,
            None,
            DT,
            &mut events,
            &mut despawn,
        );
    }

    let mut query = world.query::<(&novastorm_core::components::Position,)>();
    let (_, (pos,)) = query.iter().next().unwrap();
    assert!(
        (pos.0.y - 120.0).abs() < 1.0,
        "After 1s at -180/s from y=300, y should be ~120, got {}",
        pos.0.y
    );
    assert!((pos.0.x - 100.0).abs() < 1e-4);
}

// ---- Wave sequencing ----

#[test]
fn test_waves_spawn_in_strict_sequence() {
    use EnemyArchetype::*;
    let mut engine = seeded(
        7,
        vec![
            plain(vec![Dart, Dart, Dart, Dart], 0.5, 0.2),
            plain(vec![Dart, Dart, Dart], 0.5, 0.2),
            plain(vec![Dart, Dart, Dart, Dart, Dart], 0.5, 0.2),
        ],
    );

    let events = run_secs(&mut engine, 5.0);
    let sequence: Vec<String> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::WaveStarted { index } => Some(format!("W{index}")),
            GameEvent::EnemySpawned { .. } => Some("S".to_string()),
            _ => None,
        })
        .collect();

    let expected: Vec<String> = "W0 S S S S W1 S S S W2 S S S S S"
        .split(' ')
        .map(str::to_string)
        .collect();
    assert_eq!(
        sequence, expected,
        "Waves must spawn strictly sequentially, one member per interval"
    );
}

#[test]
fn test_empty_wave_keeps_sequencing() {
    use EnemyArchetype::*;
    let mut engine = seeded(
        7,
        vec![
            plain(vec![], 0.2, 0.2),
            plain(vec![Dart], 0.2, 0.2),
        ],
    );

    let events = run_secs(&mut engine, 2.0);
    assert_eq!(spawned_ids(&events).len(), 1);
    let wave_starts: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::WaveStarted { index } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(wave_starts, vec![0, 1]);
}

// ---- Combat resolution ----

#[test]
fn test_armored_hull_takes_two_hits() {
    use EnemyArchetype::*;
    let mut engine = seeded(3, vec![plain(vec![Bulwark], 0.2, 0.5)]);
    let events = run_secs(&mut engine, 1.0);
    let id = spawned_ids(&events)[0];

    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });
    let snap = engine.update(DT);
    assert!(
        snap.events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDamaged { remaining: 1, .. })),
        "First hit on a 2-health hull should only damage it"
    );
    assert_eq!(engine.player().score, 0);

    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });
    let snap = engine.update(DT);
    assert!(
        snap.events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDestroyed { .. })),
        "Second hit should destroy"
    );
    assert_eq!(
        engine.player().score,
        get_profile(Bulwark).points as u64,
        "Destruction awards the archetype's base points"
    );
}

#[test]
fn test_destruction_fires_once_for_simultaneous_hits() {
    use EnemyArchetype::*;
    let mut engine = seeded(3, vec![plain(vec![Dart], 0.2, 0.5)]);
    let events = run_secs(&mut engine, 1.0);
    let id = spawned_ids(&events)[0];

    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });
    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });
    let snap = engine.update(DT);

    let destroyed = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1, "Two same-tick kills must resolve to one");
    assert_eq!(engine.player().score, get_profile(Dart).points as u64);
}

#[test]
fn test_score_multiplier_applies_to_kills() {
    use EnemyArchetype::*;
    let mut engine = seeded(3, vec![plain(vec![Dart], 0.2, 0.5)]);
    let events = run_secs(&mut engine, 1.0);
    let id = spawned_ids(&events)[0];

    engine.set_score_multiplier(2);
    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });
    engine.update(DT);

    assert_eq!(engine.player().score, 2 * get_profile(Dart).points as u64);
}

#[test]
fn test_mine_shot_detonates_into_shrapnel() {
    use EnemyArchetype::*;
    let mut engine = seeded(5, vec![plain(vec![Mine], 0.2, 0.5)]);
    let events = run_secs(&mut engine, 2.0);
    let id = spawned_ids(&events)[0];

    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });
    let snap = engine.update(DT);

    assert!(
        snap.events
            .iter()
            .any(|e| matches!(e, GameEvent::MineDetonated { .. })),
        "Shot mine should detonate"
    );
    assert!(
        !snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDestroyed { .. })),
        "Detonation is not a standard destruction"
    );
    assert_eq!(engine.player().score, 0, "Detonated mines award no points");

    let shrapnel = snap
        .projectiles
        .iter()
        .filter(|p| p.origin == ProjectileOrigin::Shrapnel)
        .count();
    assert_eq!(shrapnel, 8, "Detonation spawns a radial burst of 8");
}

// ---- Player hits ----

#[test]
fn test_player_hit_resets_powerups_and_arms_invulnerability() {
    use EnemyArchetype::*;
    let mut engine = seeded(9, vec![plain(vec![Dart, Dart], 0.2, 0.5)]);
    let events = run_secs(&mut engine, 1.0);
    let ids = spawned_ids(&events);
    assert_eq!(ids.len(), 2);

    engine.set_score_multiplier(3);
    engine.report_contact(ContactEvent::PlayerTouchedEnemy { enemy_id: ids[0] });
    let snap = engine.update(DT);

    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PlayerHit { lives_remaining: 2 })));
    assert_eq!(snap.player.lives, 2);
    assert_eq!(snap.player.score_multiplier, 1, "Hit resets the multiplier");
    assert!(snap.player.invulnerable);
    assert_eq!(snap.player.score, 0, "Collision kills award no points");

    // A second collision inside the invulnerability window is absorbed.
    engine.report_contact(ContactEvent::PlayerTouchedEnemy { enemy_id: ids[1] });
    let snap = engine.update(DT);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ShieldAbsorbed)));
    assert_eq!(snap.player.lives, 2, "Absorbed hit costs no life");

    // The window closes on its own.
    run_secs(&mut engine, 2.5);
    let snap = engine.update(DT);
    assert!(!snap.player.invulnerable);
}

#[test]
fn test_shield_absorbs_without_breaking() {
    use EnemyArchetype::*;
    let mut engine = seeded(9, vec![plain(vec![Dart], 0.2, 0.5)]);
    let events = run_secs(&mut engine, 1.0);
    let id = spawned_ids(&events)[0];

    engine.set_shield(true);
    engine.report_contact(ContactEvent::PlayerTouchedEnemy { enemy_id: id });
    let snap = engine.update(DT);

    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ShieldAbsorbed)));
    assert_eq!(snap.player.lives, 3);
    assert!(
        snap.player.shield,
        "Absorbing a hit does not consume the shield flag"
    );
    assert!(
        snap.events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDestroyed { points: 0, .. })),
        "The enemy still dies in the collision, for zero points"
    );
}

// ---- Formations ----

#[test]
fn test_formation_assembles_before_attacking() {
    use EnemyArchetype::*;
    let mut engine = seeded(
        11,
        vec![WaveDescriptor {
            members: vec![Dart],
            spawn_delay: 0.1,
            spawn_interval: 0.0,
            formation: Some(FormationDescriptor {
                pattern: FormationPattern::Line,
                count: 3,
                spacing: 36.0,
                attack_delay: 0.5,
            }),
        }],
    );

    let events = run_secs(&mut engine, 10.0);

    assert_eq!(spawned_ids(&events).len(), 3);
    let assembled_at = events
        .iter()
        .position(|e| matches!(e, GameEvent::FormationAssembled { .. }));
    let attacked_at = events
        .iter()
        .position(|e| matches!(e, GameEvent::FormationAttack { .. }));
    assert!(assembled_at.is_some(), "Formation should assemble");
    assert!(attacked_at.is_some(), "Formation should attack");
    assert!(
        assembled_at < attacked_at,
        "Assembly strictly precedes the attack"
    );

    // All three members launch, run their attack curves, and exit below.
    let escaped = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyEscaped { .. }))
        .count();
    assert_eq!(escaped, 3, "Unopposed attackers exit the field alive");
}

#[test]
fn test_survivors_close_launch_gaps_left_by_losses() {
    use EnemyArchetype::*;
    let mut engine = seeded(
        11,
        vec![WaveDescriptor {
            members: vec![Dart],
            spawn_delay: 0.1,
            spawn_interval: 0.0,
            formation: Some(FormationDescriptor {
                pattern: FormationPattern::Line,
                count: 3,
                spacing: 36.0,
                attack_delay: 0.5,
            }),
        }],
    );

    // Step to full assembly, then shoot the slot-0 member (first spawned).
    let mut first_id = None;
    let mut assembled = false;
    for _ in 0..600 {
        let snap = engine.update(DT);
        if first_id.is_none() {
            first_id = spawned_ids(&snap.events).first().copied();
        }
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::FormationAssembled { .. }))
        {
            assembled = true;
            break;
        }
    }
    assert!(assembled, "Formation should assemble");
    engine.report_contact(ContactEvent::ShotHitEnemy {
        enemy_id: first_id.expect("slot 0 member spawned"),
    });

    // The first surviving member takes the emptied slot's place in the
    // launch rhythm instead of waiting out its own stagger delay, so its
    // attack run starts the moment the attack releases.
    let mut attack_at = None;
    let mut first_escape_at = None;
    for _ in 0..600 {
        let snap = engine.update(DT);
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::FormationAttack { .. }))
        {
            attack_at = Some(engine.virtual_now());
        }
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyEscaped { .. }))
        {
            first_escape_at = Some(engine.virtual_now());
            break;
        }
    }
    let attack_at = attack_at.expect("Formation attack should release");
    let first_escape_at = first_escape_at.expect("A survivor should finish its run");
    assert!(
        (first_escape_at - attack_at - ATTACK_RUN_SECS as f64).abs() < 0.1,
        "First survivor must launch at the release, got a lag of {}",
        first_escape_at - attack_at - ATTACK_RUN_SECS as f64
    );
}

// ---- Progression ----

#[test]
fn test_director_waits_for_field_clear() {
    use EnemyArchetype::*;
    let mut engine = seeded(13, vec![plain(vec![Dart], 0.2, 0.5)]);

    let events = run_secs(&mut engine, 3.0);
    let id = spawned_ids(&events)[0];
    assert_eq!(engine.state(), EncounterState::AwaitingClear);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GameEvent::BossWarningStarted)),
        "A live enemy must hold the boss warning off past the grace period"
    );

    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });
    let events = run_secs(&mut engine, 2.2);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::BossWarningStarted)),
        "Grace period after the last kill should trigger the warning"
    );
    assert_eq!(engine.state(), EncounterState::BossWarning);
}

#[test]
fn test_empty_field_mid_schedule_never_starts_the_boss_warning() {
    use EnemyArchetype::*;
    let mut engine = seeded(
        13,
        vec![
            plain(vec![Dart], 0.2, 0.2),
            // Armed only after wave 0 finishes, so the field sits empty
            // mid-schedule for far longer than the clear grace window.
            plain(vec![Dart], 6.0, 0.2),
        ],
    );

    let events = run_secs(&mut engine, 1.0);
    let id = spawned_ids(&events)[0];
    engine.report_contact(ContactEvent::ShotHitEnemy { enemy_id: id });

    let events = run_secs(&mut engine, 4.0);
    assert_eq!(
        engine.state(),
        EncounterState::SpawningWaves,
        "An unfinished spawn schedule holds the state even at zero enemies"
    );
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GameEvent::BossWarningStarted)),
        "No boss warning while waves are still pending"
    );

    // The pending wave still arrives and the level still finishes normally.
    let events = run_secs(&mut engine, 2.0);
    assert_eq!(spawned_ids(&events).len(), 1);
    assert_eq!(engine.state(), EncounterState::AwaitingClear);
}

#[test]
fn test_empty_level_progresses_to_boss_fight() {
    let mut engine = seeded(17, vec![]);
    let events = run_secs(&mut engine, 9.0);

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::BossWarningStarted)));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::BossSpawned { max_health: 3 })));
    assert_eq!(engine.state(), EncounterState::BossFight);

    let snap = engine.update(DT);
    let boss = snap.boss.expect("Boss should be on the field");
    assert_eq!(boss.phase, BossPhase::Active, "Entry descent should be over");
}

#[test]
fn test_boss_defeat_fires_once_and_completes_the_level() {
    let mut engine = seeded(17, vec![]);
    run_secs(&mut engine, 9.0);
    let snap = engine.update(DT);
    let boss_id = snap.boss.expect("Boss should be on the field").id;

    // More hits in one frame than the boss has health.
    for _ in 0..5 {
        engine.report_contact(ContactEvent::ShotHitBoss { boss_id });
    }
    let snap = engine.update(DT);
    let defeated = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::BossDefeated { .. }))
        .count();
    assert_eq!(defeated, 1, "Defeat must fire exactly once");
    assert_eq!(
        engine.player().score,
        1_000,
        "Boss points land on the defeat"
    );

    let events = run_secs(&mut engine, 3.5);
    let pulses = events
        .iter()
        .filter(|e| matches!(e, GameEvent::BossDefeatPulse { .. }))
        .count();
    assert_eq!(pulses, 8, "Defeat sequence is a fixed pulse chain");
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::EncounterComplete { level: 1 })));
    assert_eq!(engine.state(), EncounterState::Complete);

    let snap = engine.update(DT);
    assert!(snap.boss.is_none(), "The final pulse removes the boss");
}

// ---- Pause and time scale ----

#[test]
fn test_pause_freezes_the_encounter() {
    let mut engine = EncounterEngine::new(EncounterConfig::default());
    run_secs(&mut engine, 1.0);
    assert_eq!(engine.time().tick, 60);

    engine.pause();
    for _ in 0..60 {
        engine.update(DT);
    }
    assert_eq!(engine.time().tick, 60, "No tick advances while paused");
    assert!(engine.is_paused());

    engine.resume();
    run_secs(&mut engine, 1.0);
    assert_eq!(engine.time().tick, 120);
}

#[test]
fn test_time_scale_scales_and_clamps() {
    let mut engine = EncounterEngine::new(EncounterConfig::default());

    engine.set_time_scale(10.0); // clamps to 4.0
    engine.update(0.25);
    assert!(
        (engine.virtual_now() - 1.0).abs() < 1e-6,
        "0.25s at max scale 4.0 should add 1.0 virtual second, got {}",
        engine.virtual_now()
    );

    engine.set_time_scale(-3.0); // clamps to 0.0
    let tick_before = engine.time().tick;
    engine.update(1.0);
    assert_eq!(
        engine.time().tick,
        tick_before,
        "Zero scale adds no virtual time and no tick"
    );
}
