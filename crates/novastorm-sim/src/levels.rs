//! Authored level tables — wave lists and boss parameters per level.
//!
//! Levels 1 through 8 are hand-tuned; beyond 8 the waves repeat the level-8
//! set and the boss scales linearly per `boss_for_level`.

use novastorm_core::config::{BossConfig, FormationDescriptor, LevelConfig, WaveDescriptor};
use novastorm_core::enums::{BossAttackPattern, EnemyArchetype, FormationPattern};

use EnemyArchetype::*;

/// Build the full configuration for a level.
pub fn for_level(level: u32) -> LevelConfig {
    let waves = match level {
        0 | 1 => level_1(),
        2 => level_2(),
        3 => level_3(),
        4 => level_4(),
        5 => level_5(),
        6 => level_6(),
        7 => level_7(),
        _ => level_8(),
    };
    LevelConfig {
        level,
        waves,
        boss: boss_for_level(level),
    }
}

/// Boss parameters. Authored for levels 1-8; beyond that health, size and
/// points grow linearly with `(level - 8)`, speed shrinks to a floor of 40,
/// and the pattern set stays the full level-8 set.
pub fn boss_for_level(level: u32) -> BossConfig {
    use BossAttackPattern::*;

    match level {
        0 | 1 => boss(20, 80.0, 40.0, vec![Spread], 5_000),
        2 => boss(26, 85.0, 42.0, vec![Spread, Ring], 7_000),
        3 => boss(32, 90.0, 44.0, vec![Spread, AimedBurst], 9_000),
        4 => boss(40, 95.0, 46.0, vec![Spread, Ring, AimedBurst], 12_000),
        5 => boss(48, 100.0, 48.0, vec![Ring, Rain], 15_000),
        6 => boss(56, 105.0, 50.0, vec![Spread, Rain, Helix], 18_000),
        7 => boss(66, 110.0, 52.0, vec![Ring, AimedBurst, Helix], 22_000),
        8 => boss(
            80,
            115.0,
            54.0,
            vec![Spread, Ring, AimedBurst, Rain, Helix],
            30_000,
        ),
        n => {
            let over = (n - 8) as f32;
            boss(
                80 + 12 * (n - 8) as i32,
                (115.0 - 5.0 * over).max(40.0),
                54.0 + 2.0 * over,
                vec![Spread, Ring, AimedBurst, Rain, Helix],
                30_000 + 2_500 * (n - 8),
            )
        }
    }
}

fn boss(
    max_health: i32,
    speed: f32,
    size: f32,
    patterns: Vec<BossAttackPattern>,
    points: u32,
) -> BossConfig {
    BossConfig {
        max_health,
        speed,
        size,
        patterns,
        points,
    }
}

/// A plain wave: members spawn free-flying, one per interval.
fn wave(members: Vec<EnemyArchetype>, spawn_delay: f32, spawn_interval: f32) -> WaveDescriptor {
    WaveDescriptor {
        members,
        spawn_delay,
        spawn_interval,
        formation: None,
    }
}

/// A formation wave: the whole wave is routed to the choreographer.
fn formation(
    members: Vec<EnemyArchetype>,
    spawn_delay: f32,
    pattern: FormationPattern,
    count: usize,
    spacing: f32,
    attack_delay: f32,
) -> WaveDescriptor {
    WaveDescriptor {
        members,
        spawn_delay,
        // Entry staggering replaces the interval for formation waves.
        spawn_interval: 0.0,
        formation: Some(FormationDescriptor {
            pattern,
            count,
            spacing,
            attack_delay,
        }),
    }
}

/// Level 1: "First Contact". Plain descenders, one easy line formation.
fn level_1() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Dart, Dart, Dart], 2.0, 0.8),
        wave(vec![Striker, Striker, Dart], 4.0, 0.9),
        formation(vec![Dart], 4.0, FormationPattern::Line, 5, 36.0, 1.5),
        wave(vec![Striker, Raider, Striker], 3.5, 0.8),
    ]
}

/// Level 2: zigzaggers arrive; first V formation.
fn level_2() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Wasp, Wasp, Dart, Dart], 2.0, 0.7),
        formation(vec![Wasp], 3.5, FormationPattern::VShape, 5, 34.0, 1.2),
        wave(vec![Hornet, Striker, Hornet], 3.0, 0.8),
        wave(vec![Drifter, Drifter, Raider], 3.0, 0.9),
        formation(vec![Striker], 4.0, FormationPattern::Arc, 6, 32.0, 1.2),
    ]
}

/// Level 3: mines, sweepers, and the first armored hull.
fn level_3() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Sweeper, Sweeper], 2.0, 1.2),
        wave(vec![Mine, Mine, Mine], 3.0, 1.0),
        formation(vec![Hornet, Wasp], 3.0, FormationPattern::Arrow, 5, 34.0, 1.0),
        wave(vec![Bulwark, Striker, Striker], 3.5, 0.9),
        formation(vec![Falcon], 3.5, FormationPattern::Diamond, 7, 30.0, 1.0),
    ]
}

/// Level 4: spinner packs and teleporters.
fn level_4() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Phantom, Phantom, Wasp], 2.0, 0.8),
        formation(vec![Spinner], 3.0, FormationPattern::Circle, 6, 28.0, 1.0),
        wave(vec![Bouncer, Bouncer, Mine], 3.0, 0.8),
        formation(vec![Viper, Falcon], 3.5, FormationPattern::VShape, 6, 32.0, 0.9),
        wave(vec![Sentry, Scythe, Sentry], 3.0, 1.1),
    ]
}

/// Level 5: commander squadrons and heavier hulls.
fn level_5() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Lancer, Lancer, Shade, Shade], 2.0, 0.6),
        formation(
            vec![Commander, Raider],
            3.0,
            FormationPattern::Box,
            8,
            30.0,
            1.0,
        ),
        wave(vec![Bulwark, Bulwark, Mine, Mine], 3.0, 0.9),
        formation(vec![Gyre], 3.5, FormationPattern::Circle, 8, 26.0, 0.9),
        wave(vec![Marauder, Seeker, Marauder], 3.0, 0.8),
    ]
}

/// Level 6: bomber trains and cross formations.
fn level_6() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Bomber, Hauler, Bomber], 2.0, 1.0),
        formation(vec![Bomber, Devastator], 3.0, FormationPattern::Cross, 9, 30.0, 1.0),
        wave(vec![Specter, Specter, Pinball, Pinball], 3.0, 0.7),
        formation(vec![Wasp, Hornet], 3.0, FormationPattern::Arrow, 7, 32.0, 0.8),
        wave(vec![Warden, Scythe, Warden, Mine], 3.0, 0.9),
    ]
}

/// Level 7: elite raids, everything aimed.
fn level_7() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Reaper, Viper, Reaper], 2.0, 0.7),
        formation(vec![Ravager, Marauder], 3.0, FormationPattern::VShape, 7, 32.0, 0.8),
        wave(vec![Interdictor, Sweeper, Interdictor], 3.0, 1.0),
        formation(vec![Vortex], 3.0, FormationPattern::Circle, 9, 26.0, 0.8),
        wave(vec![Juggernaut, Bulwark, Mine, Mine], 3.0, 0.8),
        formation(
            vec![Warlord, Commander],
            3.5,
            FormationPattern::Diamond,
            9,
            30.0,
            0.8,
        ),
    ]
}

/// Level 8: the full roster.
fn level_8() -> Vec<WaveDescriptor> {
    vec![
        wave(vec![Falcon, Lancer, Falcon, Lancer], 2.0, 0.5),
        formation(vec![Reaper, Ravager], 2.5, FormationPattern::Arrow, 8, 32.0, 0.7),
        wave(vec![Mine, Mine, Mine, Mine], 2.5, 0.6),
        formation(vec![Gyre, Vortex], 3.0, FormationPattern::Circle, 10, 26.0, 0.7),
        wave(vec![Juggernaut, Devastator, Bulwark, Bulwark], 3.0, 0.8),
        formation(
            vec![Warlord, Interdictor],
            3.0,
            FormationPattern::Box,
            10,
            30.0,
            0.7,
        ),
        wave(vec![Phantom, Specter, Seeker, Marauder, Reaper], 3.0, 0.6),
    ]
}
