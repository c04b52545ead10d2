//! Boss encounter: entry descent, patrol, volley patterns, defeat pulses.
//!
//! The phase machine lives on the `BossState` component. Entry and patrol
//! run per tick; volleys and the defeat sequence run on clock tasks. The
//! defeated transition itself is made by the combat resolver, which is the
//! only writer of boss health.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::{BossState, Position, Velocity};
use novastorm_core::constants::*;
use novastorm_core::enums::{BossAttackPattern, BossPhase, ProjectileOrigin};
use novastorm_core::events::GameEvent;
use novastorm_core::types::FieldSize;

use crate::clock::{TaskClock, TaskKey};
use crate::engine::Task;
use crate::systems::gunnery::shot_direction;
use crate::world_setup::spawn_projectile;

/// Per-tick boss movement. Returns true the tick the boss finishes its
/// entry descent, so the engine can start the volley timers.
pub fn tick(world: &mut World, field: FieldSize, dt: f32, events: &mut Vec<GameEvent>) -> bool {
    let mut activated = false;

    for (_entity, (pos, vel, boss)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut BossState)>()
    {
        match boss.phase {
            BossPhase::Entering => {
                pos.0.y -= BOSS_ENTRY_SPEED * dt;
                vel.0 = Vec2::new(0.0, -BOSS_ENTRY_SPEED);
                if pos.0.y <= boss.rest_y {
                    pos.0.y = boss.rest_y;
                    vel.0 = Vec2::ZERO;
                    boss.phase = BossPhase::Active;
                    activated = true;
                    events.push(GameEvent::BossPhaseChanged {
                        phase: BossPhase::Active,
                    });
                }
            }
            BossPhase::Active => {
                pos.0.x += boss.patrol_dir * boss.speed * dt;
                if pos.0.x <= boss.size {
                    pos.0.x = boss.size;
                    boss.patrol_dir = 1.0;
                } else if pos.0.x >= field.width - boss.size {
                    pos.0.x = field.width - boss.size;
                    boss.patrol_dir = -1.0;
                }
                vel.0 = Vec2::new(boss.patrol_dir * boss.speed, 0.0);
            }
            BossPhase::Defeated => {
                vel.0 = Vec2::ZERO;
            }
        }
    }

    activated
}

/// Fire one volley of the given pattern. No-op unless the boss is Active.
pub fn on_volley_due(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    pattern: BossAttackPattern,
    player: Option<Vec2>,
) {
    let mut shots: Vec<(Vec2, Vec2)> = Vec::new();

    {
        let mut query = world.query::<(&Position, &mut BossState)>();
        let Some((_entity, (pos, boss))) = query.iter().next() else {
            return;
        };
        if boss.phase != BossPhase::Active {
            return;
        }
        let muzzle = pos.0 - Vec2::new(0.0, boss.size);

        match pattern {
            // Five-shot fan centered straight down.
            BossAttackPattern::Spread => {
                for i in 0..5 {
                    let angle = -std::f32::consts::FRAC_PI_2 + (i as f32 - 2.0) * 0.25;
                    shots.push((muzzle, BOSS_SHOT_SPEED * Vec2::new(angle.cos(), angle.sin())));
                }
            }
            // Twelve shots evenly around the full circle.
            BossAttackPattern::Ring => {
                for i in 0..12 {
                    let angle = std::f32::consts::TAU * i as f32 / 12.0;
                    shots.push((muzzle, BOSS_SHOT_SPEED * Vec2::new(angle.cos(), angle.sin())));
                }
            }
            // Three-shot burst toward the player, straight down when the
            // player position is unavailable.
            BossAttackPattern::AimedBurst => {
                let base = shot_direction(muzzle, true, player);
                let base_angle = base.y.atan2(base.x);
                for i in 0..3 {
                    let angle = base_angle + (i as f32 - 1.0) * 0.15;
                    shots.push((muzzle, BOSS_SHOT_SPEED * Vec2::new(angle.cos(), angle.sin())));
                }
            }
            // Shots dropped from random points across the footprint.
            BossAttackPattern::Rain => {
                for _ in 0..6 {
                    let offset = rng.gen_range(-boss.size..boss.size);
                    shots.push((
                        muzzle + Vec2::new(offset, 0.0),
                        BOSS_SHOT_SPEED * Vec2::NEG_Y,
                    ));
                }
            }
            // Two opposed arms that rotate a half step between volleys.
            BossAttackPattern::Helix => {
                for arm in 0..2 {
                    let angle = boss.helix_phase + arm as f32 * std::f32::consts::PI;
                    shots.push((muzzle, BOSS_SHOT_SPEED * Vec2::new(angle.cos(), angle.sin())));
                }
                boss.helix_phase += 0.5;
            }
        }
    }

    for (position, velocity) in shots {
        spawn_projectile(world, position, velocity, ProjectileOrigin::Boss);
    }
}

/// One pulse of the defeat sequence. Returns true on the final pulse,
/// which removes the boss; the director then completes the encounter.
pub fn on_defeat_pulse(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut TaskClock<Task>,
    events: &mut Vec<GameEvent>,
    step: u8,
) -> bool {
    let Some((entity, position, size)) = find_boss(world) else {
        return true;
    };

    let offset = Vec2::new(
        rng.gen_range(-size..size),
        rng.gen_range(-size * 0.5..size * 0.5),
    );
    events.push(GameEvent::BossDefeatPulse {
        position: position + offset,
    });

    if step < BOSS_DEFEAT_PULSES {
        clock.after(
            BOSS_DEFEAT_PULSE_GAP_SECS,
            TaskKey::BossDefeat,
            Task::BossDefeatPulse { step: step + 1 },
        );
        false
    } else {
        let _ = world.despawn(entity);
        true
    }
}

fn find_boss(world: &World) -> Option<(Entity, Vec2, f32)> {
    world
        .query::<(&Position, &BossState)>()
        .iter()
        .next()
        .map(|(entity, (pos, boss))| (entity, pos.0, boss.size))
}
