//! Encounter director: progression from wave spawning to level complete.
//!
//! The live-enemy census is recomputed from the world every tick, never
//! cached — an enemy that left the field without an event still stops
//! being counted. The census check only runs in `AwaitingClear`, so
//! completion can never fire while the boss stands alone.

use hecs::World;

use novastorm_core::components::{Enemy, Lifecycle};
use novastorm_core::constants::CLEAR_GRACE_SECS;
use novastorm_core::enums::EncounterState;
use novastorm_core::events::GameEvent;

use crate::clock::{TaskClock, TaskKey};
use crate::engine::Task;
use crate::systems::wave_spawner::WaveSpawner;

/// Per-tick progression check.
pub fn run(
    world: &World,
    state: &mut EncounterState,
    spawner: &WaveSpawner,
    clock: &mut TaskClock<Task>,
    grace_armed: &mut bool,
    events: &mut Vec<GameEvent>,
) {
    if *state == EncounterState::SpawningWaves && spawner.all_spawned() {
        *state = EncounterState::AwaitingClear;
        events.push(GameEvent::StateChanged { state: *state });
    }

    if *state != EncounterState::AwaitingClear {
        return;
    }

    if live_enemy_census(world) == 0 {
        if !*grace_armed {
            *grace_armed = true;
            clock.after(CLEAR_GRACE_SECS, TaskKey::ClearGrace, Task::ClearGraceElapsed);
        }
    } else if *grace_armed {
        // Any live enemy fully resets the grace window.
        *grace_armed = false;
        clock.cancel(TaskKey::ClearGrace);
    }
}

/// Count of live regular enemies. The boss never carries the `Enemy`
/// marker and so is never counted.
pub fn live_enemy_census(world: &World) -> usize {
    world
        .query::<(&Enemy, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, lc))| !lc.destroyed)
        .count()
}
