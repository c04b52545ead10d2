//! Formation bookkeeping.
//!
//! A `Formation` tracks one routed formation wave from entry staggering
//! through assembly to its single attack. Member entities are arena handles
//! into the hecs world; slots that have not spawned yet are `None`.

use glam::Vec2;
use hecs::{Entity, World};

use novastorm_core::components::Lifecycle;
use novastorm_core::enums::{EnemyArchetype, FormationGroup, FormationPattern};

/// One active formation. Owned by the engine in a `BTreeMap` keyed by id,
/// so per-tick iteration order is deterministic.
#[derive(Debug)]
pub struct Formation {
    pub id: u32,
    pub pattern: FormationPattern,
    /// Coordination rules, taken from the lead member's archetype.
    pub group: FormationGroup,
    /// Slot positions from the layout generator, one per member.
    pub slots: Vec<Vec2>,
    /// Archetype per slot, fixed when the wave is routed.
    pub planned: Vec<EnemyArchetype>,
    /// Member entity per slot; `None` until its entry task has fired.
    pub members: Vec<Option<Entity>>,
    /// Seconds between full assembly and the attack.
    pub attack_delay: f32,
    /// Virtual time the formation was routed.
    pub created_at: f64,
    /// Every member has reached its slot or died trying; fires once.
    pub assembled: bool,
    /// The attack has been released; fires once.
    pub attacked: bool,
}

impl Formation {
    /// Every entry task has fired.
    pub fn spawned_all(&self) -> bool {
        self.members.iter().all(Option::is_some)
    }

    /// Mean of the slot positions. Anchor of the spinner orbit.
    pub fn centroid(&self) -> Vec2 {
        if self.slots.is_empty() {
            return Vec2::ZERO;
        }
        self.slots.iter().copied().sum::<Vec2>() / self.slots.len() as f32
    }

    /// Members that are still alive in the world.
    pub fn live_members(&self, world: &World) -> usize {
        self.members
            .iter()
            .flatten()
            .filter(|&&e| is_live(world, e))
            .count()
    }

    /// The formation can be purged: all members spawned, none alive.
    pub fn completed(&self, world: &World) -> bool {
        self.spawned_all() && self.live_members(world) == 0
    }

    /// Every spawned member has either taken its slot or been destroyed.
    pub fn all_arrived(&self, world: &World) -> bool {
        self.spawned_all()
            && self.members.iter().flatten().all(|&e| {
                match world.get::<&Lifecycle>(e) {
                    Ok(lc) => lc.in_formation || lc.destroyed,
                    // Despawned already, counts as destroyed.
                    Err(_) => true,
                }
            })
    }
}

/// Whether an entity handle still names a live, non-destroyed enemy.
pub fn is_live(world: &World, entity: Entity) -> bool {
    world
        .get::<&Lifecycle>(entity)
        .map(|lc| !lc.destroyed)
        .unwrap_or(false)
}
