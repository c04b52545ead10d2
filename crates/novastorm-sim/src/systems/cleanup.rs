//! Cleanup: reap off-field projectiles and drain the despawn buffer.

use hecs::{Entity, World};

use novastorm_core::components::{Position, Projectile};
use novastorm_core::constants::PROJECTILE_MARGIN;
use novastorm_core::types::FieldSize;

/// Queue off-field projectiles, then despawn everything the systems
/// buffered this tick. Double entries are harmless; the second despawn is
/// ignored.
pub fn run(world: &mut World, field: FieldSize, despawn: &mut Vec<Entity>) {
    for (entity, (pos, _proj)) in world.query_mut::<(&Position, &Projectile)>() {
        let out = pos.0.x < -PROJECTILE_MARGIN
            || pos.0.x > field.width + PROJECTILE_MARGIN
            || pos.0.y < -PROJECTILE_MARGIN
            || pos.0.y > field.height + PROJECTILE_MARGIN;
        if out {
            despawn.push(entity);
        }
    }

    for entity in despawn.drain(..) {
        let _ = world.despawn(entity);
    }
}
