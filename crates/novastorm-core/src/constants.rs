//! Encounter constants and tuning parameters.

// --- Play field ---

/// Default field width in field units.
pub const FIELD_WIDTH: f32 = 400.0;

/// Default field height in field units.
pub const FIELD_HEIGHT: f32 = 600.0;

/// Enemies spawn this far above the top edge.
pub const SPAWN_MARGIN: f32 = 40.0;

/// Projectiles despawn this far outside the field rectangle.
pub const PROJECTILE_MARGIN: f32 = 20.0;

/// Attack paths terminate at this y, below the bottom edge.
pub const ATTACK_EXIT_Y: f32 = -40.0;

// --- Formations ---

/// Delay between consecutive formation entry spawns (per slot index).
pub const ENTRY_STAGGER_SECS: f32 = 0.2;

/// Flight time of the entry curve from spawn point to slot.
pub const ENTRY_FLIGHT_SECS: f32 = 1.2;

/// Waypoint count of the entry curve.
pub const ENTRY_PATH_POINTS: usize = 16;

/// Formation anchor line as a fraction of field height.
pub const FORMATION_ANCHOR_FRACTION: f32 = 0.82;

// --- Attack runs ---

/// Flight time of a full attack run, regardless of curve length.
pub const ATTACK_RUN_SECS: f32 = 3.5;

/// Launch gap between members of an assault formation.
pub const ASSAULT_LAUNCH_GAP_SECS: f32 = 0.6;

/// Launch gap between members of an elite formation.
pub const ELITE_LAUNCH_GAP_SECS: f32 = 0.2;

/// Launch gap between members of a scout formation.
pub const SCOUT_LAUNCH_GAP_SECS: f32 = 0.3;

/// Launch gap between members of a bomber formation.
pub const BOMBER_LAUNCH_GAP_SECS: f32 = 0.8;

/// Gap between the two halves of a commander formation.
pub const COMMANDER_HALF_GAP_SECS: f32 = 1.0;

/// How long spinner formations orbit before the synchronized spiral.
pub const SPINNER_ORBIT_SECS: f32 = 2.0;

/// Orbit radius around the formation centroid.
pub const SPINNER_ORBIT_RADIUS: f32 = 40.0;

/// Orbit angular rate (radians per second).
pub const SPINNER_ORBIT_RATE: f32 = std::f32::consts::PI;

// --- Director ---

/// The field must stay clear this long before the boss is triggered.
pub const CLEAR_GRACE_SECS: f32 = 2.0;

/// Non-skippable warning period before the boss spawns.
pub const BOSS_WARNING_SECS: f32 = 2.5;

// --- Boss ---

/// Descent speed while the boss is entering.
pub const BOSS_ENTRY_SPEED: f32 = 60.0;

/// Boss patrol line as a fraction of field height.
pub const BOSS_REST_FRACTION: f32 = 0.82;

/// Number of destruction pulses in the defeat sequence.
pub const BOSS_DEFEAT_PULSES: u8 = 8;

/// Gap between defeat pulses. The final pulse removes the boss.
pub const BOSS_DEFEAT_PULSE_GAP_SECS: f32 = 0.3;

/// Base period of a boss volley slot. Each unlocked pattern runs on its
/// own repeating task; per-slot offsets keep the rhythms independent.
pub const BOSS_PATTERN_BASE_GAP_SECS: f32 = 2.4;

/// Additional period per volley slot index.
pub const BOSS_PATTERN_SLOT_OFFSET_SECS: f32 = 0.7;

// --- Player ---

/// Starting lives.
pub const PLAYER_START_LIVES: u32 = 3;

/// Invulnerability window after losing a life.
pub const INVULN_SECS: f32 = 2.0;

// --- Projectiles ---

/// Speed of regular enemy shots.
pub const ENEMY_SHOT_SPEED: f32 = 180.0;

/// Speed of boss volley shots.
pub const BOSS_SHOT_SPEED: f32 = 160.0;

/// Speed of mine shrapnel fragments.
pub const SHRAPNEL_SPEED: f32 = 140.0;

/// Number of radial shrapnel fragments from a mine detonation.
pub const SHRAPNEL_COUNT: usize = 8;

/// Collision radius of a projectile, for the host collider.
pub const PROJECTILE_RADIUS: f32 = 4.0;

// --- Movement programs ---

/// Distance from the player at which an armed mine detonates.
pub const MINE_TRIGGER_RADIUS: f32 = 48.0;

/// Drift time before a mine arms.
pub const MINE_ARM_DELAY_SECS: f32 = 1.0;

/// Dock line as a fraction of field height.
pub const DOCK_FRACTION: f32 = 0.62;

/// How long a docked enemy holds position after its burst.
pub const DOCK_HOLD_SECS: f32 = 1.6;

/// Shots in a dock burst.
pub const DOCK_BURST_COUNT: usize = 3;

/// Angular spread of a dock burst (radians between adjacent shots).
pub const DOCK_BURST_SPREAD: f32 = 0.35;

/// Height fraction at which teleporters jump to a new column.
pub const TELEPORT_FRACTION: f32 = 0.55;

/// Side margin the walls push zigzag and bounce programs off of.
pub const WALL_MARGIN: f32 = 16.0;

// --- Time ---

/// Upper clamp for the time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;
