//! Movement program state machine.
//!
//! Pure functions that compute program transitions and velocities for
//! free-flying enemies based on their archetype profile and situation.
//! No ECS dependency; operates on plain data.

use glam::Vec2;
use rand::Rng;

use novastorm_core::constants::*;
use novastorm_core::enums::MoveState;
use novastorm_core::types::FieldSize;

/// Input to the movement FSM for a single entity.
pub struct MoveContext {
    pub state: MoveState,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Nominal speed from the archetype profile.
    pub speed: f32,
    pub field: FieldSize,
    /// Player position, when the host has reported one.
    pub player: Option<Vec2>,
    /// Seconds spent in the current program state.
    pub state_secs: f32,
    pub dt: f32,
}

/// Output from the movement FSM.
pub struct MoveUpdate {
    pub state: MoveState,
    pub velocity: Vec2,
    /// Set when the program relocates the entity outright (teleport jump,
    /// orbit). Applied before velocity integration.
    pub position_override: Option<Vec2>,
    /// The program has run its course and the entity has left the field.
    pub completed: bool,
    /// An armed mine has found the player in trigger range.
    pub detonate: bool,
}

/// Evaluate the FSM for one enemy. Returns the updated program state and
/// velocity for this tick.
pub fn step(ctx: &MoveContext, rng: &mut impl Rng) -> MoveUpdate {
    match ctx.state {
        MoveState::Descend => step_descend(ctx),
        MoveState::Zigzag { dir } => step_zigzag(ctx, dir),
        MoveState::Sweep { dir } => step_sweep(ctx, dir),
        MoveState::Dock { fired } => step_dock(ctx, fired),
        MoveState::MineDrift { armed } => step_mine(ctx, armed),
        MoveState::Teleport { jumped } => step_teleport(ctx, jumped, rng),
        MoveState::Bounce { dir } => step_bounce(ctx, dir),
        MoveState::Waver => step_waver(ctx),
        MoveState::Orbit { center, phase } => step_orbit(ctx, center, phase),
    }
}

fn advance(state: MoveState, velocity: Vec2) -> MoveUpdate {
    MoveUpdate {
        state,
        velocity,
        position_override: None,
        completed: false,
        detonate: false,
    }
}

fn complete(state: MoveState) -> MoveUpdate {
    MoveUpdate {
        state,
        velocity: Vec2::ZERO,
        position_override: None,
        completed: true,
        detonate: false,
    }
}

fn below_exit(ctx: &MoveContext) -> bool {
    ctx.position.y <= ATTACK_EXIT_Y
}

/// Direction after wall contact: pushed right off the left margin, left off
/// the right margin, otherwise unchanged.
fn wall_flip(x: f32, dir: f32, field: FieldSize) -> f32 {
    if x <= WALL_MARGIN {
        1.0
    } else if x >= field.width - WALL_MARGIN {
        -1.0
    } else {
        dir
    }
}

fn step_descend(ctx: &MoveContext) -> MoveUpdate {
    if below_exit(ctx) {
        return complete(ctx.state);
    }
    advance(ctx.state, Vec2::new(0.0, -ctx.speed))
}

fn step_zigzag(ctx: &MoveContext, dir: f32) -> MoveUpdate {
    if below_exit(ctx) {
        return complete(ctx.state);
    }
    let dir = wall_flip(ctx.position.x, dir, ctx.field);
    advance(
        MoveState::Zigzag { dir },
        Vec2::new(dir * 0.8 * ctx.speed, -0.6 * ctx.speed),
    )
}

fn step_sweep(ctx: &MoveContext, dir: f32) -> MoveUpdate {
    let gone_right = dir > 0.0 && ctx.position.x >= ctx.field.width + SPAWN_MARGIN;
    let gone_left = dir < 0.0 && ctx.position.x <= -SPAWN_MARGIN;
    if gone_right || gone_left {
        return complete(ctx.state);
    }
    advance(ctx.state, Vec2::new(dir * ctx.speed, -0.15 * ctx.speed))
}

/// Descend to the dock line, hold for the burst, then retreat off the top.
/// The burst itself is fired by the gunnery system, which flips `fired`.
fn step_dock(ctx: &MoveContext, fired: bool) -> MoveUpdate {
    let dock_line = DOCK_FRACTION * ctx.field.height;

    if !fired {
        if ctx.position.y > dock_line {
            return advance(ctx.state, Vec2::new(0.0, -ctx.speed));
        }
        // At the dock line, holding for the burst.
        return advance(ctx.state, Vec2::ZERO);
    }

    if ctx.state_secs < DOCK_HOLD_SECS {
        return advance(ctx.state, Vec2::ZERO);
    }
    if ctx.position.y >= ctx.field.height + SPAWN_MARGIN {
        return complete(ctx.state);
    }
    advance(ctx.state, Vec2::new(0.0, ctx.speed))
}

fn step_mine(ctx: &MoveContext, armed: bool) -> MoveUpdate {
    if below_exit(ctx) {
        return complete(ctx.state);
    }

    if !armed {
        if ctx.state_secs >= MINE_ARM_DELAY_SECS {
            return advance(
                MoveState::MineDrift { armed: true },
                Vec2::new(0.0, -ctx.speed),
            );
        }
        return advance(ctx.state, Vec2::new(0.0, -ctx.speed));
    }

    let triggered = ctx
        .player
        .is_some_and(|p| p.distance(ctx.position) <= MINE_TRIGGER_RADIUS);
    if triggered {
        return MoveUpdate {
            state: ctx.state,
            velocity: Vec2::ZERO,
            position_override: None,
            completed: false,
            detonate: true,
        };
    }
    advance(ctx.state, Vec2::new(0.0, -ctx.speed))
}

fn step_teleport(ctx: &MoveContext, jumped: bool, rng: &mut impl Rng) -> MoveUpdate {
    if below_exit(ctx) {
        return complete(ctx.state);
    }

    let jump_line = TELEPORT_FRACTION * ctx.field.height;
    if !jumped && ctx.position.y <= jump_line {
        let column = rng.gen_range(WALL_MARGIN..ctx.field.width - WALL_MARGIN);
        return MoveUpdate {
            state: MoveState::Teleport { jumped: true },
            velocity: Vec2::new(0.0, -ctx.speed),
            position_override: Some(Vec2::new(column, ctx.position.y)),
            completed: false,
            detonate: false,
        };
    }
    advance(ctx.state, Vec2::new(0.0, -ctx.speed))
}

fn step_bounce(ctx: &MoveContext, dir: f32) -> MoveUpdate {
    if below_exit(ctx) {
        return complete(ctx.state);
    }
    let dir = wall_flip(ctx.position.x, dir, ctx.field);
    advance(
        MoveState::Bounce { dir },
        Vec2::new(dir * 0.7 * ctx.speed, -0.7 * ctx.speed),
    )
}

fn step_waver(ctx: &MoveContext) -> MoveUpdate {
    if below_exit(ctx) {
        return complete(ctx.state);
    }
    let sway = (ctx.state_secs * 2.4).sin();
    advance(
        ctx.state,
        Vec2::new(0.6 * ctx.speed * sway, -0.5 * ctx.speed),
    )
}

/// Ride a circle around `center`. The position is authoritative; the
/// velocity is the tangent, kept for the snapshot.
fn step_orbit(ctx: &MoveContext, center: Vec2, phase: f32) -> MoveUpdate {
    let angle = phase + ctx.state_secs * SPINNER_ORBIT_RATE;
    let offset = SPINNER_ORBIT_RADIUS * Vec2::new(angle.cos(), angle.sin());
    let tangent = SPINNER_ORBIT_RADIUS * SPINNER_ORBIT_RATE * Vec2::new(-angle.sin(), angle.cos());
    MoveUpdate {
        state: ctx.state,
        velocity: tangent,
        position_override: Some(center + offset),
        completed: false,
        detonate: false,
    }
}
