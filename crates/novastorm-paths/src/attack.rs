//! Attack-run and formation-entry curves.
//!
//! Attack paths start at the attacker's formation slot and end below the
//! bottom edge at `ATTACK_EXIT_Y`, so a follower that runs the full path has
//! left the field. Entry paths are quadratic Bezier arcs from the spawn
//! point on the top edge down into the assigned slot.

use glam::Vec2;
use rand::Rng;

use novastorm_core::constants::{ATTACK_EXIT_Y, ENTRY_PATH_POINTS};
use novastorm_core::enums::AttackPatternKind;
use novastorm_core::types::FieldSize;

/// Waypoints never get closer than this to the side edges.
const EDGE_MARGIN: f32 = 8.0;

/// Waypoints for one attack run. Between 20 and 40 points per kind, first
/// point at `start`, last at `ATTACK_EXIT_Y`.
pub fn attack_path(
    kind: AttackPatternKind,
    start: Vec2,
    field: FieldSize,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    let path = match kind {
        AttackPatternKind::Dive => dive(start),
        AttackPatternKind::Loop => loop_run(start),
        AttackPatternKind::Swoop => swoop(start, rng),
        AttackPatternKind::Spiral => spiral(start),
        AttackPatternKind::Wave => weave(start),
    };

    path.into_iter()
        .map(|p| Vec2::new(p.x.clamp(EDGE_MARGIN, field.width - EDGE_MARGIN), p.y))
        .collect()
}

/// Entry arc from `from` to `to`: a quadratic Bezier whose control point is
/// (`to.x`, `from.y`), so the curve banks toward the slot column first and
/// settles vertically into the slot.
pub fn entry_path(from: Vec2, to: Vec2) -> Vec<Vec2> {
    let control = Vec2::new(to.x, from.y);
    (0..ENTRY_PATH_POINTS)
        .map(|i| {
            let t = i as f32 / (ENTRY_PATH_POINTS - 1) as f32;
            let u = 1.0 - t;
            from * (u * u) + control * (2.0 * u * t) + to * (t * t)
        })
        .collect()
}

/// Straight descent with a narrow weave, four half-swings on the way down.
fn dive(start: Vec2) -> Vec<Vec2> {
    let n = 24;
    (0..n)
        .map(|i| {
            let t = i as f32 / (n - 1) as f32;
            Vec2::new(
                start.x + 30.0 * (t * 4.0 * std::f32::consts::PI).sin(),
                lerp(start.y, ATTACK_EXIT_Y, t),
            )
        })
        .collect()
}

/// Full circle below the slot, closed back at the start angle, then a
/// straight drop off the bottom.
fn loop_run(start: Vec2) -> Vec<Vec2> {
    let radius = 80.0;
    let center = Vec2::new(start.x, start.y - radius);

    // Inclusive so the last circle waypoint lands back on the start angle.
    let circle_points = 24;
    let mut path: Vec<Vec2> = (0..=circle_points)
        .map(|i| {
            let angle = std::f32::consts::FRAC_PI_2
                - std::f32::consts::TAU * i as f32 / circle_points as f32;
            center + radius * Vec2::new(angle.cos(), angle.sin())
        })
        .collect();

    let drop_points = 12;
    for j in 1..=drop_points {
        let t = j as f32 / drop_points as f32;
        path.push(Vec2::new(start.x, lerp(start.y, ATTACK_EXIT_Y, t)));
    }
    path
}

/// Single wide swing out to one side and back while descending. The side is
/// the only randomized element of any attack path.
fn swoop(start: Vec2, rng: &mut impl Rng) -> Vec<Vec2> {
    let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let n = 24;
    (0..n)
        .map(|i| {
            let t = i as f32 / (n - 1) as f32;
            Vec2::new(
                start.x + side * 150.0 * (t * std::f32::consts::PI).sin(),
                lerp(start.y, ATTACK_EXIT_Y, t),
            )
        })
        .collect()
}

/// Two full revolutions around a descending anchor while the radius tightens
/// from 100 to 30. Phased so the first point lands on `start` and the last
/// on the exit line.
fn spiral(start: Vec2) -> Vec<Vec2> {
    let anchor_top = Vec2::new(start.x, start.y - 100.0);
    let anchor_bottom = Vec2::new(start.x, ATTACK_EXIT_Y - 30.0);

    let n = 32;
    (0..n)
        .map(|i| {
            let t = i as f32 / (n - 1) as f32;
            let anchor = anchor_top.lerp(anchor_bottom, t);
            let radius = lerp(100.0, 30.0, t);
            let angle = std::f32::consts::FRAC_PI_2 + t * 4.0 * std::f32::consts::PI;
            anchor + radius * Vec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Broad serpentine descent, three full swings wide of the slot column.
fn weave(start: Vec2) -> Vec<Vec2> {
    let n = 28;
    (0..n)
        .map(|i| {
            let t = i as f32 / (n - 1) as f32;
            Vec2::new(
                start.x + 80.0 * (t * 6.0 * std::f32::consts::PI).sin(),
                lerp(start.y, ATTACK_EXIT_Y, t),
            )
        })
        .collect()
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const ALL_KINDS: [AttackPatternKind; 5] = [
        AttackPatternKind::Dive,
        AttackPatternKind::Loop,
        AttackPatternKind::Swoop,
        AttackPatternKind::Spiral,
        AttackPatternKind::Wave,
    ];

    fn field() -> FieldSize {
        FieldSize::new(400.0, 600.0)
    }

    #[test]
    fn test_attack_paths_exit_below_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let start = Vec2::new(200.0, 480.0);
        for kind in ALL_KINDS {
            let path = attack_path(kind, start, field(), &mut rng);
            let last = path.last().copied();
            assert_eq!(
                last.map(|p| p.y),
                Some(ATTACK_EXIT_Y),
                "{kind:?} must end on the exit line"
            );
            assert!(last.is_some_and(|p| p.y <= 0.0));
        }
    }

    #[test]
    fn test_attack_path_waypoint_count_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let start = Vec2::new(200.0, 480.0);
        for kind in ALL_KINDS {
            let path = attack_path(kind, start, field(), &mut rng);
            assert!(
                (20..=40).contains(&path.len()),
                "{kind:?} produced {} waypoints",
                path.len()
            );
        }
    }

    #[test]
    fn test_attack_paths_start_at_slot() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let start = Vec2::new(180.0, 460.0);
        for kind in ALL_KINDS {
            let path = attack_path(kind, start, field(), &mut rng);
            assert!(
                path[0].abs_diff_eq(start, 1e-3),
                "{kind:?} starts at {:?}, want {start:?}",
                path[0]
            );
        }
    }

    #[test]
    fn test_loop_returns_to_start_angle_before_diving() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let start = Vec2::new(200.0, 480.0);
        let path = attack_path(AttackPatternKind::Loop, start, field(), &mut rng);

        let closing = path[1..]
            .iter()
            .position(|p| p.abs_diff_eq(start, 1e-3))
            .map(|i| i + 1);
        let closing = closing.expect("loop never closes back on its start angle");

        // Everything after the closure is the straight drop.
        for p in &path[closing + 1..] {
            assert!((p.x - start.x).abs() < 1e-3, "drop must stay in the slot column");
            assert!(p.y < start.y, "drop must sit below the loop closure");
        }
    }

    #[test]
    fn test_dive_descends_monotonically() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let path = attack_path(
            AttackPatternKind::Dive,
            Vec2::new(200.0, 480.0),
            field(),
            &mut rng,
        );
        for pair in path.windows(2) {
            assert!(pair[1].y < pair[0].y, "dive y must strictly decrease");
        }
    }

    #[test]
    fn test_paths_respect_side_margins() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        // A slot near the left edge forces the clamp on wide swings.
        let start = Vec2::new(30.0, 470.0);
        for kind in ALL_KINDS {
            let path = attack_path(kind, start, field(), &mut rng);
            for p in &path {
                assert!(
                    p.x >= EDGE_MARGIN - 1e-3 && p.x <= 400.0 - EDGE_MARGIN + 1e-3,
                    "{kind:?} waypoint {p:?} outside side margins"
                );
            }
        }
    }

    #[test]
    fn test_swoop_uses_both_sides_across_seeds() {
        let start = Vec2::new(200.0, 480.0);
        let mut saw_left = false;
        let mut saw_right = false;
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let path = attack_path(AttackPatternKind::Swoop, start, field(), &mut rng);
            // Mid-path waypoint sits at the widest point of the swing.
            let mid = path[path.len() / 2];
            if mid.x < start.x {
                saw_left = true;
            } else {
                saw_right = true;
            }
        }
        assert!(saw_left && saw_right, "swoop never varied its side");
    }

    #[test]
    fn test_swoop_same_seed_same_path() {
        let start = Vec2::new(200.0, 480.0);
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let first = attack_path(AttackPatternKind::Swoop, start, field(), &mut a);
        let second = attack_path(AttackPatternKind::Swoop, start, field(), &mut b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_entry_path_endpoints() {
        let from = Vec2::new(120.0, 600.0);
        let to = Vec2::new(240.0, 480.0);
        let path = entry_path(from, to);
        assert_eq!(path.len(), ENTRY_PATH_POINTS);
        assert!(path[0].abs_diff_eq(from, 1e-3));
        assert!(
            path.last().is_some_and(|p| p.abs_diff_eq(to, 1e-3)),
            "entry path must land on the slot"
        );
    }

    #[test]
    fn test_entry_path_stays_between_endpoint_heights() {
        let from = Vec2::new(40.0, 600.0);
        let to = Vec2::new(320.0, 470.0);
        for p in entry_path(from, to) {
            assert!(p.y <= 600.0 + 1e-3 && p.y >= 470.0 - 1e-3);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_attack_paths_bounded_and_finite(
                seed in 0u64..1000,
                x in 40.0f32..360.0,
                y in 380.0f32..540.0,
                kind in prop::sample::select(ALL_KINDS.to_vec()),
            ) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let path = attack_path(kind, Vec2::new(x, y), field(), &mut rng);

                prop_assert!((20..=40).contains(&path.len()));
                for p in &path {
                    prop_assert!(p.x.is_finite() && p.y.is_finite());
                    prop_assert!(p.x >= EDGE_MARGIN - 1e-3);
                    prop_assert!(p.x <= 400.0 - EDGE_MARGIN + 1e-3);
                }
                prop_assert_eq!(path.last().map(|p| p.y), Some(ATTACK_EXIT_Y));
            }

            #[test]
            fn test_entry_path_lands_on_slot(
                fx in 0.0f32..400.0,
                tx in 40.0f32..360.0,
                ty in 380.0f32..540.0,
            ) {
                let from = Vec2::new(fx, 600.0);
                let to = Vec2::new(tx, ty);
                let path = entry_path(from, to);
                prop_assert_eq!(path.len(), ENTRY_PATH_POINTS);
                prop_assert!(path[0].abs_diff_eq(from, 1e-3));
                prop_assert!(path.last().is_some_and(|p| p.abs_diff_eq(to, 1e-3)));
            }
        }
    }
}
