//! Formation slot layouts.
//!
//! Each pattern places `count` slots around a horizontal anchor at
//! (`center_x`, `start_y`). Slots use the centered index
//! `i - (count - 1) / 2`, which keeps every pattern symmetric about
//! `center_x` for even and odd counts alike.

use glam::Vec2;

use novastorm_core::enums::FormationPattern;

/// Slot positions for a formation. `count == 0` yields an empty layout.
pub fn layout_positions(
    pattern: FormationPattern,
    count: usize,
    center_x: f32,
    start_y: f32,
    spacing: f32,
) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }

    match pattern {
        FormationPattern::Line => row(count, center_x, start_y, spacing, 0.0),
        FormationPattern::VShape => row(count, center_x, start_y, spacing, 0.5),
        FormationPattern::Arrow => row(count, center_x, start_y, spacing, 0.7),
        FormationPattern::Arc => arc(count, center_x, start_y, spacing),
        FormationPattern::Diamond => diamond(count, center_x, start_y, spacing),
        FormationPattern::Box => box_grid(count, center_x, start_y, spacing),
        FormationPattern::Circle => circle(count, center_x, start_y, spacing),
        FormationPattern::Cross => cross(count, center_x, start_y, spacing),
    }
}

/// Offset of slot `i` from the pattern center, in slot units.
fn centered_offset(i: usize, count: usize) -> f32 {
    i as f32 - (count as f32 - 1.0) / 2.0
}

/// A horizontal row. `droop` pulls the outer slots down proportionally to
/// their distance from the center: 0 is a flat line, 0.5 a V, 0.7 an arrow.
fn row(count: usize, center_x: f32, start_y: f32, spacing: f32, droop: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let offset = centered_offset(i, count);
            Vec2::new(
                center_x + offset * spacing,
                start_y - offset.abs() * spacing * droop,
            )
        })
        .collect()
}

/// Row spread with a sine falloff: center at `start_y`, edges drooping by
/// up to `spacing`.
fn arc(count: usize, center_x: f32, start_y: f32, spacing: f32) -> Vec<Vec2> {
    let half_span = (count as f32 - 1.0) / 2.0;
    (0..count)
        .map(|i| {
            let offset = centered_offset(i, count);
            let t = if half_span > 0.0 { offset / half_span } else { 0.0 };
            let droop = (t * std::f32::consts::FRAC_PI_2).sin().abs() * spacing;
            Vec2::new(center_x + offset * spacing, start_y - droop)
        })
        .collect()
}

/// Apex at the anchor, then concentric left/right pairs descending half a
/// step per layer. Stops once `count` slots exist.
fn diamond(count: usize, center_x: f32, start_y: f32, spacing: f32) -> Vec<Vec2> {
    let mut slots = vec![Vec2::new(center_x, start_y)];
    let mut layer = 1.0f32;
    while slots.len() < count {
        let y = start_y - layer * spacing * 0.5;
        slots.push(Vec2::new(center_x - layer * spacing, y));
        if slots.len() < count {
            slots.push(Vec2::new(center_x + layer * spacing, y));
        }
        layer += 1.0;
    }
    slots
}

/// Row-major grid: 1 row up to 2 slots, 2 rows up to 4, 3 rows beyond.
/// Each row is centered independently, rows 0.75 spacing apart.
fn box_grid(count: usize, center_x: f32, start_y: f32, spacing: f32) -> Vec<Vec2> {
    let rows = if count <= 2 {
        1
    } else if count <= 4 {
        2
    } else {
        3
    };
    let cols = count.div_ceil(rows);

    (0..count)
        .map(|i| {
            let r = i / cols;
            let c = i % cols;
            let row_len = cols.min(count - r * cols);
            let offset = centered_offset(c, row_len);
            Vec2::new(
                center_x + offset * spacing,
                start_y - r as f32 * 0.75 * spacing,
            )
        })
        .collect()
}

/// `count` slots evenly spaced on a circle of radius 1.5 spacing, starting
/// at the top and proceeding clockwise.
fn circle(count: usize, center_x: f32, start_y: f32, spacing: f32) -> Vec<Vec2> {
    let center = Vec2::new(center_x, start_y);
    let radius = 1.5 * spacing;
    (0..count)
        .map(|i| {
            let angle =
                std::f32::consts::FRAC_PI_2 - std::f32::consts::TAU * i as f32 / count as f32;
            center + radius * Vec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Center slot, then rings extending one slot per arm in the order
/// up, down, left, right.
fn cross(count: usize, center_x: f32, start_y: f32, spacing: f32) -> Vec<Vec2> {
    let center = Vec2::new(center_x, start_y);
    let arms = [
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 0.0),
    ];

    let mut slots = vec![center];
    let mut ring = 1.0f32;
    while slots.len() < count {
        for arm in arms {
            if slots.len() == count {
                break;
            }
            slots.push(center + arm * ring * spacing);
        }
        ring += 1.0;
    }
    slots
}
