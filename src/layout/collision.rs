//! Collision detection and resolution between chairs
//!
//! Resolution is a single sequential relaxation pass: each chair, in map
//! order, is checked against the current positions of every other chair and
//! moved to the nearest valid spot found by a radial sweep. Earlier chairs are
//! never revisited. When the sweep finds nothing the chair is clamped into the
//! container and may stay closer than the minimum distance to a neighbour.

use serde::Serialize;
use tracing::debug;

use super::config::LayoutConfig;
use super::container::{constrain_to_bounds, is_within_bounds};
use super::types::{ChairPosition, ContainerBounds, PositionMap};

/// A chair outside the container with the position it should be moved to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutOfBoundsChair {
    pub id: String,
    pub position: ChairPosition,
    pub suggested_position: ChairPosition,
}

/// The closest chair to some target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestChair {
    /// Index into the slice that was searched
    pub index: usize,
    pub position: ChairPosition,
    pub distance: f64,
}

/// Check that `position` keeps at least `min_distance` from every other chair
pub fn is_valid_position(position: ChairPosition, others: &[ChairPosition], min_distance: f64) -> bool {
    others
        .iter()
        .all(|other| position.distance_to(other) >= min_distance)
}

/// Find the closest spot to `target` that is in bounds and clear of `existing`.
///
/// Sweeps rings of growing radius, starting at `min_distance`, in steps of
/// `search_radius_step` up to the larger container dimension, probing every
/// `search_angle_step` degrees from 0°. The first hit wins. If nothing fits,
/// falls back to clamping `target` into the container.
///
/// The sweep stops at `search_radius_limit`, and is skipped entirely when
/// the container is too small to hold a single chair.
pub fn find_nearest_valid_position(
    target: ChairPosition,
    existing: &[ChairPosition],
    bounds: ContainerBounds,
    min_distance: f64,
    config: &LayoutConfig,
) -> ChairPosition {
    if is_valid_position(target, existing, min_distance) && is_within_bounds(target, bounds, config) {
        return target;
    }

    if !has_room_for_a_chair(bounds, config) {
        debug!(
            width = bounds.width,
            height = bounds.height,
            "container cannot hold a chair, clamping"
        );
        return constrain_to_bounds(target, bounds, config);
    }

    let radius_step = config.search_radius_step.max(1.0);
    let angle_step = config.search_angle_step.max(1.0);
    let max_radius = bounds.width.max(bounds.height).min(config.search_radius_limit);

    let mut radius = min_distance;
    while radius <= max_radius {
        let mut angle = 0.0;
        while angle < 360.0 {
            let candidate = target.offset_polar(radius, angle);
            if is_within_bounds(candidate, bounds, config)
                && is_valid_position(candidate, existing, min_distance)
            {
                return candidate;
            }
            angle += angle_step;
        }
        radius += radius_step;
    }

    debug!(
        x = target.x,
        y = target.y,
        "no collision-free position found, clamping to container"
    );
    constrain_to_bounds(target, bounds, config)
}

/// Whether the band of in-bounds chair centres is non-empty
fn has_room_for_a_chair(bounds: ContainerBounds, config: &LayoutConfig) -> bool {
    let radius = config.chair_radius();
    bounds.width >= 2.0 * radius && bounds.height >= 2.0 * radius + config.label_height
}

/// Move chairs so none overlap and all stay inside the container.
///
/// Uses `config.min_distance` as the separation. See the module docs for the
/// ordering caveat.
pub fn resolve_collisions(
    positions: &PositionMap,
    bounds: ContainerBounds,
    config: &LayoutConfig,
) -> PositionMap {
    let mut resolved = positions.clone();

    for index in 0..resolved.len() {
        let Some((_, &current)) = resolved.get_index(index) else {
            continue;
        };
        let others: Vec<ChairPosition> = resolved
            .positions()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(_, pos)| *pos)
            .collect();

        let next = find_nearest_valid_position(current, &others, bounds, config.min_distance, config);
        if let Some(slot) = resolved.get_index_mut(index) {
            *slot = next;
        }
    }

    resolved
}

/// List every chair whose footprint leaves the container
pub fn find_chairs_out_of_bounds(
    positions: &PositionMap,
    bounds: ContainerBounds,
    config: &LayoutConfig,
) -> Vec<OutOfBoundsChair> {
    positions
        .iter()
        .filter(|(_, pos)| !is_within_bounds(**pos, bounds, config))
        .map(|(id, pos)| OutOfBoundsChair {
            id: id.to_string(),
            position: *pos,
            suggested_position: constrain_to_bounds(*pos, bounds, config),
        })
        .collect()
}

pub fn calculate_distance(a: ChairPosition, b: ChairPosition) -> f64 {
    a.distance_to(&b)
}

/// Closest of `others` to `target`; ties go to the earliest. `None` when empty.
pub fn find_nearest_chair(target: ChairPosition, others: &[ChairPosition]) -> Option<NearestChair> {
    let mut nearest: Option<NearestChair> = None;
    for (index, other) in others.iter().enumerate() {
        let distance = target.distance_to(other);
        if nearest.map_or(true, |best| distance < best.distance) {
            nearest = Some(NearestChair {
                index,
                position: *other,
                distance,
            });
        }
    }
    nearest
}
