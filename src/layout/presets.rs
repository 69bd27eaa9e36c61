//! Deterministic arrangement strategies: rows, grid and clustered groups,
//! plus the per-layout canvas size estimate.
//!
//! Every generator names its chairs `chair-1 ..= chair-N` in index order and
//! returns an empty map for zero chairs.

use super::config::LayoutConfig;
use super::scatter;
use super::types::{chair_id, ChairPosition, ContainerBounds, LayoutType, PositionMap};

/// Rows balanced toward a square aspect, capped by what fits across the width.
pub fn rows(chair_count: usize, width: f64, height: f64, config: &LayoutConfig) -> PositionMap {
    let mut positions = PositionMap::with_capacity(chair_count);
    if chair_count == 0 {
        return positions;
    }

    let margin = config.row_margin;
    let min_spacing = config.min_spacing;

    let max_per_row = ((width - 2.0 * margin) / min_spacing).floor();
    let balanced = (chair_count as f64 * 1.5).sqrt().ceil();
    let per_row = max_per_row.min(balanced).max(1.0) as usize;
    let total_rows = chair_count.div_ceil(per_row);

    let available_width = (width - 2.0 * margin).max(0.0);
    let available_height = (height - 2.0 * margin).max(0.0);

    let spacing_x = if per_row > 1 {
        (available_width / (per_row - 1) as f64).min(min_spacing * 1.5)
    } else {
        0.0
    };
    let spacing_y = if total_rows > 1 {
        (available_height / (total_rows - 1) as f64).min(min_spacing * 1.2)
    } else {
        available_height / 2.0
    };

    for i in 0..chair_count {
        let row = i / per_row;
        let col = i % per_row;
        let x = if per_row == 1 {
            width / 2.0
        } else {
            margin + col as f64 * spacing_x
        };
        let y = if total_rows == 1 {
            height / 2.0
        } else {
            margin + row as f64 * spacing_y
        };
        positions.insert(chair_id(i), ChairPosition::new(x, y));
    }

    positions
}

/// Square-balanced grid that never compresses below `min_spacing`.
///
/// When the requested canvas is too small the grid is laid out on a larger
/// effective canvas, so positions may exceed the requested size.
pub fn grid(chair_count: usize, width: f64, height: f64, config: &LayoutConfig) -> PositionMap {
    let mut positions = PositionMap::with_capacity(chair_count);
    if chair_count == 0 {
        return positions;
    }

    let margin = config.row_margin;
    let min_spacing = config.min_spacing;

    let cols = (chair_count as f64).sqrt().ceil() as usize;
    let rows = chair_count.div_ceil(cols);

    let effective_width = width.max(cols as f64 * min_spacing + 2.0 * margin);
    let effective_height = height.max(rows as f64 * min_spacing + 2.0 * margin);
    let available_width = effective_width - 2.0 * margin;
    let available_height = effective_height - 2.0 * margin;

    let spacing_x = if cols > 1 {
        min_spacing.max(available_width / (cols - 1) as f64)
    } else {
        0.0
    };
    let spacing_y = if rows > 1 {
        min_spacing.max(available_height / (rows - 1) as f64)
    } else {
        available_height / 2.0
    };

    for i in 0..chair_count {
        let row = i / cols;
        let col = i % cols;
        let x = if cols == 1 {
            effective_width / 2.0
        } else {
            margin + col as f64 * spacing_x
        };
        let y = if rows == 1 {
            effective_height / 2.0
        } else {
            margin + row as f64 * spacing_y
        };
        positions.insert(chair_id(i), ChairPosition::new(x, y));
    }

    positions
}

/// Cluster size and radius for a total chair count
fn group_bracket(chair_count: usize, config: &LayoutConfig) -> (usize, f64) {
    let [small, medium, large, huge] = config.group_radii;
    match chair_count {
        0..=8 => (chair_count.min(4), small),
        9..=16 => (4, medium),
        17..=24 => (4, large),
        _ => {
            let group_count = chair_count.div_ceil(5);
            (chair_count.div_ceil(group_count).clamp(4, 5), huge)
        }
    }
}

/// Offset of chair `seat` within a cluster of `group_size` chairs
fn seat_offset(seat: usize, group_size: usize, radius: f64) -> (f64, f64) {
    match group_size {
        1 => (0.0, 0.0),
        2 => {
            if seat == 0 {
                (-radius / 2.0, 0.0)
            } else {
                (radius / 2.0, 0.0)
            }
        }
        3 => {
            // top, lower right, lower left
            let angles = [
                -std::f64::consts::PI / 2.0,
                std::f64::consts::PI / 6.0,
                5.0 * std::f64::consts::PI / 6.0,
            ];
            let angle = angles[seat % 3];
            (angle.cos() * radius, angle.sin() * radius)
        }
        _ => {
            let angle = (seat as f64 * 2.0 * std::f64::consts::PI) / group_size as f64
                - std::f64::consts::PI / 2.0;
            (angle.cos() * radius, angle.sin() * radius)
        }
    }
}

/// Small circular clusters laid out on a row-major grid of cluster centres.
pub fn groups(chair_count: usize, width: f64, height: f64, config: &LayoutConfig) -> PositionMap {
    let mut positions = PositionMap::with_capacity(chair_count);
    if chair_count == 0 {
        return positions;
    }

    let margin = config.group_margin;
    let chair_radius = config.chair_radius();
    let (per_group, group_radius) = group_bracket(chair_count, config);
    let total_groups = chair_count.div_ceil(per_group);

    let group_diameter = group_radius * 2.0 + config.chair_size;
    let min_group_spacing = group_diameter + config.group_gap;

    let available_width = width - 2.0 * margin - group_diameter;
    let max_groups_per_row = ((available_width / min_group_spacing).floor() + 1.0).max(1.0) as usize;
    let groups_per_row = max_groups_per_row.min(total_groups);
    let total_group_rows = total_groups.div_ceil(groups_per_row);

    let available_height = height - 2.0 * margin - group_diameter;

    let group_spacing_x = if groups_per_row > 1 {
        available_width / (groups_per_row - 1) as f64
    } else {
        0.0
    };
    let group_spacing_y = if total_group_rows > 1 {
        available_height / (total_group_rows - 1) as f64
    } else {
        available_height / 2.0
    };

    let inset = chair_radius + config.group_edge_inset;

    for i in 0..chair_count {
        let group_index = i / per_group;
        let seat = i % per_group;
        let group_row = group_index / groups_per_row;
        let group_col = group_index % groups_per_row;

        let center_x = if groups_per_row == 1 {
            width / 2.0
        } else {
            margin + group_diameter / 2.0 + group_col as f64 * group_spacing_x
        };
        let center_y = if total_group_rows == 1 {
            height / 2.0
        } else {
            margin + group_diameter / 2.0 + group_row as f64 * group_spacing_y
        };

        let (dx, dy) = seat_offset(seat, per_group, group_radius);
        let x = inset.max((center_x + dx).min(width - inset));
        let y = inset.max((center_y + dy).min(height - inset));
        positions.insert(chair_id(i), ChairPosition::new(x, y));
    }

    positions
}

/// Generate raw (unresolved) positions for a layout type on a given canvas
pub fn generate_raw(
    layout_type: LayoutType,
    chair_count: usize,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> PositionMap {
    match layout_type {
        LayoutType::Rows => rows(chair_count, width, height, config),
        LayoutType::Grid => grid(chair_count, width, height, config),
        LayoutType::Groups => groups(chair_count, width, height, config),
        LayoutType::Scattered => scatter::scattered(chair_count, width, height, config),
    }
}

/// Recommend a canvas size so a layout of `chair_count` chairs looks uncramped.
///
/// Each layout type has its own packing estimate; the result is rounded to
/// whole pixels and never smaller than the configured baseline canvas.
pub fn estimate_optimal_size(
    chair_count: usize,
    layout_type: LayoutType,
    config: &LayoutConfig,
) -> ContainerBounds {
    let margin = config.row_margin;
    let min_spacing = config.min_spacing;
    let count = chair_count as f64;

    let (width, height) = match layout_type {
        LayoutType::Rows => {
            let per_row = ((count * 1.5).sqrt().ceil() as usize).max(1);
            let total_rows = chair_count.div_ceil(per_row);
            (
                per_row as f64 * min_spacing + 2.0 * margin,
                total_rows as f64 * (min_spacing + config.estimate_row_extra) + 2.0 * margin,
            )
        }
        LayoutType::Groups => {
            let per_group = chair_count.div_ceil(6).clamp(4, 6);
            let total_groups = chair_count.div_ceil(per_group);
            let groups_per_row = ((total_groups as f64).sqrt().ceil() as usize).max(1);
            let pitch = config.estimate_group_pitch;
            (
                groups_per_row as f64 * pitch + 2.0 * margin,
                total_groups.div_ceil(groups_per_row) as f64 * pitch + 2.0 * margin,
            )
        }
        LayoutType::Grid => {
            let cols = (count.sqrt().ceil() as usize).max(1);
            let rows = chair_count.div_ceil(cols);
            (
                cols as f64 * min_spacing + 2.0 * margin,
                rows as f64 * (min_spacing + config.estimate_grid_row_extra) + 2.0 * margin,
            )
        }
        LayoutType::Scattered => {
            let area_per_chair = min_spacing * min_spacing * config.estimate_scatter_area_factor;
            let aspect = config.estimate_scatter_aspect;
            let height = (count * area_per_chair / aspect).sqrt() + 2.0 * margin;
            (height * aspect, height)
        }
    };

    ContainerBounds {
        width: config.baseline_width.max(width.round()),
        height: config.baseline_height.max(height.round()),
    }
}
