//! Reproducible "random" scattered layout
//!
//! Candidates come from `frac(sin(seed) * 10000)`, keyed on the chair index
//! and attempt number, so identical inputs always produce identical layouts
//! and previously saved scattered layouts can be regenerated exactly.

use tracing::debug;

use super::collision::is_valid_position;
use super::config::LayoutConfig;
use super::types::{chair_id, ChairPosition, PositionMap};

/// Deterministic pseudo-random value in `[0, 1)` for a seed
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

/// Greedy scattered placement.
///
/// Each chair tries `scatter_attempts` candidates inside the padded interior
/// and keeps the first one far enough from every chair already placed in
/// this pass. A chair that finds none falls back to the centre of its cell in
/// a uniform `ceil(sqrt(N))` grid. Earlier chairs are never moved.
pub fn scattered(chair_count: usize, width: f64, height: f64, config: &LayoutConfig) -> PositionMap {
    let mut positions = PositionMap::with_capacity(chair_count);
    if chair_count == 0 {
        return positions;
    }

    let margin = config.scatter_margin;
    let available_width = (width - 2.0 * margin - config.chair_size).max(0.0);
    let available_height = (height - 2.0 * margin - config.chair_size).max(0.0);
    let area_per_chair = available_width * available_height / chair_count as f64;
    let min_distance = config.min_distance.max(area_per_chair.sqrt() * 0.7);

    let grid_size = (chair_count as f64).sqrt().ceil() as usize;
    let cell_width = available_width / grid_size as f64;
    let cell_height = available_height / grid_size as f64;

    let mut placed: Vec<ChairPosition> = Vec::with_capacity(chair_count);

    for i in 0..chair_count {
        let candidate = (0..config.scatter_attempts)
            .map(|attempt| {
                ChairPosition::new(
                    margin + seeded_random((i * 7 + attempt) as f64) * available_width,
                    margin + seeded_random((i * 11 + attempt) as f64) * available_height,
                )
            })
            .find(|pos| is_valid_position(*pos, &placed, min_distance));

        let position = candidate.unwrap_or_else(|| {
            debug!(chair = i + 1, "scatter attempts exhausted, using grid cell");
            let row = i / grid_size;
            let col = i % grid_size;
            ChairPosition::new(
                margin + col as f64 * cell_width + cell_width / 2.0,
                margin + row as f64 * cell_height + cell_height / 2.0,
            )
        });

        positions.insert(chair_id(i), position);
        placed.push(position);
    }

    positions
}
