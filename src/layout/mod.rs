//! Seating-layout engine
//!
//! Generators turn a chair count into positions on a canvas; the collision
//! resolver then moves chairs so none overlap and all stay inside the
//! container. Everything here is a pure function of its arguments.

pub mod collision;
pub mod config;
pub mod container;
pub mod error;
pub mod lint;
pub mod presets;
pub mod scatter;
pub mod types;

pub use collision::{
    calculate_distance, find_chairs_out_of_bounds, find_nearest_chair,
    find_nearest_valid_position, is_valid_position, resolve_collisions, NearestChair,
    OutOfBoundsChair,
};
pub use config::{ConfigError, LayoutConfig};
pub use container::{
    chair_extent, constrain_to_bounds, content_size, fit_container, is_within_bounds, FitOptions,
};
pub use error::LayoutError;
pub use presets::estimate_optimal_size;
pub use types::*;

use tracing::{debug, warn};

/// Generate a preset layout and resolve its collisions.
///
/// The canvas is first widened to at least the size estimate for this chair
/// count and layout, so presets stay uncramped on small canvases. The
/// returned positions satisfy the bounds rule for that widened canvas.
pub fn generate(
    layout_type: LayoutType,
    chair_count: usize,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> PositionMap {
    let bounds = ContainerBounds::new(width, height)
        .at_least(estimate_optimal_size(chair_count, layout_type, config));

    debug!(
        layout = %layout_type,
        chairs = chair_count,
        width = bounds.width,
        height = bounds.height,
        "generating seating layout"
    );

    let raw = presets::generate_raw(layout_type, chair_count, bounds.width, bounds.height, config);
    resolve_collisions(&raw, bounds, config)
}

/// Generate a preset layout from a layout name.
///
/// Unknown names produce an empty map rather than an error; callers asking
/// for a non-zero chair count should treat an empty result as a
/// configuration mistake.
pub fn generate_named(
    layout_name: &str,
    chair_count: usize,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> PositionMap {
    match layout_name.parse::<LayoutType>() {
        Ok(layout_type) => generate(layout_type, chair_count, width, height, config),
        Err(e) => {
            warn!("{}", e);
            PositionMap::new()
        }
    }
}

/// Rearrange existing chairs into a preset while keeping their identifiers.
///
/// The chair at index `i` of `existing` takes the generated position of
/// `chair-{i + 1}`. A chair with no generated counterpart keeps its position.
pub fn apply_preset(
    existing: &PositionMap,
    layout_type: LayoutType,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> PositionMap {
    if existing.is_empty() {
        return PositionMap::new();
    }

    let generated = generate(layout_type, existing.len(), width, height, config);
    existing
        .iter()
        .enumerate()
        .map(|(index, (id, old))| {
            let position = generated.get(&chair_id(index)).copied().unwrap_or(*old);
            (id.to_string(), position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_widens_to_estimate() {
        let config = LayoutConfig::default();
        let positions = generate(LayoutType::Grid, 1, 300.0, 200.0, &config);
        // baseline 1200x800 wins over the requested 300x200
        assert_eq!(positions.get("chair-1"), Some(&ChairPosition::new(600.0, 400.0)));
    }

    #[test]
    fn test_generate_named_unknown_is_empty() {
        let config = LayoutConfig::default();
        assert!(generate_named("horseshoe", 10, 1200.0, 800.0, &config).is_empty());
        assert_eq!(generate_named("ROWS", 10, 1200.0, 800.0, &config).len(), 10);
    }

    #[test]
    fn test_apply_preset_keeps_ids_in_order() {
        let config = LayoutConfig::default();
        let mut existing = PositionMap::new();
        existing.insert("chair-1699999999", ChairPosition::new(100.0, 100.0));
        existing.insert("chair-1700000000", ChairPosition::new(100.0, 100.0));
        existing.insert("alice", ChairPosition::new(100.0, 100.0));

        let arranged = apply_preset(&existing, LayoutType::Rows, 1200.0, 800.0, &config);
        let generated = generate(LayoutType::Rows, 3, 1200.0, 800.0, &config);

        assert_eq!(
            arranged.ids().collect::<Vec<_>>(),
            vec!["chair-1699999999", "chair-1700000000", "alice"]
        );
        assert_eq!(arranged.get("alice"), generated.get("chair-3"));
    }

    #[test]
    fn test_apply_preset_empty() {
        let config = LayoutConfig::default();
        assert!(apply_preset(&PositionMap::new(), LayoutType::Groups, 1200.0, 800.0, &config).is_empty());
    }
}
