//! Seating Layout - chair arrangement engine for classroom seating charts
//!
//! This library generates chair layouts (rows, grid, groups, scattered) for a
//! given chair count and canvas, and resolves overlapping or out-of-bounds
//! chairs in hand-edited arrangements.
//!
//! # Example
//!
//! ```rust
//! use seating_layout::{generate_layout, LayoutType};
//!
//! let positions = generate_layout(LayoutType::Rows, 6, 1200.0, 800.0);
//! assert_eq!(positions.len(), 6);
//! assert!(positions.get("chair-1").is_some());
//! ```

pub mod error;
pub mod layout;

pub use error::Error;
pub use layout::lint::{LintCategory, LintWarning};
pub use layout::{
    apply_preset, fit_container, ChairExtent, ChairPosition, ConfigError, ContainerBounds,
    FitOptions, LayoutConfig, LayoutError, LayoutType, OutOfBoundsChair, PositionMap,
};

use layout::error::{check_bounds, check_dimension, check_position};

/// Generate a preset layout with the default configuration.
///
/// The canvas is widened to the recommended size for the chair count when it
/// is smaller, and the result is always passed through collision resolution.
///
/// # Example
///
/// ```rust
/// use seating_layout::{generate_layout, LayoutType};
///
/// let positions = generate_layout(LayoutType::Grid, 1, 1200.0, 800.0);
/// let chair = positions.get("chair-1").unwrap();
/// assert_eq!((chair.x, chair.y), (600.0, 400.0));
/// ```
pub fn generate_layout(
    layout_type: LayoutType,
    chair_count: usize,
    width: f64,
    height: f64,
) -> PositionMap {
    generate_layout_with_config(layout_type, chair_count, width, height, &LayoutConfig::default())
}

/// Generate a preset layout with custom configuration
pub fn generate_layout_with_config(
    layout_type: LayoutType,
    chair_count: usize,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> PositionMap {
    layout::generate(layout_type, chair_count, width, height, config)
}

/// Generate a preset layout after checking the canvas size and configuration
pub fn try_generate_layout(
    layout_type: LayoutType,
    chair_count: usize,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> Result<PositionMap, LayoutError> {
    check_dimension("width", width)?;
    check_dimension("height", height)?;
    config.validate()?;
    Ok(layout::generate(layout_type, chair_count, width, height, config))
}

/// Recommended canvas size for a chair count and layout type
pub fn estimate_optimal_size(chair_count: usize, layout_type: LayoutType) -> ContainerBounds {
    layout::estimate_optimal_size(chair_count, layout_type, &LayoutConfig::default())
}

/// Resolve collisions with the default configuration.
///
/// See [`layout::collision`] for the sequential-pass caveat.
pub fn resolve_collisions(positions: &PositionMap, bounds: ContainerBounds) -> PositionMap {
    layout::resolve_collisions(positions, bounds, &LayoutConfig::default())
}

/// Resolve collisions after checking the bounds, every position and the configuration
pub fn try_resolve_collisions(
    positions: &PositionMap,
    bounds: ContainerBounds,
    config: &LayoutConfig,
) -> Result<PositionMap, LayoutError> {
    check_bounds(bounds)?;
    for (id, pos) in positions.iter() {
        check_position(id, pos)?;
    }
    config.validate()?;
    Ok(layout::resolve_collisions(positions, bounds, config))
}

/// Check a chair against the container with the default chair and label size
pub fn is_within_bounds(position: ChairPosition, bounds: ContainerBounds) -> bool {
    layout::is_within_bounds(position, bounds, &LayoutConfig::default())
}

/// Clamp a chair into the container with the default chair and label size
pub fn constrain_to_bounds(position: ChairPosition, bounds: ContainerBounds) -> ChairPosition {
    layout::constrain_to_bounds(position, bounds, &LayoutConfig::default())
}

/// Run the lint checks with custom configuration
pub fn lint(positions: &PositionMap, bounds: ContainerBounds, config: &LayoutConfig) -> Vec<LintWarning> {
    layout::lint::check(positions, bounds, config)
}

/// Parse a saved seating arrangement (`{"chair-1": {"x": .., "y": ..}, ..}`)
pub fn positions_from_json(json: &str) -> Result<PositionMap, Error> {
    let positions: PositionMap = serde_json::from_str(json)?;
    for (id, pos) in positions.iter() {
        check_position(id, pos)?;
    }
    Ok(positions)
}

/// Serialize a seating arrangement as pretty-printed JSON
pub fn positions_to_json(positions: &PositionMap) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(positions)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_every_type() {
        for layout_type in LayoutType::ALL {
            let positions = generate_layout(layout_type, 12, 1200.0, 800.0);
            assert_eq!(positions.len(), 12, "{}", layout_type);
        }
    }

    #[test]
    fn test_try_generate_rejects_bad_dimensions() {
        let config = LayoutConfig::default();
        let err = try_generate_layout(LayoutType::Rows, 4, f64::NAN, 800.0, &config).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument { ref name, .. } if name == "width"));

        let err = try_generate_layout(LayoutType::Rows, 4, 1200.0, -1.0, &config).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument { ref name, .. } if name == "height"));
    }

    #[test]
    fn test_try_generate_rejects_bad_config() {
        let config = LayoutConfig::default().with_min_distance(0.0);
        assert!(try_generate_layout(LayoutType::Grid, 4, 1200.0, 800.0, &config).is_err());
    }

    #[test]
    fn test_try_resolve_rejects_non_finite_position() {
        let mut positions = PositionMap::new();
        positions.insert("chair-1", ChairPosition::new(f64::INFINITY, 10.0));
        let result = try_resolve_collisions(
            &positions,
            ContainerBounds::new(1200.0, 800.0),
            &LayoutConfig::default(),
        );
        assert!(matches!(
            result,
            Err(LayoutError::InvalidArgument { ref name, .. }) if name == "chair-1"
        ));
    }

    #[test]
    fn test_positions_json_round_trip_keeps_order() {
        let json = r#"{"b": {"x": 10, "y": 20}, "a": {"x": 30.5, "y": 40}}"#;
        let positions = positions_from_json(json).unwrap();
        assert_eq!(positions.ids().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(positions.get("a"), Some(&ChairPosition::new(30.5, 40.0)));

        let saved = positions_to_json(&positions).unwrap();
        assert!(saved.find("\"b\"").unwrap() < saved.find("\"a\"").unwrap());
    }

    #[test]
    fn test_positions_from_json_rejects_string_coordinates() {
        let result = positions_from_json(r#"{"chair-1": {"x": "10", "y": 20}}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
