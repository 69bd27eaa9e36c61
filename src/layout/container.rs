//! Container bounds rules and container sizing
//!
//! A chair occupies its icon circle plus a label strip below it, so the
//! usable band for chair centres is `[r, w - r]` horizontally and
//! `[r, h - r - label]` vertically.

use super::config::LayoutConfig;
use super::types::{ChairExtent, ChairPosition, ContainerBounds, PositionMap};

/// Check whether a chair's whole footprint lies inside the container
pub fn is_within_bounds(
    position: ChairPosition,
    bounds: ContainerBounds,
    config: &LayoutConfig,
) -> bool {
    let radius = config.chair_radius();
    position.x >= radius
        && position.x <= bounds.width - radius
        && position.y >= radius
        && position.y <= bounds.height - radius - config.label_height
}

/// Project a chair centre into the in-bounds band, one axis at a time.
///
/// When the container is narrower than a chair the lower edge wins, so the
/// result never has a negative coordinate.
pub fn constrain_to_bounds(
    position: ChairPosition,
    bounds: ContainerBounds,
    config: &LayoutConfig,
) -> ChairPosition {
    let radius = config.chair_radius();
    ChairPosition {
        x: radius.max(position.x.min(bounds.width - radius)),
        y: radius.max(position.y.min(bounds.height - radius - config.label_height)),
    }
}

/// Extent of all chair footprints; all zeros for an empty map
pub fn chair_extent(positions: &PositionMap, config: &LayoutConfig) -> ChairExtent {
    if positions.is_empty() {
        return ChairExtent::default();
    }

    let radius = config.chair_radius();
    positions.positions().fold(
        ChairExtent {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        },
        |acc, pos| ChairExtent {
            min_x: acc.min_x.min(pos.x - radius),
            max_x: acc.max_x.max(pos.x + radius),
            min_y: acc.min_y.min(pos.y - radius),
            max_y: acc.max_y.max(pos.y + radius + config.label_height),
        },
    )
}

/// Size needed to show an extent with `padding` on every side
pub fn content_size(extent: &ChairExtent, padding: f64) -> ContainerBounds {
    ContainerBounds {
        width: (extent.width() + 2.0 * padding).max(0.0),
        height: (extent.height() + 2.0 * padding).max(0.0),
    }
}

/// Limits applied when fitting a container around existing chairs
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub padding: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Largest share of the viewport width the container may take
    pub max_width_ratio: f64,
    /// Largest share of the viewport height the container may take
    pub max_height_ratio: f64,
    pub absolute_max_width: f64,
    pub absolute_max_height: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 80.0,
            min_width: 500.0,
            min_height: 350.0,
            max_width_ratio: 0.95,
            max_height_ratio: 0.75,
            absolute_max_width: 1400.0,
            absolute_max_height: 800.0,
        }
    }
}

impl FitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding kept around the chairs
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the smallest container size
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Set the hard upper limits, independent of the viewport
    pub fn with_absolute_max(mut self, width: f64, height: f64) -> Self {
        self.absolute_max_width = width;
        self.absolute_max_height = height;
        self
    }
}

/// Recommend a container size for an existing arrangement.
///
/// The padded content size is capped by the viewport share and the absolute
/// maximum, then floored at the minimum size and rounded to whole pixels.
pub fn fit_container(
    positions: &PositionMap,
    viewport: ContainerBounds,
    options: &FitOptions,
    config: &LayoutConfig,
) -> ContainerBounds {
    if positions.is_empty() {
        return ContainerBounds::new(options.min_width, options.min_height);
    }

    let content = content_size(&chair_extent(positions, config), options.padding);
    let max_width = (viewport.width * options.max_width_ratio).min(options.absolute_max_width);
    let max_height = (viewport.height * options.max_height_ratio).min(options.absolute_max_height);

    ContainerBounds {
        width: options.min_width.max(content.width.min(max_width)).round(),
        height: options.min_height.max(content.height.min(max_height)).round(),
    }
}
