//! Configuration for the layout engine
//!
//! Every tunable the generators and the collision resolver share lives here
//! and is passed explicitly. Configurations can be built in code or loaded
//! from TOML, where any missing key falls back to its default:
//!
//! ```toml
//! chair_size = 70
//! min_distance = 90
//! scatter_attempts = 300
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{check_dimension, check_positive, LayoutError};

/// Errors that can occur when loading a layout configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid layout config: {0}")]
    Invalid(#[from] LayoutError),
}

/// Configuration options for layout generation and collision resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Visual diameter of a chair icon
    pub chair_size: f64,

    /// Height reserved for the name label under each chair
    pub label_height: f64,

    /// Minimum centre-to-centre distance between two resolved chairs
    pub min_distance: f64,

    /// Minimum spacing between neighbouring chairs in rows and grid layouts
    pub min_spacing: f64,

    /// Edge margin for rows and grid layouts
    pub row_margin: f64,

    /// Edge margin for group layouts
    pub group_margin: f64,

    /// Edge margin for scattered layouts
    pub scatter_margin: f64,

    /// Cluster radius per chair-count bracket (<=8, <=16, <=24, larger)
    pub group_radii: [f64; 4],

    /// Free space between neighbouring clusters
    pub group_gap: f64,

    /// Extra inset from the container edge when clamping cluster chairs
    pub group_edge_inset: f64,

    /// Candidate positions tried per chair before the scattered grid fallback
    pub scatter_attempts: usize,

    /// Radius increment of the collision search sweep
    pub search_radius_step: f64,

    /// Angle increment, in degrees, of the collision search sweep
    pub search_angle_step: f64,

    /// Largest ring radius the collision search sweeps, whatever the container size
    pub search_radius_limit: f64,

    /// Smallest canvas the size estimator will recommend
    pub baseline_width: f64,
    pub baseline_height: f64,

    /// Extra row pitch the size estimator allows for rows layouts
    pub estimate_row_extra: f64,

    /// Extra row pitch the size estimator allows for grid layouts
    pub estimate_grid_row_extra: f64,

    /// Cell pitch of one cluster in the groups size estimate
    pub estimate_group_pitch: f64,

    /// Width:height ratio of the scattered size estimate
    pub estimate_scatter_aspect: f64,

    /// Area per chair, in units of `min_spacing` squared, for the scattered estimate
    pub estimate_scatter_area_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            chair_size: 60.0,
            label_height: 20.0,
            min_distance: 80.0,
            min_spacing: 100.0,
            row_margin: 60.0,
            group_margin: 100.0,
            scatter_margin: 40.0,
            group_radii: [50.0, 55.0, 60.0, 65.0],
            group_gap: 80.0,
            group_edge_inset: 10.0,
            scatter_attempts: 150,
            search_radius_step: 20.0,
            search_angle_step: 30.0,
            search_radius_limit: 4000.0,
            baseline_width: 1200.0,
            baseline_height: 800.0,
            estimate_row_extra: 40.0,
            estimate_grid_row_extra: 20.0,
            estimate_group_pitch: 200.0,
            estimate_scatter_aspect: 1.4,
            estimate_scatter_area_factor: 1.5,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Half the chair diameter
    pub fn chair_radius(&self) -> f64 {
        self.chair_size / 2.0
    }

    /// Check that every value is usable by the generators and the resolver
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_positive("chair_size", self.chair_size)?;
        check_dimension("label_height", self.label_height)?;
        check_positive("min_distance", self.min_distance)?;
        check_positive("min_spacing", self.min_spacing)?;
        check_dimension("row_margin", self.row_margin)?;
        check_dimension("group_margin", self.group_margin)?;
        check_dimension("scatter_margin", self.scatter_margin)?;
        for radius in self.group_radii {
            check_positive("group_radii", radius)?;
        }
        check_dimension("group_gap", self.group_gap)?;
        check_dimension("group_edge_inset", self.group_edge_inset)?;
        check_positive("search_radius_step", self.search_radius_step)?;
        check_positive("search_angle_step", self.search_angle_step)?;
        if self.search_angle_step > 360.0 {
            return Err(LayoutError::invalid_argument(
                "search_angle_step",
                "must not exceed 360 degrees",
            ));
        }
        check_positive("search_radius_limit", self.search_radius_limit)?;
        check_positive("baseline_width", self.baseline_width)?;
        check_positive("baseline_height", self.baseline_height)?;
        check_dimension("estimate_row_extra", self.estimate_row_extra)?;
        check_dimension("estimate_grid_row_extra", self.estimate_grid_row_extra)?;
        check_positive("estimate_group_pitch", self.estimate_group_pitch)?;
        check_positive("estimate_scatter_aspect", self.estimate_scatter_aspect)?;
        check_positive("estimate_scatter_area_factor", self.estimate_scatter_area_factor)?;
        Ok(())
    }

    /// Set the chair diameter
    pub fn with_chair_size(mut self, size: f64) -> Self {
        self.chair_size = size;
        self
    }

    /// Set the label allowance under each chair
    pub fn with_label_height(mut self, height: f64) -> Self {
        self.label_height = height;
        self
    }

    /// Set the minimum distance between resolved chairs
    pub fn with_min_distance(mut self, distance: f64) -> Self {
        self.min_distance = distance;
        self
    }

    /// Set the minimum spacing used by rows and grid layouts
    pub fn with_min_spacing(mut self, spacing: f64) -> Self {
        self.min_spacing = spacing;
        self
    }

    /// Set the number of scatter attempts per chair
    pub fn with_scatter_attempts(mut self, attempts: usize) -> Self {
        self.scatter_attempts = attempts;
        self
    }

    /// Set the radial and angular steps of the collision search
    pub fn with_search_steps(mut self, radius_step: f64, angle_step: f64) -> Self {
        self.search_radius_step = radius_step;
        self.search_angle_step = angle_step;
        self
    }

    /// Set the largest ring radius of the collision search
    pub fn with_search_radius_limit(mut self, limit: f64) -> Self {
        self.search_radius_limit = limit;
        self
    }

    /// Set the smallest canvas the size estimator recommends
    pub fn with_baseline(mut self, width: f64, height: f64) -> Self {
        self.baseline_width = width;
        self.baseline_height = height;
        self
    }
}
