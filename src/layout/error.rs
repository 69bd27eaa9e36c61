//! Error types for the layout engine

use thiserror::Error;

use super::types::{ChairPosition, ContainerBounds};

/// Errors raised by the checked entry points of the layout engine.
///
/// The geometry itself degrades silently (empty maps, clamped placements);
/// these errors only guard malformed inputs.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// A numeric argument is negative, non-finite, or otherwise unusable
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// A layout name that does not match any arrangement strategy
    #[error("unknown layout type '{0}' (expected one of: rows, grid, groups, scattered)")]
    UnknownLayoutType(String),
}

impl LayoutError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Require a finite, non-negative dimension
pub fn check_dimension(name: &str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::invalid_argument(name, format!("{} is not finite", value)));
    }
    if value < 0.0 {
        return Err(LayoutError::invalid_argument(name, format!("{} is negative", value)));
    }
    Ok(())
}

/// Require a finite, strictly positive value
pub fn check_positive(name: &str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::invalid_argument(
            name,
            format!("{} must be a positive finite number", value),
        ));
    }
    Ok(())
}

pub fn check_bounds(bounds: ContainerBounds) -> Result<(), LayoutError> {
    check_dimension("width", bounds.width)?;
    check_dimension("height", bounds.height)
}

pub fn check_position(id: &str, position: &ChairPosition) -> Result<(), LayoutError> {
    if !position.is_finite() {
        return Err(LayoutError::invalid_argument(
            id,
            format!("position ({}, {}) is not finite", position.x, position.y),
        ));
    }
    Ok(())
}
