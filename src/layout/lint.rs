//! Lint pass for detecting seating defects.
//!
//! Read-only checks over a position map: chairs closer than the minimum
//! distance, chairs outside the container, and name labels running into a
//! neighbouring chair.

use std::fmt;

use super::collision::find_chairs_out_of_bounds;
use super::config::LayoutConfig;
use super::types::{ChairPosition, ContainerBounds, PositionMap};

/// A lint warning about a seating defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Containment,
    Label,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Containment => write!(f, "containment"),
            LintCategory::Label => write!(f, "label"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all lint checks on a seating arrangement.
pub fn check(
    positions: &PositionMap,
    bounds: ContainerBounds,
    config: &LayoutConfig,
) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_overlaps(positions, config, &mut warnings);
    check_containment(positions, bounds, config, &mut warnings);
    check_labels(positions, config, &mut warnings);
    warnings
}

// ── Chair spacing ─────────────────────────────────────────────────

fn check_overlaps(positions: &PositionMap, config: &LayoutConfig, warnings: &mut Vec<LintWarning>) {
    let chairs: Vec<(&str, &ChairPosition)> = positions.iter().collect();
    for i in 0..chairs.len() {
        for j in (i + 1)..chairs.len() {
            let (id_a, a) = chairs[i];
            let (id_b, b) = chairs[j];
            let distance = a.distance_to(b);
            if distance < config.min_distance {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!(
                        "chairs \"{}\" and \"{}\" are {:.0}px apart (minimum {:.0}px)",
                        id_a, id_b, distance, config.min_distance
                    ),
                });
            }
        }
    }
}

// ── Container bounds ──────────────────────────────────────────────

fn check_containment(
    positions: &PositionMap,
    bounds: ContainerBounds,
    config: &LayoutConfig,
    warnings: &mut Vec<LintWarning>,
) {
    for chair in find_chairs_out_of_bounds(positions, bounds, config) {
        warnings.push(LintWarning {
            category: LintCategory::Containment,
            message: format!(
                "chair \"{}\" at ({:.0}, {:.0}) leaves the {:.0}x{:.0} container, nearest inside position is ({:.0}, {:.0})",
                chair.id,
                chair.position.x,
                chair.position.y,
                bounds.width,
                bounds.height,
                chair.suggested_position.x,
                chair.suggested_position.y
            ),
        });
    }
}

// ── Name labels ───────────────────────────────────────────────────

/// Axis-aligned box as (left, top, right, bottom)
type Rect = (f64, f64, f64, f64);

fn icon_rect(pos: &ChairPosition, radius: f64) -> Rect {
    (pos.x - radius, pos.y - radius, pos.x + radius, pos.y + radius)
}

fn label_rect(pos: &ChairPosition, radius: f64, label_height: f64) -> Rect {
    (pos.x - radius, pos.y + radius, pos.x + radius, pos.y + radius + label_height)
}

fn intersects(a: Rect, b: Rect) -> bool {
    a.0 < b.2 && a.2 > b.0 && a.1 < b.3 && a.3 > b.1
}

fn check_labels(positions: &PositionMap, config: &LayoutConfig, warnings: &mut Vec<LintWarning>) {
    if config.label_height <= 0.0 {
        return;
    }

    let radius = config.chair_radius();
    for (owner, pos) in positions.iter() {
        let label = label_rect(pos, radius, config.label_height);
        for (other, other_pos) in positions.iter() {
            if other == owner {
                continue;
            }
            if intersects(label, icon_rect(other_pos, radius)) {
                warnings.push(LintWarning {
                    category: LintCategory::Label,
                    message: format!(
                        "name label of chair \"{}\" is covered by chair \"{}\"",
                        owner, other
                    ),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ContainerBounds {
        ContainerBounds::new(1200.0, 800.0)
    }

    fn categories(warnings: &[LintWarning]) -> Vec<LintCategory> {
        warnings.iter().map(|w| w.category).collect()
    }

    #[test]
    fn test_clean_layout_has_no_warnings() {
        let config = LayoutConfig::default();
        let mut positions = PositionMap::new();
        positions.insert("chair-1", ChairPosition::new(100.0, 100.0));
        positions.insert("chair-2", ChairPosition::new(200.0, 100.0));
        positions.insert("chair-3", ChairPosition::new(100.0, 200.0));

        assert!(check(&positions, bounds(), &config).is_empty());
    }

    #[test]
    fn test_overlap_warning() {
        let config = LayoutConfig::default();
        let mut positions = PositionMap::new();
        positions.insert("chair-1", ChairPosition::new(100.0, 100.0));
        positions.insert("chair-2", ChairPosition::new(150.0, 100.0));

        let warnings = check(&positions, bounds(), &config);
        assert_eq!(categories(&warnings), vec![LintCategory::Overlap]);
        assert_eq!(
            warnings[0].message,
            "chairs \"chair-1\" and \"chair-2\" are 50px apart (minimum 80px)"
        );
    }

    #[test]
    fn test_containment_warning() {
        let config = LayoutConfig::default();
        let mut positions = PositionMap::new();
        positions.insert("chair-1", ChairPosition::new(600.0, 790.0));

        let warnings = check(&positions, bounds(), &config);
        assert_eq!(categories(&warnings), vec![LintCategory::Containment]);
        assert!(warnings[0].message.contains("(600, 750)"));
        assert_eq!(warnings[0].to_string().split(':').next(), Some("containment"));
    }

    #[test]
    fn test_label_covered_by_chair_below() {
        let config = LayoutConfig::default();
        let mut positions = PositionMap::new();
        positions.insert("front", ChairPosition::new(300.0, 300.0));
        positions.insert("behind", ChairPosition::new(300.0, 370.0));

        let warnings = check(&positions, bounds(), &config);
        assert!(warnings
            .iter()
            .any(|w| w.category == LintCategory::Label && w.message.contains("\"front\"")));
    }
}
