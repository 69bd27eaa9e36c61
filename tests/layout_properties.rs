//! Property-style integration tests for generated and resolved layouts:
//! chair counts, container bounds, separation, determinism and idempotence.

use seating_layout::{
    estimate_optimal_size, generate_layout, is_within_bounds, resolve_collisions, ChairPosition,
    ContainerBounds, LayoutConfig, LayoutType, PositionMap,
};

const COUNTS: [usize; 8] = [1, 2, 3, 5, 8, 12, 20, 30];

/// Bounds the dispatcher actually lays out on
fn effective_bounds(layout_type: LayoutType, count: usize, width: f64, height: f64) -> ContainerBounds {
    ContainerBounds::new(width, height).at_least(estimate_optimal_size(count, layout_type))
}

fn min_pair_distance(positions: &PositionMap) -> f64 {
    let points: Vec<ChairPosition> = positions.positions().copied().collect();
    let mut min = f64::INFINITY;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            min = min.min(points[i].distance_to(&points[j]));
        }
    }
    min
}

#[test]
fn test_count_preservation_for_every_type() {
    for layout_type in LayoutType::ALL {
        assert!(generate_layout(layout_type, 0, 1200.0, 800.0).is_empty());
        for count in COUNTS {
            let positions = generate_layout(layout_type, count, 1200.0, 800.0);
            assert_eq!(positions.len(), count, "{} with {} chairs", layout_type, count);
            for i in 1..=count {
                let id = format!("chair-{}", i);
                assert!(positions.contains_key(&id), "{} missing {}", layout_type, id);
            }
        }
    }
}

#[test]
fn test_generated_layouts_are_in_bounds() {
    for layout_type in LayoutType::ALL {
        for count in COUNTS {
            let bounds = effective_bounds(layout_type, count, 1200.0, 800.0);
            let positions = generate_layout(layout_type, count, 1200.0, 800.0);
            for (id, pos) in positions.iter() {
                assert!(
                    is_within_bounds(*pos, bounds),
                    "{} {} at {:?} outside {:?}",
                    layout_type,
                    id,
                    pos,
                    bounds
                );
            }
        }
    }
}

#[test]
fn test_generated_layouts_keep_minimum_distance() {
    let min_distance = LayoutConfig::default().min_distance;
    for layout_type in LayoutType::ALL {
        for count in COUNTS {
            let positions = generate_layout(layout_type, count, 1200.0, 800.0);
            if count > 1 {
                let closest = min_pair_distance(&positions);
                assert!(
                    closest >= min_distance - 1e-9,
                    "{} with {} chairs: closest pair {} apart",
                    layout_type,
                    count,
                    closest
                );
            }
        }
    }
}

#[test]
fn test_scattered_is_deterministic() {
    for count in [1, 7, 24, 60] {
        let first = generate_layout(LayoutType::Scattered, count, 1200.0, 800.0);
        let second = generate_layout(LayoutType::Scattered, count, 1200.0, 800.0);
        assert_eq!(first, second);
    }
}

#[test]
fn test_resolved_chairs_stay_in_bounds() {
    let bounds = ContainerBounds::new(900.0, 600.0);
    let positions: PositionMap = (0..15)
        .map(|i| {
            // Dragged around carelessly: clumped, some off the canvas
            let x = -40.0 + 70.0 * (i % 5) as f64;
            let y = 580.0 - 30.0 * (i / 5) as f64;
            (format!("chair-{}", i + 1), ChairPosition::new(x, y))
        })
        .collect();

    let resolved = resolve_collisions(&positions, bounds);
    assert_eq!(resolved.len(), 15);
    for (id, pos) in resolved.iter() {
        assert!(is_within_bounds(*pos, bounds), "{} at {:?}", id, pos);
    }
    assert!(min_pair_distance(&resolved) >= 80.0 - 1e-9);
}

#[test]
fn test_resolution_is_idempotent_when_satisfiable() {
    let bounds = ContainerBounds::new(1200.0, 800.0);
    let mut positions = PositionMap::new();
    positions.insert("chair-1", ChairPosition::new(100.0, 100.0));
    positions.insert("chair-2", ChairPosition::new(110.0, 100.0));
    positions.insert("chair-3", ChairPosition::new(600.0, 400.0));
    positions.insert("chair-4", ChairPosition::new(640.0, 420.0));

    let once = resolve_collisions(&positions, bounds);
    let twice = resolve_collisions(&once, bounds);
    assert_eq!(once, twice);
}

#[test]
fn test_overcrowded_container_degrades_without_panicking() {
    // Far more chairs than a 200x200 room can separate: the sweep runs out
    // and chairs are clamped, so some pairs stay closer than the minimum.
    let bounds = ContainerBounds::new(200.0, 200.0);
    let positions: PositionMap = (0..30)
        .map(|i| (format!("chair-{}", i + 1), ChairPosition::new(100.0, 100.0)))
        .collect();

    let resolved = resolve_collisions(&positions, bounds);
    assert_eq!(resolved.len(), 30);
    for pos in resolved.positions() {
        assert!(is_within_bounds(*pos, bounds));
    }
    assert!(min_pair_distance(&resolved) < 80.0);
}

#[test]
fn test_dense_groups_fall_back_to_clamping() {
    // At 100+ chairs the widened canvas is too tight for the cluster grid:
    // the radial search runs out for some chairs, which are clamped and may
    // sit closer than the minimum distance. Every chair still stays inside.
    let min_distance = LayoutConfig::default().min_distance;
    for count in [100, 120] {
        let bounds = effective_bounds(LayoutType::Groups, count, 1200.0, 800.0);
        let positions = generate_layout(LayoutType::Groups, count, 1200.0, 800.0);

        assert_eq!(positions.len(), count);
        assert!(positions.positions().all(|p| is_within_bounds(*p, bounds)));
        assert!(
            min_pair_distance(&positions) < min_distance,
            "groups with {} chairs unexpectedly fully separated",
            count
        );
    }
}

#[test]
fn test_small_canvas_is_widened() {
    for layout_type in LayoutType::ALL {
        let positions = generate_layout(layout_type, 20, 320.0, 240.0);
        assert_eq!(positions.len(), 20);
        let bounds = effective_bounds(layout_type, 20, 320.0, 240.0);
        assert!(positions.positions().all(|p| is_within_bounds(*p, bounds)));
    }
}
