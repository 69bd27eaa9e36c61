//! Core types for the seating-layout engine

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::LayoutError;

/// Centre point of a chair icon in canvas pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChairPosition {
    pub x: f64,
    pub y: f64,
}

impl ChairPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another chair centre
    pub fn distance_to(&self, other: &ChairPosition) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Offset this point by `radius` along `degrees` (0° points right, 90° down)
    pub fn offset_polar(&self, radius: f64, degrees: f64) -> ChairPosition {
        let radians = (degrees * std::f64::consts::PI) / 180.0;
        ChairPosition {
            x: self.x + radius * radians.cos(),
            y: self.y + radius * radians.sin(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The rectangle all chair footprints must stay inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow each dimension to at least the other's
    pub fn at_least(&self, other: ContainerBounds) -> ContainerBounds {
        ContainerBounds {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    pub fn center(&self) -> ChairPosition {
        ChairPosition::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Arrangement strategy for generated layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Rows,
    Grid,
    Groups,
    Scattered,
}

impl LayoutType {
    pub const ALL: [LayoutType; 4] = [
        LayoutType::Rows,
        LayoutType::Grid,
        LayoutType::Groups,
        LayoutType::Scattered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Rows => "rows",
            LayoutType::Grid => "grid",
            LayoutType::Groups => "groups",
            LayoutType::Scattered => "scattered",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LayoutError::UnknownLayoutType(s.to_string()))
    }
}

/// Identifier assigned to the chair at zero-based `index` by the generators
pub fn chair_id(index: usize) -> String {
    format!("chair-{}", index + 1)
}

/// Chair identifier -> position, kept in insertion order.
///
/// Keys are unique: inserting an existing key replaces its position in place.
/// The collision resolver walks chairs in this order, so the order is part of
/// the map's observable behaviour even though generators assign by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionMap {
    entries: Vec<(String, ChairPosition)>,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace a chair, returning the previous position if any
    pub fn insert(&mut self, id: impl Into<String>, position: ChairPosition) -> Option<ChairPosition> {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => Some(std::mem::replace(existing, position)),
            None => {
                self.entries.push((id, position));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ChairPosition> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, pos)| pos)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entry at `index` in insertion order
    pub fn get_index(&self, index: usize) -> Option<(&str, &ChairPosition)> {
        self.entries
            .get(index)
            .map(|(key, pos)| (key.as_str(), pos))
    }

    /// Mutable position at `index` in insertion order
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut ChairPosition> {
        self.entries.get_mut(index).map(|(_, pos)| pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChairPosition)> {
        self.entries.iter().map(|(key, pos)| (key.as_str(), pos))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn positions(&self) -> impl Iterator<Item = &ChairPosition> {
        self.entries.iter().map(|(_, pos)| pos)
    }
}

impl FromIterator<(String, ChairPosition)> for PositionMap {
    fn from_iter<I: IntoIterator<Item = (String, ChairPosition)>>(iter: I) -> Self {
        let mut map = PositionMap::new();
        for (id, pos) in iter {
            map.insert(id, pos);
        }
        map
    }
}

impl IntoIterator for PositionMap {
    type Item = (String, ChairPosition);
    type IntoIter = std::vec::IntoIter<(String, ChairPosition)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PositionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, pos) in &self.entries {
            map.serialize_entry(id, pos)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PositionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionMapVisitor;

        impl<'de> Visitor<'de> for PositionMapVisitor {
            type Value = PositionMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of chair ids to {x, y} positions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = PositionMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, pos)) = access.next_entry::<String, ChairPosition>()? {
                    map.insert(id, pos);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(PositionMapVisitor)
    }
}

/// Axis-aligned extent covering every chair footprint, label included
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChairExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ChairExtent {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = ChairPosition::new(0.0, 0.0);
        let b = ChairPosition::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_layout_type_parse() {
        assert_eq!("rows".parse::<LayoutType>().unwrap(), LayoutType::Rows);
        assert_eq!("Scattered".parse::<LayoutType>().unwrap(), LayoutType::Scattered);
        assert!(matches!(
            "circle".parse::<LayoutType>(),
            Err(LayoutError::UnknownLayoutType(name)) if name == "circle"
        ));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = PositionMap::new();
        map.insert("a", ChairPosition::new(1.0, 1.0));
        map.insert("b", ChairPosition::new(2.0, 2.0));
        let previous = map.insert("a", ChairPosition::new(9.0, 9.0));

        assert_eq!(previous, Some(ChairPosition::new(1.0, 1.0)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&ChairPosition::new(9.0, 9.0)));
    }

    #[test]
    fn test_json_keeps_document_order() {
        let json = r#"{"chair-10": {"x": 1, "y": 2}, "chair-2": {"x": 3, "y": 4}}"#;
        let map: PositionMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.ids().collect::<Vec<_>>(), vec!["chair-10", "chair-2"]);

        let back = serde_json::to_string(&map).unwrap();
        assert_eq!(
            back,
            r#"{"chair-10":{"x":1.0,"y":2.0},"chair-2":{"x":3.0,"y":4.0}}"#
        );
    }

    #[test]
    fn test_chair_id_is_one_based() {
        assert_eq!(chair_id(0), "chair-1");
        assert_eq!(chair_id(11), "chair-12");
    }
}
