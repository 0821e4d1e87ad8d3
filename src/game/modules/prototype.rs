//! Module Prototypes
//!
//! Buildable piece definitions: identity, category and cached local bounds.

use serde::{Deserialize, Serialize};

use super::geometry::{RenderablePart, compute_bounds};
use crate::physics::Bounds;

/// Category of a buildable piece. Drives the snapping grid and floor rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Floor,
    Wall,
    /// Sub-module footprint; snaps to the fine grid
    Corner,
    /// Needs at least one floor beneath it
    Roof,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 4] = [
        ModuleKind::Floor,
        ModuleKind::Wall,
        ModuleKind::Corner,
        ModuleKind::Roof,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ModuleKind::Floor => "Floor",
            ModuleKind::Wall => "Wall",
            ModuleKind::Corner => "Corner",
            ModuleKind::Roof => "Roof",
        }
    }

    pub fn uses_fine_grid(&self) -> bool {
        matches!(self, ModuleKind::Corner)
    }

    /// Lowest floor index this kind may be placed on
    pub fn min_floor(&self) -> u32 {
        match self {
            ModuleKind::Roof => 1,
            _ => 0,
        }
    }
}

/// A reusable building-piece definition. Immutable once built; bounds are
/// computed once from the parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ModulePrototype {
    id: String,
    kind: ModuleKind,
    parts: Vec<RenderablePart>,
    bounds: Bounds,
}

impl ModulePrototype {
    pub fn new(id: impl Into<String>, kind: ModuleKind, parts: Vec<RenderablePart>) -> Self {
        let bounds = compute_bounds(&parts);
        Self {
            id: id.into(),
            kind,
            parts,
            bounds,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn parts(&self) -> &[RenderablePart] {
        &self.parts
    }

    /// Local-frame bounding volume
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_bounds_cached_from_parts() {
        let proto = ModulePrototype::new(
            "Wall",
            ModuleKind::Wall,
            vec![RenderablePart::block(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 0.2))],
        );
        assert_eq!(proto.id(), "Wall");
        assert_eq!(proto.kind(), ModuleKind::Wall);
        assert_eq!(proto.bounds().size(), Vec3::new(2.0, 2.0, 0.2));
    }

    #[test]
    fn test_empty_prototype_has_unit_bounds() {
        let proto = ModulePrototype::new("Empty", ModuleKind::Floor, Vec::new());
        assert_eq!(*proto.bounds(), Bounds::unit());
    }

    #[test]
    fn test_kind_rules() {
        assert!(ModuleKind::Corner.uses_fine_grid());
        assert!(!ModuleKind::Wall.uses_fine_grid());
        assert_eq!(ModuleKind::Roof.min_floor(), 1);
        assert_eq!(ModuleKind::Floor.min_floor(), 0);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ModuleKind::Roof).unwrap(), "\"roof\"");
        let kind: ModuleKind = serde_json::from_str("\"corner\"").unwrap();
        assert_eq!(kind, ModuleKind::Corner);
    }
}
