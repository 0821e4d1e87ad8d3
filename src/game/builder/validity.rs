//! Placement Validity
//!
//! Go/no-go for a candidate placement: a prototype must be selected, the
//! floor must allow its kind, and its slightly shrunk world box must not
//! touch any placed module.

use glam::{Quat, Vec3};
use thiserror::Error;

use crate::game::config::BuilderConfig;
use crate::game::layout::BuildingLayout;
use crate::game::modules::ModulePrototype;
use crate::physics::OrientedBox;

/// Why a candidate cannot be placed. Shown to the user; never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no module selected")]
    NoPrototypeSelected,
    #[error("this module needs a floor beneath it (floor {floor} is not allowed)")]
    FloorRestricted { floor: u32 },
    #[error("invalid position: overlaps an existing module")]
    Overlap,
}

/// World box the candidate would occupy, shrunk by the overlap margin so
/// flush neighbours are not reported as overlapping.
pub fn candidate_box(
    position: Vec3,
    rotation: Quat,
    prototype: &ModulePrototype,
    config: &BuilderConfig,
) -> OrientedBox {
    OrientedBox::from_bounds(prototype.bounds(), position, rotation).shrunk(config.overlap_margin)
}

/// Check whether `prototype` may be placed at `position`/`rotation` on `floor`.
pub fn check_placement(
    position: Vec3,
    rotation: Quat,
    prototype: Option<&ModulePrototype>,
    floor: u32,
    layout: &BuildingLayout,
    config: &BuilderConfig,
) -> Result<(), PlacementError> {
    let prototype = prototype.ok_or(PlacementError::NoPrototypeSelected)?;

    if floor < prototype.kind().min_floor() {
        return Err(PlacementError::FloorRestricted { floor });
    }

    let candidate = candidate_box(position, rotation, prototype, config);
    if layout.iter().any(|placed| candidate.intersects(&placed.world_box())) {
        return Err(PlacementError::Overlap);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::layout::PlacedModule;
    use crate::game::modules::{ModuleKind, RenderablePart};
    use std::sync::Arc;

    fn cube(kind: ModuleKind) -> Arc<ModulePrototype> {
        Arc::new(ModulePrototype::new(
            kind.name(),
            kind,
            vec![RenderablePart::block(Vec3::new(0.0, 0.5, 0.0), Vec3::ONE)],
        ))
    }

    fn layout_with(proto: &Arc<ModulePrototype>, positions: &[Vec3]) -> BuildingLayout {
        positions
            .iter()
            .map(|&p| PlacedModule::new(Arc::clone(proto), p, Quat::IDENTITY))
            .collect()
    }

    #[test]
    fn test_no_prototype() {
        let result = check_placement(
            Vec3::ZERO,
            Quat::IDENTITY,
            None,
            0,
            &BuildingLayout::new(),
            &BuilderConfig::default(),
        );
        assert_eq!(result, Err(PlacementError::NoPrototypeSelected));
    }

    #[test]
    fn test_roof_on_ground_floor() {
        let roof = cube(ModuleKind::Roof);
        let config = BuilderConfig::default();
        let empty = BuildingLayout::new();
        assert_eq!(
            check_placement(Vec3::ZERO, Quat::IDENTITY, Some(&*roof), 0, &empty, &config),
            Err(PlacementError::FloorRestricted { floor: 0 })
        );
        assert_eq!(
            check_placement(Vec3::new(0.0, config.floor_y(1), 0.0), Quat::IDENTITY, Some(&*roof), 1, &empty, &config),
            Ok(())
        );
    }

    #[test]
    fn test_floor_rule_checked_before_overlap() {
        let roof = cube(ModuleKind::Roof);
        let layout = layout_with(&roof, &[Vec3::ZERO]);
        let result = check_placement(
            Vec3::ZERO,
            Quat::IDENTITY,
            Some(&*roof),
            0,
            &layout,
            &BuilderConfig::default(),
        );
        assert_eq!(result, Err(PlacementError::FloorRestricted { floor: 0 }));
    }

    #[test]
    fn test_same_cell_overlaps() {
        let wall = cube(ModuleKind::Wall);
        let layout = layout_with(&wall, &[Vec3::ZERO]);
        let result = check_placement(
            Vec3::ZERO,
            Quat::IDENTITY,
            Some(&*wall),
            0,
            &layout,
            &BuilderConfig::default(),
        );
        assert_eq!(result, Err(PlacementError::Overlap));
    }

    #[test]
    fn test_flush_neighbours_allowed() {
        let wall = cube(ModuleKind::Wall);
        let config = BuilderConfig::default();
        let layout = layout_with(
            &wall,
            &[Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)],
        );
        assert_eq!(
            check_placement(Vec3::ZERO, Quat::IDENTITY, Some(&*wall), 0, &layout, &config),
            Ok(())
        );
    }

    #[test]
    fn test_upper_floor_clears_ground_floor() {
        let wall = cube(ModuleKind::Wall);
        let config = BuilderConfig::default();
        let layout = layout_with(&wall, &[Vec3::ZERO]);
        let up = Vec3::new(0.0, config.floor_y(1), 0.0);
        assert_eq!(
            check_placement(up, Quat::IDENTITY, Some(&*wall), 1, &layout, &config),
            Ok(())
        );
    }

    #[test]
    fn test_rotated_candidate_against_placed() {
        let plank = Arc::new(ModulePrototype::new(
            "Plank",
            ModuleKind::Wall,
            vec![RenderablePart::block(Vec3::new(0.0, 0.5, 0.0), Vec3::new(3.0, 1.0, 0.2))],
        ));
        let config = BuilderConfig::default();
        let layout = layout_with(&plank, &[Vec3::new(0.0, 0.0, 1.0)]);

        // Unrotated the plank runs along X and misses the one at z = 1
        assert_eq!(
            check_placement(Vec3::ZERO, Quat::IDENTITY, Some(&*plank), 0, &layout, &config),
            Ok(())
        );
        // Turned a quarter it runs along Z and hits it
        let rot = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        assert_eq!(
            check_placement(Vec3::ZERO, rot, Some(&*plank), 0, &layout, &config),
            Err(PlacementError::Overlap)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PlacementError::Overlap.to_string(), "invalid position: overlaps an existing module");
        assert!(PlacementError::FloorRestricted { floor: 0 }.to_string().contains("floor 0"));
    }
}
