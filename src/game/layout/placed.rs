//! Placed Modules
//!
//! Committed module instances and the ordered layout that holds them.

use std::sync::Arc;

use glam::{Quat, Vec3};

use crate::game::modules::ModulePrototype;
use crate::game::scene::{PlacedHandle, Scene};
use crate::physics::OrientedBox;

/// A module committed to the scene.
#[derive(Debug, Clone)]
pub struct PlacedModule {
    prototype: Arc<ModulePrototype>,
    pub position: Vec3,
    pub rotation: Quat,
    /// Scene object mirroring this module, once spawned
    scene_handle: Option<PlacedHandle>,
}

impl PlacedModule {
    pub fn new(prototype: Arc<ModulePrototype>, position: Vec3, rotation: Quat) -> Self {
        Self {
            prototype,
            position,
            rotation,
            scene_handle: None,
        }
    }

    pub fn prototype(&self) -> &Arc<ModulePrototype> {
        &self.prototype
    }

    pub fn prototype_id(&self) -> &str {
        self.prototype.id()
    }

    pub fn scene_handle(&self) -> Option<PlacedHandle> {
        self.scene_handle
    }

    /// World-space bounding volume (prototype bounds moved by position/rotation)
    pub fn world_box(&self) -> OrientedBox {
        OrientedBox::from_bounds(self.prototype.bounds(), self.position, self.rotation)
    }

    /// Floor index nearest to this module's height
    pub fn floor_index(&self, floor_height: f32) -> u32 {
        if floor_height <= 0.0 {
            return 0;
        }
        (self.position.y / floor_height).round().max(0.0) as u32
    }
}

/// Equal when prototype id, position and rotation match. The scene handle is
/// bookkeeping and does not take part.
impl PartialEq for PlacedModule {
    fn eq(&self, other: &Self) -> bool {
        self.prototype_id() == other.prototype_id()
            && self.position == other.position
            && self.rotation == other.rotation
    }
}

/// Ordered collection of placed modules. Order carries no meaning but is
/// kept so saved output is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingLayout {
    modules: Vec<PlacedModule>,
}

impl BuildingLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append without touching any scene
    pub fn push(&mut self, module: PlacedModule) {
        self.modules.push(module);
    }

    /// Spawn `module` in the scene tagged as placed, then append it.
    pub fn commit(&mut self, mut module: PlacedModule, scene: &mut dyn Scene) -> &PlacedModule {
        module.scene_handle = Some(scene.spawn_placed(&module));
        self.modules.push(module);
        let index = self.modules.len() - 1;
        &self.modules[index]
    }

    /// Remove the module at `index` and its scene object.
    pub fn remove(&mut self, index: usize, scene: &mut dyn Scene) -> Option<PlacedModule> {
        if index >= self.modules.len() {
            return None;
        }
        let mut module = self.modules.remove(index);
        if let Some(handle) = module.scene_handle.take() {
            scene.despawn_placed(handle);
        }
        log::info!(
            "[Layout] Removed '{}' at ({:.2}, {:.2}, {:.2})",
            module.prototype_id(),
            module.position.x,
            module.position.y,
            module.position.z
        );
        Some(module)
    }

    /// Drop every module and every placed object in the scene.
    pub fn clear(&mut self, scene: &mut dyn Scene) {
        let removed = scene.clear_placed();
        log::debug!(
            "[Layout] Cleared {} modules ({} scene objects)",
            self.modules.len(),
            removed
        );
        self.modules.clear();
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlacedModule> {
        self.modules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedModule> {
        self.modules.iter()
    }

    pub fn modules(&self) -> &[PlacedModule] {
        &self.modules
    }

    /// Modules sitting on `floor`
    pub fn modules_on_floor(&self, floor: u32, floor_height: f32) -> impl Iterator<Item = &PlacedModule> {
        self.modules
            .iter()
            .filter(move |m| m.floor_index(floor_height) == floor)
    }
}

impl FromIterator<PlacedModule> for BuildingLayout {
    fn from_iter<I: IntoIterator<Item = PlacedModule>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::modules::{Catalog, ModuleCatalog};
    use crate::game::scene::InMemoryScene;

    fn wall() -> Arc<ModulePrototype> {
        ModuleCatalog::standard().get("Wall").unwrap()
    }

    #[test]
    fn test_world_box_follows_rotation() {
        let module = PlacedModule::new(
            wall(),
            Vec3::new(4.0, 0.0, 0.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        let obb = module.world_box();
        assert!((obb.center - Vec3::new(4.0, 1.0, 0.0)).length() < 1e-5);
        assert_eq!(obb.half_extents, Vec3::new(1.0, 1.0, 0.1));
    }

    #[test]
    fn test_commit_spawns_placed_object() {
        let mut scene = InMemoryScene::new();
        let mut layout = BuildingLayout::new();
        let committed = layout.commit(PlacedModule::new(wall(), Vec3::ZERO, Quat::IDENTITY), &mut scene);
        assert!(committed.scene_handle().is_some());
        assert_eq!(layout.len(), 1);
        assert_eq!(scene.placed_count(), 1);
    }

    #[test]
    fn test_remove_despawns() {
        let mut scene = InMemoryScene::new();
        let mut layout = BuildingLayout::new();
        layout.commit(PlacedModule::new(wall(), Vec3::ZERO, Quat::IDENTITY), &mut scene);
        layout.commit(PlacedModule::new(wall(), Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY), &mut scene);

        let removed = layout.remove(0, &mut scene).unwrap();
        assert_eq!(removed.position, Vec3::ZERO);
        assert_eq!(layout.len(), 1);
        assert_eq!(scene.placed_count(), 1);
        assert!(layout.remove(5, &mut scene).is_none());
    }

    #[test]
    fn test_clear() {
        let mut scene = InMemoryScene::new();
        let mut layout = BuildingLayout::new();
        layout.commit(PlacedModule::new(wall(), Vec3::ZERO, Quat::IDENTITY), &mut scene);
        layout.clear(&mut scene);
        assert!(layout.is_empty());
        assert_eq!(scene.placed_count(), 0);
    }

    #[test]
    fn test_modules_on_floor() {
        let h = 2.0001;
        let layout: BuildingLayout = [0.0, h, h, 2.0 * h]
            .into_iter()
            .map(|y| PlacedModule::new(wall(), Vec3::new(0.0, y, 0.0), Quat::IDENTITY))
            .collect();
        assert_eq!(layout.modules_on_floor(0, h).count(), 1);
        assert_eq!(layout.modules_on_floor(1, h).count(), 2);
        assert_eq!(layout.modules_on_floor(2, h).count(), 1);
        assert_eq!(layout.modules_on_floor(3, h).count(), 0);
    }

    #[test]
    fn test_equality_ignores_scene_handle() {
        let mut scene = InMemoryScene::new();
        let mut layout = BuildingLayout::new();
        let module = PlacedModule::new(wall(), Vec3::ZERO, Quat::IDENTITY);
        let committed = layout.commit(module.clone(), &mut scene).clone();
        assert_eq!(committed, module);
    }
}
