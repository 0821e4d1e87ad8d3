//! Headless scene that records tagged objects in a map. Used by the layout
//! tool binary and by tests.

use std::collections::HashMap;

use glam::{Quat, Vec3};

use super::{ObjectTag, PlacedHandle, PreviewHandle, Scene};
use crate::game::builder::preview::PreviewTint;
use crate::game::layout::PlacedModule;
use crate::game::modules::ModulePrototype;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub tag: ObjectTag,
    pub prototype_id: String,
    pub position: Vec3,
    pub rotation: Quat,
    /// Only previews are tinted
    pub tint: Option<PreviewTint>,
}

#[derive(Debug)]
pub struct InMemoryScene {
    objects: HashMap<u32, SceneObject>,
    next_id: u32,
    available: bool,
}

impl Default for InMemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            next_id: 1,
            available: true,
        }
    }

    /// Simulate the workspace view opening or closing
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Delete an object directly, as a host would when the user removes it
    pub fn drop_object(&mut self, id: u32) -> Option<SceneObject> {
        self.objects.remove(&id)
    }

    pub fn get(&self, id: u32) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Objects carrying `tag`, ordered by id
    pub fn objects_with_tag(&self, tag: ObjectTag) -> Vec<(u32, &SceneObject)> {
        let mut found: Vec<_> = self
            .objects
            .iter()
            .filter(|(_, obj)| obj.tag == tag)
            .map(|(id, obj)| (*id, obj))
            .collect();
        found.sort_by_key(|(id, _)| *id);
        found
    }

    pub fn preview_count(&self) -> usize {
        self.objects.values().filter(|obj| obj.tag == ObjectTag::Preview).count()
    }

    fn allocate(&mut self, object: SceneObject) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }
}

impl Scene for InMemoryScene {
    fn is_available(&self) -> bool {
        self.available
    }

    fn spawn_preview(&mut self, prototype: &ModulePrototype) -> PreviewHandle {
        PreviewHandle(self.allocate(SceneObject {
            tag: ObjectTag::Preview,
            prototype_id: prototype.id().to_string(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            tint: Some(PreviewTint::Invalid),
        }))
    }

    fn update_preview(&mut self, handle: PreviewHandle, position: Vec3, rotation: Quat, tint: PreviewTint) {
        if let Some(obj) = self.objects.get_mut(&handle.0) {
            obj.position = position;
            obj.rotation = rotation;
            obj.tint = Some(tint);
        }
    }

    fn destroy_preview(&mut self, handle: PreviewHandle) {
        if matches!(self.objects.get(&handle.0), Some(obj) if obj.tag == ObjectTag::Preview) {
            self.objects.remove(&handle.0);
        }
    }

    fn preview_alive(&self, handle: PreviewHandle) -> bool {
        matches!(self.objects.get(&handle.0), Some(obj) if obj.tag == ObjectTag::Preview)
    }

    fn spawn_placed(&mut self, module: &PlacedModule) -> PlacedHandle {
        PlacedHandle(self.allocate(SceneObject {
            tag: ObjectTag::Placed,
            prototype_id: module.prototype_id().to_string(),
            position: module.position,
            rotation: module.rotation,
            tint: None,
        }))
    }

    fn despawn_placed(&mut self, handle: PlacedHandle) {
        if matches!(self.objects.get(&handle.0), Some(obj) if obj.tag == ObjectTag::Placed) {
            self.objects.remove(&handle.0);
        }
    }

    fn clear_placed(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|_, obj| obj.tag != ObjectTag::Placed);
        before - self.objects.len()
    }

    fn placed_count(&self) -> usize {
        self.objects.values().filter(|obj| obj.tag == ObjectTag::Placed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::modules::{ModuleCatalog, Catalog};

    #[test]
    fn test_preview_lifecycle() {
        let catalog = ModuleCatalog::standard();
        let wall = catalog.get("Wall").unwrap();
        let mut scene = InMemoryScene::new();

        let handle = scene.spawn_preview(&wall);
        assert!(scene.preview_alive(handle));
        assert_eq!(scene.preview_count(), 1);

        scene.update_preview(handle, Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY, PreviewTint::Valid);
        assert_eq!(scene.get(handle.0).unwrap().tint, Some(PreviewTint::Valid));

        scene.destroy_preview(handle);
        assert!(!scene.preview_alive(handle));
        assert_eq!(scene.preview_count(), 0);
    }

    #[test]
    fn test_clear_placed_keeps_preview() {
        let catalog = ModuleCatalog::standard();
        let floor = catalog.get("Floor").unwrap();
        let mut scene = InMemoryScene::new();

        let preview = scene.spawn_preview(&floor);
        scene.spawn_placed(&PlacedModule::new(floor.clone(), Vec3::ZERO, Quat::IDENTITY));
        scene.spawn_placed(&PlacedModule::new(floor, Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY));
        assert_eq!(scene.placed_count(), 2);

        assert_eq!(scene.clear_placed(), 2);
        assert_eq!(scene.placed_count(), 0);
        assert!(scene.preview_alive(preview));
    }

    #[test]
    fn test_destroy_preview_ignores_placed_handles() {
        let catalog = ModuleCatalog::standard();
        let floor = catalog.get("Floor").unwrap();
        let mut scene = InMemoryScene::new();

        let placed = scene.spawn_placed(&PlacedModule::new(floor, Vec3::ZERO, Quat::IDENTITY));
        scene.destroy_preview(PreviewHandle(placed.0));
        assert_eq!(scene.placed_count(), 1);
    }
}
