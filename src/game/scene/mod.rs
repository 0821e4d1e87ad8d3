//! Scene Module
//!
//! The host scene as seen by the placement core: it owns the visual objects,
//! the core only asks for preview and placed instances to be created,
//! moved and destroyed.

pub mod memory;

use glam::{Quat, Vec3};

use crate::game::builder::preview::PreviewTint;
use crate::game::layout::PlacedModule;
use crate::game::modules::ModulePrototype;

pub use memory::{InMemoryScene, SceneObject};

/// Scene object id of a placement preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(pub u32);

/// Scene object id of a committed module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedHandle(pub u32);

/// Tag carried by every object the core creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectTag {
    /// Transient proxy following the pointer; ignored by placement queries
    Preview,
    /// Committed module, enumerated for save and clear
    Placed,
}

pub trait Scene {
    /// False once the workspace view has gone away. Sessions cancel when
    /// they observe this.
    fn is_available(&self) -> bool {
        true
    }

    fn spawn_preview(&mut self, prototype: &ModulePrototype) -> PreviewHandle;

    fn update_preview(&mut self, handle: PreviewHandle, position: Vec3, rotation: Quat, tint: PreviewTint);

    /// Destroy a preview. Unknown handles are ignored.
    fn destroy_preview(&mut self, handle: PreviewHandle);

    /// Whether the preview still exists (the host may delete it behind our back)
    fn preview_alive(&self, handle: PreviewHandle) -> bool;

    fn spawn_placed(&mut self, module: &PlacedModule) -> PlacedHandle;

    /// Destroy a placed object. Unknown handles are ignored.
    fn despawn_placed(&mut self, handle: PlacedHandle);

    /// Destroy every placed object; returns how many were removed.
    fn clear_placed(&mut self) -> usize;

    fn placed_count(&self) -> usize;
}
