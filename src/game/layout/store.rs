//! Layout Store
//!
//! Save/load of a building layout as a versionless JSON list of
//! `{ prototype, position, rotation }` records.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::placed::{BuildingLayout, PlacedModule};
use crate::game::modules::{Catalog, ModulePrototype};
use crate::game::scene::Scene;

// ============================================================================
// PERSISTED FORM
// ============================================================================

/// One placed module in persisted form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecord {
    /// Prototype identifier in the catalog
    pub prototype: String,
    /// World position `[x, y, z]`
    pub position: Vec3,
    /// World rotation quaternion `[x, y, z, w]`
    pub rotation: Quat,
}

impl From<&PlacedModule> for LayoutRecord {
    fn from(module: &PlacedModule) -> Self {
        Self {
            prototype: module.prototype_id().to_string(),
            position: module.position,
            rotation: module.rotation,
        }
    }
}

/// Whole persisted layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub modules: Vec<LayoutRecord>,
}

impl LayoutFile {
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Nothing placed; the save is skipped
    #[error("there are no modules to save")]
    EmptyLayout,
    /// Layout file or a referenced prototype does not exist
    #[error("load target not found: {0}")]
    LoadTargetMissing(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// SAVE / LOAD
// ============================================================================

/// Capture `layout` in persisted form. An empty layout is `EmptyLayout`.
pub fn save_layout(layout: &BuildingLayout) -> Result<LayoutFile, LayoutError> {
    if layout.is_empty() {
        return Err(LayoutError::EmptyLayout);
    }
    Ok(LayoutFile {
        modules: layout.iter().map(LayoutRecord::from).collect(),
    })
}

/// Resolve every record against `catalog`. Fails on the first unknown
/// prototype without producing a partial layout.
pub fn load_layout(file: &LayoutFile, catalog: &dyn Catalog) -> Result<BuildingLayout, LayoutError> {
    file.modules
        .iter()
        .map(|record| {
            let prototype = resolve(catalog, &record.prototype)?;
            Ok(PlacedModule::new(prototype, record.position, record.rotation))
        })
        .collect()
}

/// Replace the workspace contents with `file`.
///
/// Records are resolved first so a bad file leaves the workspace untouched.
/// Then every placed object and layout entry is cleared and each loaded
/// module is spawned as a placed object. Returns the number instantiated.
pub fn restore_layout(
    file: &LayoutFile,
    catalog: &dyn Catalog,
    scene: &mut dyn Scene,
    layout: &mut BuildingLayout,
) -> Result<usize, LayoutError> {
    let loaded = load_layout(file, catalog)?;

    layout.clear(scene);
    for module in loaded.iter() {
        layout.commit(module.clone(), scene);
    }

    log::info!("[Layout] Restored {} modules", layout.len());
    Ok(layout.len())
}

fn resolve(catalog: &dyn Catalog, id: &str) -> Result<Arc<ModulePrototype>, LayoutError> {
    catalog
        .get(id)
        .ok_or_else(|| LayoutError::LoadTargetMissing(format!("prototype '{id}'")))
}

// ============================================================================
// FILE STORE
// ============================================================================

/// Default path for the layout file.
pub fn default_layout_path() -> PathBuf {
    PathBuf::from("layouts/building.json")
}

/// A layout file on disk.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    path: PathBuf,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(default_layout_path())
    }
}

impl LayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `layout` to the store's path, creating parent directories.
    /// Returns the number of modules written.
    pub fn save(&self, layout: &BuildingLayout) -> Result<usize, LayoutError> {
        let file = match save_layout(layout) {
            Ok(file) => file,
            Err(LayoutError::EmptyLayout) => {
                log::info!("[Layout] Nothing to save");
                return Err(LayoutError::EmptyLayout);
            }
            Err(e) => return Err(e),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, file.to_json()?)?;

        log::info!("[Layout] Saved {} modules to {}", file.modules.len(), self.path.display());
        Ok(file.modules.len())
    }

    /// Read the persisted form. A missing file is `LoadTargetMissing`.
    pub fn read(&self) -> Result<LayoutFile, LayoutError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LayoutError::LoadTargetMissing(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        LayoutFile::from_json(&json)
    }

    /// Load a detached layout (no scene involvement).
    pub fn load(&self, catalog: &dyn Catalog) -> Result<BuildingLayout, LayoutError> {
        load_layout(&self.read()?, catalog)
    }

    /// Load into a live workspace; see [`restore_layout`].
    pub fn restore(
        &self,
        catalog: &dyn Catalog,
        scene: &mut dyn Scene,
        layout: &mut BuildingLayout,
    ) -> Result<usize, LayoutError> {
        let file = self.read()?;
        let count = restore_layout(&file, catalog, scene, layout)?;
        log::info!("[Layout] Loaded {} modules from {}", count, self.path.display());
        Ok(count)
    }
}
