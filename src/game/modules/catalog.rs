//! Module Catalog
//!
//! Lookup of buildable prototypes by identifier. The placement core only
//! reads from a catalog; storage and browsing belong to the host.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use super::geometry::RenderablePart;
use super::prototype::{ModuleKind, ModulePrototype};

/// Prototype lookup used by the placement session and the layout loader.
pub trait Catalog {
    fn get(&self, id: &str) -> Option<Arc<ModulePrototype>>;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate prototype id '{0}'")]
    DuplicateId(String),
}

/// One entry of a JSON catalog file.
#[derive(Debug, Deserialize)]
struct PrototypeRecord {
    id: String,
    kind: ModuleKind,
    #[serde(default)]
    parts: Vec<RenderablePart>,
}

/// Insertion-ordered in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    by_id: HashMap<String, Arc<ModulePrototype>>,
    order: Vec<String>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four standard pieces: a 2x2 floor tile, a 2m wall, a corner post
    /// and a roof slab with a ridge beam.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        let pieces = [
            ModulePrototype::new(
                "Floor",
                ModuleKind::Floor,
                vec![RenderablePart::block(Vec3::new(0.0, 0.05, 0.0), Vec3::new(2.0, 0.1, 2.0))],
            ),
            ModulePrototype::new(
                "Wall",
                ModuleKind::Wall,
                vec![RenderablePart::block(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 0.2))],
            ),
            ModulePrototype::new(
                "WallCorner",
                ModuleKind::Corner,
                vec![RenderablePart::block(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.2, 2.0, 0.2))],
            ),
            ModulePrototype::new(
                "Roof",
                ModuleKind::Roof,
                vec![
                    RenderablePart::block(Vec3::new(0.0, 0.05, 0.0), Vec3::new(2.0, 0.1, 2.0)),
                    RenderablePart::block(Vec3::new(0.0, 0.25, 0.0), Vec3::new(2.0, 0.3, 0.2)),
                ],
            ),
        ];
        for proto in pieces {
            // Ids above are distinct
            let _ = catalog.insert(proto);
        }
        catalog
    }

    /// Add a prototype. Ids must be unique.
    pub fn insert(&mut self, prototype: ModulePrototype) -> Result<Arc<ModulePrototype>, CatalogError> {
        let id = prototype.id().to_string();
        if self.by_id.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }
        let proto = Arc::new(prototype);
        self.by_id.insert(id.clone(), Arc::clone(&proto));
        self.order.push(id);
        Ok(proto)
    }

    /// Remove a prototype. Sessions holding it will cancel on their next tick.
    pub fn remove(&mut self, id: &str) -> Option<Arc<ModulePrototype>> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|existing| existing != id);
        log::info!("[Catalog] Removed prototype '{}'", id);
        Some(removed)
    }

    /// Identifiers in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Parse a JSON array of `{ id, kind, parts }` records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<PrototypeRecord> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(ModulePrototype::new(record.id, record.kind, record.parts))?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("[Catalog] Loaded {} prototypes from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

impl Catalog for ModuleCatalog {
    fn get(&self, id: &str) -> Option<Arc<ModulePrototype>> {
        self.by_id.get(id).cloned()
    }
}
