//! Modules
//!
//! Buildable piece definitions, their bounds and the catalog that serves them.

pub mod catalog;
pub mod geometry;
pub mod prototype;

pub use catalog::{Catalog, CatalogError, ModuleCatalog};
pub use geometry::{RenderablePart, compute_bounds};
pub use prototype::{ModuleKind, ModulePrototype};
