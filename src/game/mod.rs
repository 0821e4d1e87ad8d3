//! Game Module
//!
//! The modular builder built on top of the engine primitives.

pub mod builder;
pub mod config;
pub mod layout;
pub mod modules;
pub mod scene;

pub use builder::{CancelReason, PlacementError, PlacementSession, PreviewTint, TickOutcome};
pub use config::{BuilderConfig, InputConfig, PlacementBindings};
pub use layout::{BuildingLayout, LayoutError, LayoutFile, LayoutStore, PlacedModule};
pub use modules::{Catalog, ModuleCatalog, ModuleKind, ModulePrototype, RenderablePart};
pub use scene::{InMemoryScene, ObjectTag, PlacedHandle, PreviewHandle, Scene};
