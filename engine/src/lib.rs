//! Modular Builder Engine
//!
//! Placement core for assembling buildings out of prefabricated modules
//! (floors, walls, corners, roofs) on a snapped grid across multiple floors.
//!
//! # Modules
//!
//! - [`camera`] - Pointer rays and ground-plane intersection
//! - [`physics`] - Axis-aligned bounds and oriented-box overlap
//! - [`input`] - Placement inputs and the input queue
//! - [`game`] - Module catalog, placement session, layout persistence
//!
//! # Example
//!
//! ```ignore
//! use modular_builder_engine::game::{BuildingLayout, InMemoryScene, ModuleCatalog, PlacementSession};
//! use modular_builder_engine::input::PlacementInput;
//! use modular_builder_engine::camera::Ray;
//!
//! let catalog = ModuleCatalog::standard();
//! let mut scene = InMemoryScene::new();
//! let mut layout = BuildingLayout::new();
//! let mut session = PlacementSession::default();
//!
//! session.start_placing(catalog.get("Wall").unwrap(), &mut scene);
//! session.queue_input(PlacementInput::PointerMoved(ray));
//! session.queue_input(PlacementInput::Confirm);
//! let outcome = session.tick(&catalog, &mut scene, &mut layout);
//! ```

pub mod camera;
pub mod input;
pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::Ray;
pub use physics::{Bounds, OrientedBox};
