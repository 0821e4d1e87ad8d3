//! Layout Module
//!
//! Committed modules and their persisted form.

pub mod placed;
pub mod store;

pub use placed::{BuildingLayout, PlacedModule};
pub use store::{
    LayoutError, LayoutFile, LayoutRecord, LayoutStore, default_layout_path, load_layout,
    restore_layout, save_layout,
};
