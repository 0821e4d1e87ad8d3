//! Config Module
//!
//! Builder constants and input bindings.

pub mod builder_config;
pub mod input_config;

pub use builder_config::{BuilderConfig, ConfigError};
pub use input_config::{InputConfig, PlacementBindings};
