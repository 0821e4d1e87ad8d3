//! Input Module
//!
//! Logical placement inputs and the per-tick queue they are collected in.
//! Mapping from physical keys lives in the game's input config.

pub mod actions;
pub mod queue;

pub use actions::{PlacementInput, RotateDirection};
pub use queue::InputQueue;
