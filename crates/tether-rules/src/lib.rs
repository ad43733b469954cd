//! Gameplay rules for the tether traversal engine.
//!
//! The per-tether lifecycle state machine and the two resource pools, as pure
//! functions over plain data. No ECS dependency and no knowledge of the body.

pub mod pools;
pub mod tether;

pub use tether_core as core;
