//! Traversal engine for a two-tether body.
//!
//! Owns the tether pair, the resource pools and a hecs world holding the
//! constraint and marker entities tied to each tether. Runs the ordered
//! systems once per fixed physics step and produces `TraversalSnapshot`s.

pub mod body;
pub mod clock;
pub mod components;
pub mod engine;
pub mod input;
pub mod slot;
pub mod systems;

pub use body::{BodyMotion, BodySample, KinematicBody, TraversalBody};
pub use engine::TraversalEngine;
pub use tether_core as core;
