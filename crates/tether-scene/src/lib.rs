//! Static collision scene for aim prediction.
//!
//! A flat list of classified shapes answering ray casts, sphere casts and
//! segment occlusion checks through [`tether_core::probe::WorldProbe`].
//! Hosts with their own physics world implement the trait directly instead.

pub mod scene;
pub mod shape;

pub use scene::{Collider, Scene};
pub use shape::Shape;
