//! Core types and definitions for the tether traversal engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! tuning constants, configuration, commands, events, snapshot views and the
//! collision-query seam. It has no dependency on any runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod probe;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
