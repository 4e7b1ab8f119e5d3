//! Core types and definitions for the NAVAID simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, stations, reference lines, configuration, errors,
//! commands, snapshot views, and constants.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod geometry;
pub mod state;
pub mod types;

pub use config::NavConfig;
pub use error::{NavError, NavResult};
pub use geometry::ReferenceLine;
pub use types::Position;

#[cfg(test)]
mod tests;
