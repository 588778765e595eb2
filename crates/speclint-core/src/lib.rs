//! Core types and configuration for speclint.
//!
//! This crate provides the foundational data structures used across all speclint crates:
//! - [`document`]: The in-memory Swagger/OpenAPI 2.0 document model
//! - [`pointer`]: JSON-pointer style reference building (`#/paths/~1pets/get`)
//! - [`config`]: Rule configuration, presets, and loading from YAML/JSON

pub mod config;
pub mod document;
pub mod pointer;

pub use config::{Config, ConfigError, Rules};
pub use document::Document;
