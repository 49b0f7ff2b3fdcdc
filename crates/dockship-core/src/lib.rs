//! Core types and configuration for dockship.
//!
//! This crate defines the `dockship.toml` schema ([`DockshipConfig`]),
//! the per-run deployment settings ([`DeployConfig`]) and shared error types.

pub mod config;
pub mod error;

pub use config::{
    CONFIG_FILE_NAME, CONTAINER_PORT, ConfigOverrides, DeployConfig, DockshipConfig, EngineConfig,
};
pub use error::{Error, Result};
