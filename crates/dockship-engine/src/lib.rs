//! Container engine operations for dockship.
//!
//! [`EngineClient`] builds the argument vectors for `build` and `run`;
//! an [`EngineExecutor`] runs them. [`RealExecutor`] spawns the engine
//! binary directly, tests substitute a mock.

pub mod client;
pub mod engine;
pub mod executor;

pub use client::{EngineClient, EngineError};
pub use engine::ExecError;
pub use executor::{EngineExecutor, RealExecutor};
