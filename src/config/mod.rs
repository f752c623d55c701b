//! Engine configuration.
//!
//! This module provides the [`EngineConfig`] type, loadable from a YAML
//! file and defaulting to a local single-store setup when no file is given.

mod loader;
mod types;

pub use types::{EngineConfig, ServerConfig, SyncConfig};
