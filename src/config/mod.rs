//! Configuration: TOML file on disk, defaults when absent, CLI overrides on top.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, RemoteConfig, SearchConfig};
