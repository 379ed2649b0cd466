//! Configuration
//!
//! Container settings loaded with figment: defaults, then a TOML file, then
//! `SIOC_`-prefixed environment variables. The bean catalog itself is never
//! read from configuration.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{ContainerConfig, LoggingConfig, ResolutionConfig};
