//! # Infrastructure Layer
//!
//! The bean container and the technical concerns around it.
//!
//! ### Container
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Container, instance pool, cycle guard, in-memory catalog |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (TOML + environment) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{Container, ContainerBuilder, InMemoryCatalog};
pub use error_ext::ErrorContext;
