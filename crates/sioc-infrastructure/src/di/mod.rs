//! Dependency Injection
//!
//! Name-based singleton container over a [`BeanCatalog`](sioc_domain::BeanCatalog).
//!
//! ```text
//! InMemoryCatalog (or any BeanCatalog)
//!        │
//!        ▼
//! ContainerBuilder ──► Container ──► InstancePool (per-name OnceCell)
//!                          │
//!                          └──► DependencyWalk (cycle guard)
//! ```

pub mod bootstrap;
pub mod builder;
pub mod catalog;
pub mod container;
mod graph;
pub mod pool;

pub use bootstrap::ContainerInitializer;
pub use builder::ContainerBuilder;
pub use catalog::InMemoryCatalog;
pub use container::Container;
pub use pool::{InstancePool, PooledBean};
