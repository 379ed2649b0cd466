//! # SIOC
//!
//! A minimal inversion-of-control container. Beans are declared in a
//! catalog by name and type; the container creates each bean on first
//! request, wires its single constructor's parameters to other beans by
//! name, and keeps it as a singleton.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use sioc::prelude::*;
//!
//! struct TestBean;
//! struct TestBeanWithDependencies {
//!     dependency: Arc<TestBean>,
//! }
//!
//! let catalog = InMemoryCatalog::new()
//!     .with_bean("testBean", BeanType::of::<TestBean>()
//!         .with_constructor(Constructor::nullary(|| TestBean)))?
//!     .with_bean("testBeanWithDependencies", BeanType::of::<TestBeanWithDependencies>()
//!         .with_constructor(Constructor::unary(|dependency: Arc<TestBean>| {
//!             TestBeanWithDependencies { dependency }
//!         })))?;
//!
//! let container = Container::new(Arc::new(catalog));
//! let bean = container.get_bean_as::<TestBeanWithDependencies>("testBeanWithDependencies")?;
//! assert!(Arc::ptr_eq(&bean.dependency, &container.get_bean_as::<TestBean>("testBean")?));
//! # Ok::<(), sioc::domain::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - bean names, bean types, the catalog port and errors
//! - `infrastructure` - container, in-memory catalog, config, logging

/// Domain layer - bean descriptors, catalog port and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use sioc_domain::*;
}

/// Infrastructure layer - container, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use sioc_infrastructure::*;
}

/// Types needed to declare beans and resolve them
pub mod prelude {
    pub use sioc_domain::{
        BeanCatalog, BeanDefinition, BeanName, BeanType, Constructor, Dependencies, Error,
        Instance, Parameter, Result,
    };
    pub use sioc_infrastructure::config::{ConfigLoader, ContainerConfig};
    pub use sioc_infrastructure::di::{
        Container, ContainerBuilder, ContainerInitializer, InMemoryCatalog,
    };
}

pub use sioc_domain::{Error, Result};
pub use sioc_infrastructure::di::{Container, ContainerBuilder, InMemoryCatalog};
