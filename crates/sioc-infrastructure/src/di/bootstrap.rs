//! Container bootstrap
//!
//! Composition-root entry point: install logging, then build the container.

use super::builder::ContainerBuilder;
use super::container::Container;
use crate::config::ContainerConfig;
use crate::logging::init_logging;
use sioc_domain::error::Result;
use sioc_domain::ports::BeanCatalog;
use std::sync::Arc;

/// Container initializer
///
/// Initializes logging from the configuration before building, so the
/// container's own events are captured.
pub struct ContainerInitializer {
    config: ContainerConfig,
}

impl ContainerInitializer {
    pub fn new(config: ContainerConfig) -> Self {
        Self { config }
    }

    /// Install logging and build a container over `catalog`
    pub fn initialize(&self, catalog: Arc<dyn BeanCatalog>) -> Result<Container> {
        init_logging(&self.config.logging)?;

        let container = ContainerBuilder::new(catalog)
            .with_config(self.config.clone())
            .build()?;

        tracing::info!("Container initialized successfully");
        Ok(container)
    }
}
