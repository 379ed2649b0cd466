//! Container builder

use super::container::Container;
use crate::config::ContainerConfig;
use sioc_domain::error::Result;
use sioc_domain::ports::BeanCatalog;
use std::sync::Arc;
use tracing::info;

/// Builds a [`Container`] from a catalog and configuration
pub struct ContainerBuilder {
    catalog: Arc<dyn BeanCatalog>,
    config: ContainerConfig,
}

impl ContainerBuilder {
    /// Builder with default configuration
    pub fn new(catalog: Arc<dyn BeanCatalog>) -> Self {
        Self {
            catalog,
            config: ContainerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the container
    ///
    /// With `container.preinstantiate` set, every catalog bean is created
    /// here and the first failure is returned instead of a container.
    pub fn build(self) -> Result<Container> {
        let container = Container::new(self.catalog);
        if self.config.container.preinstantiate {
            container.preinstantiate_singletons()?;
        }
        info!(
            beans = container.catalog().bean_names().len(),
            instantiated = container.instance_count(),
            "Built bean container"
        );
        Ok(container)
    }
}
