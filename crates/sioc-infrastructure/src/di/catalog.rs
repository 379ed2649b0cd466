//! In-memory bean catalog
//!
//! Ordered, thread-safe [`BeanCatalog`] implementation for composition roots
//! and tests. Duplicate names are accepted; catalog
//! validation in the container reports them.
//!
//! ```
//! use sioc_domain::{BeanCatalog, BeanType, Constructor};
//! use sioc_infrastructure::di::InMemoryCatalog;
//!
//! struct Clock;
//!
//! let catalog = InMemoryCatalog::new()
//!     .with_bean("clock", BeanType::of::<Clock>().with_constructor(Constructor::nullary(|| Clock)))
//!     .unwrap();
//! assert_eq!(catalog.bean_names(), ["clock"]);
//! ```

use sioc_domain::error::{Error, Result};
use sioc_domain::ports::BeanCatalog;
use sioc_domain::value_objects::{BeanDefinition, BeanName, BeanType};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Catalog backed by an ordered list of definitions
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: RwLock<Vec<BeanDefinition>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`define`](Self::define)
    pub fn with_bean<S: Into<String>>(self, name: S, bean_type: BeanType) -> Result<Self> {
        self.define(name, bean_type)?;
        Ok(self)
    }

    /// Append a definition
    pub fn define<S: Into<String>>(&self, name: S, bean_type: BeanType) -> Result<()> {
        let name = BeanName::new(name)?;
        debug!(bean = %name, bean_type = bean_type.name(), "Defining bean");
        self.write().push(BeanDefinition::new(name, Arc::new(bean_type)));
        Ok(())
    }

    /// Replace the declared type of every entry named `name`
    pub fn redefine(&self, name: &str, bean_type: BeanType) -> Result<()> {
        let bean_type = Arc::new(bean_type);
        let mut entries = self.write();
        let mut replaced = false;
        for entry in entries.iter_mut().filter(|entry| entry.name() == name) {
            *entry = BeanDefinition::new(entry.name().clone(), Arc::clone(&bean_type));
            replaced = true;
        }
        if !replaced {
            return Err(Error::unknown_bean(name));
        }
        debug!(bean = name, bean_type = bean_type.name(), "Redefined bean");
        Ok(())
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written.
    fn read(&self) -> RwLockReadGuard<'_, Vec<BeanDefinition>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<BeanDefinition>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BeanCatalog for InMemoryCatalog {
    fn bean_names(&self) -> Vec<BeanName> {
        self.read()
            .iter()
            .map(|entry| entry.name().clone())
            .collect()
    }

    fn bean_definition(&self, name: &str) -> Result<BeanDefinition> {
        self.read()
            .iter()
            .find(|entry| entry.name() == name)
            .cloned()
            .ok_or_else(|| Error::unknown_bean(name))
    }
}
