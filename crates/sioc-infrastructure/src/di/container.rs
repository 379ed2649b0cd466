//! Bean Container
//!
//! Resolves beans by name against a [`BeanCatalog`], creating each one at
//! most once and caching it for the container's lifetime.
//!
//! ## Resolution
//!
//! ```text
//! get_bean("service")
//!      │
//!      ▼
//! catalog.bean_definition ──► UnknownBean
//!      │
//!      ▼
//! pool hit? ──yes──► declared type matches? ──no──► TypeMismatch
//!      │ no                    │ yes
//!      ▼                       ▼
//! cycle guard ──► CircularDependency      return cached
//!      │
//!      ▼
//! single constructor ──► AmbiguousConstructor
//!      │
//!      ▼
//! resolve each parameter (depth-first, left-to-right)
//!      │
//!      ▼
//! invoke factory, cache under name, return
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use sioc_domain::{BeanType, Constructor};
//! use sioc_infrastructure::di::{Container, InMemoryCatalog};
//!
//! struct Repository;
//! struct Service {
//!     repository: Arc<Repository>,
//! }
//!
//! let catalog = InMemoryCatalog::new()
//!     .with_bean("repository", BeanType::of::<Repository>()
//!         .with_constructor(Constructor::nullary(|| Repository)))
//!     .unwrap()
//!     .with_bean("service", BeanType::of::<Service>()
//!         .with_constructor(Constructor::unary(|repository: Arc<Repository>| Service { repository })))
//!     .unwrap();
//!
//! let container = Container::new(Arc::new(catalog));
//! let service = container.get_bean_as::<Service>("service").unwrap();
//! let repository = container.get_bean_as::<Repository>("repository").unwrap();
//! assert!(Arc::ptr_eq(&service.repository, &repository));
//! ```

use super::graph::DependencyWalk;
use super::pool::{InstancePool, PooledBean};
use sioc_domain::error::{Error, Result};
use sioc_domain::ports::BeanCatalog;
use sioc_domain::value_objects::{BeanDefinition, BeanName, Dependencies, Instance};
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Singleton bean container
///
/// Owns its instance pool and shares the catalog. `Send + Sync`; share it
/// behind an `Arc` when several threads resolve beans.
pub struct Container {
    catalog: Arc<dyn BeanCatalog>,
    pool: InstancePool,
}

impl Container {
    /// Create a container with an empty instance pool
    pub fn new(catalog: Arc<dyn BeanCatalog>) -> Self {
        Self {
            catalog,
            pool: InstancePool::new(),
        }
    }

    /// The catalog this container resolves against
    pub fn catalog(&self) -> &Arc<dyn BeanCatalog> {
        &self.catalog
    }

    /// Validated bean names, in catalog order
    ///
    /// Fails with [`Error::DuplicateBeanName`] if any name is declared twice.
    /// Never touches the instance pool.
    pub fn bean_definitions(&self) -> Result<Vec<BeanName>> {
        let names = self.catalog.bean_names();
        let mut seen = HashSet::with_capacity(names.len());
        if let Some(duplicate) = names.iter().find(|name| !seen.insert(*name)) {
            warn!(bean = %duplicate, "Bean definitions are not unique");
            return Err(Error::duplicate_bean_name(duplicate.as_str()));
        }
        Ok(names)
    }

    /// Resolve `name` to its singleton instance, creating it if needed
    pub fn get_bean(&self, name: &str) -> Result<Instance> {
        self.lookup_and_resolve(name).map(|bean| bean.instance)
    }

    /// Resolve `name` and narrow it to `T`
    ///
    /// Fails with [`Error::TypeMismatch`] if the bean is not a `T`.
    pub fn get_bean_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        let PooledBean { type_key, instance } = self.lookup_and_resolve(name)?;
        instance
            .downcast::<T>()
            .map_err(|_| Error::type_mismatch(name, std::any::type_name::<T>(), type_key.name()))
    }

    /// Whether the catalog declares `name`
    pub fn contains_bean(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Whether `name` has already been created
    pub fn is_instantiated(&self, name: &str) -> bool {
        self.pool.contains(name)
    }

    /// Number of created singletons
    pub fn instance_count(&self) -> usize {
        self.pool.len()
    }

    /// Create every catalog bean, in catalog order
    ///
    /// Validates the catalog first. Returns the number of beans declared.
    pub fn preinstantiate_singletons(&self) -> Result<usize> {
        let names = self.bean_definitions()?;
        for name in &names {
            self.get_bean(name.as_str())?;
        }
        info!(beans = names.len(), "Pre-instantiated singletons");
        Ok(names.len())
    }

    fn lookup_and_resolve(&self, name: &str) -> Result<PooledBean> {
        let definition = self.catalog.bean_definition(name)?;
        if !self.pool.contains(name) {
            DependencyWalk::new(self.catalog.as_ref(), &self.pool)
                .ensure_acyclic(definition.name())?;
        }
        self.resolve(&definition, &mut Vec::new())
    }

    /// Cache phase followed, on a miss, by construction
    ///
    /// `in_progress` holds the names whose creation lock this call chain
    /// already owns. The catalog can change after the up-front walk, so a
    /// name found there again fails instead of waiting on its own lock.
    fn resolve(
        &self,
        definition: &BeanDefinition,
        in_progress: &mut Vec<BeanName>,
    ) -> Result<PooledBean> {
        let name = definition.name();
        let bean = match self.pool.get(name.as_str()) {
            Some(cached) => {
                debug!(bean = %name, "Returning cached bean");
                cached
            }
            None => {
                if let Some(start) = in_progress.iter().position(|seen| seen == name) {
                    let chain = in_progress[start..].iter().chain(std::iter::once(name));
                    return Err(Error::circular_dependency(chain));
                }
                in_progress.push(name.clone());
                let created = self
                    .pool
                    .get_or_try_create(name, || self.construct(definition, in_progress));
                in_progress.pop();
                created?
            }
        };

        // The catalog may have been redefined since the bean was cached.
        let bean_type = definition.bean_type();
        if !bean_type.is_instance(&bean.instance) {
            return Err(Error::type_mismatch(
                name.as_str(),
                bean_type.name(),
                bean.type_key.name(),
            ));
        }
        Ok(bean)
    }

    fn construct(
        &self,
        definition: &BeanDefinition,
        in_progress: &mut Vec<BeanName>,
    ) -> Result<PooledBean> {
        let name = definition.name();
        let bean_type = definition.bean_type();
        let constructor = bean_type.single_constructor(name)?;

        let mut dependencies = Dependencies::new(name.clone());
        for parameter in constructor.parameters() {
            let dependency = self.catalog.bean_definition(parameter.bean_name().as_str())?;
            let declared = dependency.bean_type().type_key();
            if declared != parameter.type_key() {
                return Err(Error::type_mismatch(
                    parameter.bean_name().as_str(),
                    parameter.type_key().name(),
                    declared.name(),
                ));
            }
            let resolved = self.resolve(&dependency, in_progress)?;
            dependencies.push(parameter.bean_name().clone(), declared, resolved.instance);
        }

        let instance = constructor.invoke(&dependencies)?;
        if !bean_type.is_instance(&instance) {
            return Err(Error::type_mismatch(
                name.as_str(),
                bean_type.name(),
                constructor.produces().name(),
            ));
        }

        debug!(
            bean = %name,
            bean_type = bean_type.bare_name(),
            dependencies = dependencies.len(),
            "Created bean"
        );
        Ok(PooledBean {
            type_key: bean_type.type_key(),
            instance,
        })
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("instantiated", &self.pool.names())
            .finish_non_exhaustive()
    }
}
