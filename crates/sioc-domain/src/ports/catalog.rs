//! Bean Catalog Port
//!
//! The declarative source of bean names and types. The container consumes
//! this port and never populates it; catalogs are built by the composition
//! root.

use crate::error::Result;
use crate::value_objects::{BeanDefinition, BeanName};

/// Read access to a declarative bean catalog
pub trait BeanCatalog: Send + Sync {
    /// All declared bean names, in declaration order
    ///
    /// Duplicates are reported as declared; rejecting them is the
    /// container's job.
    fn bean_names(&self) -> Vec<BeanName>;

    /// Definition for `name`
    ///
    /// Fails with [`Error::UnknownBean`](crate::Error::UnknownBean) when the
    /// catalog has no entry.
    fn bean_definition(&self, name: &str) -> Result<BeanDefinition>;

    /// Whether the catalog declares `name`
    fn contains(&self, name: &str) -> bool {
        self.bean_definition(name).is_ok()
    }
}
