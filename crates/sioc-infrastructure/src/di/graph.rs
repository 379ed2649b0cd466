//! Dependency cycle guard
//!
//! Walks the declared dependency graph of a bean that is about to be
//! created, before any creation lock is taken. A cycle therefore fails fast
//! with [`Error::CircularDependency`] instead of recursing without bound or
//! blocking on a creation lock held further up the same path (or by another
//! thread walking the cycle from the other end).

use super::pool::InstancePool;
use sioc_domain::error::{Error, Result};
use sioc_domain::ports::BeanCatalog;
use sioc_domain::value_objects::BeanName;
use std::collections::HashSet;

/// Depth-first, left-to-right walk from one root bean
pub(crate) struct DependencyWalk<'a> {
    catalog: &'a dyn BeanCatalog,
    pool: &'a InstancePool,
    path: Vec<BeanName>,
    finished: HashSet<BeanName>,
}

impl<'a> DependencyWalk<'a> {
    pub(crate) fn new(catalog: &'a dyn BeanCatalog, pool: &'a InstancePool) -> Self {
        Self {
            catalog,
            pool,
            path: Vec::new(),
            finished: HashSet::new(),
        }
    }

    /// Fail if `root` can reach itself through constructor parameters
    ///
    /// Created beans are leaves: their dependencies already exist. Unknown
    /// names and ambiguous constructors are leaves too; resolution reports
    /// them in its own order.
    pub(crate) fn ensure_acyclic(mut self, root: &BeanName) -> Result<()> {
        self.visit(root)
    }

    fn visit(&mut self, name: &BeanName) -> Result<()> {
        if self.finished.contains(name) || self.pool.contains(name.as_str()) {
            return Ok(());
        }
        if let Some(start) = self.path.iter().position(|seen| seen == name) {
            let chain = self.path[start..].iter().chain(std::iter::once(name));
            return Err(Error::circular_dependency(chain));
        }

        let Ok(definition) = self.catalog.bean_definition(name.as_str()) else {
            return Ok(());
        };
        let Ok(constructor) = definition.bean_type().single_constructor(name) else {
            return Ok(());
        };

        self.path.push(name.clone());
        for parameter in constructor.parameters() {
            self.visit(parameter.bean_name())?;
        }
        self.path.pop();
        self.finished.insert(name.clone());
        Ok(())
    }
}
