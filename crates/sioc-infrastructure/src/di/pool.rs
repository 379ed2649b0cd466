//! Singleton instance pool
//!
//! One slot per bean name. The map shard lock is only held while a slot is
//! fetched or inserted; construction runs inside the slot's own
//! [`OnceCell`], which makes it a per-name creation lock. Slots are never
//! removed or overwritten.

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use sioc_domain::error::Result;
use sioc_domain::value_objects::{BeanName, Instance, TypeKey};
use std::sync::Arc;

/// A created bean together with the type it was constructed as
#[derive(Debug, Clone)]
pub struct PooledBean {
    pub type_key: TypeKey,
    pub instance: Instance,
}

type Slot = Arc<OnceCell<PooledBean>>;

/// Monotonic map from bean name to its singleton instance
#[derive(Debug, Default)]
pub struct InstancePool {
    slots: DashMap<BeanName, Slot>,
}

impl InstancePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached instance for `name`, if it has been created
    pub fn get(&self, name: &str) -> Option<PooledBean> {
        self.slots.get(name).and_then(|slot| slot.get().cloned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots
            .get(name)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of created instances
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names with a created instance, in no particular order
    pub fn names(&self) -> Vec<BeanName> {
        self.slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Return the instance for `name`, running `create` if there is none yet
    ///
    /// Concurrent callers for the same name block until the first one
    /// finishes; `create` runs at most once per successful initialisation.
    /// A failing `create` leaves the slot empty.
    pub fn get_or_try_create<F>(&self, name: &BeanName, create: F) -> Result<PooledBean>
    where
        F: FnOnce() -> Result<PooledBean>,
    {
        let slot: Slot = Arc::clone(&self.slots.entry(name.clone()).or_default());
        slot.get_or_try_init(create).cloned()
    }
}
