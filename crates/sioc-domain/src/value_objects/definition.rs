//! Bean definitions supplied by a catalog

use super::bean_name::BeanName;
use super::bean_type::BeanType;
use std::sync::Arc;

/// A bean name paired with its declared type
///
/// Produced by a [`BeanCatalog`](crate::ports::BeanCatalog) and treated as
/// read-only by the container.
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    name: BeanName,
    bean_type: Arc<BeanType>,
}

impl BeanDefinition {
    pub fn new(name: BeanName, bean_type: Arc<BeanType>) -> Self {
        Self { name, bean_type }
    }

    pub fn name(&self) -> &BeanName {
        &self.name
    }

    pub fn bean_type(&self) -> &Arc<BeanType> {
        &self.bean_type
    }
}
