//! Shared bean types and catalogs

use sioc_domain::{BeanCatalog, BeanType, Constructor};
use sioc_infrastructure::di::{Container, InMemoryCatalog};
use std::any::Any;
use std::sync::Arc;

#[derive(Debug)]
pub struct TestBean;

#[derive(Debug)]
pub struct TestBeanWithDependencies {
    pub dependencies: Vec<Arc<dyn Any + Send + Sync>>,
}

impl TestBeanWithDependencies {
    pub fn new(dependency: Arc<TestBean>) -> Self {
        Self {
            dependencies: vec![dependency as Arc<dyn Any + Send + Sync>],
        }
    }
}

pub fn test_bean_type() -> BeanType {
    BeanType::of::<TestBean>().with_constructor(Constructor::nullary(|| TestBean))
}

pub fn test_bean_with_dependencies_type() -> BeanType {
    BeanType::of::<TestBeanWithDependencies>()
        .with_constructor(Constructor::unary(TestBeanWithDependencies::new))
}

/// Catalog with `testBean` and `testBeanWithDependencies`
pub fn wiring_catalog() -> Arc<InMemoryCatalog> {
    let catalog = InMemoryCatalog::new()
        .with_bean("testBean", test_bean_type())
        .unwrap()
        .with_bean("testBeanWithDependencies", test_bean_with_dependencies_type())
        .unwrap();
    Arc::new(catalog)
}

pub fn container_over(catalog: &Arc<InMemoryCatalog>) -> Container {
    Container::new(Arc::clone(catalog) as Arc<dyn BeanCatalog>)
}
