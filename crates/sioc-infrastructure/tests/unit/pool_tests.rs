//! Instance pool tests

use sioc_domain::{BeanName, Error, Instance, TypeKey};
use sioc_infrastructure::di::{InstancePool, PooledBean};
use std::sync::Arc;

fn name(s: &str) -> BeanName {
    BeanName::new(s).unwrap()
}

fn pooled(value: u32) -> PooledBean {
    PooledBean {
        type_key: TypeKey::of::<u32>(),
        instance: Arc::new(value) as Instance,
    }
}

#[test]
fn test_empty_pool() {
    let pool = InstancePool::new();
    assert!(pool.is_empty());
    assert!(pool.get("anything").is_none());
    assert!(!pool.contains("anything"));
}

#[test]
fn test_create_once_then_reuse() {
    let pool = InstancePool::new();
    let first = pool.get_or_try_create(&name("answer"), || Ok(pooled(42))).unwrap();
    let second = pool
        .get_or_try_create(&name("answer"), || panic!("must not create twice"))
        .unwrap();

    assert!(Arc::ptr_eq(&first.instance, &second.instance));
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.names(), [name("answer")]);
}

#[test]
fn test_failed_creation_leaves_no_entry() {
    let pool = InstancePool::new();
    let result = pool.get_or_try_create(&name("broken"), || Err(Error::construction("broken", "boom")));

    assert!(result.is_err());
    assert!(!pool.contains("broken"));
    assert!(pool.is_empty());

    let retried = pool.get_or_try_create(&name("broken"), || Ok(pooled(7))).unwrap();
    assert_eq!(*retried.instance.downcast::<u32>().unwrap(), 7);
}
