//! Concurrent first-access tests

use super::fixtures::{TestBean, TestBeanWithDependencies, container_over, wiring_catalog};
use sioc_domain::{BeanType, Constructor};
use sioc_infrastructure::di::InMemoryCatalog;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

const THREADS: usize = 8;

#[test]
fn test_concurrent_first_access_constructs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let catalog = Arc::new(
        InMemoryCatalog::new()
            .with_bean(
                "slow",
                BeanType::of::<TestBean>().with_constructor(Constructor::nullary(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(20));
                    TestBean
                })),
            )
            .unwrap(),
    );
    let container = container_over(&catalog);

    let instances: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| container.get_bean("slow").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(
        instances
            .windows(2)
            .all(|pair| Arc::ptr_eq(&pair[0], &pair[1]))
    );
}

#[test]
fn test_concurrent_dependents_share_dependency() {
    let catalog = wiring_catalog();
    let container = container_over(&catalog);

    let dependents: Vec<Arc<TestBeanWithDependencies>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let container = &container;
                scope.spawn(move || {
                    if i % 2 == 0 {
                        container.get_bean("testBean").unwrap();
                    }
                    container
                        .get_bean_as::<TestBeanWithDependencies>("testBeanWithDependencies")
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let dependency = container.get_bean("testBean").unwrap();
    for dependent in &dependents {
        assert!(Arc::ptr_eq(&dependent.dependencies[0], &dependency));
        assert!(Arc::ptr_eq(dependent, &dependents[0]));
    }
    assert_eq!(container.instance_count(), 2);
}
