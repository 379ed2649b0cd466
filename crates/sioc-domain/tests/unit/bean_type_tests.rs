//! Unit tests for bean type descriptors

use sioc_domain::Error;
use sioc_domain::value_objects::{
    BeanName, BeanType, Constructor, Dependencies, Instance, Parameter, TypeKey,
};
use std::sync::Arc;

#[derive(Debug)]
struct TestBean;

#[derive(Debug)]
struct TestBeanWithDependencies {
    dependency: Arc<TestBean>,
}

fn name(s: &str) -> BeanName {
    BeanName::new(s).unwrap()
}

#[test]
fn test_bean_type_reports_names() {
    let bean_type = BeanType::of::<TestBean>();
    assert_eq!(bean_type.bare_name(), "TestBean");
    assert!(bean_type.name().ends_with("TestBean"));
    assert_eq!(bean_type.type_key(), TypeKey::of::<TestBean>());
}

#[test]
fn test_single_constructor_required() {
    let none = BeanType::of::<TestBean>();
    let err = none.single_constructor(&name("testBean")).unwrap_err();
    assert!(matches!(err, Error::AmbiguousConstructor { count: 0, .. }));

    let two = BeanType::of::<TestBean>()
        .with_constructor(Constructor::nullary(|| TestBean))
        .with_constructor(Constructor::nullary(|| TestBean));
    let err = two.single_constructor(&name("testBean")).unwrap_err();
    assert!(matches!(err, Error::AmbiguousConstructor { count: 2, .. }));

    let one = BeanType::of::<TestBean>().with_constructor(Constructor::nullary(|| TestBean));
    assert!(one.single_constructor(&name("testBean")).is_ok());
}

#[test]
fn test_unary_constructor_derives_parameter_name() {
    let ctor = Constructor::unary(|dependency: Arc<TestBean>| TestBeanWithDependencies {
        dependency,
    });
    assert_eq!(ctor.parameters().len(), 1);
    assert_eq!(ctor.parameters()[0].bean_name(), "testBean");
    assert_eq!(ctor.parameters()[0].type_key(), TypeKey::of::<TestBean>());
    assert_eq!(ctor.produces(), TypeKey::of::<TestBeanWithDependencies>());
}

#[test]
fn test_named_parameter_keeps_explicit_name() {
    let param = Parameter::named::<TestBean>(name("primaryBean"));
    assert_eq!(param.bean_name(), "primaryBean");
    assert_eq!(param.type_key().bare_name(), "TestBean");
}

#[test]
fn test_invoke_with_dependencies() {
    let ctor = Constructor::unary(|dependency: Arc<TestBean>| TestBeanWithDependencies {
        dependency,
    });
    let dep: Instance = Arc::new(TestBean);
    let mut deps = Dependencies::new(name("testBeanWithDependencies"));
    deps.push(name("testBean"), TypeKey::of::<TestBean>(), Arc::clone(&dep));

    let instance = ctor.invoke(&deps).unwrap();
    let bean = instance.downcast::<TestBeanWithDependencies>().unwrap();
    let expected = dep.downcast::<TestBean>().unwrap();
    assert!(Arc::ptr_eq(&bean.dependency, &expected));
}

#[test]
fn test_dependencies_get_checks_type() {
    let mut deps = Dependencies::new(name("consumer"));
    deps.push(
        name("text"),
        TypeKey::of::<String>(),
        Arc::new(String::from("hi")) as Instance,
    );

    assert_eq!(*deps.get::<String>(0).unwrap(), "hi");
    assert!(matches!(
        deps.get::<TestBean>(0),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(deps.get::<String>(1), Err(Error::Construction { .. })));
}

#[test]
fn test_is_instance() {
    let bean_type = BeanType::of::<TestBean>();
    let good: Instance = Arc::new(TestBean);
    let bad: Instance = Arc::new(String::from("nope"));
    assert!(bean_type.is_instance(&good));
    assert!(!bean_type.is_instance(&bad));
}
