//! Bean type descriptors
//!
//! A [`BeanType`] replaces runtime reflection with an explicit description of
//! how a type is built: the produced Rust type plus the constructor shapes it
//! declares. Each [`Constructor`] lists its [`Parameter`]s and owns a factory
//! closure that receives the resolved [`Dependencies`] in parameter order.
//!
//! ```
//! use std::sync::Arc;
//! use sioc_domain::value_objects::{BeanType, Constructor};
//!
//! struct Clock;
//! struct Scheduler {
//!     clock: Arc<Clock>,
//! }
//!
//! let clock = BeanType::of::<Clock>().with_constructor(Constructor::nullary(|| Clock));
//! let scheduler = BeanType::of::<Scheduler>()
//!     .with_constructor(Constructor::unary(|clock: Arc<Clock>| Scheduler { clock }));
//!
//! assert_eq!(clock.bare_name(), "Clock");
//! assert_eq!(scheduler.constructors()[0].parameters()[0].bean_name(), "clock");
//! ```

use super::bean_name::{BeanName, bare_type_name};
use crate::error::{Error, Result};
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Owned, type-erased handle to a bean instance
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Erased constructor body
pub type Factory = Arc<dyn Fn(&Dependencies) -> Result<Instance> + Send + Sync>;

/// Runtime identity of a Rust type together with its printable name
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without module path or generic arguments
    pub fn bare_name(&self) -> &'static str {
        bare_type_name(self.name)
    }

    /// Whether `instance` was constructed as this exact type
    pub fn matches(&self, instance: &Instance) -> bool {
        Any::type_id(&**instance) == self.id
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A constructor parameter: the dependency's declared type and bean name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    bean_name: BeanName,
    type_key: TypeKey,
}

impl Parameter {
    /// Parameter of type `T` wired by naming convention (`TestBean` -> `testBean`)
    pub fn of<T: Any + Send + Sync>() -> Self {
        Self {
            bean_name: BeanName::for_type::<T>(),
            type_key: TypeKey::of::<T>(),
        }
    }

    /// Parameter of type `T` wired to an explicitly named bean
    pub fn named<T: Any + Send + Sync>(bean_name: BeanName) -> Self {
        Self {
            bean_name,
            type_key: TypeKey::of::<T>(),
        }
    }

    pub fn bean_name(&self) -> &BeanName {
        &self.bean_name
    }

    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }
}

/// Resolved dependency instances, in constructor parameter order
pub struct Dependencies {
    bean: BeanName,
    resolved: Vec<ResolvedDependency>,
}

struct ResolvedDependency {
    name: BeanName,
    type_key: TypeKey,
    instance: Instance,
}

impl Dependencies {
    /// Start an empty dependency list for the bean being constructed
    pub fn new(bean: BeanName) -> Self {
        Self {
            bean,
            resolved: Vec::new(),
        }
    }

    /// Append the next resolved dependency
    pub fn push(&mut self, name: BeanName, type_key: TypeKey, instance: Instance) {
        self.resolved.push(ResolvedDependency {
            name,
            type_key,
            instance,
        });
    }

    /// Bean these dependencies are being resolved for
    pub fn bean(&self) -> &BeanName {
        &self.bean
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Erased instance at `index`
    pub fn instance(&self, index: usize) -> Option<&Instance> {
        self.resolved.get(index).map(|dep| &dep.instance)
    }

    /// Iterate `(bean name, instance)` pairs in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (&BeanName, &Instance)> {
        self.resolved.iter().map(|dep| (&dep.name, &dep.instance))
    }

    /// Typed dependency at `index`
    pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        let dep = self.resolved.get(index).ok_or_else(|| {
            Error::construction(
                self.bean.as_str(),
                format!(
                    "dependency index {index} out of range ({} resolved)",
                    self.resolved.len()
                ),
            )
        })?;
        Arc::clone(&dep.instance).downcast::<T>().map_err(|_| {
            Error::type_mismatch(
                dep.name.as_str(),
                std::any::type_name::<T>(),
                dep.type_key.name(),
            )
        })
    }
}

impl fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependencies")
            .field("bean", &self.bean)
            .field(
                "resolved",
                &self
                    .resolved
                    .iter()
                    .map(|dep| (dep.name.as_str(), dep.type_key.name()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// One constructible shape of a bean type
#[derive(Clone)]
pub struct Constructor {
    parameters: Vec<Parameter>,
    produces: TypeKey,
    factory: Factory,
}

impl Constructor {
    /// General form: explicit parameters and a fallible factory
    pub fn with_parameters<T, F>(parameters: Vec<Parameter>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&Dependencies) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            parameters,
            produces: TypeKey::of::<T>(),
            factory: Arc::new(move |deps| factory(deps).map(|bean| Arc::new(bean) as Instance)),
        }
    }

    /// Constructor without dependencies
    pub fn nullary<T, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_parameters(Vec::new(), move |_| Ok(factory()))
    }

    /// Constructor with one conventionally named dependency
    pub fn unary<T, A, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        A: Any + Send + Sync,
        F: Fn(Arc<A>) -> T + Send + Sync + 'static,
    {
        Self::with_parameters(vec![Parameter::of::<A>()], move |deps| {
            Ok(factory(deps.get::<A>(0)?))
        })
    }

    /// Constructor with two conventionally named dependencies
    pub fn binary<T, A, B, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        A: Any + Send + Sync,
        B: Any + Send + Sync,
        F: Fn(Arc<A>, Arc<B>) -> T + Send + Sync + 'static,
    {
        Self::with_parameters(
            vec![Parameter::of::<A>(), Parameter::of::<B>()],
            move |deps| Ok(factory(deps.get::<A>(0)?, deps.get::<B>(1)?)),
        )
    }

    /// Constructor with three conventionally named dependencies
    pub fn ternary<T, A, B, C, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        A: Any + Send + Sync,
        B: Any + Send + Sync,
        C: Any + Send + Sync,
        F: Fn(Arc<A>, Arc<B>, Arc<C>) -> T + Send + Sync + 'static,
    {
        Self::with_parameters(
            vec![Parameter::of::<A>(), Parameter::of::<B>(), Parameter::of::<C>()],
            move |deps| {
                Ok(factory(
                    deps.get::<A>(0)?,
                    deps.get::<B>(1)?,
                    deps.get::<C>(2)?,
                ))
            },
        )
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Type the factory produces
    pub fn produces(&self) -> TypeKey {
        self.produces
    }

    /// Run the factory with already-resolved dependencies
    pub fn invoke(&self, dependencies: &Dependencies) -> Result<Instance> {
        (self.factory)(dependencies)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .field("produces", &self.produces.name())
            .finish_non_exhaustive()
    }
}

/// Descriptor of a constructible bean type
#[derive(Debug, Clone)]
pub struct BeanType {
    type_key: TypeKey,
    constructors: Vec<Constructor>,
}

impl BeanType {
    /// Descriptor for `T` with no constructors declared yet
    pub fn of<T: Any + Send + Sync>() -> Self {
        Self {
            type_key: TypeKey::of::<T>(),
            constructors: Vec::new(),
        }
    }

    /// Declare a constructor
    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    /// Fully qualified name of the produced type
    pub fn name(&self) -> &'static str {
        self.type_key.name()
    }

    pub fn bare_name(&self) -> &'static str {
        self.type_key.bare_name()
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// The one constructor this type declares
    ///
    /// Zero or several constructors are rejected rather than guessed between.
    pub fn single_constructor(&self, bean: &BeanName) -> Result<&Constructor> {
        match self.constructors.as_slice() {
            [constructor] => Ok(constructor),
            others => Err(Error::ambiguous_constructor(bean.as_str(), others.len())),
        }
    }

    /// Whether `instance` satisfies this type
    pub fn is_instance(&self, instance: &Instance) -> bool {
        self.type_key.matches(instance)
    }
}
