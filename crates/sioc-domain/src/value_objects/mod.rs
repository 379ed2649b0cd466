//! Domain Value Objects
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`BeanName`] | Non-empty bean identifier and the type-name wiring convention |
//! | [`BeanType`] | Produced type plus its declared constructors |
//! | [`Constructor`] | Parameter list and factory closure for one constructible shape |
//! | [`Dependencies`] | Resolved constructor arguments, in parameter order |
//! | [`BeanDefinition`] | Name/type pair supplied by a catalog |

/// Bean names and naming convention
pub mod bean_name;
/// Bean type descriptors and constructors
pub mod bean_type;
/// Catalog definitions
pub mod definition;

pub use bean_name::{BeanName, bare_type_name, decapitalize};
pub use bean_type::{BeanType, Constructor, Dependencies, Factory, Instance, Parameter, TypeKey};
pub use definition::BeanDefinition;
