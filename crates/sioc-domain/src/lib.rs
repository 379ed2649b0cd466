//! # SIOC Domain
//!
//! Core types of the SIOC inversion-of-control container: bean names, bean
//! type descriptors, the catalog port and the error taxonomy. This crate has
//! no knowledge of how beans are cached or resolved.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | `BeanName`, `BeanType`, `Constructor`, `BeanDefinition` |
//! | [`ports`] | `BeanCatalog` trait |
//! | [`constants`] | Shared constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::BeanCatalog;
pub use value_objects::{
    BeanDefinition, BeanName, BeanType, Constructor, Dependencies, Instance, Parameter, TypeKey,
};
