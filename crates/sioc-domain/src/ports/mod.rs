//! Domain Port Interfaces
//!
//! | Port | Description |
//! |------|-------------|
//! | [`BeanCatalog`] | Ordered bean names and per-name definitions |

/// Bean catalog port
pub mod catalog;

pub use catalog::BeanCatalog;
