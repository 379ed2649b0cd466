//! Domain layer constants

/// Separator used when rendering a dependency path in diagnostics
pub const DEPENDENCY_CHAIN_SEPARATOR: &str = " -> ";
