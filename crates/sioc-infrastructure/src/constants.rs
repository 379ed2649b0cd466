//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `sioc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sioc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sioc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SIOC";

/// Separator for nested keys in environment variables (`SIOC_LOGGING__LEVEL`)
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "SIOC_LOG";

/// Fallback file stem for rolling log files
pub const DEFAULT_LOG_FILE_STEM: &str = "sioc";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Whether singletons are created eagerly when the container is built
pub const DEFAULT_PREINSTANTIATE: bool = false;
