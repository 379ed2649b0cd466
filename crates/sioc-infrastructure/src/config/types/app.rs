//! Top-level configuration

use super::{LoggingConfig, ResolutionConfig};
use serde::{Deserialize, Serialize};

/// Complete container configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Bean resolution settings
    pub container: ResolutionConfig,
}
