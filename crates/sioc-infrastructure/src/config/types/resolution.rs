//! Bean resolution configuration types

use crate::constants::DEFAULT_PREINSTANTIATE;
use serde::{Deserialize, Serialize};

/// How the container creates its singletons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Create every catalog bean when the container is built instead of on
    /// first request
    pub preinstantiate: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            preinstantiate: DEFAULT_PREINSTANTIATE,
        }
    }
}
