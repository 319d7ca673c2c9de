use serde::{Deserialize, Serialize};

use crate::constants::search as defaults;

/// Search ranking tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum results kept per category. Bounds render cost only.
    pub result_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_cap: defaults::RESULT_CAP,
        }
    }
}
