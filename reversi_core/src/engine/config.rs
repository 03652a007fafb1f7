use serde::{Deserialize, Serialize};

/// Historical ceiling for the look-ahead; the search has not been
/// tuned for anything deeper.
pub const DEFAULT_MAX_DEPTH: u8 = 9;

const DEFAULT_CACHE_MAX_ENTRIES: usize = 64 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies of look-ahead used when the caller does not override it.
    pub max_depth: u8,
    /// Upper bound on cached root evaluations before the cache resets.
    pub cache_max_entries: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl EngineConfig {
    /// Loads a config from JSON; absent fields keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}
