use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("invalid plugin config: {0}")]
    Config(#[from] ConfigError),

    #[error("loadout needs {loadout} inventory slots but the host only has {capacity}")]
    LoadoutTooLarge { loadout: usize, capacity: usize },
}
