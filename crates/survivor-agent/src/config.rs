//! Plugin configuration, loaded from YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use survivor_core::ItemKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] serde_yaml::Error),

    #[error("exploration grid must have at least one column and one row (got {cols}x{rows})")]
    EmptyGrid { cols: usize, rows: usize },

    #[error("loadout must name at least one item")]
    EmptyLoadout,

    #[error("loadout slot {0} asks for garbage")]
    GarbageInLoadout(usize),

    #[error("{field} must be a positive number (got {value})")]
    NonPositive { field: &'static str, value: f32 },
}

/// Agent tuning. Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Exploration grid resolution.
    #[serde(default = "default_grid_size")]
    pub grid_cols: usize,

    #[serde(default = "default_grid_size")]
    pub grid_rows: usize,

    /// Desired item per inventory slot, in slot order.
    #[serde(default = "default_loadout")]
    pub loadout: Vec<ItemKind>,

    /// Seconds a used house stays unavailable.
    #[serde(default = "default_house_cooldown")]
    pub house_cooldown: f32,

    #[serde(default = "default_house_entry_radius")]
    pub house_entry_radius: f32,

    #[serde(default = "default_cell_visit_radius")]
    pub cell_visit_radius: f32,

    /// Radians.
    #[serde(default = "default_face_tolerance")]
    pub face_tolerance: f32,

    #[serde(default = "default_vital_max")]
    pub max_energy: f32,

    #[serde(default = "default_vital_max")]
    pub max_health: f32,

    #[serde(default = "default_vital_max")]
    pub max_stamina: f32,

    /// How far behind the agent to look after a bite.
    #[serde(default = "default_turn_distance")]
    pub turn_distance: f32,
}

fn default_bot_name() -> String {
    "Survivor".to_string()
}
fn default_grid_size() -> usize {
    15
}
fn default_loadout() -> Vec<ItemKind> {
    vec![
        ItemKind::Pistol,
        ItemKind::Shotgun,
        ItemKind::Medkit,
        ItemKind::Food,
        ItemKind::Food,
    ]
}
fn default_house_cooldown() -> f32 {
    240.0
}
fn default_house_entry_radius() -> f32 {
    5.0
}
fn default_cell_visit_radius() -> f32 {
    3.0
}
fn default_face_tolerance() -> f32 {
    0.1
}
fn default_vital_max() -> f32 {
    10.0
}
fn default_turn_distance() -> f32 {
    10.0
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            grid_cols: default_grid_size(),
            grid_rows: default_grid_size(),
            loadout: default_loadout(),
            house_cooldown: default_house_cooldown(),
            house_entry_radius: default_house_entry_radius(),
            cell_visit_radius: default_cell_visit_radius(),
            face_tolerance: default_face_tolerance(),
            max_energy: default_vital_max(),
            max_health: default_vital_max(),
            max_stamina: default_vital_max(),
            turn_distance: default_turn_distance(),
        }
    }
}

impl PluginConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PluginConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_cols == 0 || self.grid_rows == 0 {
            return Err(ConfigError::EmptyGrid {
                cols: self.grid_cols,
                rows: self.grid_rows,
            });
        }

        if self.loadout.is_empty() {
            return Err(ConfigError::EmptyLoadout);
        }
        if let Some(slot) = self.loadout.iter().position(|k| *k == ItemKind::Garbage) {
            return Err(ConfigError::GarbageInLoadout(slot));
        }

        for (field, value) in [
            ("house_cooldown", self.house_cooldown),
            ("house_entry_radius", self.house_entry_radius),
            ("cell_visit_radius", self.cell_visit_radius),
            ("face_tolerance", self.face_tolerance),
            ("max_energy", self.max_energy),
            ("max_health", self.max_health),
            ("max_stamina", self.max_stamina),
            ("turn_distance", self.turn_distance),
        ] {
            // NaN fails this check too.
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        Ok(())
    }
}
