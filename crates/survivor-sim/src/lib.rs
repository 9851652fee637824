//! Headless simulation of the survivor agent against [`SandboxHost`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use survivor_agent::{
    ConfigError, Plugin, PluginConfig, PluginError, SandboxConfig, SandboxHost, SandboxStats,
};
use survivor_core::ItemKind;
use tracing::info;

/// Frames simulated when no count is given: one minute at 60 fps.
pub const DEFAULT_TICKS: u64 = 3600;
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Run configuration. Both sections are optional in the YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub plugin: PluginConfig,
    pub sandbox: SandboxConfig,
}

impl SimConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_yaml::from_str(content)?;
        config.plugin.validate()?;
        config.sandbox.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}

/// What the world looked like when the run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimSummary {
    pub bot_name: String,
    pub seed: u64,
    pub ticks: u64,
    pub elapsed: f32,
    pub alive: bool,
    pub health: f32,
    pub energy: f32,
    pub stamina: f32,
    pub stats: SandboxStats,
    pub inventory: Vec<Option<ItemKind>>,
    pub known_houses: usize,
    pub visited_cells: usize,
    pub total_cells: usize,
    pub items_on_ground: usize,
    pub enemies_alive: usize,
}

impl SimSummary {
    fn collect(plugin: &Plugin<SandboxHost>, ticks: u64) -> Self {
        let host = plugin.host();
        let agent = host.agent();
        let memory = plugin.memory();
        Self {
            bot_name: plugin.info().bot_name.clone(),
            seed: host.config().seed,
            ticks,
            elapsed: host.elapsed(),
            alive: !host.is_agent_dead(),
            health: agent.health,
            energy: agent.energy,
            stamina: agent.stamina,
            stats: host.stats(),
            inventory: plugin.inventory().occupancy().to_vec(),
            known_houses: memory.houses().len(),
            visited_cells: memory.cells().iter().filter(|cell| cell.visited).count(),
            total_cells: memory.cells().len(),
            items_on_ground: host.items_on_ground(),
            enemies_alive: host.enemies_alive(),
        }
    }
}

impl fmt::Display for SimSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.alive { "alive" } else { "dead" };
        writeln!(
            f,
            "{} (seed {}): {} after {} ticks ({:.1}s)",
            self.bot_name, self.seed, status, self.ticks, self.elapsed
        )?;
        writeln!(
            f,
            "  vitals     health {:.1}  energy {:.1}  stamina {:.1}",
            self.health, self.energy, self.stamina
        )?;
        writeln!(
            f,
            "  items      grabbed {}  destroyed {}  used {}  on ground {}",
            self.stats.items_grabbed,
            self.stats.items_destroyed,
            self.stats.items_used,
            self.items_on_ground
        )?;
        writeln!(
            f,
            "  combat     shots {}  kills {}  bites {}  enemies left {}",
            self.stats.shots_fired, self.stats.enemies_killed, self.stats.bites, self.enemies_alive
        )?;
        writeln!(
            f,
            "  explored   {}/{} cells  {} houses",
            self.visited_cells, self.total_cells, self.known_houses
        )?;
        write!(f, "  inventory ")?;
        for slot in &self.inventory {
            match slot {
                Some(kind) => write!(f, " {kind:?}")?,
                None => write!(f, " -")?,
            }
        }
        writeln!(f)
    }
}

/// Generate the sandbox world and run the agent in it for up to `ticks` frames of `dt` seconds.
/// Stops early if the agent dies.
pub fn run(config: &SimConfig, ticks: u64, dt: f32) -> Result<SimSummary, PluginError> {
    config.sandbox.validate()?;
    let host = SandboxHost::generate(config.sandbox.clone());
    let mut plugin = Plugin::new(host, &config.plugin)?;

    let mut ticks_run = 0;
    while ticks_run < ticks && !plugin.host().is_agent_dead() {
        let output = plugin.update_steering(dt);
        plugin.host_mut().apply(&output, dt);
        ticks_run += 1;
    }

    let summary = SimSummary::collect(&plugin, ticks_run);
    info!(
        ticks = summary.ticks,
        alive = summary.alive,
        kills = summary.stats.enemies_killed,
        grabbed = summary.stats.items_grabbed,
        "simulation finished"
    );
    Ok(summary)
}
