//! The survivor agent: a fixed-priority behavior tree over a shared decision context.
//!
//! Once per frame [`Plugin::update_steering`] pulls the agent snapshot and field of view from
//! the host, updates exploration memory and the inventory, ticks the decision tree and turns the
//! resulting target into a [`SteeringOutput`](survivor_steering::SteeringOutput).
//!
//! [`SandboxHost`] is a small deterministic world implementing the host traits, used by the
//! simulator binary and by tests.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod conditions;
pub mod config;
pub mod context;
pub mod error;
pub mod inventory;
pub mod plugin;
pub mod sandbox;
pub mod state;
pub mod tree;

pub use config::{ConfigError, PluginConfig};
pub use context::{keys, DecisionContext, Limits};
pub use error::PluginError;
pub use inventory::Inventory;
pub use plugin::{Plugin, PluginInfo};
pub use sandbox::{SandboxConfig, SandboxHost, SandboxStats};
pub use state::{AgentRecord, AgentState};
pub use tree::decision_tree;
