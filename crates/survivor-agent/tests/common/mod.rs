#![allow(dead_code)]

use survivor_agent::{DecisionContext, Inventory, Limits, PluginConfig, SandboxConfig, SandboxHost};
use survivor_core::HostView;
use survivor_nav::SpatialMemory;

pub fn empty_host() -> SandboxHost {
    SandboxHost::empty(SandboxConfig::default())
}

pub fn default_inventory() -> Inventory {
    Inventory::new(PluginConfig::default().loadout)
}

pub fn context_with(host: SandboxHost, inventory: Inventory) -> DecisionContext<SandboxHost> {
    let memory = SpatialMemory::new(15, 15, host.world_info());
    DecisionContext::new(host, memory, inventory, Limits::default())
}

pub fn context(host: SandboxHost) -> DecisionContext<SandboxHost> {
    context_with(host, default_inventory())
}
