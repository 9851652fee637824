//! Umbrella crate that re-exports the `survivor-*` building blocks.
//!
//! Most users only need [`agent::Plugin`] and a host implementing
//! [`core::HostMut`]; the lower layers are exposed for hosts that want to drive the pieces
//! themselves.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use survivor_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use survivor_bt as bt;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use survivor_nav as nav;

#[cfg(feature = "steering")]
#[cfg_attr(docsrs, doc(cfg(feature = "steering")))]
pub use survivor_steering as steering;

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub use survivor_agent as agent;

/// Commonly used types, for glob import.
#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub mod prelude {
    pub use survivor_agent::{AgentState, Plugin, PluginConfig, SandboxConfig, SandboxHost};
    pub use survivor_core::{DebugDraw, HostMut, HostView, ItemKind, Vec2};
    pub use survivor_steering::SteeringOutput;
}
