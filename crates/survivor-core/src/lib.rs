//! Engine-agnostic primitives shared by the survivor agent crates.
//!
//! Nothing in here knows about behavior trees or exploration; it only defines the vocabulary
//! the other crates speak: 2D math, a typed blackboard, the tick context, and the interface
//! the host game engine exposes to the agent.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod draw;
pub mod error;
pub mod host;
pub mod math;
pub mod rng;
pub mod tick;

pub use blackboard::{BbKey, Blackboard};
pub use draw::{Color, DebugDraw, NullDraw};
pub use error::HostError;
pub use host::{
    AgentInfo, EnemyInfo, EnemyKind, EntityInfo, EntityKind, HostMut, HostView, HouseInfo,
    ItemInfo, ItemKind, WorldInfo,
};
pub use math::{angle_between, orientation_to_vector, Vec2};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
