//! Exploration memory for a single agent.
//!
//! [`SpatialMemory`] partitions the world into a uniform grid and keeps a FIFO frontier of cells
//! to visit, grown outward from wherever the agent has actually walked. It also remembers the
//! houses the agent has seen and how long each one must rest before it can be used again.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod house;
pub mod memory;

pub use house::{House, DEFAULT_HOUSE_COOLDOWN};
pub use memory::{
    Cell, CellShade, Neighbor, SpatialMemory, DEFAULT_HOUSE_ENTRY_RADIUS, DEFAULT_VISIT_RADIUS,
};
