//! Reactive behavior tree evaluated once per agent tick.
//!
//! Trees are plain ownership trees of [`BtNode`] variants. Leaves are function pointers over a
//! caller-chosen context type `C`, so the tree can be stored long-term while the context is
//! rebuilt or borrowed every frame.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod policy;

pub use bt::{ActionFn, BtNode, BtStatus, ConditionFn};
pub use policy::BtPolicy;
