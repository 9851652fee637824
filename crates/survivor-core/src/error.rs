use thiserror::Error;

/// Failure reported by a host inventory or item operation.
///
/// Agent logic treats every variant the same way (the operation did not happen); the variants
/// exist so hosts and logs can say why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("inventory slot {slot} is out of range (capacity {capacity})")]
    SlotOutOfRange { slot: usize, capacity: usize },

    #[error("inventory slot {0} is already occupied")]
    SlotOccupied(usize),

    #[error("inventory slot {0} is empty")]
    SlotEmpty(usize),

    #[error("no entity with hash {0} is known to the host")]
    UnknownEntity(i32),

    #[error("item {0} is out of grab range")]
    OutOfRange(i32),

    #[error("item {0} is already stored in the inventory")]
    AlreadyStored(i32),

    #[error("item in slot {0} cannot be used")]
    NotUsable(usize),
}
