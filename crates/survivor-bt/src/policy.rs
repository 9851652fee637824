use crate::bt::{BtNode, BtStatus};

/// Owns a tree and ticks it once per agent frame.
pub struct BtPolicy<C> {
    root: BtNode<C>,
    last: Option<BtStatus>,
}

impl<C> BtPolicy<C> {
    pub fn new(root: BtNode<C>) -> Self {
        Self { root, last: None }
    }

    pub fn root(&self) -> &BtNode<C> {
        &self.root
    }

    /// Status of the most recent tick, `None` before the first one.
    pub fn last_status(&self) -> Option<BtStatus> {
        self.last
    }

    pub fn tick(&mut self, ctx: &mut C) -> BtStatus {
        let status = self.root.tick(ctx);
        if self.last != Some(status) {
            tracing::trace!(?status, previous = ?self.last, "bt root status changed");
        }
        self.last = Some(status);
        status
    }
}
