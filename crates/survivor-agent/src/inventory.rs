//! Slot-based inventory negotiation.
//!
//! Every host inventory slot is reserved for one desired item kind (the loadout). The slot index
//! in the loadout is the host inventory slot the item is stored in.

use survivor_core::{HostMut, HostView, ItemInfo, ItemKind};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    desired: Vec<ItemKind>,
    occupied: Vec<Option<ItemKind>>,
}

impl Inventory {
    pub fn new(loadout: Vec<ItemKind>) -> Self {
        let occupied = vec![None; loadout.len()];
        Self {
            desired: loadout,
            occupied,
        }
    }

    /// Inventory whose slots are already (partly) filled, e.g. when resuming on a live host.
    pub fn with_occupancy(loadout: Vec<ItemKind>, occupied: Vec<Option<ItemKind>>) -> Self {
        assert_eq!(
            loadout.len(),
            occupied.len(),
            "occupancy must have one entry per loadout slot"
        );
        Self {
            desired: loadout,
            occupied,
        }
    }

    pub fn capacity(&self) -> usize {
        self.desired.len()
    }

    pub fn desired(&self) -> &[ItemKind] {
        &self.desired
    }

    pub fn occupancy(&self) -> &[Option<ItemKind>] {
        &self.occupied
    }

    /// `(desired, occupied)` per slot.
    pub fn slots(&self) -> impl Iterator<Item = (ItemKind, Option<ItemKind>)> + '_ {
        self.desired.iter().copied().zip(self.occupied.iter().copied())
    }

    /// Release slots whose item has run out of ammo, energy or health.
    pub fn update_items<H: HostMut>(&mut self, host: &mut H) {
        for slot in 0..self.occupied.len() {
            let Some(kind) = self.occupied[slot] else {
                continue;
            };
            let Some(item) = host.inventory_item(slot) else {
                continue;
            };

            if charge(host, kind, &item) != Some(0) {
                continue;
            }

            if let Err(err) = host.inventory_remove(slot) {
                debug!(slot, %err, "failed to remove exhausted item");
            }
            self.occupied[slot] = None;
            debug!(slot, ?kind, "exhausted item released");
        }
    }

    pub fn is_item_needed(&self, kind: ItemKind) -> bool {
        self.slots()
            .any(|(desired, occupied)| desired == kind && occupied.is_none())
    }

    /// Store `item` in every matching slot not already holding its kind. Returns `true` if any
    /// slot took it.
    pub fn add_item<H: HostMut>(&mut self, host: &mut H, item: &ItemInfo) -> bool {
        let mut added = false;
        for slot in 0..self.desired.len() {
            if self.desired[slot] != item.kind || self.occupied[slot] == Some(item.kind) {
                continue;
            }
            match host.inventory_add(slot, item) {
                Ok(()) => {
                    self.occupied[slot] = Some(item.kind);
                    added = true;
                    debug!(slot, kind = ?item.kind, hash = item.hash, "item stored");
                }
                Err(err) => debug!(slot, kind = ?item.kind, %err, "inventory rejected item"),
            }
        }
        added
    }

    /// Use the first slot holding `kind` that the host accepts.
    pub fn use_item<H: HostMut>(&mut self, host: &mut H, kind: ItemKind) -> bool {
        for slot in 0..self.occupied.len() {
            if self.occupied[slot] != Some(kind) {
                continue;
            }
            match host.inventory_use(slot) {
                Ok(()) => {
                    debug!(slot, ?kind, "item used");
                    return true;
                }
                Err(err) => debug!(slot, ?kind, %err, "failed to use item"),
            }
        }
        false
    }

    pub fn has_item(&self, kind: ItemKind) -> bool {
        self.occupied.contains(&Some(kind))
    }

    /// Energy of the first readable food item held.
    pub fn food_energy<H: HostView>(&self, host: &H) -> Option<u32> {
        self.held_charge(host, ItemKind::Food)
    }

    /// Health of the first readable medkit held.
    pub fn medkit_health<H: HostView>(&self, host: &H) -> Option<u32> {
        self.held_charge(host, ItemKind::Medkit)
    }

    fn held_charge<H: HostView>(&self, host: &H, kind: ItemKind) -> Option<u32> {
        self.slots()
            .enumerate()
            .filter(|(_, (desired, occupied))| *desired == kind && occupied.is_some())
            .find_map(|(slot, _)| {
                let item = host.inventory_item(slot)?;
                charge(host, kind, &item)
            })
    }
}

fn charge<H: HostView>(host: &H, kind: ItemKind, item: &ItemInfo) -> Option<u32> {
    match kind {
        ItemKind::Pistol | ItemKind::Shotgun => host.weapon_ammo(item),
        ItemKind::Food => host.food_energy(item),
        ItemKind::Medkit => host.medkit_health(item),
        ItemKind::Garbage => None,
    }
}
