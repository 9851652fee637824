//! Interface exposed by the host game engine.
//!
//! The agent never owns world state. Each frame it pulls a snapshot of its own kinematics,
//! enumerates what is in its field of view, and issues inventory/item commands back to the host.
//! Read-only queries live on [`HostView`]; commands that change the world live on [`HostMut`].

use crate::{HostError, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-frame kinematic and vital snapshot of the controlled agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentInfo {
    pub stamina: f32,
    pub health: f32,
    pub energy: f32,
    /// Bitten by an enemy recently (the host keeps this set for a short window).
    pub was_bitten: bool,
    pub fov_angle: f32,
    pub fov_range: f32,
    pub linear_velocity: Vec2,
    pub angular_velocity: f32,
    pub position: Vec2,
    pub orientation: f32,
    pub max_linear_speed: f32,
    pub max_angular_speed: f32,
    pub grab_range: f32,
    pub agent_size: f32,
}

impl Default for AgentInfo {
    fn default() -> Self {
        Self {
            stamina: 10.0,
            health: 10.0,
            energy: 10.0,
            was_bitten: false,
            fov_angle: core::f32::consts::FRAC_PI_2,
            fov_range: 20.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            position: Vec2::ZERO,
            orientation: 0.0,
            max_linear_speed: 5.0,
            max_angular_speed: core::f32::consts::PI,
            grab_range: 3.0,
            agent_size: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldInfo {
    pub center: Vec2,
    pub dimensions: Vec2,
}

impl WorldInfo {
    pub fn new(center: Vec2, dimensions: Vec2) -> Self {
        Self { center, dimensions }
    }

    pub fn bottom_left(&self) -> Vec2 {
        self.center - self.dimensions * 0.5
    }

    pub fn top_right(&self) -> Vec2 {
        self.center + self.dimensions * 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityKind {
    Item,
    Enemy,
    PurgeZone,
}

/// Opaque handle to something in the field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityInfo {
    pub kind: EntityKind,
    pub location: Vec2,
    pub hash: i32,
}

/// Item categories known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    /// Primary weapon.
    Pistol,
    /// Secondary weapon.
    Shotgun,
    /// Healing item.
    Medkit,
    Food,
    /// Trash; never worth keeping.
    Garbage,
}

impl ItemKind {
    pub fn is_weapon(self) -> bool {
        matches!(self, ItemKind::Pistol | ItemKind::Shotgun)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemInfo {
    pub kind: ItemKind,
    pub location: Vec2,
    pub hash: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnemyKind {
    Normal,
    Runner,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnemyInfo {
    pub kind: EnemyKind,
    pub location: Vec2,
    pub linear_velocity: Vec2,
    pub hash: i32,
    pub size: f32,
    pub health: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HouseInfo {
    pub center: Vec2,
    pub size: Vec2,
}

/// Read-only queries against the host engine.
///
/// Field-of-view enumeration is indexable: callers ask for index 0, 1, 2, ... until the host
/// returns `None`.
pub trait HostView {
    fn agent_info(&self) -> AgentInfo;
    fn world_info(&self) -> WorldInfo;

    fn fov_entity(&self, index: usize) -> Option<EntityInfo>;
    fn fov_house(&self, index: usize) -> Option<HouseInfo>;

    fn item_info(&self, entity: &EntityInfo) -> Option<ItemInfo>;
    fn enemy_info(&self, entity: &EntityInfo) -> Option<EnemyInfo>;

    fn inventory_item(&self, slot: usize) -> Option<ItemInfo>;
    fn inventory_capacity(&self) -> usize;

    /// Remaining ammo of a weapon, `None` when unreadable.
    fn weapon_ammo(&self, item: &ItemInfo) -> Option<u32>;
    /// Remaining energy of a food item, `None` when unreadable.
    fn food_energy(&self, item: &ItemInfo) -> Option<u32>;
    /// Remaining health of a medkit, `None` when unreadable.
    fn medkit_health(&self, item: &ItemInfo) -> Option<u32>;

    /// Closest point on walkable space for the given target.
    fn nav_closest_path_point(&self, target: Vec2) -> Vec2;
}

/// Commands the agent can issue to the host.
pub trait HostMut: HostView {
    fn grab_item(&mut self, entity: &EntityInfo) -> Result<ItemInfo, HostError>;
    fn destroy_item(&mut self, entity: &EntityInfo) -> Result<(), HostError>;

    fn inventory_add(&mut self, slot: usize, item: &ItemInfo) -> Result<(), HostError>;
    fn inventory_use(&mut self, slot: usize) -> Result<(), HostError>;
    fn inventory_remove(&mut self, slot: usize) -> Result<(), HostError>;
}
