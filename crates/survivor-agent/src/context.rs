use survivor_core::{Blackboard, EntityInfo, HostView, HouseInfo, TickContext};
use survivor_nav::SpatialMemory;

use crate::config::PluginConfig;
use crate::inventory::Inventory;
use crate::state::AgentRecord;

/// Blackboard keys for values that only exist while a decision is in progress.
pub mod keys {
    use survivor_core::{BbKey, EntityInfo, Vec2};

    /// Enemy matched by `is_enemy_in_fov` this tick.
    pub const ENEMY_IN_FOV: BbKey<EntityInfo> = BbKey::new(1, "enemy_in_fov");
    /// Item the agent is walking to or about to process.
    pub const ITEM_UNDER_INSPECTION: BbKey<EntityInfo> = BbKey::new(2, "item_under_inspection");
    /// Location of the item being pursued; kept while the item is out of view.
    pub const CURRENT_ITEM_LOC: BbKey<Vec2> = BbKey::new(3, "current_item_loc");
    /// Cell of the house being approached.
    pub const CURRENT_HOUSE: BbKey<usize> = BbKey::new(4, "current_house");
    /// Point behind the agent, fixed when a bite is first handled.
    pub const BEHIND_TARGET: BbKey<Vec2> = BbKey::new(5, "behind_target");
    pub const WAS_BITTEN: BbKey<bool> = BbKey::new(6, "was_bitten");
}

/// Thresholds the conditions compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub max_energy: f32,
    pub max_health: f32,
    pub max_stamina: f32,
    pub face_tolerance: f32,
    pub turn_distance: f32,
}

impl Limits {
    pub fn from_config(config: &PluginConfig) -> Self {
        Self {
            max_energy: config.max_energy,
            max_health: config.max_health,
            max_stamina: config.max_stamina,
            face_tolerance: config.face_tolerance,
            turn_distance: config.turn_distance,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::from_config(&PluginConfig::default())
    }
}

/// Everything a tree node may read or write during one tick.
pub struct DecisionContext<H> {
    pub host: H,
    pub memory: SpatialMemory,
    pub inventory: Inventory,
    pub agent: AgentRecord,
    pub entities_in_fov: Vec<EntityInfo>,
    pub houses_in_fov: Vec<HouseInfo>,
    pub blackboard: Blackboard,
    pub limits: Limits,
    pub tick: TickContext,
}

impl<H: HostView> DecisionContext<H> {
    pub fn new(host: H, memory: SpatialMemory, inventory: Inventory, limits: Limits) -> Self {
        let agent = AgentRecord::new(host.agent_info());
        Self {
            host,
            memory,
            inventory,
            agent,
            entities_in_fov: Vec::new(),
            houses_in_fov: Vec::new(),
            blackboard: Blackboard::new(),
            limits,
            tick: TickContext::default(),
        }
    }

    /// Re-read the field of view, walking host indices until the first miss.
    pub fn refresh_fov(&mut self) {
        self.entities_in_fov.clear();
        self.houses_in_fov.clear();

        let host = &self.host;
        self.entities_in_fov
            .extend((0..).map_while(|index| host.fov_entity(index)));
        self.houses_in_fov
            .extend((0..).map_while(|index| host.fov_house(index)));
    }

    pub fn refresh_agent(&mut self) {
        self.agent.info = self.host.agent_info();
    }
}
