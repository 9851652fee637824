//! Deterministic in-memory world implementing the host interface.
//!
//! The world is small and coarse: no obstacles, items lying on the ground, houses that are only
//! points of interest, and enemies that walk straight at the agent and bite when close. It is
//! enough to drive every branch of the decision tree from a fixed seed.

use serde::{Deserialize, Serialize};
use survivor_core::{
    angle_between, orientation_to_vector, AgentInfo, DeterministicRng, EnemyInfo, EnemyKind,
    EntityInfo, EntityKind, HostError, HostMut, HostView, HouseInfo, ItemInfo, ItemKind,
    SplitMix64, Vec2, WorldInfo,
};
use survivor_steering::SteeringOutput;
use tracing::debug;

use crate::config::ConfigError;

const ITEM_STREAM: u64 = 1;
const ENEMY_STREAM: u64 = 2;
const HOUSE_STREAM: u64 = 3;

/// Shots only hit enemies this close (radians) to the agent's facing direction.
const SHOT_CONE: f32 = 0.25;

/// Samples tried per enemy before settling for the farthest one from the agent.
const SPAWN_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Side length of the square world, centered at the origin.
    #[serde(default = "default_world_size")]
    pub world_size: f32,

    #[serde(default = "default_item_count")]
    pub item_count: usize,

    #[serde(default = "default_enemy_count")]
    pub enemy_count: usize,

    #[serde(default = "default_house_count")]
    pub house_count: usize,

    #[serde(default = "default_house_size")]
    pub house_size: f32,

    #[serde(default = "default_inventory_capacity")]
    pub inventory_capacity: usize,

    #[serde(default = "default_fov_range")]
    pub fov_range: f32,

    /// Full cone angle, radians.
    #[serde(default = "default_fov_angle")]
    pub fov_angle: f32,

    #[serde(default = "default_max_linear_speed")]
    pub max_linear_speed: f32,

    #[serde(default = "default_max_angular_speed")]
    pub max_angular_speed: f32,

    /// Speed factor applied while running with stamina left.
    #[serde(default = "default_run_multiplier")]
    pub run_multiplier: f32,

    #[serde(default = "default_grab_range")]
    pub grab_range: f32,

    /// Stamina per second, spent while running and recovered otherwise.
    #[serde(default = "default_stamina_rate")]
    pub stamina_rate: f32,

    /// Energy lost per second.
    #[serde(default = "default_energy_drain")]
    pub energy_drain: f32,

    /// Health lost per second while energy is empty.
    #[serde(default = "default_starvation_damage")]
    pub starvation_damage: f32,

    #[serde(default = "default_enemy_speed")]
    pub enemy_speed: f32,

    /// Enemies farther than this from the agent stand still.
    #[serde(default = "default_enemy_sight")]
    pub enemy_sight: f32,

    #[serde(default = "default_bite_range")]
    pub bite_range: f32,

    #[serde(default = "default_bite_damage")]
    pub bite_damage: f32,

    /// Seconds between two bites of the same enemy.
    #[serde(default = "default_bite_cooldown")]
    pub bite_cooldown: f32,
}

fn default_seed() -> u64 {
    69420
}
fn default_world_size() -> f32 {
    200.0
}
fn default_item_count() -> usize {
    24
}
fn default_enemy_count() -> usize {
    4
}
fn default_house_count() -> usize {
    4
}
fn default_house_size() -> f32 {
    12.0
}
fn default_inventory_capacity() -> usize {
    5
}
fn default_fov_range() -> f32 {
    20.0
}
fn default_fov_angle() -> f32 {
    core::f32::consts::FRAC_PI_2
}
fn default_max_linear_speed() -> f32 {
    5.0
}
fn default_max_angular_speed() -> f32 {
    core::f32::consts::PI
}
fn default_run_multiplier() -> f32 {
    2.0
}
fn default_grab_range() -> f32 {
    3.0
}
fn default_stamina_rate() -> f32 {
    1.0
}
fn default_energy_drain() -> f32 {
    0.05
}
fn default_starvation_damage() -> f32 {
    0.1
}
fn default_enemy_speed() -> f32 {
    1.5
}
fn default_enemy_sight() -> f32 {
    25.0
}
fn default_bite_range() -> f32 {
    1.5
}
fn default_bite_damage() -> f32 {
    1.0
}
fn default_bite_cooldown() -> f32 {
    1.0
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            world_size: default_world_size(),
            item_count: default_item_count(),
            enemy_count: default_enemy_count(),
            house_count: default_house_count(),
            house_size: default_house_size(),
            inventory_capacity: default_inventory_capacity(),
            fov_range: default_fov_range(),
            fov_angle: default_fov_angle(),
            max_linear_speed: default_max_linear_speed(),
            max_angular_speed: default_max_angular_speed(),
            run_multiplier: default_run_multiplier(),
            grab_range: default_grab_range(),
            stamina_rate: default_stamina_rate(),
            energy_drain: default_energy_drain(),
            starvation_damage: default_starvation_damage(),
            enemy_speed: default_enemy_speed(),
            enemy_sight: default_enemy_sight(),
            bite_range: default_bite_range(),
            bite_damage: default_bite_damage(),
            bite_cooldown: default_bite_cooldown(),
        }
    }
}

impl SandboxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("world_size", self.world_size),
            ("house_size", self.house_size),
            ("fov_range", self.fov_range),
            ("fov_angle", self.fov_angle),
            ("max_linear_speed", self.max_linear_speed),
            ("max_angular_speed", self.max_angular_speed),
            ("run_multiplier", self.run_multiplier),
            ("grab_range", self.grab_range),
            ("enemy_sight", self.enemy_sight),
            ("bite_range", self.bite_range),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        Ok(())
    }
}

/// Counters of what happened in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SandboxStats {
    pub items_grabbed: u32,
    pub items_destroyed: u32,
    pub items_used: u32,
    pub shots_fired: u32,
    pub enemies_killed: u32,
    pub bites: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Item {
    info: ItemInfo,
    /// Ammo, energy or health depending on the kind.
    charge: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Enemy {
    info: EnemyInfo,
    bite_timer: f32,
}

#[derive(Debug, Clone)]
pub struct SandboxHost {
    config: SandboxConfig,
    world: WorldInfo,
    agent: AgentInfo,
    items: Vec<Item>,
    enemies: Vec<Enemy>,
    houses: Vec<HouseInfo>,
    inventory: Vec<Option<Item>>,
    /// Item picked up by `grab_item` and not yet stored.
    held: Option<Item>,
    bitten_timer: f32,
    next_hash: i32,
    elapsed: f32,
    stats: SandboxStats,
}

impl SandboxHost {
    /// World with nothing in it but the agent, standing at the center and facing +x.
    pub fn empty(config: SandboxConfig) -> Self {
        let world = WorldInfo::new(Vec2::ZERO, Vec2::new(config.world_size, config.world_size));
        let agent = AgentInfo {
            fov_angle: config.fov_angle,
            fov_range: config.fov_range,
            max_linear_speed: config.max_linear_speed,
            max_angular_speed: config.max_angular_speed,
            grab_range: config.grab_range,
            ..AgentInfo::default()
        };
        let inventory = vec![None; config.inventory_capacity];

        Self {
            config,
            world,
            agent,
            items: Vec::new(),
            enemies: Vec::new(),
            houses: Vec::new(),
            inventory,
            held: None,
            bitten_timer: 0.0,
            next_hash: 1,
            elapsed: 0.0,
            stats: SandboxStats::default(),
        }
    }

    /// World populated from `config.seed`.
    pub fn generate(config: SandboxConfig) -> Self {
        let mut host = Self::empty(config);
        let half = host.config.world_size * 0.5;
        let seed = host.config.seed;

        let mut rng = SplitMix64::for_stream(seed, ITEM_STREAM);
        for _ in 0..host.config.item_count {
            let kind = match rng.next_index(10) {
                0..=1 => ItemKind::Pistol,
                2 => ItemKind::Shotgun,
                3..=4 => ItemKind::Medkit,
                5..=7 => ItemKind::Food,
                _ => ItemKind::Garbage,
            };
            let charge = match kind {
                ItemKind::Pistol => 5 + rng.next_index(11) as u32,
                ItemKind::Shotgun => 3 + rng.next_index(6) as u32,
                ItemKind::Medkit | ItemKind::Food => 2 + rng.next_index(5) as u32,
                ItemKind::Garbage => 0,
            };
            let location = random_point(&mut rng, half * 0.95);
            host.spawn_item(kind, location, charge);
        }

        let mut rng = SplitMix64::for_stream(seed, HOUSE_STREAM);
        for _ in 0..host.config.house_count {
            let center = random_point(&mut rng, half * 0.9);
            let size = host.config.house_size;
            host.spawn_house(center, Vec2::new(size, size));
        }

        let mut rng = SplitMix64::for_stream(seed, ENEMY_STREAM);
        for _ in 0..host.config.enemy_count {
            let kind = match rng.next_index(3) {
                0 => EnemyKind::Normal,
                1 => EnemyKind::Runner,
                _ => EnemyKind::Heavy,
            };
            // Keep the spawn area around the agent clear.
            let clear = (half * 0.5).min(40.0);
            let agent = host.agent.position;
            let mut location = random_point(&mut rng, half * 0.95);
            for _ in 1..SPAWN_ATTEMPTS {
                if location.distance_squared(agent) > clear * clear {
                    break;
                }
                let candidate = random_point(&mut rng, half * 0.95);
                if candidate.distance_squared(agent) > location.distance_squared(agent) {
                    location = candidate;
                }
            }
            host.spawn_enemy(kind, location);
        }

        debug!(
            seed,
            items = host.items.len(),
            houses = host.houses.len(),
            enemies = host.enemies.len(),
            "sandbox world generated"
        );
        host
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn agent(&self) -> &AgentInfo {
        &self.agent
    }

    /// Direct access for scripted scenarios.
    pub fn agent_mut(&mut self) -> &mut AgentInfo {
        &mut self.agent
    }

    pub fn stats(&self) -> SandboxStats {
        self.stats
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_agent_dead(&self) -> bool {
        self.agent.health <= 0.0
    }

    pub fn items_on_ground(&self) -> usize {
        self.items.len()
    }

    pub fn enemies_alive(&self) -> usize {
        self.enemies.len()
    }

    pub fn spawn_item(&mut self, kind: ItemKind, location: Vec2, charge: u32) -> EntityInfo {
        let hash = self.take_hash();
        self.items.push(Item {
            info: ItemInfo {
                kind,
                location,
                hash,
            },
            charge,
        });
        EntityInfo {
            kind: EntityKind::Item,
            location,
            hash,
        }
    }

    pub fn spawn_enemy(&mut self, kind: EnemyKind, location: Vec2) -> EntityInfo {
        let hash = self.take_hash();
        let health = match kind {
            EnemyKind::Normal => 2.0,
            EnemyKind::Runner => 1.0,
            EnemyKind::Heavy => 4.0,
        };
        self.enemies.push(Enemy {
            info: EnemyInfo {
                kind,
                location,
                linear_velocity: Vec2::ZERO,
                hash,
                size: 1.0,
                health,
            },
            bite_timer: 0.0,
        });
        EntityInfo {
            kind: EntityKind::Enemy,
            location,
            hash,
        }
    }

    pub fn spawn_house(&mut self, center: Vec2, size: Vec2) {
        self.houses.push(HouseInfo { center, size });
    }

    /// Put an item straight into an inventory slot, bypassing grab range.
    pub fn give_item(&mut self, slot: usize, kind: ItemKind, charge: u32) -> Result<(), HostError> {
        let capacity = self.inventory.len();
        let hash = self.take_hash();
        let entry = self
            .inventory
            .get_mut(slot)
            .ok_or(HostError::SlotOutOfRange { slot, capacity })?;
        if entry.is_some() {
            return Err(HostError::SlotOccupied(slot));
        }
        *entry = Some(Item {
            info: ItemInfo {
                kind,
                location: Vec2::ZERO,
                hash,
            },
            charge,
        });
        Ok(())
    }

    /// Advance the world by `dt` seconds with the agent following `output`.
    pub fn apply(&mut self, output: &SteeringOutput, dt: f32) {
        self.elapsed += dt;
        if output.is_valid {
            self.move_agent(output, dt);
        } else {
            self.agent.linear_velocity = Vec2::ZERO;
            self.agent.angular_velocity = 0.0;
        }
        self.drain_vitals(dt);
        self.move_enemies(dt);
    }

    fn move_agent(&mut self, output: &SteeringOutput, dt: f32) {
        let mut velocity = output.linear_velocity;
        let speed = velocity.length();
        let max_speed = self.agent.max_linear_speed;
        if speed > max_speed {
            velocity = velocity * (max_speed / speed);
        }

        let moving = velocity.length_squared() > 0.0;
        if output.run_mode && moving && self.agent.stamina > 0.0 {
            velocity = velocity * self.config.run_multiplier;
            self.agent.stamina = (self.agent.stamina - self.config.stamina_rate * dt).max(0.0);
        } else {
            self.agent.stamina = (self.agent.stamina + self.config.stamina_rate * dt).min(10.0);
        }

        self.agent.position = (self.agent.position + velocity * dt)
            .clamp(self.world.bottom_left(), self.world.top_right());
        self.agent.linear_velocity = velocity;

        let max_turn = self.agent.max_angular_speed;
        if output.auto_orient {
            if moving {
                self.agent.orientation = velocity.y.atan2(velocity.x);
            }
            self.agent.angular_velocity = 0.0;
        } else {
            let angular = output.angular_velocity.clamp(-max_turn, max_turn);
            self.agent.orientation = wrap_angle(self.agent.orientation + angular * dt);
            self.agent.angular_velocity = angular;
        }
    }

    fn drain_vitals(&mut self, dt: f32) {
        self.agent.energy = (self.agent.energy - self.config.energy_drain * dt).max(0.0);
        if self.agent.energy <= 0.0 {
            self.agent.health -= self.config.starvation_damage * dt;
        }

        self.bitten_timer = (self.bitten_timer - dt).max(0.0);
        self.agent.was_bitten = self.bitten_timer > 0.0;
    }

    fn move_enemies(&mut self, dt: f32) {
        let target = self.agent.position;
        let sight_sq = self.config.enemy_sight * self.config.enemy_sight;
        let bite_sq = self.config.bite_range * self.config.bite_range;

        for enemy in &mut self.enemies {
            enemy.bite_timer = (enemy.bite_timer - dt).max(0.0);

            let to_agent = target - enemy.info.location;
            let distance_sq = to_agent.length_squared();
            if distance_sq > sight_sq {
                enemy.info.linear_velocity = Vec2::ZERO;
                continue;
            }

            if distance_sq > bite_sq {
                let velocity = to_agent.normalize_or_zero() * self.config.enemy_speed;
                enemy.info.linear_velocity = velocity;
                enemy.info.location += velocity * dt;
                continue;
            }

            enemy.info.linear_velocity = Vec2::ZERO;
            if enemy.bite_timer <= 0.0 {
                enemy.bite_timer = self.config.bite_cooldown;
                self.agent.health -= self.config.bite_damage;
                self.bitten_timer = 1.0;
                self.agent.was_bitten = true;
                self.stats.bites += 1;
                debug!(enemy = enemy.info.hash, health = self.agent.health, "agent bitten");
            }
        }
    }

    fn take_hash(&mut self) -> i32 {
        let hash = self.next_hash;
        self.next_hash += 1;
        hash
    }

    fn in_fov(&self, point: Vec2) -> bool {
        let offset = point - self.agent.position;
        if offset.length_squared() > self.agent.fov_range * self.agent.fov_range {
            return false;
        }
        let facing = orientation_to_vector(self.agent.orientation);
        angle_between(facing, offset).abs() <= self.agent.fov_angle * 0.5
    }

    fn visible_entities(&self) -> impl Iterator<Item = EntityInfo> + '_ {
        let items = self.items.iter().map(|item| EntityInfo {
            kind: EntityKind::Item,
            location: item.info.location,
            hash: item.info.hash,
        });
        let enemies = self.enemies.iter().map(|enemy| EntityInfo {
            kind: EntityKind::Enemy,
            location: enemy.info.location,
            hash: enemy.info.hash,
        });
        items
            .chain(enemies)
            .filter(move |entity| self.in_fov(entity.location))
    }

    fn find_item(&self, hash: i32) -> Option<&Item> {
        self.items
            .iter()
            .chain(self.inventory.iter().flatten())
            .chain(self.held.iter())
            .find(|item| item.info.hash == hash)
    }

    fn ground_item_in_reach(&self, entity: &EntityInfo) -> Result<usize, HostError> {
        let index = self
            .items
            .iter()
            .position(|item| item.info.hash == entity.hash)
            .ok_or(HostError::UnknownEntity(entity.hash))?;
        let reach = self.agent.grab_range;
        if self.items[index].info.location.distance_squared(self.agent.position) > reach * reach {
            return Err(HostError::OutOfRange(entity.hash));
        }
        Ok(index)
    }

    fn fire(&mut self, kind: ItemKind) {
        self.stats.shots_fired += 1;
        let damage = if kind == ItemKind::Shotgun { 2.0 } else { 1.0 };
        let facing = orientation_to_vector(self.agent.orientation);
        let position = self.agent.position;
        let range_sq = self.agent.fov_range * self.agent.fov_range;

        let target = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| {
                let offset = enemy.info.location - position;
                offset.length_squared() <= range_sq
                    && angle_between(facing, offset).abs() <= SHOT_CONE
            })
            .min_by(|(_, a), (_, b)| {
                a.info
                    .location
                    .distance_squared(position)
                    .total_cmp(&b.info.location.distance_squared(position))
            })
            .map(|(index, _)| index);

        let Some(index) = target else {
            debug!(?kind, "shot missed");
            return;
        };
        self.enemies[index].info.health -= damage;
        if self.enemies[index].info.health <= 0.0 {
            let enemy = self.enemies.remove(index);
            self.stats.enemies_killed += 1;
            debug!(enemy = enemy.info.hash, "enemy killed");
        }
    }
}

impl HostView for SandboxHost {
    fn agent_info(&self) -> AgentInfo {
        self.agent
    }

    fn world_info(&self) -> WorldInfo {
        self.world
    }

    fn fov_entity(&self, index: usize) -> Option<EntityInfo> {
        self.visible_entities().nth(index)
    }

    fn fov_house(&self, index: usize) -> Option<HouseInfo> {
        self.houses
            .iter()
            .filter(|house| self.in_fov(house.center))
            .nth(index)
            .copied()
    }

    fn item_info(&self, entity: &EntityInfo) -> Option<ItemInfo> {
        self.items
            .iter()
            .find(|item| item.info.hash == entity.hash)
            .map(|item| item.info)
    }

    fn enemy_info(&self, entity: &EntityInfo) -> Option<EnemyInfo> {
        self.enemies
            .iter()
            .find(|enemy| enemy.info.hash == entity.hash)
            .map(|enemy| enemy.info)
    }

    fn inventory_item(&self, slot: usize) -> Option<ItemInfo> {
        self.inventory.get(slot)?.map(|item| item.info)
    }

    fn inventory_capacity(&self) -> usize {
        self.inventory.len()
    }

    fn weapon_ammo(&self, item: &ItemInfo) -> Option<u32> {
        let item = self.find_item(item.hash)?;
        item.info.kind.is_weapon().then_some(item.charge)
    }

    fn food_energy(&self, item: &ItemInfo) -> Option<u32> {
        let item = self.find_item(item.hash)?;
        (item.info.kind == ItemKind::Food).then_some(item.charge)
    }

    fn medkit_health(&self, item: &ItemInfo) -> Option<u32> {
        let item = self.find_item(item.hash)?;
        (item.info.kind == ItemKind::Medkit).then_some(item.charge)
    }

    fn nav_closest_path_point(&self, target: Vec2) -> Vec2 {
        target.clamp(self.world.bottom_left(), self.world.top_right())
    }
}

impl HostMut for SandboxHost {
    fn grab_item(&mut self, entity: &EntityInfo) -> Result<ItemInfo, HostError> {
        let index = self.ground_item_in_reach(entity)?;
        let item = self.items.remove(index);
        self.held = Some(item);
        self.stats.items_grabbed += 1;
        Ok(item.info)
    }

    fn destroy_item(&mut self, entity: &EntityInfo) -> Result<(), HostError> {
        let index = self.ground_item_in_reach(entity)?;
        self.items.remove(index);
        self.stats.items_destroyed += 1;
        Ok(())
    }

    fn inventory_add(&mut self, slot: usize, item: &ItemInfo) -> Result<(), HostError> {
        let capacity = self.inventory.len();
        match self.inventory.get(slot) {
            None => return Err(HostError::SlotOutOfRange { slot, capacity }),
            Some(Some(_)) => return Err(HostError::SlotOccupied(slot)),
            Some(None) => {}
        }
        if self
            .inventory
            .iter()
            .flatten()
            .any(|stored| stored.info.hash == item.hash)
        {
            return Err(HostError::AlreadyStored(item.hash));
        }

        let held = self
            .held
            .take_if(|held| held.info.hash == item.hash)
            .ok_or(HostError::UnknownEntity(item.hash))?;
        self.inventory[slot] = Some(held);
        Ok(())
    }

    fn inventory_use(&mut self, slot: usize) -> Result<(), HostError> {
        let capacity = self.inventory.len();
        let item = self
            .inventory
            .get_mut(slot)
            .ok_or(HostError::SlotOutOfRange { slot, capacity })?
            .as_mut()
            .ok_or(HostError::SlotEmpty(slot))?;

        let kind = item.info.kind;
        if kind == ItemKind::Garbage || item.charge == 0 {
            return Err(HostError::NotUsable(slot));
        }

        match kind {
            ItemKind::Pistol | ItemKind::Shotgun => {
                item.charge -= 1;
                self.fire(kind);
            }
            ItemKind::Food => {
                self.agent.energy = (self.agent.energy + item.charge as f32).min(10.0);
                item.charge = 0;
            }
            ItemKind::Medkit => {
                self.agent.health = (self.agent.health + item.charge as f32).min(10.0);
                item.charge = 0;
            }
            ItemKind::Garbage => {}
        }
        self.stats.items_used += 1;
        Ok(())
    }

    fn inventory_remove(&mut self, slot: usize) -> Result<(), HostError> {
        let capacity = self.inventory.len();
        self.inventory
            .get_mut(slot)
            .ok_or(HostError::SlotOutOfRange { slot, capacity })?
            .take()
            .map(|_| ())
            .ok_or(HostError::SlotEmpty(slot))
    }
}

fn random_point(rng: &mut SplitMix64, half_extent: f32) -> Vec2 {
    Vec2::new(
        rng.next_f32_range(-half_extent, half_extent),
        rng.next_f32_range(-half_extent, half_extent),
    )
}

fn wrap_angle(angle: f32) -> f32 {
    use core::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}
