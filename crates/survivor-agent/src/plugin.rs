use survivor_bt::{BtPolicy, BtStatus};
use survivor_core::{Color, DebugDraw, HostMut};
use survivor_nav::SpatialMemory;
use survivor_steering::{face, seek, SteeringMode, SteeringOutput};
use tracing::{info, trace_span};

use crate::config::PluginConfig;
use crate::context::{keys, DecisionContext, Limits};
use crate::error::PluginError;
use crate::inventory::Inventory;
use crate::state::{AgentRecord, AgentState};
use crate::tree::decision_tree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    pub bot_name: String,
}

/// Per-frame driver of the survivor agent against a host `H`.
pub struct Plugin<H: HostMut> {
    ctx: DecisionContext<H>,
    policy: BtPolicy<DecisionContext<H>>,
    info: PluginInfo,
}

impl<H: HostMut> Plugin<H> {
    pub fn new(host: H, config: &PluginConfig) -> Result<Self, PluginError> {
        config.validate()?;

        let capacity = host.inventory_capacity();
        if config.loadout.len() > capacity {
            return Err(PluginError::LoadoutTooLarge {
                loadout: config.loadout.len(),
                capacity,
            });
        }

        let memory = SpatialMemory::new(config.grid_cols, config.grid_rows, host.world_info())
            .with_radii(config.cell_visit_radius, config.house_entry_radius)
            .with_house_cooldown(config.house_cooldown);
        let inventory = Inventory::new(config.loadout.clone());
        let ctx = DecisionContext::new(host, memory, inventory, Limits::from_config(config));

        info!(
            bot = %config.bot_name,
            cols = config.grid_cols,
            rows = config.grid_rows,
            slots = config.loadout.len(),
            "plugin initialized"
        );

        Ok(Self {
            ctx,
            policy: BtPolicy::new(decision_tree()),
            info: PluginInfo {
                bot_name: config.bot_name.clone(),
            },
        })
    }

    pub fn info(&self) -> &PluginInfo {
        &self.info
    }

    pub fn host(&self) -> &H {
        &self.ctx.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.ctx.host
    }

    pub fn into_host(self) -> H {
        self.ctx.host
    }

    pub fn context(&self) -> &DecisionContext<H> {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut DecisionContext<H> {
        &mut self.ctx
    }

    pub fn agent(&self) -> &AgentRecord {
        &self.ctx.agent
    }

    pub fn memory(&self) -> &SpatialMemory {
        &self.ctx.memory
    }

    pub fn inventory(&self) -> &Inventory {
        &self.ctx.inventory
    }

    pub fn last_status(&self) -> Option<BtStatus> {
        self.policy.last_status()
    }

    /// Run one decision frame and return the steering command for the host.
    pub fn update_steering(&mut self, dt: f32) -> SteeringOutput {
        let ctx = &mut self.ctx;
        ctx.tick = ctx.tick.next(dt);
        let _span = trace_span!("update_steering", tick = ctx.tick.tick).entered();

        ctx.refresh_fov();
        ctx.refresh_agent();

        ctx.memory.update(dt, ctx.agent.info.position);
        ctx.inventory.update_items(&mut ctx.host);
        for house in &ctx.houses_in_fov {
            ctx.memory.add_house(house.center);
        }

        self.policy.tick(ctx);
        ctx.entities_in_fov.clear();
        ctx.houses_in_fov.clear();

        resolve_steering(ctx)
    }

    pub fn render(&self, draw: &mut dyn DebugDraw) {
        if let Some(item) = self.ctx.blackboard.get(keys::ITEM_UNDER_INSPECTION) {
            draw.draw_solid_circle(item.location, 7.0, Color::RED);
        }
        if let Some(target) = self.ctx.agent.target {
            draw.draw_solid_circle(target, 0.7, Color::RED);
        }
        if self.ctx.agent.state == AgentState::GoingToHouse {
            let approached = self
                .ctx
                .blackboard
                .get_copied(keys::CURRENT_HOUSE)
                .and_then(|cell| self.ctx.memory.house(cell));
            if let Some(house) = approached {
                let radius = self.ctx.memory.house_entry_radius();
                draw.draw_solid_circle(house.center, radius, Color::GREEN);
            }
        }
        self.ctx.memory.render(draw);
    }
}

fn resolve_steering<H: HostMut>(ctx: &mut DecisionContext<H>) -> SteeringOutput {
    let agent = &mut ctx.agent;
    let Some(target) = agent.target else {
        return SteeringOutput::invalid();
    };

    match agent.steering_mode {
        SteeringMode::Seek => {
            agent.done_facing = false;
            let target = ctx.host.nav_closest_path_point(target);
            seek(
                agent.info.position,
                target,
                agent.info.max_linear_speed,
                agent.run_mode,
            )
        }
        SteeringMode::Face => {
            let result = face(
                agent.info.position,
                agent.info.orientation,
                target,
                agent.info.max_angular_speed,
                ctx.limits.face_tolerance,
            );
            agent.done_facing = result.done_facing;
            result.output
        }
    }
}
