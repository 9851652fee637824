use survivor_core::{AgentInfo, Vec2};
use survivor_steering::SteeringMode;
use tracing::{debug, trace};

/// Coarse activity of the agent.
///
/// Transitions are made by individual tree nodes, so which state wins in a frame depends on the
/// tree's priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    #[default]
    Free,
    LookingForItem,
    GoingToHouse,
    Combat,
}

/// Host snapshot plus the steering intent the decision tree builds up across ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRecord {
    pub info: AgentInfo,
    pub state: AgentState,
    pub steering_mode: SteeringMode,
    pub target: Option<Vec2>,
    pub run_mode: bool,
    /// Set by the face steering of the previous frame.
    pub done_facing: bool,
}

impl AgentRecord {
    pub fn new(info: AgentInfo) -> Self {
        Self {
            info,
            state: AgentState::Free,
            steering_mode: SteeringMode::Seek,
            target: None,
            run_mode: false,
            done_facing: false,
        }
    }

    pub fn set_state(&mut self, state: AgentState) {
        if self.state != state {
            debug!(from = ?self.state, to = ?state, "agent state changed");
            self.state = state;
        }
    }

    pub fn seek_to(&mut self, target: Vec2) {
        self.target = Some(target);
        self.set_mode(SteeringMode::Seek);
    }

    pub fn face_toward(&mut self, target: Vec2) {
        self.target = Some(target);
        self.set_mode(SteeringMode::Face);
    }

    fn set_mode(&mut self, mode: SteeringMode) {
        if self.steering_mode != mode {
            trace!(from = ?self.steering_mode, to = ?mode, "steering mode changed");
            self.steering_mode = mode;
        }
    }
}
