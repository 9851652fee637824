//! Steering outputs handed back to the host once per tick.
//!
//! Only two behaviors are needed by the survivor agent: [`seek`] walks toward a point and
//! [`face`] turns in place until the agent looks at a point.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

use survivor_core::{angle_between, orientation_to_vector, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_FACE_TOLERANCE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SteeringMode {
    #[default]
    Seek,
    Face,
}

/// Velocity command for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SteeringOutput {
    pub linear_velocity: Vec2,
    pub angular_velocity: f32,
    /// Let the host rotate the agent toward its velocity.
    pub auto_orient: bool,
    pub run_mode: bool,
    /// `false` means "no usable output this tick".
    pub is_valid: bool,
}

impl SteeringOutput {
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            ..Self::default()
        }
    }
}

impl Default for SteeringOutput {
    fn default() -> Self {
        Self {
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            auto_orient: true,
            run_mode: false,
            is_valid: true,
        }
    }
}

/// Full speed toward `target`. A target on top of the agent yields zero velocity.
pub fn seek(position: Vec2, target: Vec2, max_linear_speed: f32, run_mode: bool) -> SteeringOutput {
    SteeringOutput {
        linear_velocity: (target - position).normalize_or_zero() * max_linear_speed,
        angular_velocity: 0.0,
        auto_orient: true,
        run_mode,
        is_valid: true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceResult {
    pub output: SteeringOutput,
    pub done_facing: bool,
}

/// Turn in place toward `target` at full angular speed, stopping once within `tolerance` radians.
pub fn face(
    position: Vec2,
    orientation: f32,
    target: Vec2,
    max_angular_speed: f32,
    tolerance: f32,
) -> FaceResult {
    let angle = angle_between(orientation_to_vector(orientation), target - position);
    let done_facing = angle.abs() < tolerance;

    let angular_velocity = if done_facing {
        0.0
    } else {
        max_angular_speed.copysign(angle)
    };

    FaceResult {
        output: SteeringOutput {
            linear_velocity: Vec2::ZERO,
            angular_velocity,
            auto_orient: false,
            run_mode: false,
            is_valid: true,
        },
        done_facing,
    }
}
