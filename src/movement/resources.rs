//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerTuning {
    /// Vertical offset of the ground probe from the body origin
    pub ground_offset: f32,
    pub ground_radius: f32,
    pub ground_layers: Vec<GameLayer>,
    pub move_speed: f32,
    /// Rate (per second) the smoothed axis approaches full input
    pub acceleration: f32,
    /// Base max velocity change per second, restored on landing
    pub move_lerp_speed: f32,
    pub jump_force: f32,
    pub fall_multiplier: f32,
    /// Below this vertical speed extra fall gravity kicks in
    pub jump_velocity_falloff: f32,
    pub dash_speed: f32,
    /// Seconds
    pub dash_duration: f32,
    /// Upward speed cap applied when a dash ends
    pub dash_exit_max_vertical_speed: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            ground_offset: -1.0,
            ground_radius: 0.2,
            ground_layers: vec![GameLayer::Ground],
            move_speed: 8.0,
            acceleration: 2.0,
            move_lerp_speed: 100.0,
            jump_force: 15.0,
            fall_multiplier: 7.0,
            jump_velocity_falloff: 8.0,
            dash_speed: 20.0,
            dash_duration: 1.0,
            dash_exit_max_vertical_speed: 2.0,
        }
    }
}

impl ControllerTuning {
    /// Collapse the configured ground layers into a single query mask.
    pub fn ground_mask(&self) -> LayerMask {
        LayerMask(
            self.ground_layers
                .iter()
                .fold(0, |bits, layer| bits | layer.to_bits()),
        )
    }
}

/// Device state for the current frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub raw: IVec2,
    pub left_held: bool,
    pub right_held: bool,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}
