//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Sensors (goal zones) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-controller input sample. Raw values are refreshed every frame; the
/// smoothed horizontal axis is only advanced by walking.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct InputSample {
    /// Discretized axes, each component in {-1, 0, 1}
    pub raw: IVec2,
    /// Smoothed axes, each component in [-1, 1]
    pub axis: Vec2,
}

#[derive(Component, Debug, Clone)]
pub struct MovementState {
    pub is_grounded: bool,
    pub facing: Facing,
    pub has_jumped: bool,
    pub has_dashed: bool,
    pub is_dashing: bool,
    /// Unit vector locked in when the dash starts
    pub dash_direction: Vec2,
    /// Elapsed app time (seconds) at dash start
    pub dash_started_at: f32,
    /// Max velocity change per second
    pub move_lerp_speed: f32,
}

impl MovementState {
    pub fn new(move_lerp_speed: f32) -> Self {
        Self {
            is_grounded: false,
            facing: Facing::Right,
            has_jumped: false,
            has_dashed: false,
            is_dashing: false,
            dash_direction: Vec2::ZERO,
            dash_started_at: 0.0,
            move_lerp_speed,
        }
    }

    pub fn is_facing_left(&self) -> bool {
        self.facing == Facing::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Left => Vec2::NEG_X,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Result of this frame's ground probe: the first overlapping surface, if any.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundContact(pub Option<Entity>);

/// Surface the controller is currently standing on. Riders inherit the
/// surface's motion.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RidingPlatform(pub Entity);

/// Controller systems skip entities carrying this marker.
#[derive(Component, Debug, Default)]
pub struct ControllerDisabled;

/// Opts the controller into the level-end broadcast. Removing the component
/// (or despawning the entity) unsubscribes.
#[derive(Component, Debug, Default)]
pub struct LevelEndSubscriber;
