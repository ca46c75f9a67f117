//! Core domain: events for level flow.

use bevy::ecs::message::Message;

/// Broadcast when the player reaches the level goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelEnded;

impl Message for LevelEnded {}
