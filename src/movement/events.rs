//! Movement domain: external requests to the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Toggle a controller on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCommand {
    Enable(Entity),
    Disable(Entity),
}

impl Message for ControllerCommand {}
