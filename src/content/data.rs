//! Data definitions for the controller configuration file.
//!
//! These structs mirror assets/data/controller.ron and are used for
//! deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ControllerTuning;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub schema_version: u32,
    pub tuning: ControllerTuning,
    pub audio: AudioConfig,
}

/// Asset paths for the controller's sound cues.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioConfig {
    pub jump: String,
    pub land: String,
    pub dash: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            jump: "audio/jump.ogg".to_string(),
            land: "audio/land.ogg".to_string(),
            dash: "audio/dash.ogg".to_string(),
        }
    }
}
