//! Movement domain: the platformer character controller.
//!
//! Each frame, in order: sample input, probe and react to ground contact,
//! then walk, jump and dash update the body's velocity.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;


pub use bootstrap::PLAYER_SPAWN;
pub use components::*;
pub use events::ControllerCommand;
pub use resources::{ControllerTuning, MovementInput};

use bevy::prelude::*;

use crate::content::load_controller_config;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_controller_commands, apply_dash, apply_jump, apply_walk, detect_ground, probe_ground,
    read_input, sample_input,
};

/// Ordering handle for the controller's per-frame update.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<ControllerCommand>()
            .add_systems(Startup, spawn_player.after(load_controller_config))
            .add_systems(
                Update,
                (
                    read_input,
                    apply_controller_commands,
                    sample_input,
                    probe_ground,
                    detect_ground,
                    apply_walk,
                    apply_jump,
                    apply_dash,
                )
                    .chain()
                    .in_set(MovementSet),
            );
    }
}
