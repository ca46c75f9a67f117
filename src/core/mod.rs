//! Core domain: camera, level flow state and shared events.

mod events;
mod state;
mod systems;

pub use events::LevelEnded;
pub use state::LevelState;

use bevy::prelude::*;

use crate::core::systems::{handle_level_ended, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<LevelState>()
            .add_message::<LevelEnded>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, handle_level_ended);
    }
}
