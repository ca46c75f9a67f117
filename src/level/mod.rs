//! Level domain: demo level with a moving platform and a goal that ends the
//! level.

mod components;
mod spawn;
mod systems;


pub use components::{Goal, MovingPlatform};

use bevy::prelude::*;

use crate::core::LevelState;
use crate::level::spawn::spawn_level;
use crate::level::systems::{carry_riders, detect_goal_reached, move_platforms, restart_level};
use crate::movement::MovementSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level)
            .add_systems(
                Update,
                (move_platforms, carry_riders).chain().before(MovementSet),
            )
            .add_systems(
                Update,
                detect_goal_reached
                    .before(MovementSet)
                    .run_if(in_state(LevelState::Playing)),
            )
            .add_systems(
                Update,
                restart_level
                    .before(MovementSet)
                    .run_if(in_state(LevelState::Complete)),
            );
    }
}
