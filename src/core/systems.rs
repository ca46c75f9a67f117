//! Core domain: camera setup and level flow transitions.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::LevelEnded;
use crate::core::state::LevelState;

/// World units are meters; this many pixels per meter on screen.
const PIXELS_PER_METER: f32 = 32.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 4.0, 0.0),
    ));
}

/// Move to the completed state once the level-end broadcast goes out
pub(crate) fn handle_level_ended(
    mut events: MessageReader<LevelEnded>,
    mut level_state: ResMut<NextState<LevelState>>,
) {
    if events.read().count() > 0 {
        info!("Level complete! Press R to restart.");
        level_state.set(LevelState::Complete);
    }
}
