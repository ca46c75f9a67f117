//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::systems::movement::move_towards;
use crate::movement::{
    ControllerDisabled, ControllerTuning, Facing, InputSample, MovementInput, MovementState,
    Player,
};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    let down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    let up = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);

    input.raw = IVec2::new(right as i32 - left as i32, up as i32 - down as i32);
    input.left_held = left;
    input.right_held = right;
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyZ);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyZ);
    input.dash_just_pressed = keyboard.just_pressed(KeyCode::KeyX);
}

pub(crate) fn sample_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    mut query: Query<
        (&mut InputSample, &mut MovementState, &mut Sprite),
        (With<Player>, Without<ControllerDisabled>),
    >,
) {
    let dt = time.delta_secs();

    for (mut sample, mut state, mut sprite) in &mut query {
        refresh_sample(&mut sample, &mut state, &input, tuning.acceleration, dt);

        let flip = state.is_facing_left();
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

/// Copy this frame's raw axes into the sample and update facing.
/// Facing only changes on a definite horizontal direction.
pub(crate) fn refresh_sample(
    sample: &mut InputSample,
    state: &mut MovementState,
    input: &MovementInput,
    acceleration: f32,
    dt: f32,
) {
    sample.raw = input.raw;
    sample.axis.y = move_towards(sample.axis.y, input.raw.y as f32, acceleration * dt);

    state.facing = match input.raw.x {
        -1 => Facing::Left,
        1 => Facing::Right,
        _ => state.facing,
    };
}
