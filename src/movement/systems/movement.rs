//! Movement domain: walk, jump and dash velocity updates.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{AnimatorParam, AnimatorParams};
use crate::audio::{PlaySound, SoundCue};
use crate::movement::{
    ControllerDisabled, ControllerTuning, InputSample, MovementInput, MovementState, Player,
};

/// Move `current` toward `target` by at most `max_delta`.
pub(crate) fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Vector form of [`move_towards`]: the step is capped in length, not per axis.
pub(crate) fn move_towards_vec2(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + offset / distance * max_delta
    }
}

pub(crate) fn apply_walk(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    mut query: Query<
        (
            &MovementState,
            &mut InputSample,
            &mut LinearVelocity,
            &mut AnimatorParams,
        ),
        (With<Player>, Without<ControllerDisabled>),
    >,
) {
    let dt = time.delta_secs();

    for (state, mut sample, mut velocity, mut params) in &mut query {
        walk(
            state,
            &mut sample,
            &input,
            &tuning,
            &mut velocity.0,
            &mut params,
            dt,
        );
    }
}

pub(crate) fn walk(
    state: &MovementState,
    sample: &mut InputSample,
    input: &MovementInput,
    tuning: &ControllerTuning,
    velocity: &mut Vec2,
    params: &mut AnimatorParams,
    dt: f32,
) {
    // Dash owns the velocity
    if state.is_dashing {
        return;
    }

    let step = tuning.acceleration * dt;
    if input.left_held {
        if velocity.x > 0.0 {
            sample.axis.x = 0.0;
        }
        sample.axis.x = move_towards(sample.axis.x, -1.0, step);
    } else if input.right_held {
        if velocity.x < 0.0 {
            sample.axis.x = 0.0;
        }
        sample.axis.x = move_towards(sample.axis.x, 1.0, step);
    } else {
        sample.axis.x = move_towards(sample.axis.x, 0.0, step * 2.0);
    }

    let desired = Vec2::new(sample.axis.x * tuning.move_speed, velocity.y);
    *velocity = move_towards_vec2(*velocity, desired, state.move_lerp_speed * dt);

    params.set_bool(AnimatorParam::Walking, sample.raw.x != 0 && state.is_grounded);
}

pub(crate) fn apply_jump(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    gravity: Res<Gravity>,
    mut sounds: MessageWriter<PlaySound>,
    mut query: Query<
        (
            Entity,
            &mut MovementState,
            &mut LinearVelocity,
            &mut AnimatorParams,
        ),
        (With<Player>, Without<ControllerDisabled>),
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut state, mut velocity, mut params) in &mut query {
        let jumped = jump(
            &mut state,
            &input,
            &tuning,
            gravity.0.y,
            &mut velocity.0,
            &mut params,
            dt,
        );

        if jumped {
            sounds.write(PlaySound {
                emitter: entity,
                cue: SoundCue::Jump,
            });
            debug!("Jump: velocity={:?}", velocity.0);
        }
    }
}

/// Returns true when a jump was performed this frame.
pub(crate) fn jump(
    state: &mut MovementState,
    input: &MovementInput,
    tuning: &ControllerTuning,
    gravity_y: f32,
    velocity: &mut Vec2,
    params: &mut AnimatorParams,
    dt: f32,
) -> bool {
    if state.is_dashing {
        return false;
    }

    let mut jumped = false;
    if input.jump_just_pressed && !state.has_jumped {
        *velocity = Vec2::new(velocity.x, tuning.jump_force);
        state.has_jumped = true;
        params.set_bool(AnimatorParam::Jumping, true);
        jumped = true;
    }

    // Falling fast, or still rising after the button was let go
    if velocity.y < tuning.jump_velocity_falloff || (velocity.y > 0.0 && !input.jump_held) {
        velocity.y += tuning.fall_multiplier * gravity_y * dt;
    }

    jumped
}

pub(crate) fn apply_dash(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    mut sounds: MessageWriter<PlaySound>,
    mut query: Query<
        (
            Entity,
            &mut MovementState,
            &InputSample,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        (With<Player>, Without<ControllerDisabled>),
    >,
) {
    let now = time.elapsed_secs();

    for (entity, mut state, sample, mut velocity, mut gravity_scale) in &mut query {
        let step = dash(
            &mut state,
            sample,
            &input,
            &tuning,
            now,
            &mut velocity.0,
            &mut gravity_scale.0,
        );

        if step.started {
            sounds.write(PlaySound {
                emitter: entity,
                cue: SoundCue::Dash,
            });
            debug!("Dash started: direction={:?}", state.dash_direction);
        }
        if step.ended {
            debug!(
                "Dash ended: velocity={:?}, has_dashed={}",
                velocity.0, state.has_dashed
            );
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DashStep {
    pub started: bool,
    pub ended: bool,
}

pub(crate) fn dash(
    state: &mut MovementState,
    sample: &InputSample,
    input: &MovementInput,
    tuning: &ControllerTuning,
    now: f32,
    velocity: &mut Vec2,
    gravity_scale: &mut f32,
) -> DashStep {
    let mut step = DashStep::default();

    if input.dash_just_pressed && !state.has_dashed {
        let direction = sample.raw.as_vec2().normalize_or_zero();
        state.dash_direction = if direction == Vec2::ZERO {
            state.facing.unit()
        } else {
            direction
        };
        state.is_dashing = true;
        state.has_dashed = true;
        state.dash_started_at = now;
        *gravity_scale = 0.0;
        step.started = true;
    }

    if state.is_dashing {
        *velocity = state.dash_direction * tuning.dash_speed;

        if now >= state.dash_started_at + tuning.dash_duration {
            state.is_dashing = false;
            velocity.y = velocity.y.min(tuning.dash_exit_max_vertical_speed);
            *gravity_scale = 1.0;

            if state.is_grounded {
                state.has_dashed = false;
            }
            step.ended = true;
        }
    }

    step
}
