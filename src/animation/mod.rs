//! Animation domain: named animator parameters written by gameplay and the
//! animation state resolved from them.
//!
//! Clip playback is left to whatever reads `AnimationStateChanged`; this
//! module only owns the parameters and the state machine over them.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;


/// Boolean parameters exposed to the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatorParam {
    Grounded,
    Jumping,
    Walking,
}

impl AnimatorParam {
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct AnimatorParams {
    values: [bool; 3],
}

impl AnimatorParams {
    pub fn set_bool(&mut self, param: AnimatorParam, value: bool) {
        self.values[param.index()] = value;
    }

    pub fn get_bool(&self, param: AnimatorParam) -> bool {
        self.values[param.index()]
    }
}

/// Animation states for the controlled character.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
}

impl AnimationState {
    /// Resolve the state the animator graph would settle in for the given
    /// parameters.
    pub fn resolve(params: &AnimatorParams) -> Self {
        if params.get_bool(AnimatorParam::Jumping) {
            AnimationState::Jump
        } else if !params.get_bool(AnimatorParam::Grounded) {
            AnimationState::Fall
        } else if params.get_bool(AnimatorParam::Walking) {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }
}

/// Written when an entity's resolved animation state actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
            PostUpdate,
            (animation_state_machine, log_animation_changes).chain(),
        );
    }
}

/// Moves each animated entity to the state its parameters resolve to.
pub fn animation_state_machine(
    mut query: Query<(Entity, &AnimatorParams, &mut AnimationState), Changed<AnimatorParams>>,
    mut changes: MessageWriter<AnimationStateChanged>,
) {
    for (entity, params, mut state) in &mut query {
        let next = AnimationState::resolve(params);
        if *state == next {
            continue;
        }

        changes.write(AnimationStateChanged {
            entity,
            from: *state,
            to: next,
        });
        *state = next;
    }
}

fn log_animation_changes(mut changes: MessageReader<AnimationStateChanged>) {
    for change in changes.read() {
        debug!(
            "Animation {:?} -> {:?} for {:?}",
            change.from, change.to, change.entity
        );
    }
}
