//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{AnimatorParam, AnimatorParams};
use crate::audio::{PlaySound, SoundCue};
use crate::movement::{
    ControllerDisabled, ControllerTuning, GroundContact, MovementState, Player, RidingPlatform,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
}

/// Overlap the ground circle under each controller and record what it hit.
pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    tuning: Res<ControllerTuning>,
    mut query: Query<
        (Entity, &Transform, &mut GroundContact),
        (With<Player>, Without<ControllerDisabled>),
    >,
) {
    let probe = Collider::circle(tuning.ground_radius);
    let mask = tuning.ground_mask();

    for (entity, transform, mut contact) in &mut query {
        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([entity]);
        let origin = transform.translation.truncate() + Vec2::new(0.0, tuning.ground_offset);

        let surface = spatial_query
            .shape_intersections(&probe, origin, 0.0, &filter)
            .first()
            .copied();

        if contact.0 != surface {
            contact.0 = surface;
        }
    }
}

/// React to ground contact changes: state resets, riding and the landing cue.
pub(crate) fn detect_ground(
    mut commands: Commands,
    tuning: Res<ControllerTuning>,
    mut sounds: MessageWriter<PlaySound>,
    mut query: Query<
        (
            Entity,
            &GroundContact,
            &mut MovementState,
            &mut AnimatorParams,
        ),
        (With<Player>, Without<ControllerDisabled>),
    >,
) {
    for (entity, contact, mut state, mut params) in &mut query {
        match apply_grounding(&mut state, contact.0.is_some(), &tuning, &mut params) {
            Some(GroundTransition::Landed) => {
                if let Some(surface) = contact.0 {
                    commands.entity(entity).insert(RidingPlatform(surface));
                }
                sounds.write(PlaySound {
                    emitter: entity,
                    cue: SoundCue::Land,
                });
                debug!("Landed on {:?}", contact.0);
            }
            Some(GroundTransition::LeftGround) => {
                commands.entity(entity).remove::<RidingPlatform>();
                debug!(
                    "Left ground: has_jumped={}, has_dashed={}",
                    state.has_jumped, state.has_dashed
                );
            }
            None => {}
        }
    }
}

/// Edge-triggered grounded update. Returns the transition taken, if any.
///
/// Landing normally clears both `has_jumped` and `has_dashed`. That rule
/// conflicts with `is_dashing` implying `has_dashed` (and with a second dash
/// press being ignored mid-dash) when the landing happens during a dash. In
/// that case `has_dashed` stays set, and the dash ending on the ground clears
/// it.
pub(crate) fn apply_grounding(
    state: &mut MovementState,
    grounded: bool,
    tuning: &ControllerTuning,
    params: &mut AnimatorParams,
) -> Option<GroundTransition> {
    if grounded == state.is_grounded {
        return None;
    }

    state.is_grounded = grounded;

    if grounded {
        if !state.is_dashing {
            state.has_dashed = false;
        }
        state.has_jumped = false;
        state.move_lerp_speed = tuning.move_lerp_speed;
        params.set_bool(AnimatorParam::Grounded, true);
        params.set_bool(AnimatorParam::Jumping, false);
        Some(GroundTransition::Landed)
    } else {
        params.set_bool(AnimatorParam::Grounded, false);
        Some(GroundTransition::LeftGround)
    }
}
