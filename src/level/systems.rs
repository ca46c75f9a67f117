//! Level domain: platform motion, rider carry, goal and restart.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{LevelEnded, LevelState};
use crate::level::{Goal, MovingPlatform};
use crate::movement::{
    ControllerCommand, ControllerTuning, InputSample, MovementState, PLAYER_SPAWN, Player,
    RidingPlatform,
};

pub(crate) fn move_platforms(
    mut query: Query<(&mut MovingPlatform, &Transform, &mut LinearVelocity), Without<Player>>,
) {
    for (mut platform, transform, mut velocity) in &mut query {
        velocity.x = platform.patrol_velocity(transform.translation.x);
    }
}

/// Riders follow the surface they stand on.
pub(crate) fn carry_riders(
    time: Res<Time>,
    surfaces: Query<&LinearVelocity, Without<Player>>,
    mut riders: Query<(&RidingPlatform, &mut Transform), With<Player>>,
) {
    let dt = time.delta_secs();

    for (riding, mut transform) in &mut riders {
        let Ok(surface_velocity) = surfaces.get(riding.0) else {
            continue;
        };
        if surface_velocity.0 != Vec2::ZERO {
            transform.translation += (surface_velocity.0 * dt).extend(0.0);
        }
    }
}

/// Broadcast level end the first time the player touches a goal.
pub(crate) fn detect_goal_reached(
    mut collision_events: MessageReader<CollisionStart>,
    goals: Query<(), With<Goal>>,
    players: Query<(), With<Player>>,
    mut level_end: MessageWriter<LevelEnded>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (goal, player) in pairs {
            if goals.contains(goal) && players.contains(player) {
                info!("Player reached the goal");
                level_end.write(LevelEnded);
                return;
            }
        }
    }
}

pub(crate) fn restart_level(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<ControllerTuning>,
    mut level_state: ResMut<NextState<LevelState>>,
    mut controller_commands: MessageWriter<ControllerCommand>,
    mut players: Query<
        (
            Entity,
            &mut Transform,
            &mut MovementState,
            &mut InputSample,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (entity, mut transform, mut state, mut sample, mut velocity, mut gravity_scale) in
        &mut players
    {
        transform.translation = PLAYER_SPAWN;
        *state = MovementState::new(tuning.move_lerp_speed);
        *sample = InputSample::default();
        velocity.0 = Vec2::ZERO;
        gravity_scale.0 = 1.0;
        commands.entity(entity).remove::<RidingPlatform>();
        controller_commands.write(ControllerCommand::Enable(entity));
    }

    info!("Restarting level");
    level_state.set(LevelState::Playing);
}
