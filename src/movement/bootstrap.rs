//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationState, AnimatorParams};
use crate::audio::AudioEmitter;
use crate::movement::{
    ControllerTuning, GameLayer, GroundContact, InputSample, LevelEndSubscriber, MovementState,
    Player,
};

const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);
pub const PLAYER_SPAWN: Vec3 = Vec3::new(-8.0, 2.0, 0.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<ControllerTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MovementState::new(tuning.move_lerp_speed),
                InputSample::default(),
                GroundContact::default(),
                LevelEndSubscriber,
            ),
            // Animation & Audio
            (
                AnimatorParams::default(),
                AnimationState::default(),
                AudioEmitter::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(PLAYER_SPAWN),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .id();

    info!(
        "Spawned player {:?}: move_speed={}, jump_force={}, dash_speed={}",
        player, tuning.move_speed, tuning.jump_force, tuning.dash_speed
    );
}
