//! Level domain: demo level layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::{Goal, MovingPlatform};
use crate::movement::{GameLayer, Ground};

pub(crate) fn spawn_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let goal_color = Color::srgba(0.95, 0.85, 0.3, 0.6);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let mut spawn_surface = |size: Vec2, pos: Vec2, color: Color| {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    };

    // Floor, top surface at y = 0
    spawn_surface(Vec2::new(40.0, 1.0), Vec2::new(0.0, -0.5), ground_color);
    // Left step
    spawn_surface(Vec2::new(4.0, 0.5), Vec2::new(-3.0, 3.0), platform_color);
    // Goal ledge
    spawn_surface(Vec2::new(5.0, 0.5), Vec2::new(14.0, 6.0), platform_color);

    // Moving platform between the step and the goal ledge
    let moving_size = Vec2::new(3.0, 0.5);
    let moving_origin = Vec2::new(5.0, 4.5);
    commands.spawn((
        Ground,
        MovingPlatform::new(moving_origin, 3.0, 2.0),
        Sprite {
            color: platform_color,
            custom_size: Some(moving_size),
            ..default()
        },
        Transform::from_xyz(moving_origin.x, moving_origin.y, 0.0),
        RigidBody::Kinematic,
        LinearVelocity::default(),
        Collider::rectangle(moving_size.x, moving_size.y),
        ground_layers,
    ));

    // Goal zone
    let goal_size = Vec2::new(1.5, 2.5);
    commands.spawn((
        Goal,
        Sprite {
            color: goal_color,
            custom_size: Some(goal_size),
            ..default()
        },
        Transform::from_xyz(15.0, 7.5, 0.0),
        Collider::rectangle(goal_size.x, goal_size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    info!("Spawned demo level");
}
