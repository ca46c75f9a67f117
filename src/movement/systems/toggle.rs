//! Movement domain: enable/disable handling and the level-end subscription.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::LevelEnded;
use crate::movement::{ControllerCommand, ControllerDisabled, LevelEndSubscriber, Player};

pub(crate) fn apply_controller_commands(
    mut commands: Commands,
    mut level_end: MessageReader<LevelEnded>,
    mut requests: MessageReader<ControllerCommand>,
    subscribers: Query<Entity, With<LevelEndSubscriber>>,
    mut bodies: Query<&mut LinearVelocity, With<Player>>,
) {
    let mut toggles: Vec<ControllerCommand> = Vec::new();

    if level_end.read().count() > 0 {
        info!("Level ended; disabling {} controller(s)", subscribers.iter().count());
        toggles.extend(subscribers.iter().map(ControllerCommand::Disable));
    }
    toggles.extend(requests.read().copied());

    for toggle in toggles {
        match toggle {
            ControllerCommand::Disable(entity) => {
                let Ok(mut velocity) = bodies.get_mut(entity) else {
                    continue;
                };
                velocity.0 = Vec2::ZERO;
                commands.entity(entity).insert(ControllerDisabled);
                debug!("Controller {:?} disabled", entity);
            }
            ControllerCommand::Enable(entity) => {
                if bodies.contains(entity) {
                    commands.entity(entity).remove::<ControllerDisabled>();
                    debug!("Controller {:?} enabled", entity);
                }
            }
        }
    }
}
