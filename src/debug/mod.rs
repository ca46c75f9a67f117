//! Debug overlay for tuning the controller (dev-tools builds only).
//!
//! Features:
//! - Ground probe gizmo, green while grounded
//! - Dash direction gizmo while dashing
//! - F1 toggles the overlay

use bevy::prelude::*;

use crate::movement::{ControllerTuning, MovementState, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    pub show_gizmos: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_gizmos: true }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_gizmos)
            .add_systems(
                Update,
                draw_controller_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
            );
    }
}

/// Toggle the overlay with F1
fn toggle_debug_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("Debug gizmos: {}", debug_state.show_gizmos);
    }
}

fn draw_controller_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<ControllerTuning>,
    query: Query<(&Transform, &MovementState), With<Player>>,
) {
    for (transform, state) in &query {
        let origin = transform.translation.truncate();
        let probe = origin + Vec2::new(0.0, tuning.ground_offset);
        let color = if state.is_grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        gizmos.circle_2d(probe, tuning.ground_radius, color);

        if state.is_dashing {
            gizmos.arrow_2d(
                origin,
                origin + state.dash_direction * 2.0,
                Color::srgb(0.3, 0.6, 1.0),
            );
        }
    }
}
