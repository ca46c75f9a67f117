//! Content domain: data-driven controller configuration loaded from RON.

mod data;
mod loader;


pub use data::{AudioConfig, ControllerConfig};
pub use loader::load_config_file;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::ControllerTuning;

pub const CONFIG_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .init_resource::<AudioConfig>()
            .add_systems(Startup, load_controller_config);
    }
}

/// Load controller configuration into resources, keeping defaults when the
/// file is missing or malformed.
pub(crate) fn load_controller_config(mut commands: Commands) {
    let config = match load_config_file(Path::new(CONFIG_PATH)) {
        Ok(config) => {
            info!(
                "Loaded controller config from {} (schema v{})",
                CONFIG_PATH, config.schema_version
            );
            config
        }
        Err(e) => {
            warn!("{}; using default controller config", e);
            ControllerConfig::default()
        }
    };

    debug!("Controller tuning: {:?}", config.tuning);
    commands.insert_resource(config.tuning);
    commands.insert_resource(config.audio);
}
