//! Core domain: level flow state.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum LevelState {
    #[default]
    Playing,
    Complete,
}
