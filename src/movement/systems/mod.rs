//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod toggle;

pub(crate) use collisions::{detect_ground, probe_ground};
pub(crate) use input::{read_input, sample_input};
pub(crate) use movement::{apply_dash, apply_jump, apply_walk};
pub(crate) use toggle::apply_controller_commands;
