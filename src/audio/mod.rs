//! Audio domain: one-shot sound cues played through a single voice per
//! emitter.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::{AudioConfig, load_controller_config};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Land,
    Dash,
}

/// Request to play a cue on an emitter, replacing whatever it is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound {
    pub emitter: Entity,
    pub cue: SoundCue,
}

impl Message for PlaySound {}

#[derive(Resource, Debug, Clone, Default)]
pub struct SoundLibrary {
    pub jump: Handle<AudioSource>,
    pub land: Handle<AudioSource>,
    pub dash: Handle<AudioSource>,
}

impl SoundLibrary {
    pub fn handle(&self, cue: SoundCue) -> Handle<AudioSource> {
        match cue {
            SoundCue::Jump => self.jump.clone(),
            SoundCue::Land => self.land.clone(),
            SoundCue::Dash => self.dash.clone(),
        }
    }
}

/// Emitter side of a voice: tracks the entity currently playing for it.
#[derive(Component, Debug, Default)]
pub struct AudioEmitter {
    pub voice: Option<Entity>,
}

/// Marker on spawned voice entities.
#[derive(Component, Debug)]
pub struct SoundVoice;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .add_message::<PlaySound>()
            .add_systems(Startup, load_sound_library.after(load_controller_config))
            .add_systems(PostUpdate, play_sound_cues);
    }
}

pub(crate) fn load_sound_library(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<AudioConfig>,
) {
    commands.insert_resource(SoundLibrary {
        jump: asset_server.load(config.jump.clone()),
        land: asset_server.load(config.land.clone()),
        dash: asset_server.load(config.dash.clone()),
    });
    info!(
        "Sound library queued: jump={}, land={}, dash={}",
        config.jump, config.land, config.dash
    );
}

pub(crate) fn play_sound_cues(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    library: Res<SoundLibrary>,
    mut emitters: Query<&mut AudioEmitter>,
    voices: Query<(), With<SoundVoice>>,
) {
    // Later requests for the same emitter in a frame win
    let mut latest: HashMap<Entity, SoundCue> = HashMap::new();
    for request in requests.read() {
        latest.insert(request.emitter, request.cue);
    }

    for (emitter, cue) in latest {
        let Ok(mut emitter_state) = emitters.get_mut(emitter) else {
            continue;
        };

        if let Some(previous) = emitter_state.voice.take() {
            if voices.contains(previous) {
                commands.entity(previous).despawn();
            }
        }

        let voice = commands
            .spawn((
                SoundVoice,
                AudioPlayer::new(library.handle(cue)),
                PlaybackSettings::DESPAWN,
                ChildOf(emitter),
            ))
            .id();
        emitter_state.voice = Some(voice);
        debug!("Playing {:?} on {:?}", cue, emitter);
    }
}
