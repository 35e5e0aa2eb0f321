//! Audio: sound effects and background music
//!
//! The simulation never touches audio directly. The session maps each
//! [`GameEvent`] to a [`SoundEffect`] and refills the music stream once per
//! tick through an [`AudioPlayer`] backend.

pub mod music;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::SIM_DT;
use crate::resources::GameResources;
use crate::settings::Settings;
use crate::sim::GameEvent;
use music::{MusicStream, MusicTrack};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Game started from the title screen
    Start,
    /// Ball hits paddle
    Bounce,
    /// Brick destroyed
    Explosion,
}

/// Playback backend
pub trait AudioPlayer {
    /// Fire a one-shot sound effect
    fn play(&mut self, effect: SoundEffect);

    /// Start streaming a music track from the beginning
    fn play_music(&mut self, track: &MusicTrack);

    /// Keep the music stream fed; called once per tick
    fn update_music(&mut self);

    fn set_muted(&mut self, _muted: bool) {}
}

/// Sound to play for a simulation event, if any
pub fn sound_for_event(event: &GameEvent, resources: &GameResources) -> Option<SoundEffect> {
    match event {
        GameEvent::GameStarted => Some(resources.fx_start),
        GameEvent::PaddleBounce => Some(resources.fx_bounce),
        GameEvent::BrickDestroyed { .. } => Some(resources.fx_explode),
        _ => None,
    }
}

/// Backend with no output device (native builds, headless runs)
///
/// Still drives the music sequencer on a simulated clock so the stream
/// behaves the same as in the browser.
#[derive(Debug)]
pub struct SilentAudio {
    stream: Option<MusicStream>,
    clock: f64,
    notes_scheduled: u64,
    effects_played: u64,
    music_enabled: bool,
    muted: bool,
}

impl SilentAudio {
    pub fn new(settings: &Settings) -> Self {
        Self {
            stream: None,
            clock: 0.0,
            notes_scheduled: 0,
            effects_played: 0,
            music_enabled: settings.music_enabled,
            muted: false,
        }
    }

    pub fn notes_scheduled(&self) -> u64 {
        self.notes_scheduled
    }

    pub fn effects_played(&self) -> u64 {
        self.effects_played
    }
}

impl AudioPlayer for SilentAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
        self.effects_played += 1;
    }

    fn play_music(&mut self, track: &MusicTrack) {
        let mut stream = MusicStream::new(track);
        stream.play(self.clock);
        self.stream = Some(stream);
    }

    fn update_music(&mut self) {
        self.clock += SIM_DT as f64;
        if let Some(stream) = &mut self.stream {
            let notes = stream.refill(self.clock);
            if self.music_enabled && !self.muted {
                self.notes_scheduled += notes.len() as u64;
            }
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
