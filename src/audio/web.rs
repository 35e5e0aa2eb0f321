//! Audio backend using Web Audio API
//!
//! Sound effects are short oscillator blips; music notes come from the
//! sequencer in [`super::music`] and are scheduled ahead on the device clock.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use super::music::{MusicStream, MusicTrack, Note, Voice};
use super::{AudioPlayer, SoundEffect};
use crate::settings::Settings;

/// One synthesized tone of a sound effect
struct Blip {
    freq: f32,
    /// Pitch at the end of the tone, if it sweeps
    sweep_to: Option<f32>,
    wave: OscillatorType,
    level: f32,
    /// Seconds after the trigger
    delay: f64,
    duration: f64,
}

const START: &[Blip] = &[
    Blip {
        freq: 523.25,
        sweep_to: None,
        wave: OscillatorType::Triangle,
        level: 0.3,
        delay: 0.0,
        duration: 0.12,
    },
    Blip {
        freq: 659.25,
        sweep_to: None,
        wave: OscillatorType::Triangle,
        level: 0.3,
        delay: 0.1,
        duration: 0.12,
    },
    Blip {
        freq: 783.99,
        sweep_to: None,
        wave: OscillatorType::Triangle,
        level: 0.3,
        delay: 0.2,
        duration: 0.25,
    },
];

const BOUNCE: &[Blip] = &[
    Blip {
        freq: 220.0,
        sweep_to: Some(110.0),
        wave: OscillatorType::Square,
        level: 0.15,
        delay: 0.0,
        duration: 0.08,
    },
];

const EXPLOSION: &[Blip] = &[
    Blip {
        freq: 180.0,
        sweep_to: Some(40.0),
        wave: OscillatorType::Sawtooth,
        level: 0.35,
        delay: 0.0,
        duration: 0.25,
    },
    Blip {
        freq: 900.0,
        sweep_to: Some(300.0),
        wave: OscillatorType::Square,
        level: 0.08,
        delay: 0.0,
        duration: 0.06,
    },
];

fn blips(effect: SoundEffect) -> &'static [Blip] {
    match effect {
        SoundEffect::Start => START,
        SoundEffect::Bounce => BOUNCE,
        SoundEffect::Explosion => EXPLOSION,
    }
}

/// Audio manager for the game
pub struct WebAudio {
    ctx: Option<AudioContext>,
    music: Option<MusicStream>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    music_enabled: bool,
    muted: bool,
}

impl WebAudio {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            music: None,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            music_enabled: settings.music_enabled,
            muted: false,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music_gain(&self) -> f32 {
        if self.muted || !self.music_enabled {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Fire one oscillator with a decaying envelope and an optional pitch sweep
    fn play_blip(&self, ctx: &AudioContext, blip: &Blip, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, blip.freq, blip.wave) else {
            return;
        };
        let t = ctx.current_time() + blip.delay;
        let end = t + blip.duration;

        gain.gain().set_value_at_time(vol * blip.level, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok();
        if let Some(to) = blip.sweep_to {
            osc.frequency().set_value_at_time(blip.freq, t).ok();
            osc.frequency().exponential_ramp_to_value_at_time(to, end).ok();
        }
        osc.start_with_when(t).ok();
        osc.stop_with_when(end + 0.05).ok();
    }

    /// Queue one music note at its scheduled start time
    fn schedule_note(&self, ctx: &AudioContext, note: &Note, vol: f32) {
        let (osc_type, level) = match note.voice {
            Voice::Bass => (OscillatorType::Triangle, 0.25),
            Voice::Lead => (OscillatorType::Square, 0.06),
        };
        let Some((osc, gain)) = self.create_osc(ctx, note.frequency, osc_type) else {
            return;
        };
        let t = note.start.max(ctx.current_time());
        let end = t + note.duration;

        gain.gain().set_value_at_time(vol * level, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.001, end).ok();
        osc.start_with_when(t).ok();
        osc.stop_with_when(end + 0.02).ok();
    }
}

impl AudioPlayer for WebAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.sfx_gain();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        self.resume();

        for blip in blips(effect) {
            self.play_blip(ctx, blip, vol);
        }
    }

    fn play_music(&mut self, track: &MusicTrack) {
        let now = self.ctx.as_ref().map(|c| c.current_time()).unwrap_or(0.0);
        let mut stream = MusicStream::new(track);
        stream.play(now);
        self.music = Some(stream);
        log::info!("Music stream started ({} bpm)", track.tempo_bpm);
    }

    fn update_music(&mut self) {
        let Some(ctx) = &self.ctx else { return };
        let Some(stream) = &mut self.music else {
            return;
        };

        // The device clock stands still until the first user gesture
        let notes = stream.refill(ctx.current_time());
        let vol = self.music_gain();
        if vol <= 0.0 {
            return;
        }
        for note in &notes {
            self.schedule_note(ctx, note, vol);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
