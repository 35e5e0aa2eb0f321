//! Fixed-step game session
//!
//! Owns everything one run of the game needs: state, keyboard, resources
//! and the audio backend. The platform loop feeds it key events and frame
//! deltas, then asks it for a [`Frame`] to draw.

use crate::audio::{AudioPlayer, sound_for_event};
use crate::consts::*;
use crate::input::{Key, Keyboard};
use crate::renderer::{Frame, build_frame};
use crate::resources::GameResources;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Largest frame delta accepted (seconds); longer stalls are dropped
const MAX_FRAME_DT: f32 = 0.1;

pub struct Session<A: AudioPlayer> {
    state: GameState,
    keyboard: Keyboard,
    resources: GameResources,
    audio: A,
    settings: Settings,
    accumulator: f32,
}

impl<A: AudioPlayer> Session<A> {
    /// Load resources and start the background music
    pub fn new(settings: Settings, mut audio: A) -> Self {
        let resources = GameResources::load();
        audio.play_music(&resources.music);
        let state = GameState::new();
        log::info!("Session started on {:?}", state.screen.kind());
        Self {
            state,
            keyboard: Keyboard::new(),
            resources,
            audio,
            settings,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn key_down(&mut self, key: Key) {
        self.keyboard.press(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keyboard.release(key);
    }

    /// Escape was pressed; the outer loop should stop
    pub fn quit_requested(&self) -> bool {
        self.keyboard.quit_requested()
    }

    /// Advance by a wall-clock delta, running zero or more fixed ticks
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Run exactly one tick with the current keyboard state
    pub fn step(&mut self) -> Vec<GameEvent> {
        let input = self.keyboard.take_tick_input();
        let before = self.state.screen.kind();
        let events = tick(&mut self.state, &input);

        for event in &events {
            match event {
                GameEvent::BallLost { lives_left } => {
                    log::info!("Ball lost, {} lives left", lives_left)
                }
                GameEvent::PauseToggled { paused } => log::info!("Paused: {}", paused),
                _ => log::debug!("{:?}", event),
            }
            if let Some(effect) = sound_for_event(event, &self.resources) {
                self.audio.play(effect);
            }
        }

        let after = self.state.screen.kind();
        if before != after {
            log::info!("Screen: {:?} -> {:?}", before, after);
        }

        // Music keeps streaming on every screen, paused or not
        self.audio.update_music();
        events
    }

    /// Draw commands for the current state
    pub fn frame(&self) -> Frame {
        build_frame(&self.state, &self.resources)
    }

    /// Window lost focus
    pub fn blur(&mut self) {
        // Keyup events for held keys will never arrive
        self.keyboard.release_all();
        if self.settings.pause_on_blur && self.state.pause() {
            log::info!("Auto-paused (focus lost)");
        }
        if self.settings.mute_on_blur {
            self.audio.set_muted(true);
        }
    }

    /// Window regained focus
    pub fn focus(&mut self) {
        if self.settings.mute_on_blur {
            self.audio.set_muted(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::audio::music::MusicTrack;
    use crate::sim::{Screen, ScreenKind};

    #[derive(Debug, Default)]
    struct RecordingAudio {
        effects: Vec<SoundEffect>,
        music_started: u32,
        music_updates: u32,
        muted: bool,
    }

    impl AudioPlayer for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.effects.push(effect);
        }

        fn play_music(&mut self, _track: &MusicTrack) {
            self.music_started += 1;
        }

        fn update_music(&mut self) {
            self.music_updates += 1;
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }
    }

    fn session() -> Session<RecordingAudio> {
        Session::new(Settings::default(), RecordingAudio::default())
    }

    fn skip_logo(s: &mut Session<RecordingAudio>) {
        for _ in 0..=LOGO_TICKS {
            s.step();
        }
        assert_eq!(s.state().screen.kind(), ScreenKind::Title);
    }

    #[test]
    fn test_music_starts_once_and_streams_every_tick() {
        let mut s = session();
        assert_eq!(s.audio().music_started, 1);
        for _ in 0..10 {
            s.step();
        }
        assert_eq!(s.audio().music_updates, 10);
    }

    #[test]
    fn test_advance_runs_fixed_ticks() {
        let mut s = session();
        assert_eq!(s.advance(SIM_DT * 0.5), 0);
        assert_eq!(s.advance(SIM_DT * 0.6), 1);
        assert_eq!(s.state().time_ticks, 1);
    }

    #[test]
    fn test_advance_caps_substeps() {
        let mut s = session();
        // A long stall is clamped to 0.1s, about 6 ticks
        let ran = s.advance(5.0);
        assert!(ran <= MAX_SUBSTEPS);
        assert!((5..=6).contains(&ran));
        assert_eq!(s.advance(-1.0), 0);
    }

    #[test]
    fn test_start_plays_sound() {
        let mut s = session();
        skip_logo(&mut s);
        s.key_down(Key::Confirm);
        let events = s.step();
        assert!(events.contains(&GameEvent::GameStarted));
        assert_eq!(s.audio().effects, vec![SoundEffect::Start]);
        assert_eq!(s.state().screen, Screen::Gameplay { paused: false });
    }

    #[test]
    fn test_edge_consumed_by_one_tick() {
        let mut s = session();
        skip_logo(&mut s);
        s.key_down(Key::Confirm);
        s.step();
        s.key_down(Key::Pause);
        s.step();
        assert!(s.state().screen.is_paused());
        // Held pause key does not toggle again
        s.step();
        assert!(s.state().screen.is_paused());
    }

    #[test]
    fn test_blur_pauses_and_mutes() {
        let mut s = session();
        skip_logo(&mut s);
        s.key_down(Key::Confirm);
        s.step();
        s.key_down(Key::Left);

        s.blur();
        assert!(s.state().screen.is_paused());
        assert!(s.audio().muted);
        assert!(!s.keyboard.is_down(Key::Left));

        s.focus();
        assert!(!s.audio().muted);
        // Focus does not unpause
        assert!(s.state().screen.is_paused());
    }

    #[test]
    fn test_blur_respects_settings() {
        let settings = Settings {
            pause_on_blur: false,
            mute_on_blur: false,
            ..Settings::default()
        };
        let mut s = Session::new(settings, RecordingAudio::default());
        skip_logo(&mut s);
        s.key_down(Key::Confirm);
        s.step();
        s.blur();
        assert!(!s.state().screen.is_paused());
        assert!(!s.audio().muted);
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut s = session();
        assert!(!s.quit_requested());
        s.key_down(Key::Quit);
        s.step();
        assert!(s.quit_requested());
    }

    #[test]
    fn test_frame_follows_screen() {
        let mut s = session();
        assert!(s.frame().texts().next().is_none());
        skip_logo(&mut s);
        assert_eq!(s.frame().texts().next(), Some("BLOCKS"));
    }
}
