//! Procedural background music
//!
//! A looping pattern of bass and lead notes is generated from a seed, then
//! streamed: each refill schedules every step that starts inside a short
//! look-ahead window, so the backend always has audio queued slightly ahead
//! of the playhead without scheduling the whole loop at once.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// How far ahead of the playhead notes get scheduled (seconds)
pub const LOOKAHEAD_SECS: f64 = 0.2;

/// Reference pitch for semitone offsets (A3)
const BASE_FREQ: f32 = 220.0;

/// Minor pentatonic, two octaves of lead material
const SCALE: [i32; 6] = [0, 3, 5, 7, 10, 12];

/// Bar roots: i - VI - III - VII
const ROOTS: [i32; 4] = [0, -4, 3, -2];

/// Steps per bar (eighth notes in 4/4)
const STEPS_PER_BAR: usize = 8;

/// Music track description (the "file" a stream is opened from)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusicTrack {
    pub seed: u64,
    pub tempo_bpm: f32,
    /// Loop length in steps
    pub steps: usize,
}

impl Default for MusicTrack {
    fn default() -> Self {
        Self {
            seed: 0xB10C_5EED,
            tempo_bpm: 112.0,
            steps: 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Bass,
    Lead,
}

/// A note ready to hand to the output device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub voice: Voice,
    /// Absolute start time on the device clock (seconds)
    pub start: f64,
    pub duration: f64,
    pub frequency: f32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Step {
    bass: Option<i32>,
    lead: Option<i32>,
}

/// Convert a semitone offset from A3 to Hz
pub fn semitone_to_freq(semitones: i32) -> f32 {
    BASE_FREQ * 2f32.powf(semitones as f32 / 12.0)
}

/// Streaming sequencer for one track
#[derive(Debug, Clone)]
pub struct MusicStream {
    pattern: Vec<Step>,
    step_secs: f64,
    next_step: usize,
    next_time: f64,
    playing: bool,
}

impl MusicStream {
    pub fn new(track: &MusicTrack) -> Self {
        let mut rng = Pcg32::seed_from_u64(track.seed);
        let steps = track.steps.max(1);

        let pattern = (0..steps)
            .map(|i| {
                let root = ROOTS[(i / STEPS_PER_BAR) % ROOTS.len()];
                let bass = (i % 2 == 0).then_some(root - 12);
                let lead = if rng.random_bool(0.55) {
                    let degree = SCALE[rng.random_range(0..SCALE.len())];
                    Some(root + degree + 12)
                } else {
                    None
                };
                Step { bass, lead }
            })
            .collect();

        // Eighth notes
        let step_secs = 60.0 / track.tempo_bpm.max(1.0) as f64 / 2.0;

        Self {
            pattern,
            step_secs,
            next_step: 0,
            next_time: 0.0,
            playing: false,
        }
    }

    /// Start from the top of the loop at device time `now`
    pub fn play(&mut self, now: f64) {
        self.playing = true;
        self.next_step = 0;
        self.next_time = now;
    }

    pub fn step_secs(&self) -> f64 {
        self.step_secs
    }

    /// Schedule every step that starts before `now + LOOKAHEAD_SECS`
    pub fn refill(&mut self, now: f64) -> Vec<Note> {
        let mut notes = Vec::new();
        if !self.playing {
            return notes;
        }

        // Fell behind (tab was hidden): skip the missed steps instead of
        // bursting them all at once
        if self.next_time + self.step_secs < now {
            let behind = ((now - self.next_time) / self.step_secs).floor() as usize;
            self.next_step = (self.next_step + behind) % self.pattern.len();
            self.next_time += behind as f64 * self.step_secs;
        }

        while self.next_time < now + LOOKAHEAD_SECS {
            let step = self.pattern[self.next_step];
            if let Some(semi) = step.bass {
                notes.push(Note {
                    voice: Voice::Bass,
                    start: self.next_time,
                    duration: self.step_secs * 1.8,
                    frequency: semitone_to_freq(semi),
                });
            }
            if let Some(semi) = step.lead {
                notes.push(Note {
                    voice: Voice::Lead,
                    start: self.next_time,
                    duration: self.step_secs * 0.9,
                    frequency: semitone_to_freq(semi),
                });
            }
            self.next_step = (self.next_step + 1) % self.pattern.len();
            self.next_time += self.step_secs;
        }

        notes
    }
}
