//! Sample generators for the game's sounds.
//!
//! Everything is synthesized at start-up, so the game ships without asset files.

use std::f32::consts::TAU;

pub const SAMPLE_RATE: u32 = 44_100;

#[derive(Copy, Clone)]
enum Wave {
    Sine,
    Square,
    Saw,
}

fn oscillate(wave: Wave, phase: f32) -> f32 {
    let p = phase.fract();
    match wave {
        Wave::Sine => (p * TAU).sin(),
        Wave::Square => if p < 0.5 { 1.0 } else { -1.0 },
        Wave::Saw => 2.0 * p - 1.0,
    }
}

fn sample_count(duration: f32) -> usize {
    (SAMPLE_RATE as f32 * duration) as usize
}

/// One note whose frequency slides from `from_hz` to `to_hz`, fading out exponentially.
fn sweep(wave: Wave, from_hz: f32, to_hz: f32, duration: f32, volume: f32) -> Vec<f32> {
    let n = sample_count(duration);
    let mut phase = 0.0f32;
    let mut samples = Vec::with_capacity(n);

    for i in 0..n {
        let t = i as f32 / n as f32;
        let freq = from_hz + (to_hz - from_hz) * t;
        let envelope = volume * (0.001f32 / volume).powf(t);
        samples.push(oscillate(wave, phase) * envelope);
        phase += freq / SAMPLE_RATE as f32;
    }

    samples
}

fn tone(wave: Wave, hz: f32, duration: f32, volume: f32) -> Vec<f32> {
    sweep(wave, hz, hz, duration, volume)
}

/// Adds `src` into `dst` starting `offset` seconds in, growing `dst` if needed.
fn mix_at(dst: &mut Vec<f32>, src: &[f32], offset: f32) {
    let start = sample_count(offset);
    if dst.len() < start + src.len() {
        dst.resize(start + src.len(), 0.0);
    }
    for (i, s) in src.iter().enumerate() {
        dst[start + i] += s;
    }
}

fn sequence(wave: Wave, notes: &[f32], note_gap: f32, note_len: f32, volume: f32) -> Vec<f32> {
    let mut samples = vec![];
    for (idx, freq) in notes.iter().enumerate() {
        mix_at(&mut samples, &tone(wave, *freq, note_len, volume), note_gap * idx as f32);
    }
    samples
}

/// Two quick rising blips.
pub fn eat_samples() -> Vec<f32> {
    sequence(Wave::Sine, &[660.0, 990.0], 0.06, 0.1, 0.2)
}

/// A falling buzz.
pub fn crash_samples() -> Vec<f32> {
    sweep(Wave::Saw, 320.0, 60.0, 0.35, 0.15)
}

/// A slow descending three-note phrase.
pub fn game_over_samples() -> Vec<f32> {
    sequence(Wave::Square, &[440.0, 349.2, 261.6], 0.25, 0.3, 0.08)
}

/// Two bars of a quiet bass line, meant to be looped.
pub fn music_samples() -> Vec<f32> {
    const LINE: [f32; 8] = [110.0, 130.8, 146.8, 130.8, 98.0, 110.0, 123.5, 98.0];
    const BEAT: f32 = 0.3;

    let mut samples = sequence(Wave::Square, &LINE, BEAT, BEAT * 0.9, 0.04);
    samples.resize(sample_count(BEAT * LINE.len() as f32), 0.0);
    samples
}
