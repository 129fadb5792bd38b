use std::io::{stdout, Stdout, Write};

use log::{debug, warn};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use crate::error::Result;
use crate::synth::{self, SAMPLE_RATE};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Crash,
    GameOver,
}

pub trait Audio {
    fn start_music(&mut self);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn play(&mut self, cue: Cue);
}

impl<A: Audio + ?Sized> Audio for Box<A> {
    fn start_music(&mut self) {
        (**self).start_music()
    }

    fn pause_music(&mut self) {
        (**self).pause_music()
    }

    fn resume_music(&mut self) {
        (**self).resume_music()
    }

    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
}

/// Opens the default sound device, or falls back to the terminal bell when there is none.
pub fn open() -> Box<dyn Audio> {
    match Speakers::new() {
        Ok(speakers) => Box::new(speakers),
        Err(e) => {
            warn!("no audio output ({}), using the terminal bell", e);
            Box::new(TerminalBell::new())
        }
    }
}

/// Synthesized music and cues played through rodio.
pub struct Speakers {
    // Dropping the stream silences every sink
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Sink,
    eat: Vec<f32>,
    crash: Vec<f32>,
    game_over: Vec<f32>,
}

impl Speakers {
    pub fn new() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        let music = Sink::try_new(&handle)?;
        music.pause();
        music.append(SamplesBuffer::new(1, SAMPLE_RATE, synth::music_samples()).repeat_infinite());

        Ok(Speakers {
            _stream: stream,
            handle,
            music,
            eat: synth::eat_samples(),
            crash: synth::crash_samples(),
            game_over: synth::game_over_samples(),
        })
    }
}

impl Audio for Speakers {
    fn start_music(&mut self) {
        debug!("background music on");
        self.music.play();
    }

    fn pause_music(&mut self) {
        debug!("background music paused");
        self.music.pause();
    }

    fn resume_music(&mut self) {
        debug!("background music on");
        self.music.play();
    }

    fn play(&mut self, cue: Cue) {
        let samples = match cue {
            Cue::Eat => &self.eat,
            Cue::Crash => &self.crash,
            Cue::GameOver => &self.game_over,
        };

        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
                sink.detach();
            }
            Err(e) => debug!("cue {:?} dropped: {}", cue, e),
        }
    }
}

/// Audio for a terminal without a sound device: cues ring the bell, the
/// background track is only tracked as on or off.
pub struct TerminalBell<W: Write = Stdout> {
    out: W,
    music_playing: bool,
}

impl TerminalBell<Stdout> {
    pub fn new() -> Self {
        TerminalBell::with_writer(stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        TerminalBell { out, music_playing: false }
    }

    fn set_music(&mut self, playing: bool) {
        if self.music_playing != playing {
            debug!("background music {}", if playing { "on" } else { "paused" });
        }
        self.music_playing = playing;
    }
}

impl<W: Write> Audio for TerminalBell<W> {
    fn start_music(&mut self) {
        self.set_music(true);
    }

    fn pause_music(&mut self) {
        self.set_music(false);
    }

    fn resume_music(&mut self) {
        self.set_music(true);
    }

    fn play(&mut self, cue: Cue) {
        debug!("cue {:?}", cue);
        let res = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = res {
            debug!("terminal bell failed: {}", e);
        }
    }
}
