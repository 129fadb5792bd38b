use std::thread::sleep;

use log::info;

use crate::audio::{Audio, Cue};
use crate::command::Command;
use crate::config::{GAME_OVER_HINT, SNAKE_BODY_GLYPH, TARGET_GLYPH, TICK_INTERVAL};
use crate::error::Result;
use crate::session::{GameState, Session, TickOutcome};
use crate::term::TermManager;

pub struct SnakeGame<A: Audio> {
    term: TermManager,
    audio: A,
    session: Session,
}

impl<A: Audio> SnakeGame<A> {
    pub fn new(term: TermManager, audio: A) -> Self {
        SnakeGame { term, audio, session: Session::new() }
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()?;
        self.term.clear()?;
        self.term.draw_borders()?;
        self.audio.start_music();
        self.draw()
    }

    /// Runs until the player quits.
    pub fn play(&mut self) -> Result<()> {
        info!("starting a new session");

        loop {
            sleep(TICK_INTERVAL);

            for key_ev in self.term.read_key_events_queue()? {
                match Command::from_key_event(&key_ev) {
                    Some(Command::Quit) => {
                        info!("quit with score {}", self.session.score());
                        return Ok(());
                    }
                    Some(Command::Resume) => {
                        if self.session.resume() {
                            self.audio.resume_music();
                        }
                    }
                    Some(Command::Turn(dir)) => self.session.turn(dir),
                    None => {}
                }
            }

            let outcome = self.session.tick();
            if outcome == TickOutcome::Idle {
                continue;
            }

            announce(&outcome, &mut self.audio);
            self.draw()?;
        }
    }

    pub fn shutdown(&mut self) -> Result<()> {
        self.audio.pause_music();
        self.term.restore()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw(&mut self) -> Result<()> {
        let snake = self.session.snake();
        let frame = self.term.frame_mut();

        frame.clear();
        frame.put(self.session.target().position(), TARGET_GLYPH);
        for pos in snake.body().iter().skip(1) {
            frame.put(*pos, SNAKE_BODY_GLYPH);
        }
        frame.put(snake.head(), snake.head_glyph());

        self.term.present()?;
        self.term.print_status(&score_line(self.session.shown_score()))?;

        if let GameState::GameOver { final_score } = self.session.state() {
            let lines = game_over_lines(final_score);
            self.term.show_message(&[&lines[0], &lines[1]])?;
        }

        self.term.flush()
    }
}

/// Plays the sounds that go with a tick's outcome.
fn announce<A: Audio>(outcome: &TickOutcome, audio: &mut A) {
    match outcome {
        TickOutcome::Ate => audio.play(Cue::Eat),
        TickOutcome::Crashed { ate, .. } => {
            if *ate {
                audio.play(Cue::Eat);
            }
            audio.play(Cue::Crash);
            audio.pause_music();
            audio.play(Cue::GameOver);
        }
        TickOutcome::Moved | TickOutcome::Idle => {}
    }
}

fn score_line(score: usize) -> String {
    format!(" Score: {:<6}", score)
}

fn game_over_lines(score: usize) -> [String; 2] {
    [format!("Game Over! Your score is {}", score), GAME_OVER_HINT.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingAudio {
        events: Vec<String>,
    }

    impl Audio for RecordingAudio {
        fn start_music(&mut self) {
            self.events.push("start".into());
        }

        fn pause_music(&mut self) {
            self.events.push("pause".into());
        }

        fn resume_music(&mut self) {
            self.events.push("resume".into());
        }

        fn play(&mut self, cue: Cue) {
            self.events.push(format!("{:?}", cue));
        }
    }

    #[test]
    fn eating_plays_one_cue() {
        let mut audio = RecordingAudio::default();
        announce(&TickOutcome::Ate, &mut audio);
        assert_eq!(audio.events, vec!["Eat"]);
    }

    #[test]
    fn crashing_pauses_music() {
        let mut audio = RecordingAudio::default();
        announce(&TickOutcome::Crashed { score: 3, ate: false }, &mut audio);
        assert_eq!(audio.events, vec!["Crash", "pause", "GameOver"]);
    }

    #[test]
    fn eating_then_crashing_plays_every_cue() {
        let mut audio = RecordingAudio::default();
        announce(&TickOutcome::Crashed { score: 4, ate: true }, &mut audio);
        assert_eq!(audio.events, vec!["Eat", "Crash", "pause", "GameOver"]);
    }

    #[test]
    fn plain_moves_are_silent() {
        let mut audio = RecordingAudio::default();
        announce(&TickOutcome::Moved, &mut audio);
        announce(&TickOutcome::Idle, &mut audio);
        assert!(audio.events.is_empty());
    }

    #[test]
    fn messages_show_the_score() {
        assert_eq!(score_line(12), " Score: 12    ");
        let lines = game_over_lines(7);
        assert_eq!(lines[0], "Game Over! Your score is 7");
        assert_eq!(lines[1], "Press ENTER to play again. Press ESCAPE to exit");
    }
}
