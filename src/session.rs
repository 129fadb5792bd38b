//! Game state for one player, independent of any terminal.
//!
//! A [`Session`] is advanced one step at a time with [`Session::tick`] and
//! reports what happened as a [`TickOutcome`]. Crashing is an outcome, not an
//! error: the session switches to [`GameState::GameOver`] and immediately
//! starts over with a fresh snake and target, waiting for [`Session::resume`].

use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::{SELF_COLLISION_EXEMPT, SNAKE_START};
use crate::snake::{Direction, Snake};
use crate::target::Target;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver { final_score: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved, the game is over and waiting for a restart
    Idle,
    Moved,
    Ate,
    /// `ate` is set when the fatal step also swallowed the target
    Crashed { score: usize, ate: bool },
}

pub struct Session<R = ThreadRng> {
    rng: R,
    pub(crate) snake: Snake,
    pub(crate) target: Target,
    state: GameState,
}

impl Session<ThreadRng> {
    pub fn new() -> Self {
        Session::with_rng(rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Session {
            rng,
            snake: Snake::new(SNAKE_START, Direction::Right),
            target: Target::new(),
            state: GameState::Playing,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    /// Score for the status line. After a crash this is the final score, not the fresh snake's.
    pub fn shown_score(&self) -> usize {
        match self.state {
            GameState::GameOver { final_score } => final_score,
            GameState::Playing => self.score(),
        }
    }

    /// Direction changes only count while playing.
    pub fn turn(&mut self, direction: Direction) {
        if self.state != GameState::Playing {
            return;
        }

        let before = self.snake.get_direction();
        self.snake.turn(direction);
        if self.snake.get_direction() != before {
            trace!("turning {:?}", direction);
        }
    }

    /// Leaves the game over screen. Returns whether the state changed.
    pub fn resume(&mut self) -> bool {
        if let GameState::GameOver { .. } = self.state {
            info!("resuming play");
            self.state = GameState::Playing;
            true
        } else {
            false
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Idle;
        }

        self.snake.advance();

        let mut ate = false;
        if same_cell(self.snake.head(), self.target.position()) {
            self.target.relocate(&mut self.rng);
            self.snake.grow();
            debug!("snake grew to {} segments", self.snake.len());
            ate = true;
        }

        if self.hit_itself() {
            let score = self.score();
            info!("crashed at {:?} with score {}", self.snake.head(), score);
            self.state = GameState::GameOver { final_score: score };
            self.reset();
            return TickOutcome::Crashed { score, ate };
        }

        if ate { TickOutcome::Ate } else { TickOutcome::Moved }
    }

    fn hit_itself(&self) -> bool {
        let head = self.snake.head();
        self.snake.body()
            .iter()
            .skip(SELF_COLLISION_EXEMPT)
            .any(|seg| same_cell(head, *seg))
    }

    fn reset(&mut self) {
        self.snake = Snake::new(SNAKE_START, Direction::Right);
        self.target = Target::new();
    }
}

// Everything on the board is cell aligned, so overlapping boxes share the same corner
fn same_cell(a: Coords, b: Coords) -> bool {
    a == b
}
