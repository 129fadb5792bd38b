mod audio;
mod command;
mod config;
mod error;
mod game;
mod session;
mod snake;
mod synth;
mod target;
mod term;


use std::{env, fs::File, process::exit};

use env_logger::{Env, Target};

use crate::error::Result;
use crate::game::SnakeGame;
use crate::term::TermManager;

pub type TermInt = u16;
/// Board position in pixels. Signed so a segment can sit off the board.
pub type Coords = (i32, i32);

/// Whether a `RUST_LOG` value asks for any log output at all.
fn wants_log_file(filter: Option<&str>) -> bool {
    match filter.map(str::trim) {
        None | Some("") | Some("off") => false,
        Some(_) => true,
    }
}

// The screen belongs to the game, so log lines go to a file instead of stderr
fn init_logging() -> Result<()> {
    let filter = env::var("RUST_LOG").ok();
    if !wants_log_file(filter.as_deref()) {
        return Ok(());
    }

    let file = File::create(env::temp_dir().join(config::LOG_FILE_NAME))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("off"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run() -> Result<()> {
    init_logging()?;

    let mut game = SnakeGame::new(TermManager::new()?, audio::open());
    let res = game.initialize().and_then(|_| game.play());

    // Leave the terminal usable whatever happened during the game
    let restored = game.shutdown();
    res.and(restored)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("snake: {}", e);
        exit(1);
    }
}
