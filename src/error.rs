use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("audio output unavailable: {0}")]
    AudioStream(#[from] rodio::StreamError),

    #[error("audio playback failed: {0}")]
    AudioPlay(#[from] rodio::PlayError),

    #[error("terminal is {}x{}, the board needs at least {}x{}", actual.0, actual.1, needed.0, needed.1)]
    TerminalTooSmall { needed: (u16, u16), actual: (u16, u16) },
}
