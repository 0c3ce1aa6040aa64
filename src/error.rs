use thiserror::Error;

/// Errors surfaced by the game library.
#[derive(Debug, Error)]
pub enum PigError {
    #[error("input closed before a decision was made")]
    InputClosed,

    #[error("I/O error on the game interface")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("the game is already over")]
    GameFinished,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PigError>;
