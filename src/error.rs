use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    // status code and body are not kept
    #[error("Failed to fetch repositories")]
    HttpStatus,

    #[error("{0}")]
    Transport(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for ScoutError {
    fn from(e: octocrab::Error) -> Self {
        ScoutError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(e: serde_json::Error) -> Self {
        ScoutError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
