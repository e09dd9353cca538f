use std::io;

pub const MAX_SIZE_MESSAGE: &str =
    "The max_size argument must be an integer number greater than zero.";

#[derive(Debug, thiserror::Error)]
pub enum UsernameError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Word list is empty: {0}")]
    EmptyWordList(&'static str),

    #[error("Invalid word in {list}: {word:?}")]
    InvalidWord { list: &'static str, word: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl UsernameError {
    pub fn invalid_max_size() -> Self {
        UsernameError::InvalidArgument(MAX_SIZE_MESSAGE.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UsernameError>;
