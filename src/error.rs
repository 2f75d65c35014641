use thiserror::Error;

/// Everything that can go wrong while running a demo.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Director has no builder bound; call set_builder first")]
    NoBuilderBound,

    #[error("Director's builder is already borrowed by the client")]
    BuilderBusy,

    #[error("Failed to write narration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog configuration: {0}")]
    Config(String),
}

impl PatternError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
