use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No theoretical standard deviation recorded for {players} players with {territories} territories")]
    UnknownBaseline { players: u32, territories: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl RiskError {
    pub fn invalid(message: impl Into<String>) -> Self {
        RiskError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
