use thiserror::Error;

#[derive(Error, Debug)]
pub enum HallError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Species {species} is not supported by the {model} model")]
    UnsupportedSpecies { model: String, species: String },

    #[error("Rate table {path}: {message}")]
    RateTable { path: String, message: String },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Linear algebra error: {0}")]
    LinAlg(String),
}

pub type HallResult<T> = Result<T, HallError>;
