use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Failed to determine changed files: {0}")]
    SourceControl(String),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load config: {path}")]
    ConfigError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GateError>;
