use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Usage: {program} <model_path> <pcm_path>")]
    Usage { program: String },

    #[error("failed to build engine config: {0}")]
    EngineConfig(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open audio file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read audio: {0}")]
    Read(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AsrError {
    #[error("ASR initialization failed: {0}")]
    InitializationFailed(String),

    #[error("ASR processing failed: {0}")]
    ProcessingFailed(String),

    #[error("ASR engine not found: {0}")]
    EngineNotFound(String),

    #[error("ASR engine '{0}' used before initialize")]
    NotInitialized(String),
}

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("failed to write transcript line: {0}")]
    WriteFailed(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ParseEventError {
    #[error("unknown event prefix in line: {0:?}")]
    UnknownKind(String),

    #[error("event line has no text: {0:?}")]
    EmptyText(String),
}
