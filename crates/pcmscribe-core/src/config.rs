use crate::error::ConfigError;
use serde::Serialize;
use std::path::PathBuf;

/// Input rate the recognizer is bound to. Audio is assumed to match.
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Bytes handed to the recognizer per submission (2000 samples).
pub const CHUNK_BYTES: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub model_path: PathBuf,
    pub audio_path: PathBuf,
    pub sample_rate: u32,
    pub chunk_bytes: usize,
}

/// Settings handed to a speech engine's `initialize`.
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    pub model_path: String,
    pub sample_rate: u32,
}

impl StreamConfig {
    pub fn new(model_path: impl Into<PathBuf>, audio_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            audio_path: audio_path.into(),
            sample_rate: SAMPLE_RATE_HZ,
            chunk_bytes: CHUNK_BYTES,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            model_path: self.model_path.to_string_lossy().into_owned(),
            sample_rate: self.sample_rate,
        }
    }

    /// Engine settings as the TOML table engines consume.
    pub fn engine_toml(&self) -> Result<toml::Value, ConfigError> {
        Ok(toml::Value::try_from(self.engine_config())?)
    }
}
