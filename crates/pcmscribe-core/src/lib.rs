pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, StreamConfig, CHUNK_BYTES, SAMPLE_RATE_HZ};
pub use error::{AsrError, AudioError, ConfigError, DestinationError, ParseEventError};
pub use types::{AudioChunk, EventKind, ResultRecord, TranscriptEvent, Utterance};
