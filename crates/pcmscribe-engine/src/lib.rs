pub mod engine_trait;
pub mod null_engine;
pub mod registry;
pub mod scripted_engine;
pub mod session;
#[cfg(feature = "vosk")]
pub mod vosk_engine;

pub use engine_trait::SpeechEngine;
pub use null_engine::NullEngine;
pub use registry::EngineRegistry;
pub use scripted_engine::{ScriptStep, ScriptedEngine};
pub use session::{SessionStats, TranscriptionSession};
#[cfg(feature = "vosk")]
pub use vosk_engine::VoskEngine;
