use pcmscribe_core::{AsrError, AudioChunk, ResultRecord, Utterance};

/// A stateful speech recognizer fed sequential PCM chunks.
///
/// Every call blocks until the engine has finished with it. Engines are
/// created through the [`EngineRegistry`](crate::EngineRegistry) and must be
/// initialized before any chunk is submitted.
pub trait SpeechEngine {
    /// Returns the engine's registry name (e.g. `"vosk"`, `"null"`).
    fn name(&self) -> &str;
    /// Load the model and bind the recognizer to the configured sample rate.
    fn initialize(&mut self, config: toml::Value) -> Result<(), AsrError>;
    /// Submit one chunk and report whether an utterance boundary was reached.
    fn accept_chunk(&mut self, chunk: &AudioChunk) -> Result<Utterance, AsrError>;
    /// Result of the utterance that just completed (`text` field).
    fn result(&mut self) -> Result<ResultRecord, AsrError>;
    /// Hypothesis for the utterance in progress (`partial` field).
    fn partial_result(&mut self) -> Result<ResultRecord, AsrError>;
    /// Flush whatever audio is still buffered (`text` field).
    fn final_result(&mut self) -> Result<ResultRecord, AsrError>;
}

/// Pull a required string out of an engine's TOML config.
pub(crate) fn require_str<'a>(config: &'a toml::Value, key: &str) -> Result<&'a str, AsrError> {
    config.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
        AsrError::InitializationFailed(format!("missing '{key}' in engine config"))
    })
}

/// Pull a required positive integer out of an engine's TOML config.
pub(crate) fn require_u32(config: &toml::Value, key: &str) -> Result<u32, AsrError> {
    config
        .get(key)
        .and_then(|v| v.as_integer())
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v > 0)
        .ok_or_else(|| {
            AsrError::InitializationFailed(format!("missing or invalid '{key}' in engine config"))
        })
}
