use crate::engine_trait::SpeechEngine;
use pcmscribe_core::{AsrError, AudioChunk, ResultRecord, Utterance};

/// Engine that hears nothing: never reports a boundary and never has text.
pub struct NullEngine {
    feed_count: usize,
}

impl NullEngine {
    pub fn new() -> Self {
        Self { feed_count: 0 }
    }

    pub fn feed_count(&self) -> usize {
        self.feed_count
    }
}

impl Default for NullEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechEngine for NullEngine {
    fn name(&self) -> &str {
        "null"
    }

    fn initialize(&mut self, _config: toml::Value) -> Result<(), AsrError> {
        Ok(())
    }

    fn accept_chunk(&mut self, chunk: &AudioChunk) -> Result<Utterance, AsrError> {
        self.feed_count += 1;
        tracing::trace!("NullEngine fed chunk #{}, {} bytes", self.feed_count, chunk.len());
        Ok(Utterance::Incomplete)
    }

    fn result(&mut self) -> Result<ResultRecord, AsrError> {
        Ok(ResultRecord::with_text(""))
    }

    fn partial_result(&mut self) -> Result<ResultRecord, AsrError> {
        Ok(ResultRecord::with_partial(""))
    }

    fn final_result(&mut self) -> Result<ResultRecord, AsrError> {
        Ok(ResultRecord::with_text(""))
    }
}
