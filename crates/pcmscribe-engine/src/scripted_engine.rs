use crate::engine_trait::SpeechEngine;
use pcmscribe_core::{AsrError, AudioChunk, ResultRecord, Utterance};
use std::collections::VecDeque;

/// One scripted reaction to a submitted chunk: the boundary decision and the
/// JSON the following `result`/`partial_result` query returns.
#[derive(Debug, Clone)]
pub struct ScriptStep {
    pub utterance: Utterance,
    pub json: String,
}

/// Replays canned recognizer output, for exercising the pipeline without a
/// model on disk.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    steps: VecDeque<ScriptStep>,
    flush_json: String,
    current: Option<ScriptStep>,
    chunk_sizes: Vec<usize>,
    flush_count: usize,
    initialized: bool,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            flush_json: "{}".to_string(),
            ..Default::default()
        }
    }

    /// Next chunk ends an utterance; `result` returns `json`.
    pub fn complete(mut self, json: &str) -> Self {
        self.steps.push_back(ScriptStep {
            utterance: Utterance::Complete,
            json: json.to_string(),
        });
        self
    }

    /// Next chunk leaves the utterance open; `partial_result` returns `json`.
    pub fn incomplete(mut self, json: &str) -> Self {
        self.steps.push_back(ScriptStep {
            utterance: Utterance::Incomplete,
            json: json.to_string(),
        });
        self
    }

    /// What `final_result` returns.
    pub fn flush(mut self, json: &str) -> Self {
        self.flush_json = json.to_string();
        self
    }

    pub fn chunk_sizes(&self) -> &[usize] {
        &self.chunk_sizes
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    fn ensure_initialized(&self) -> Result<(), AsrError> {
        if self.initialized {
            Ok(())
        } else {
            Err(AsrError::NotInitialized(self.name().to_string()))
        }
    }

    fn current_json(&self, query: &str) -> Result<&str, AsrError> {
        self.current
            .as_ref()
            .map(|step| step.json.as_str())
            .ok_or_else(|| AsrError::ProcessingFailed(format!("{query} queried before any chunk")))
    }
}

impl SpeechEngine for ScriptedEngine {
    fn name(&self) -> &str {
        "scripted"
    }

    fn initialize(&mut self, _config: toml::Value) -> Result<(), AsrError> {
        self.initialized = true;
        Ok(())
    }

    fn accept_chunk(&mut self, chunk: &AudioChunk) -> Result<Utterance, AsrError> {
        self.ensure_initialized()?;
        self.chunk_sizes.push(chunk.len());
        // Past the end of the script the engine behaves like silence.
        let step = self.steps.pop_front().unwrap_or(ScriptStep {
            utterance: Utterance::Incomplete,
            json: r#"{"partial": ""}"#.to_string(),
        });
        let utterance = step.utterance;
        self.current = Some(step);
        Ok(utterance)
    }

    fn result(&mut self) -> Result<ResultRecord, AsrError> {
        self.ensure_initialized()?;
        Ok(ResultRecord::from_json(self.current_json("result")?))
    }

    fn partial_result(&mut self) -> Result<ResultRecord, AsrError> {
        self.ensure_initialized()?;
        Ok(ResultRecord::from_json(self.current_json("partial_result")?))
    }

    fn final_result(&mut self) -> Result<ResultRecord, AsrError> {
        self.ensure_initialized()?;
        self.flush_count += 1;
        Ok(ResultRecord::from_json(&self.flush_json))
    }
}
