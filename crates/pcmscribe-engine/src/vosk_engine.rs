use crate::engine_trait::{require_str, require_u32, SpeechEngine};
use pcmscribe_core::{AsrError, AudioChunk, ResultRecord, Utterance};
use vosk::{CompleteResult, DecodingState, Model, Recognizer};

/// Kaldi recognizer from the Vosk library.
pub struct VoskEngine {
    recognizer: Option<Recognizer>,
    // Declared after the recognizer so it is dropped last.
    model: Option<Model>,
}

impl VoskEngine {
    pub fn new() -> Self {
        Self {
            recognizer: None,
            model: None,
        }
    }

    fn recognizer(&mut self) -> Result<&mut Recognizer, AsrError> {
        self.recognizer
            .as_mut()
            .ok_or_else(|| AsrError::NotInitialized("vosk".to_string()))
    }
}

impl Default for VoskEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn text_record(result: CompleteResult<'_>) -> ResultRecord {
    match result.single() {
        Some(single) => ResultRecord::with_text(single.text),
        None => {
            tracing::warn!("vosk returned alternatives instead of a single result");
            ResultRecord::default()
        }
    }
}

impl SpeechEngine for VoskEngine {
    fn name(&self) -> &str {
        "vosk"
    }

    fn initialize(&mut self, config: toml::Value) -> Result<(), AsrError> {
        let model_path = require_str(&config, "model_path")?;
        let sample_rate = require_u32(&config, "sample_rate")?;

        let model = Model::new(model_path).ok_or_else(|| {
            AsrError::InitializationFailed(format!("failed to load vosk model from {model_path:?}"))
        })?;
        let recognizer = Recognizer::new(&model, sample_rate as f32).ok_or_else(|| {
            AsrError::InitializationFailed(format!(
                "failed to create vosk recognizer at {sample_rate} Hz"
            ))
        })?;

        tracing::info!(model_path = %model_path, sample_rate, "VoskEngine initialized");
        self.recognizer = Some(recognizer);
        self.model = Some(model);
        Ok(())
    }

    fn accept_chunk(&mut self, chunk: &AudioChunk) -> Result<Utterance, AsrError> {
        let samples = chunk.samples_i16();
        let state = self
            .recognizer()?
            .accept_waveform(&samples)
            .map_err(|e| AsrError::ProcessingFailed(format!("{e:?}")))?;
        match state {
            DecodingState::Finalized => Ok(Utterance::Complete),
            DecodingState::Running => Ok(Utterance::Incomplete),
            DecodingState::Failed => Err(AsrError::ProcessingFailed(format!(
                "vosk decoding failed on chunk {}",
                chunk.index
            ))),
        }
    }

    fn result(&mut self) -> Result<ResultRecord, AsrError> {
        Ok(text_record(self.recognizer()?.result()))
    }

    fn partial_result(&mut self) -> Result<ResultRecord, AsrError> {
        let partial = self.recognizer()?.partial_result();
        Ok(ResultRecord::with_partial(partial.partial))
    }

    fn final_result(&mut self) -> Result<ResultRecord, AsrError> {
        Ok(text_record(self.recognizer()?.final_result()))
    }
}
