use crate::engine_trait::SpeechEngine;
use pcmscribe_core::{AsrError, AudioChunk, EventKind, TranscriptEvent, Utterance};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub chunks: usize,
    pub bytes: usize,
    pub partials: usize,
    pub finals: usize,
}

/// Drives one engine through a single audio stream.
///
/// Each chunk yields at most one event: a `FINAL` when the engine reports an
/// utterance boundary and the result text is non-empty, otherwise a
/// `PARTIAL` when the hypothesis is non-empty. [`finish`](Self::finish)
/// flushes the engine once and consumes the session.
pub struct TranscriptionSession<E: SpeechEngine + ?Sized> {
    engine: Box<E>,
    stats: SessionStats,
}

impl<E: SpeechEngine + ?Sized> TranscriptionSession<E> {
    /// The engine must already be initialized.
    pub fn new(engine: Box<E>) -> Self {
        tracing::info!(engine = engine.name(), "transcription session started");
        Self {
            engine,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn process_chunk(
        &mut self,
        chunk: &AudioChunk,
    ) -> Result<Option<TranscriptEvent>, AsrError> {
        self.stats.chunks += 1;
        self.stats.bytes += chunk.len();

        let event = match self.engine.accept_chunk(chunk)? {
            Utterance::Complete => {
                let record = self.engine.result()?;
                TranscriptEvent::new(EventKind::Final, record.text())
            }
            Utterance::Incomplete => {
                let record = self.engine.partial_result()?;
                TranscriptEvent::new(EventKind::Partial, record.partial())
            }
        };

        tracing::debug!(
            chunk = chunk.index,
            bytes = chunk.len(),
            event = ?event.as_ref().map(|e| e.kind),
            "chunk processed"
        );
        self.count(&event);
        Ok(event)
    }

    /// Flush the engine's buffered audio. Returns the last event, if any,
    /// together with the session totals.
    pub fn finish(mut self) -> Result<(Option<TranscriptEvent>, SessionStats), AsrError> {
        let record = self.engine.final_result()?;
        let event = TranscriptEvent::new(EventKind::Final, record.text());
        self.count(&event);
        tracing::info!(
            chunks = self.stats.chunks,
            bytes = self.stats.bytes,
            partials = self.stats.partials,
            finals = self.stats.finals,
            "transcription session finished"
        );
        Ok((event, self.stats))
    }

    fn count(&mut self, event: &Option<TranscriptEvent>) {
        match event.as_ref().map(|e| e.kind) {
            Some(EventKind::Partial) => self.stats.partials += 1,
            Some(EventKind::Final) => self.stats.finals += 1,
            None => {}
        }
    }
}
