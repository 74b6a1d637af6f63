use anyhow::{Context, Result};
use pcmscribe_audio::{ChunkReader, FormatInspector};
use pcmscribe_core::StreamConfig;
use pcmscribe_destination::TranscriptSink;
use pcmscribe_engine::{SessionStats, SpeechEngine, TranscriptionSession};

/// Stream the configured audio file through an initialized engine, writing
/// every event to `sink` as soon as it is produced.
pub fn run<E, S>(engine: Box<E>, config: &StreamConfig, sink: &mut S) -> Result<SessionStats>
where
    E: SpeechEngine + ?Sized,
    S: TranscriptSink,
{
    // Opened exactly once: the path may be a pipe that cannot be re-read.
    let reader = ChunkReader::open(&config.audio_path, config.chunk_bytes)?;
    let mut inspector = FormatInspector::new();

    let mut session = TranscriptionSession::new(engine);
    for chunk in reader {
        let chunk = chunk.with_context(|| format!("failed to read {:?}", config.audio_path))?;
        inspector.observe(&chunk);
        let event = session
            .process_chunk(&chunk)
            .with_context(|| format!("recognizer failed on chunk {}", chunk.index))?;
        if let Some(event) = event {
            sink.emit(&event)
                .with_context(|| format!("failed to write to {}", sink.name()))?;
        }
    }

    inspector.finish();

    let (event, stats) = session.finish().context("recognizer failed on final flush")?;
    if let Some(event) = event {
        sink.emit(&event)
            .with_context(|| format!("failed to write to {}", sink.name()))?;
    }
    Ok(stats)
}
