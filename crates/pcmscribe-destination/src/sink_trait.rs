use pcmscribe_core::{DestinationError, TranscriptEvent};

/// Receives transcript events as they are produced.
pub trait TranscriptSink {
    /// Returns the sink's name (e.g. `"stdout"`).
    fn name(&self) -> &str;
    /// Deliver one event. Must not return until the event is visible to the
    /// consumer on the other side.
    fn emit(&mut self, event: &TranscriptEvent) -> Result<(), DestinationError>;
}
