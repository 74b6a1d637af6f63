pub mod line_sink;
pub mod sink_trait;

pub use line_sink::LineSink;
pub use sink_trait::TranscriptSink;
