use crate::sink_trait::TranscriptSink;
use pcmscribe_core::{DestinationError, TranscriptEvent};
use std::io::{self, Stdout, Write};

/// Writes each event as one `<KIND> <text>` line and flushes immediately.
pub struct LineSink<W: Write> {
    name: String,
    writer: W,
    lines_written: usize,
}

impl LineSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new("stdout", io::stdout())
    }
}

impl<W: Write> LineSink<W> {
    pub fn new(name: &str, writer: W) -> Self {
        Self {
            name: name.to_string(),
            writer,
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TranscriptSink for LineSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&mut self, event: &TranscriptEvent) -> Result<(), DestinationError> {
        writeln!(self.writer, "{event}")?;
        self.writer.flush()?;
        self.lines_written += 1;
        tracing::trace!(sink = %self.name, kind = %event.kind, "line written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcmscribe_core::EventKind;

    fn event(kind: EventKind, text: &str) -> TranscriptEvent {
        TranscriptEvent::new(kind, text).unwrap()
    }

    #[test]
    fn test_line_sink_name() {
        let sink = LineSink::new("memory", Vec::new());
        assert_eq!(sink.name(), "memory");
        assert_eq!(LineSink::stdout().name(), "stdout");
    }

    #[test]
    fn test_line_sink_writes_prefixed_lines() {
        let mut sink = LineSink::new("memory", Vec::new());
        sink.emit(&event(EventKind::Partial, "he")).unwrap();
        sink.emit(&event(EventKind::Final, "hello")).unwrap();
        assert_eq!(sink.lines_written(), 2);
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "PARTIAL he\nFINAL hello\n");
    }

    #[test]
    fn test_line_sink_keeps_utf8() {
        let mut sink = LineSink::new("memory", Vec::new());
        sink.emit(&event(EventKind::Final, "привет мир")).unwrap();
        assert_eq!(sink.get_ref().as_slice(), "FINAL привет мир\n".as_bytes());
    }

    /// Records how many bytes were written before each flush.
    #[derive(Default)]
    struct FlushProbe {
        buf: Vec<u8>,
        flushed_at: Vec<usize>,
    }

    impl Write for FlushProbe {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed_at.push(self.buf.len());
            Ok(())
        }
    }

    #[test]
    fn test_line_sink_flushes_after_every_line() {
        let mut sink = LineSink::new("probe", FlushProbe::default());
        sink.emit(&event(EventKind::Partial, "a")).unwrap();
        sink.emit(&event(EventKind::Final, "ab")).unwrap();
        let probe = sink.into_inner();
        assert_eq!(probe.flushed_at, vec!["PARTIAL a\n".len(), "PARTIAL a\nFINAL ab\n".len()]);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_line_sink_write_failure_is_reported() {
        let mut sink = LineSink::new("pipe", ClosedPipe);
        let result = sink.emit(&event(EventKind::Final, "x"));
        assert!(matches!(result, Err(DestinationError::WriteFailed(_))));
        assert_eq!(sink.lines_written(), 0);
    }
}
