use pcmscribe_core::{AudioChunk, SAMPLE_RATE_HZ};
use std::io::Cursor;

/// Something about the input that suggests it is not raw 16-bit PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatWarning {
    /// The file is a WAV container; its header will be streamed as samples.
    WavHeader {
        sample_rate: u32,
        channels: u16,
        bits_per_sample: u16,
    },
    /// An odd byte count cannot be whole 16-bit samples.
    OddLength(u64),
}

impl std::fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatWarning::WavHeader {
                sample_rate,
                channels,
                bits_per_sample,
            } => write!(
                f,
                "input is a WAV file ({sample_rate} Hz, {channels} ch, {bits_per_sample}-bit); \
                 expected headerless {SAMPLE_RATE_HZ} Hz mono 16-bit PCM"
            ),
            FormatWarning::OddLength(len) => {
                write!(f, "input length {len} is not a whole number of 16-bit samples")
            }
        }
    }
}

/// Detect a WAV container from the leading bytes of a stream.
pub fn inspect_header(header: &[u8]) -> Option<FormatWarning> {
    let wav = hound::WavReader::new(Cursor::new(header)).ok()?;
    let spec = wav.spec();
    Some(FormatWarning::WavHeader {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
    })
}

/// Flag a total byte count that cannot be whole 16-bit samples.
pub fn inspect_length(total_len: u64) -> Option<FormatWarning> {
    (total_len % 2 != 0).then_some(FormatWarning::OddLength(total_len))
}

/// Checks a stream against the raw 16 kHz mono 16-bit contract while it is
/// being read, so the source is only ever opened and read once.
///
/// Findings are logged as they are made; the stream is never rejected.
#[derive(Debug, Default)]
pub struct FormatInspector {
    seen_first_chunk: bool,
    total_bytes: u64,
    warnings: Vec<FormatWarning>,
}

impl FormatInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, chunk: &AudioChunk) {
        if !self.seen_first_chunk {
            self.seen_first_chunk = true;
            if let Some(warning) = inspect_header(&chunk.bytes) {
                self.record(warning);
            }
        }
        self.total_bytes += chunk.len() as u64;
    }

    /// Run the end-of-stream checks and return every finding.
    pub fn finish(mut self) -> Vec<FormatWarning> {
        if let Some(warning) = inspect_length(self.total_bytes) {
            self.record(warning);
        }
        self.warnings
    }

    fn record(&mut self, warning: FormatWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(sample_rate: u32, channels: u16) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..100i16 {
            writer.write_sample(i).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_inspect_header_clean_pcm() {
        assert!(inspect_header(&[0u8; 64]).is_none());
    }

    #[test]
    fn test_inspect_header_detects_wav() {
        let bytes = wav_bytes(44100, 2);
        assert_eq!(
            inspect_header(&bytes),
            Some(FormatWarning::WavHeader {
                sample_rate: 44100,
                channels: 2,
                bits_per_sample: 16,
            })
        );
    }

    #[test]
    fn test_inspect_length_detects_odd_length() {
        assert_eq!(inspect_length(3), Some(FormatWarning::OddLength(3)));
        assert_eq!(inspect_length(8000), None);
        assert_eq!(inspect_length(0), None);
    }

    #[test]
    fn test_inspect_header_truncated_riff_is_not_wav() {
        assert!(inspect_header(b"RIFF").is_none());
    }

    #[test]
    fn test_wav_warning_mentions_expected_format() {
        let warning = FormatWarning::WavHeader {
            sample_rate: 8000,
            channels: 1,
            bits_per_sample: 8,
        };
        let text = warning.to_string();
        assert!(text.contains("8000 Hz"));
        assert!(text.contains("16000 Hz mono 16-bit"));
    }

    #[test]
    fn test_inspector_checks_header_of_first_chunk_only() {
        let wav = wav_bytes(16000, 1);
        let mut inspector = FormatInspector::new();
        inspector.observe(&AudioChunk::new(0, vec![0u8; 4000]));
        inspector.observe(&AudioChunk::new(1, wav));
        assert!(inspector.finish().is_empty());
    }

    #[test]
    fn test_inspector_odd_length_uses_stream_total() {
        let mut inspector = FormatInspector::new();
        inspector.observe(&AudioChunk::new(0, vec![0u8; 4000]));
        inspector.observe(&AudioChunk::new(1, vec![0u8; 7]));
        assert_eq!(inspector.finish(), vec![FormatWarning::OddLength(4007)]);
    }

    #[test]
    fn test_inspector_empty_stream_is_clean() {
        assert!(FormatInspector::new().finish().is_empty());
    }
}
