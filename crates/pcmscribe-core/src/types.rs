use crate::error::ParseEventError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// One read from the audio source: raw little-endian 16-bit PCM bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    pub index: usize,
    pub bytes: Vec<u8>,
}

impl AudioChunk {
    pub fn new(index: usize, bytes: Vec<u8>) -> Self {
        Self { index, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the bytes as signed 16-bit little-endian samples.
    /// A trailing odd byte cannot form a sample and is dropped.
    pub fn samples_i16(&self) -> Vec<i16> {
        self.bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }
}

/// Whether the recognizer judged an utterance boundary after a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utterance {
    Complete,
    Incomplete,
}

/// Structured result as returned by a recognizer query. Only `text` and
/// `partial` are read; every other key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub partial: Option<String>,
}

impl ResultRecord {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            partial: None,
        }
    }

    pub fn with_partial(partial: impl Into<String>) -> Self {
        Self {
            text: None,
            partial: Some(partial.into()),
        }
    }

    /// Parse a recognizer's JSON result. Anything unparseable is treated as
    /// an empty record.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("malformed recognizer result, treating as empty: {e}");
                Self::default()
            }
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default().trim()
    }

    pub fn partial(&self) -> &str {
        self.partial.as_deref().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Partial,
    Final,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Partial => "PARTIAL",
            EventKind::Final => "FINAL",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A line of the transcript protocol: `PARTIAL <text>` or `FINAL <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEvent {
    pub kind: EventKind,
    pub text: String,
}

impl TranscriptEvent {
    /// Returns `None` when the text is empty after trimming.
    pub fn new(kind: EventKind, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            text: text.to_string(),
        })
    }

    pub fn is_final(&self) -> bool {
        self.kind == EventKind::Final
    }
}

impl fmt::Display for TranscriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.text)
    }
}

impl FromStr for TranscriptEvent {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (kind, rest) = if let Some(rest) = line.strip_prefix("PARTIAL ") {
            (EventKind::Partial, rest)
        } else if let Some(rest) = line.strip_prefix("FINAL ") {
            (EventKind::Final, rest)
        } else {
            return Err(ParseEventError::UnknownKind(line.to_string()));
        };
        TranscriptEvent::new(kind, rest).ok_or_else(|| ParseEventError::EmptyText(line.to_string()))
    }
}
