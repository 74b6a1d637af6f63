use pcmscribe_core::{AudioChunk, AudioError};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Yields fixed-size chunks from a byte source, front to back, once.
///
/// Every chunk holds exactly `chunk_bytes` bytes except the last, which
/// holds whatever remains. Iteration ends at the first read that returns
/// zero bytes; after an error the reader is exhausted.
pub struct ChunkReader<R> {
    source: R,
    chunk_bytes: usize,
    next_index: usize,
    done: bool,
}

impl ChunkReader<File> {
    pub fn open(path: &Path, chunk_bytes: usize) -> Result<Self, AudioError> {
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), chunk_bytes, "opened audio source");
        Ok(Self::new(file, chunk_bytes))
    }
}

impl<R: Read> ChunkReader<R> {
    pub fn new(source: R, chunk_bytes: usize) -> Self {
        assert!(chunk_bytes > 0, "chunk size must be non-zero");
        Self {
            source,
            chunk_bytes,
            next_index: 0,
            done: false,
        }
    }

    pub fn chunks_read(&self) -> usize {
        self.next_index
    }

    // Keeps reading until the buffer is full or the source reports EOF, so
    // short reads from pipes do not produce undersized chunks mid-stream.
    fn fill(&mut self) -> Result<Vec<u8>, AudioError> {
        let mut buf = vec![0u8; self.chunk_bytes];
        let mut filled = 0;
        while filled < buf.len() {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(AudioError::Read(e)),
            }
        }
        buf.truncate(filled);
        Ok(buf)
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<AudioChunk, AudioError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.fill() {
            Ok(bytes) if bytes.is_empty() => {
                self.done = true;
                None
            }
            Ok(bytes) => {
                if bytes.len() < self.chunk_bytes {
                    self.done = true;
                }
                let chunk = AudioChunk::new(self.next_index, bytes);
                self.next_index += 1;
                Some(Ok(chunk))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
