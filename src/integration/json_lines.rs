//! Recorded tracker output, one JSON object per line.
//!
//! ```text
//! {"boxes": [[12.0, 40.5, 98.0, 160.0]], "ids": [3]}
//! {"boxes": [], "ids": []}
//! ```

use std::io::BufRead;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Rect;
use crate::qualifier::{FrameObservation, InputError, TrackId};

use super::TrackSource;

#[derive(Debug, Error)]
pub enum JsonLinesError {
    #[error("failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line} is not a valid frame record: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: InputError,
    },
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    boxes: Vec<[f32; 4]>,
    ids: Vec<TrackId>,
}

/// `TrackSource` reading frame records from any buffered reader.
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> TrackSource for JsonLinesSource<R> {
    type Error = JsonLinesError;

    fn next_observation(&mut self) -> Result<Option<FrameObservation>, Self::Error> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_line(&mut self.buf)
                .map_err(|source| JsonLinesError::Io {
                    line: self.line + 1,
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }

            let record: FrameRecord =
                serde_json::from_str(text).map_err(|source| JsonLinesError::Json {
                    line: self.line,
                    source,
                })?;
            let boxes = record
                .boxes
                .iter()
                .map(|&[x1, y1, x2, y2]| Rect::new(x1, y1, x2, y2))
                .collect();
            let observation =
                FrameObservation::new(boxes, record.ids).map_err(|source| {
                    JsonLinesError::Invalid {
                        line: self.line,
                        source,
                    }
                })?;
            return Ok(Some(observation));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_frames_and_skips_blank_lines() {
        let input = "{\"boxes\": [[1, 2, 3, 4]], \"ids\": [7]}\n\n{\"boxes\": [], \"ids\": []}\n";
        let mut source = JsonLinesSource::new(input.as_bytes());

        let first = source.next_observation().unwrap().unwrap();
        assert_eq!(first.ids(), &[7]);
        assert_eq!(first.boxes()[0], Rect::new(1.0, 2.0, 3.0, 4.0));

        let second = source.next_observation().unwrap().unwrap();
        assert!(second.is_empty());
        assert_eq!(source.line(), 3);

        assert!(source.next_observation().unwrap().is_none());
    }

    #[test]
    fn test_bad_json_reports_line() {
        let input = "{\"boxes\": [], \"ids\": []}\nnot json\n";
        let mut source = JsonLinesSource::new(input.as_bytes());
        source.next_observation().unwrap();
        let err = source.next_observation().unwrap_err();
        assert!(matches!(err, JsonLinesError::Json { line: 2, .. }));
    }

    #[test]
    fn test_invalid_frame_reports_line() {
        let input = "{\"boxes\": [[0, 0, 1, 1]], \"ids\": [1, 2]}\n";
        let mut source = JsonLinesSource::new(input.as_bytes());
        let err = source.next_observation().unwrap_err();
        assert!(matches!(
            err,
            JsonLinesError::Invalid {
                line: 1,
                source: InputError::LengthMismatch { boxes: 1, ids: 2 }
            }
        ));
    }
}
