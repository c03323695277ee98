mod date;
mod discover;
mod error;
mod fields;
mod reader;


pub use date::{DATE_FIELDS, extract_date_ymd, normalize_date_string};
pub use discover::{discover_csv_files, hash_bytes};
pub use error::{IngestError, IngestWarning, WarningKind};
pub use fields::{TEXT_FIELDS, compute_meeting_key, has_transcript_columns, select_transcript};
pub use reader::{CsvBatch, read_transcripts};

use serde::Serialize;
use std::collections::HashMap;

/// One CSV row keyed by trimmed header name
pub type Row = HashMap<String, String>;

/// Where a meeting key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySource {
    /// The row's own `meeting_key` column
    Column,
    /// Hashed from name, date and row position
    Derived,
}

/// A meeting transcript as read from input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub meeting_key: String,
    pub key_source: KeySource,
    pub meeting_name: String,
    /// `YYYY-MM-DD`, or empty when no date could be found
    pub date_ymd: String,
    pub row_index: usize,
    /// Selected text field; `None` when every text field is empty
    pub raw_text: Option<String>,
    pub source_file: Option<String>,
}

impl Transcript {
    pub fn from_row(row: &Row, row_index: usize, source_file: Option<String>) -> Self {
        let meeting_name = row
            .get("name")
            .map(|name| name.trim().to_string())
            .unwrap_or_default();
        let date_ymd = extract_date_ymd(row, &meeting_name).unwrap_or_default();
        let (meeting_key, key_source) = compute_meeting_key(row, &meeting_name, &date_ymd, row_index);

        Self {
            meeting_key,
            key_source,
            meeting_name,
            date_ymd,
            row_index,
            raw_text: select_transcript(row).map(str::to_string),
            source_file,
        }
    }

    /// Whether the row carries anything worth a meeting record on its own
    pub fn has_metadata(&self) -> bool {
        self.key_source == KeySource::Column
            || !self.meeting_name.is_empty()
            || !self.date_ymd.is_empty()
    }
}

/// Meeting-level metadata, emitted once per meeting after chunking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRecord {
    pub meeting_key: String,
    pub date_ymd: String,
    pub meeting_name: String,
    pub row_index: usize,
    /// Normalized transcript length in characters
    pub transcript_char_len: usize,
    pub chunk_count: usize,
    pub source_file: Option<String>,
}

impl MeetingRecord {
    pub fn new(transcript: &Transcript, transcript_char_len: usize, chunk_count: usize) -> Self {
        Self {
            meeting_key: transcript.meeting_key.clone(),
            date_ymd: transcript.date_ymd.clone(),
            meeting_name: transcript.meeting_name.clone(),
            row_index: transcript.row_index,
            transcript_char_len,
            chunk_count,
            source_file: transcript.source_file.clone(),
        }
    }
}
