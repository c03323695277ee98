mod jsonl;
mod manifest;
mod sink;
mod tsv;


pub use jsonl::JsonlWriter;
pub use manifest::{InputFile, MANIFEST_FILE, Manifest, ManifestStats};
pub use sink::{CHUNKS_JSONL, CHUNKS_TSV, DirectorySink, MEETINGS_JSONL, MemorySink, RecordSink};
pub use tsv::{TSV_COLUMNS, TsvWriter, escape_tsv};

use crate::chunker::Chunk;
use crate::transcript::Transcript;
use serde::Serialize;

/// A chunk joined with the meeting fields downstream consumers filter on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    pub chunk_id: String,
    pub meeting_key: String,
    pub date_ymd: String,
    pub meeting_name: String,
    pub chunk_index: usize,
    pub char_start: usize,
    pub char_end: usize,
    pub text: String,
}

impl ChunkRecord {
    pub fn new(transcript: &Transcript, chunk: Chunk) -> Self {
        Self {
            chunk_id: chunk.chunk_id,
            meeting_key: chunk.meeting_key,
            date_ymd: transcript.date_ymd.clone(),
            meeting_name: transcript.meeting_name.clone(),
            chunk_index: chunk.chunk_index,
            char_start: chunk.char_start,
            char_end: chunk.char_end,
            text: chunk.text,
        }
    }
}
