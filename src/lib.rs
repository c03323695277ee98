// Public API exports
pub mod batch;
pub mod chunker;
pub mod output;
pub mod transcript;

// Re-export main types for convenience
pub use chunker::{
    Chunk, ChunkConfig, ChunkError, ChunkedTranscript, DEFAULT_MAX_CHARS, DEFAULT_OVERLAP_CHARS,
    Strategy, chunk_id, chunk_normalized, chunk_transcript, normalize_text,
};

pub use transcript::{
    IngestError, IngestWarning, MeetingRecord, Transcript, WarningKind, discover_csv_files,
    read_transcripts,
};

pub use output::{ChunkRecord, DirectorySink, Manifest, RecordSink};

pub use batch::{MeetingOutput, process_files, process_transcript};
