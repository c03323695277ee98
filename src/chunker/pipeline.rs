use super::config::ChunkConfig;
use super::id::chunk_id;
use super::normalize::normalize_text;
use super::overlap::stitch;
use super::refine::refine_with;
use super::splitter::Span;
use serde::Serialize;

/// One emitted chunk of a meeting transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    pub chunk_id: String,
    pub meeting_key: String,
    /// 0-based position within the meeting
    pub chunk_index: usize,
    /// Chunk content, overlap prefix included
    pub text: String,
    /// Start of the non-overlapped span, in characters of normalized text
    pub char_start: usize,
    /// End (exclusive) of the non-overlapped span
    pub char_end: usize,
}

/// Output of chunking a single transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedTranscript {
    pub normalized: String,
    /// Length of `normalized` in characters
    pub normalized_len: usize,
    pub chunks: Vec<Chunk>,
}

/// Base (non-overlapped) spans for normalized text under `config`.
///
/// Spans are non-empty, at most `max_chars` long, and tile the text.
pub fn plan_spans(text: &[char], config: &ChunkConfig) -> Vec<Span> {
    refine_with(
        text,
        Span::new(0, text.len()),
        config.max_chars(),
        config.strategy().stages(),
    )
}

/// Normalize and chunk one transcript
pub fn chunk_transcript(meeting_key: &str, raw_text: &str, config: &ChunkConfig) -> ChunkedTranscript {
    let normalized = normalize_text(raw_text);
    let normalized_len = normalized.chars().count();
    let chunks = chunk_normalized(meeting_key, &normalized, config);

    tracing::debug!(
        meeting_key,
        normalized_len,
        chunk_count = chunks.len(),
        "chunked transcript"
    );

    ChunkedTranscript {
        normalized,
        normalized_len,
        chunks,
    }
}

/// Chunk text that has already been normalized
pub fn chunk_normalized(meeting_key: &str, normalized: &str, config: &ChunkConfig) -> Vec<Chunk> {
    let text: Vec<char> = normalized.chars().collect();
    if text.is_empty() {
        return vec![];
    }

    let spans = plan_spans(&text, config);

    stitch(&text, &spans, config.overlap_chars())
        .into_iter()
        .enumerate()
        .map(|(chunk_index, stitched)| Chunk {
            chunk_id: chunk_id(meeting_key, chunk_index, &stitched.text),
            meeting_key: meeting_key.to_string(),
            chunk_index,
            text: stitched.text,
            char_start: stitched.span.start,
            char_end: stitched.span.end,
        })
        .collect()
}
