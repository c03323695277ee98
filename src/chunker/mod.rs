mod config;
mod error;
mod id;
mod normalize;
mod overlap;
mod pipeline;
mod refine;
mod splitter;


pub use config::{ChunkConfig, Strategy};
pub use error::ChunkError;
pub use id::{ID_SEPARATOR, chunk_id};
pub use normalize::normalize_text;
pub use overlap::{StitchedSpan, stitch};
pub use pipeline::{Chunk, ChunkedTranscript, chunk_normalized, chunk_transcript, plan_spans};
pub use refine::{Boundary, refine};
pub use splitter::{Block, Span, merge_spans, split_into_blocks};

/// Default chunk budget, in characters
pub const DEFAULT_MAX_CHARS: usize = 1200;

/// Default trailing context copied into the next chunk, in characters
pub const DEFAULT_OVERLAP_CHARS: usize = 150;
