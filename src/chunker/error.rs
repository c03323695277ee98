use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("max_chars must be positive (got {0})")]
    InvalidMaxChars(i64),

    #[error("overlap_chars must not be negative (got {0})")]
    InvalidOverlap(i64),

    #[error("unknown chunking strategy: {0}")]
    UnknownStrategy(String),
}
