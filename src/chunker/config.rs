use super::error::ChunkError;
use super::refine::Boundary;
use super::{DEFAULT_MAX_CHARS, DEFAULT_OVERLAP_CHARS};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Selects which boundary stages are tried, in order, before a span fits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Paragraphs, then sentences, then hard cuts
    #[default]
    Paragraphs,
    /// Sentences, then hard cuts
    Sentences,
    /// Hard cuts only
    Fixed,
}

impl Strategy {
    /// Refinement stages applied until every span fits the budget
    pub fn stages(self) -> &'static [Boundary] {
        match self {
            Strategy::Paragraphs => &[Boundary::Paragraph, Boundary::Sentence, Boundary::Hard],
            Strategy::Sentences => &[Boundary::Sentence, Boundary::Hard],
            Strategy::Fixed => &[Boundary::Hard],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Paragraphs => "paragraphs",
            Strategy::Sentences => "sentences",
            Strategy::Fixed => "fixed",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paragraphs" | "paragraph" => Ok(Strategy::Paragraphs),
            "sentences" | "sentence" => Ok(Strategy::Sentences),
            "fixed" | "hard" => Ok(Strategy::Fixed),
            other => Err(ChunkError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Validated chunking parameters.
///
/// Fields are private so a config with `max_chars == 0` cannot exist;
/// every splitting stage relies on that to make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkConfig {
    max_chars: usize,
    overlap_chars: usize,
    strategy: Strategy,
}

impl ChunkConfig {
    /// Build a config from raw (possibly negative) user input
    pub fn new(max_chars: i64, overlap_chars: i64, strategy: Strategy) -> Result<Self, ChunkError> {
        if max_chars <= 0 {
            return Err(ChunkError::InvalidMaxChars(max_chars));
        }
        if overlap_chars < 0 {
            return Err(ChunkError::InvalidOverlap(overlap_chars));
        }

        let config = Self {
            max_chars: max_chars as usize,
            overlap_chars: overlap_chars as usize,
            strategy,
        };

        if config.overlap_chars >= config.max_chars {
            tracing::warn!(
                max_chars = config.max_chars,
                overlap_chars = config.overlap_chars,
                "overlap is not smaller than the chunk budget; chunks will repeat most of their predecessor"
            );
        }

        Ok(config)
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn overlap_chars(&self) -> usize {
        self.overlap_chars
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            overlap_chars: DEFAULT_OVERLAP_CHARS,
            strategy: Strategy::Paragraphs,
        }
    }
}
