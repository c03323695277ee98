use serde::Serialize;

/// Half-open range of character offsets into normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Collect the characters covered by this span
    pub fn slice(&self, text: &[char]) -> String {
        text[self.start..self.end].iter().collect()
    }
}

/// A paragraph-level unit. Each block owns the separator that precedes it,
/// so consecutive blocks tile the text with no gaps.
pub type Block = Span;

/// Split normalized text into paragraph blocks.
///
/// A separator is a newline followed by any whitespace containing at least
/// one more newline. The separator is kept at the head of the block after
/// it, which keeps the first block free of leading whitespace.
pub fn split_into_blocks(text: &[char]) -> Vec<Block> {
    paragraph_spans(text, Span::new(0, text.len()))
}

pub(crate) fn paragraph_spans(text: &[char], span: Span) -> Vec<Span> {
    let mut blocks = Vec::new();
    let mut start = span.start;
    let mut i = span.start;

    while i < span.end {
        if text[i] != '\n' {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        let mut newlines = 1;
        while j < span.end && text[j].is_whitespace() {
            if text[j] == '\n' {
                newlines += 1;
            }
            j += 1;
        }

        // A separator at the head of the span is leading whitespace, not a cut
        if newlines >= 2 && i > start && j < span.end {
            blocks.push(Span::new(start, i));
            start = i;
        }
        i = j;
    }

    if start < span.end {
        blocks.push(Span::new(start, span.end));
    }

    blocks
}

/// Greedily merge contiguous units: keep extending the open candidate
/// while it stays within `max_chars`, otherwise close it and start over
/// with the unit that didn't fit. Oversized units pass through alone.
pub fn merge_spans(units: &[Span], max_chars: usize) -> Vec<Span> {
    let mut merged = Vec::new();
    let mut current: Option<Span> = None;

    for unit in units {
        current = match current {
            Some(open) if unit.end - open.start <= max_chars => Some(Span::new(open.start, unit.end)),
            Some(open) => {
                merged.push(open);
                Some(*unit)
            }
            None => Some(*unit),
        };
    }

    merged.extend(current);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn texts(text: &[char], spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.slice(text)).collect()
    }

    #[test]
    fn test_blocks_tile_text() {
        let text = chars("Para1 line.\n\nPara2 line.\n \n\nPara3 line.");
        let blocks = split_into_blocks(&text);

        assert_eq!(
            texts(&text, &blocks),
            vec!["Para1 line.", "\n\nPara2 line.", "\n \n\nPara3 line."]
        );
        assert_eq!(blocks.first().map(|b| b.start), Some(0));
        assert_eq!(blocks.last().map(|b| b.end), Some(text.len()));
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_single_newline_is_not_a_separator() {
        let text = chars("line one\nline two");
        assert_eq!(split_into_blocks(&text), vec![Span::new(0, text.len())]);
    }

    #[test]
    fn test_empty_text_has_no_blocks() {
        assert!(split_into_blocks(&[]).is_empty());
    }

    #[test]
    fn test_merge_respects_budget() {
        let units = vec![Span::new(0, 4), Span::new(4, 8), Span::new(8, 12)];
        assert_eq!(
            merge_spans(&units, 8),
            vec![Span::new(0, 8), Span::new(8, 12)]
        );
        assert_eq!(merge_spans(&units, 12), vec![Span::new(0, 12)]);
    }

    #[test]
    fn test_merge_keeps_oversized_unit_alone() {
        let units = vec![Span::new(0, 2), Span::new(2, 20), Span::new(20, 22)];
        assert_eq!(
            merge_spans(&units, 5),
            vec![Span::new(0, 2), Span::new(2, 20), Span::new(20, 22)]
        );
    }

    #[test]
    fn test_merge_is_deterministic() {
        let units: Vec<Span> = (0..50).map(|i| Span::new(i * 3, i * 3 + 3)).collect();
        assert_eq!(merge_spans(&units, 10), merge_spans(&units, 10));
    }
}
