use super::splitter::{Span, merge_spans, paragraph_spans};

/// A way of cutting a span into smaller contiguous units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Blank-line separated paragraphs
    Paragraph,
    /// `.`, `!` or `?` followed by whitespace
    Sentence,
    /// Exact `max_chars` cuts; always fits
    Hard,
}

impl Boundary {
    fn split(self, text: &[char], span: Span, max_chars: usize) -> Vec<Span> {
        match self {
            Boundary::Paragraph => paragraph_spans(text, span),
            Boundary::Sentence => sentence_spans(text, span),
            Boundary::Hard => hard_spans(span, max_chars),
        }
    }
}

/// Re-split an oversized candidate: sentences first, then hard cuts.
///
/// Every returned span is non-empty and at most `max_chars` long, and the
/// spans tile `candidate` in order. `max_chars` must be positive.
pub fn refine(text: &[char], candidate: Span, max_chars: usize) -> Vec<Span> {
    refine_with(text, candidate, max_chars, &[Boundary::Sentence, Boundary::Hard])
}

/// Apply `stages` in order until every span fits the budget.
///
/// Each stage cuts the span into units and greedily re-merges them; any
/// merged candidate still over budget moves on to the next stage. Within a
/// sentence stage the refined pieces are merged once more, so a hard-split
/// remainder can share a chunk with the following sentences. Running out of
/// stages falls back to hard cuts, so this always terminates.
pub(crate) fn refine_with(
    text: &[char],
    span: Span,
    max_chars: usize,
    stages: &[Boundary],
) -> Vec<Span> {
    debug_assert!(max_chars > 0);

    if span.len() <= max_chars {
        return if span.is_empty() { vec![] } else { vec![span] };
    }

    let Some((stage, rest)) = stages.split_first() else {
        return hard_spans(span, max_chars);
    };

    let units = stage.split(text, span, max_chars);
    let pieces: Vec<Span> = merge_spans(&units, max_chars)
        .into_iter()
        .flat_map(|candidate| refine_with(text, candidate, max_chars, rest))
        .collect();

    // Let the short tail of a hard-split sentence join the sentences after it
    if *stage == Boundary::Sentence {
        merge_spans(&pieces, max_chars)
    } else {
        pieces
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Cut after every sentence-ending mark that is followed by whitespace.
/// The whitespace stays at the head of the next fragment.
pub(crate) fn sentence_spans(text: &[char], span: Span) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = span.start;

    for i in span.start..span.end {
        let cut = i + 1;
        if is_sentence_end(text[i]) && cut < span.end && text[cut].is_whitespace() {
            spans.push(Span::new(start, cut));
            start = cut;
        }
    }

    if start < span.end {
        spans.push(Span::new(start, span.end));
    }

    spans
}

/// Fixed-width cuts. Each cut removes `max_chars` characters from the
/// remainder, so the loop strictly shrinks it.
pub(crate) fn hard_spans(span: Span, max_chars: usize) -> Vec<Span> {
    let step = max_chars.max(1);
    (span.start..span.end)
        .step_by(step)
        .map(|start| Span::new(start, (start + step).min(span.end)))
        .collect()
}
