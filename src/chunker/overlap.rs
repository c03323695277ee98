use super::splitter::Span;

/// A base span with its overlap context applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchedSpan {
    /// The non-overlapped range this chunk is responsible for
    pub span: Span,
    /// How many characters of the previous chunk were prepended
    pub overlap: usize,
    /// Overlap prefix followed by the span's own text
    pub text: String,
}

/// Prepend the tail of each chunk's predecessor.
///
/// The tail comes from the predecessor's own span, never from its overlap,
/// and is capped at that span's length. Offsets are left untouched.
pub fn stitch(text: &[char], spans: &[Span], overlap_chars: usize) -> Vec<StitchedSpan> {
    let mut stitched = Vec::with_capacity(spans.len());
    let mut previous: Option<Span> = None;

    for span in spans {
        let (overlap, mut out) = match previous {
            Some(prev) if overlap_chars > 0 => {
                let take = overlap_chars.min(prev.len());
                let tail = Span::new(prev.end - take, prev.end);
                (take, tail.slice(text))
            }
            _ => (0, String::new()),
        };
        out.extend(&text[span.start..span.end]);

        stitched.push(StitchedSpan {
            span: *span,
            overlap,
            text: out,
        });
        previous = Some(*span);
    }

    stitched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_first_chunk_has_no_overlap() {
        let text = chars("abcdefghij");
        let spans = [Span::new(0, 5), Span::new(5, 10)];
        let stitched = stitch(&text, &spans, 2);

        assert_eq!(stitched[0].text, "abcde");
        assert_eq!(stitched[0].overlap, 0);
        assert_eq!(stitched[1].text, "defghij");
        assert_eq!(stitched[1].overlap, 2);
        assert_eq!(stitched[1].span, Span::new(5, 10));
    }

    #[test]
    fn test_overlap_capped_at_previous_length() {
        let text = chars("ab cdefgh");
        let spans = [Span::new(0, 2), Span::new(2, 9)];
        let stitched = stitch(&text, &spans, 50);

        assert_eq!(stitched[1].overlap, 2);
        assert_eq!(stitched[1].text, "ab cdefgh");
    }

    #[test]
    fn test_overlap_never_reaches_past_previous_span() {
        let text = chars("aaaaBBcccc");
        let spans = [Span::new(0, 4), Span::new(4, 6), Span::new(6, 10)];
        let stitched = stitch(&text, &spans, 3);

        assert_eq!(stitched[2].text, "BBcccc");
    }

    #[test]
    fn test_zero_overlap_is_plain_slices() {
        let text = chars("hello world");
        let spans = [Span::new(0, 5), Span::new(5, 11)];
        let stitched = stitch(&text, &spans, 0);

        let joined: String = stitched.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "hello world");
        assert!(stitched.iter().all(|s| s.overlap == 0));
    }
}
