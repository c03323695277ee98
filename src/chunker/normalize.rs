const BOM: char = '\u{feff}';

/// Canonicalize raw transcript text.
///
/// - Leading byte-order marks are dropped
/// - Escaped (`\\r\\n`, `\\n`, `\\r`) and real line endings become `\n`
/// - Each tab becomes a single space
/// - Runs of three or more newlines collapse to exactly two
/// - Surrounding whitespace is trimmed
///
/// Total and idempotent; empty input yields an empty string.
pub fn normalize_text(raw: &str) -> String {
    let text = raw.trim_start_matches(BOM);
    let text = text
        .replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\\r", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', " ");

    collapse_newlines(&text)
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_string()
}

fn collapse_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0;

    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run <= 2 {
                out.push(c);
            }
        } else {
            run = 0;
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings_and_tabs() {
        let raw = "\u{feff}Line1\\r\\nLine2\r\nLine3\rLine4\tTab\n\n\nLine5";
        assert_eq!(
            normalize_text(raw),
            "Line1\nLine2\nLine3\nLine4 Tab\n\nLine5"
        );
    }

    #[test]
    fn test_collapses_long_blank_runs() {
        assert_eq!(normalize_text("a\n\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\n\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\nb"), "a\nb");
    }

    #[test]
    fn test_trims_document_edges_only() {
        assert_eq!(normalize_text("  \n hello  world \n\n  "), "hello  world");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \t\r\n\\n "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "\u{feff}Hello\r\n\r\n\r\n\tWorld\\n",
            "  \u{feff}odd bom placement  ",
            "a\\\\nb",
            "one.\n \n \n two.\n\n\n\n",
        ];
        for raw in samples {
            let once = normalize_text(raw);
            assert_eq!(normalize_text(&once), once, "not idempotent for {:?}", raw);
        }
    }
}
