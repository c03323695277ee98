use super::ChunkRecord;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::Write;

pub const TSV_COLUMNS: [&str; 8] = [
    "chunk_id",
    "meeting_key",
    "date_ymd",
    "meeting_name",
    "chunk_index",
    "char_start",
    "char_end",
    "text",
];

/// Escape a field so it stays on one line and in one column
pub fn escape_tsv(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '\t', '\n', '\r']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Tab-separated chunk table with a header row
pub struct TsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(mut inner: W) -> Result<Self> {
        writeln!(inner, "{}", TSV_COLUMNS.join("\t")).context("Failed to write TSV header")?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, record: &ChunkRecord) -> Result<()> {
        writeln!(
            self.inner,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            escape_tsv(&record.chunk_id),
            escape_tsv(&record.meeting_key),
            escape_tsv(&record.date_ymd),
            escape_tsv(&record.meeting_name),
            record.chunk_index,
            record.char_start,
            record.char_end,
            escape_tsv(&record.text),
        )
        .context("Failed to write TSV row")
    }

    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().context("Failed to flush TSV output")?;
        Ok(self.inner)
    }
}
