use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// One JSON object per line
pub struct JsonlWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.inner, record).context("Failed to serialize record")?;
        self.inner.write_all(b"\n").context("Failed to write record")?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().context("Failed to flush JSONL output")?;
        Ok(self.inner)
    }
}
