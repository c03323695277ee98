use super::{ChunkRecord, JsonlWriter, TsvWriter};
use crate::transcript::MeetingRecord;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

pub const CHUNKS_JSONL: &str = "chunks.jsonl";
pub const CHUNKS_TSV: &str = "chunks.tsv";
pub const MEETINGS_JSONL: &str = "meetings.jsonl";

/// Destination for emitted records
pub trait RecordSink {
    fn write_chunk(&mut self, record: &ChunkRecord) -> Result<()>;

    fn write_meeting(&mut self, record: &MeetingRecord) -> Result<()>;
}

/// Writes `chunks.jsonl`, `chunks.tsv` and `meetings.jsonl` into a directory
pub struct DirectorySink {
    chunks: JsonlWriter<BufWriter<File>>,
    chunks_tsv: TsvWriter<BufWriter<File>>,
    meetings: JsonlWriter<BufWriter<File>>,
}

fn create(dir: &Path, name: &str) -> Result<BufWriter<File>> {
    let path = dir.join(name);
    let file = File::create(&path).context(format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

impl DirectorySink {
    /// Create the directory if needed and truncate the output files
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .context(format!("Failed to create output directory: {}", dir.display()))?;

        Ok(Self {
            chunks: JsonlWriter::new(create(dir, CHUNKS_JSONL)?),
            chunks_tsv: TsvWriter::new(create(dir, CHUNKS_TSV)?)?,
            meetings: JsonlWriter::new(create(dir, MEETINGS_JSONL)?),
        })
    }

    /// Flush every stream
    pub fn finish(self) -> Result<()> {
        self.chunks.finish()?;
        self.chunks_tsv.finish()?;
        self.meetings.finish()?;
        Ok(())
    }
}

impl RecordSink for DirectorySink {
    fn write_chunk(&mut self, record: &ChunkRecord) -> Result<()> {
        self.chunks.write(record)?;
        self.chunks_tsv.write(record)
    }

    fn write_meeting(&mut self, record: &MeetingRecord) -> Result<()> {
        self.meetings.write(record)
    }
}

/// Keeps records in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub chunks: Vec<ChunkRecord>,
    pub meetings: Vec<MeetingRecord>,
}

impl RecordSink for MemorySink {
    fn write_chunk(&mut self, record: &ChunkRecord) -> Result<()> {
        self.chunks.push(record.clone());
        Ok(())
    }

    fn write_meeting(&mut self, record: &MeetingRecord) -> Result<()> {
        self.meetings.push(record.clone());
        Ok(())
    }
}
