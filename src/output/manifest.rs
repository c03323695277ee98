use crate::chunker::ChunkConfig;
use crate::transcript::IngestWarning;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Summary of one chunking run
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub config: ChunkConfig,
    pub inputs: Vec<InputFile>,
    pub stats: ManifestStats,
    pub warnings: Vec<IngestWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputFile {
    pub path: String,
    pub sha256: String,
    pub row_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestStats {
    pub file_count: usize,
    pub meeting_count: usize,
    pub chunk_count: usize,
    pub warning_count: usize,
}

impl Manifest {
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("chunkmaker v{}", env!("CARGO_PKG_VERSION")),
            config,
            inputs: Vec::new(),
            stats: ManifestStats::default(),
            warnings: Vec::new(),
        }
    }

    /// Write pretty-printed JSON to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .context(format!("Failed to create manifest: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("Failed to serialize manifest")?;
        writer.flush().context("Failed to flush manifest")?;
        Ok(())
    }
}
