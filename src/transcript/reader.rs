use super::discover::hash_bytes;
use super::error::{IngestError, IngestWarning};
use super::fields::{TEXT_FIELDS, has_transcript_columns};
use super::{Row, Transcript};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything read from one CSV file
#[derive(Debug, Clone)]
pub struct CsvBatch {
    pub path: PathBuf,
    /// SHA-256 of the bytes that were parsed
    pub sha256: String,
    /// Data rows seen, including ones that were skipped
    pub row_count: usize,
    pub transcripts: Vec<Transcript>,
    pub warnings: Vec<IngestWarning>,
}

impl CsvBatch {
    fn empty(path: &Path, sha256: String) -> Self {
        Self {
            path: path.to_path_buf(),
            sha256,
            row_count: 0,
            transcripts: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Read every transcript row of a CSV export.
///
/// Files without a transcript column are skipped with a warning. Rows that
/// fail to decode are skipped with a warning; only I/O failures abort the
/// file.
pub fn read_transcripts(path: &Path) -> Result<CsvBatch, IngestError> {
    let source_file = path.display().to_string();
    let contents = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut batch = CsvBatch::empty(path, hash_bytes(&contents));

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(contents.as_slice());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    if !has_transcript_columns(&headers) {
        let warning = IngestWarning::missing_columns(&source_file, &TEXT_FIELDS.join("|"));
        tracing::warn!(%warning, "skipping file");
        batch.warnings.push(warning);
        return Ok(batch);
    }

    for (row_index, result) in reader.records().enumerate() {
        batch.row_count += 1;

        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => {
                return Err(IngestError::Csv {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                let warning = IngestWarning::malformed_row(&source_file, row_index, &err);
                tracing::warn!(%warning, "skipping row");
                batch.warnings.push(warning);
                continue;
            }
        };

        let row: Row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();

        batch
            .transcripts
            .push(Transcript::from_row(&row, row_index, Some(source_file.clone())));
    }

    tracing::debug!(
        path = %source_file,
        rows = batch.row_count,
        transcripts = batch.transcripts.len(),
        "read csv"
    );

    Ok(batch)
}
