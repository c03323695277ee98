use crate::chunker::{ChunkConfig, chunk_transcript};
use crate::output::{ChunkRecord, InputFile, Manifest, ManifestStats, RecordSink};
use crate::transcript::{IngestWarning, MeetingRecord, TEXT_FIELDS, Transcript, read_transcripts};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything produced for one meeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingOutput {
    /// `None` when the row had neither text nor metadata
    pub meeting: Option<MeetingRecord>,
    pub chunks: Vec<ChunkRecord>,
    pub warning: Option<IngestWarning>,
}

/// Chunk a single transcript. Pure apart from logging.
pub fn process_transcript(transcript: &Transcript, config: &ChunkConfig) -> MeetingOutput {
    let Some(raw_text) = transcript.raw_text.as_deref() else {
        let warning = IngestWarning::missing_text(
            transcript.source_file.as_deref().unwrap_or("<memory>"),
            transcript.row_index,
            &transcript.meeting_key,
            &TEXT_FIELDS.join("|"),
        );
        tracing::warn!(%warning, "no transcript text");

        return MeetingOutput {
            meeting: transcript
                .has_metadata()
                .then(|| MeetingRecord::new(transcript, 0, 0)),
            chunks: Vec::new(),
            warning: Some(warning),
        };
    };

    let chunked = chunk_transcript(&transcript.meeting_key, raw_text, config);
    let meeting = MeetingRecord::new(transcript, chunked.normalized_len, chunked.chunks.len());
    let chunks = chunked
        .chunks
        .into_iter()
        .map(|chunk| ChunkRecord::new(transcript, chunk))
        .collect();

    MeetingOutput {
        meeting: Some(meeting),
        chunks,
        warning: None,
    }
}

/// Read, chunk and emit every input file in order.
///
/// A file that cannot be opened is logged and skipped. Per-row problems
/// become warnings in the returned manifest. Only sink failures abort.
pub fn process_files(
    paths: &[PathBuf],
    config: &ChunkConfig,
    sink: &mut dyn RecordSink,
) -> Result<Manifest> {
    let mut manifest = Manifest::new(*config);
    let mut stats = ManifestStats::default();

    for path in paths {
        let batch = match read_transcripts(path) {
            Ok(batch) => batch,
            Err(err) => {
                tracing::error!(error = %err, "skipping unreadable input");
                continue;
            }
        };

        manifest.inputs.push(InputFile {
            path: path.display().to_string(),
            sha256: batch.sha256.clone(),
            row_count: batch.row_count,
        });
        stats.file_count += 1;
        manifest.warnings.extend(batch.warnings);

        for transcript in &batch.transcripts {
            let output = process_transcript(transcript, config);

            for chunk in &output.chunks {
                sink.write_chunk(chunk)
                    .context(format!("Failed to write chunks for {}", transcript.meeting_key))?;
            }
            stats.chunk_count += output.chunks.len();

            if let Some(meeting) = &output.meeting {
                sink.write_meeting(meeting)
                    .context(format!("Failed to write meeting {}", transcript.meeting_key))?;
                stats.meeting_count += 1;
            }
            manifest.warnings.extend(output.warning);
        }

        tracing::info!(
            path = %path.display(),
            meetings = batch.transcripts.len(),
            "processed input"
        );
    }

    stats.warning_count = manifest.warnings.len();
    manifest.stats = stats;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::Strategy;
    use crate::output::MemorySink;
    use crate::transcript::{KeySource, WarningKind};
    use std::fs;
    use tempfile::TempDir;

    fn transcript(raw_text: Option<&str>, name: &str) -> Transcript {
        Transcript {
            meeting_key: "mk".to_string(),
            key_source: KeySource::Derived,
            meeting_name: name.to_string(),
            date_ymd: String::new(),
            row_index: 4,
            raw_text: raw_text.map(str::to_string),
            source_file: Some("in.csv".to_string()),
        }
    }

    #[test]
    fn test_missing_text_emits_empty_meeting_and_warning() {
        let config = ChunkConfig::default();
        let output = process_transcript(&transcript(None, "Planning"), &config);

        assert!(output.chunks.is_empty());
        let meeting = output.meeting.unwrap();
        assert_eq!(meeting.chunk_count, 0);
        assert_eq!(meeting.meeting_name, "Planning");

        let warning = output.warning.unwrap();
        assert_eq!(warning.kind, WarningKind::MissingText);
        assert_eq!(warning.meeting_key.as_deref(), Some("mk"));
        assert_eq!(warning.row_index, Some(4));
        assert_eq!(warning.field.as_deref(), Some("content_clean|content"));
    }

    #[test]
    fn test_missing_text_without_metadata_only_warns() {
        let output = process_transcript(&transcript(None, ""), &ChunkConfig::default());
        assert!(output.meeting.is_none());
        assert!(output.warning.is_some());
    }

    #[test]
    fn test_missing_text_warning_is_deterministic() {
        let t = transcript(None, "Planning");
        let config = ChunkConfig::default();
        assert_eq!(process_transcript(&t, &config), process_transcript(&t, &config));
    }

    #[test]
    fn test_whitespace_transcript_has_zero_chunks_and_no_warning() {
        let output = process_transcript(&transcript(Some(" \n\t "), "Quiet"), &ChunkConfig::default());
        assert!(output.chunks.is_empty());
        assert!(output.warning.is_none());
        assert_eq!(output.meeting.unwrap().transcript_char_len, 0);
    }

    #[test]
    fn test_chunk_records_carry_meeting_fields() {
        let config = ChunkConfig::new(10, 0, Strategy::Paragraphs).unwrap();
        let output = process_transcript(&transcript(Some("First one.\n\nSecond."), "Sync"), &config);

        assert_eq!(output.chunks.len(), 2);
        assert!(output.chunks.iter().all(|c| c.meeting_name == "Sync" && c.meeting_key == "mk"));
        assert_eq!(output.meeting.unwrap().chunk_count, 2);
    }

    #[test]
    fn test_process_files_continues_past_bad_rows_and_files() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.csv");
        fs::write(
            &good,
            "name,content\nAlpha,Hello there. General greeting.\nBeta,\nGamma,Short.\n",
        )
        .unwrap();
        let skipped = dir.path().join("skipped.csv");
        fs::write(&skipped, "id\n1\n").unwrap();
        let missing = dir.path().join("missing.csv");

        let config = ChunkConfig::new(15, 3, Strategy::Paragraphs).unwrap();
        let mut sink = MemorySink::default();
        let manifest = process_files(&[good, skipped, missing], &config, &mut sink).unwrap();

        assert_eq!(sink.meetings.len(), 3);
        assert_eq!(sink.meetings[1].chunk_count, 0);
        assert_eq!(sink.chunks.iter().filter(|c| c.meeting_name == "Alpha").count(), 3);
        assert_eq!(sink.chunks.iter().filter(|c| c.meeting_name == "Gamma").count(), 1);

        assert_eq!(manifest.stats.file_count, 2);
        assert_eq!(manifest.stats.meeting_count, 3);
        assert_eq!(manifest.stats.chunk_count, sink.chunks.len());
        assert_eq!(manifest.stats.warning_count, 2);
        let kinds: Vec<WarningKind> = manifest.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::MissingText, WarningKind::MissingColumns]);
    }

    #[test]
    fn test_blank_csv_text_is_degenerate_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quiet.csv");
        let contents = "name,content_clean,content\nQuiet,,\"   \"\nSilent,\"\t\",\n";
        fs::write(&path, contents).unwrap();

        let config = ChunkConfig::default();
        let mut sink = MemorySink::default();
        let manifest = process_files(&[path], &config, &mut sink).unwrap();

        assert!(sink.chunks.is_empty());
        assert_eq!(sink.meetings.len(), 2);
        for meeting in &sink.meetings {
            assert_eq!(meeting.chunk_count, 0);
            assert_eq!(meeting.transcript_char_len, 0);
        }
        assert!(manifest.warnings.is_empty());
        assert_eq!(manifest.inputs[0].sha256, crate::transcript::hash_bytes(contents.as_bytes()));
    }
}
