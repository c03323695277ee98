use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Neither transcript text field has content
    MissingText,
    /// The file has no transcript column at all and was skipped
    MissingColumns,
    /// A record could not be decoded and was skipped
    MalformedRow,
}

/// A per-meeting or per-file problem that does not stop the batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestWarning {
    pub kind: WarningKind,
    pub source_file: String,
    pub row_index: Option<usize>,
    pub meeting_key: Option<String>,
    pub field: Option<String>,
    pub message: String,
}

impl IngestWarning {
    pub fn missing_text(source_file: &str, row_index: usize, meeting_key: &str, field: &str) -> Self {
        Self {
            kind: WarningKind::MissingText,
            source_file: source_file.to_string(),
            row_index: Some(row_index),
            meeting_key: Some(meeting_key.to_string()),
            field: Some(field.to_string()),
            message: format!("no transcript text in {}", field),
        }
    }

    pub fn missing_columns(source_file: &str, field: &str) -> Self {
        Self {
            kind: WarningKind::MissingColumns,
            source_file: source_file.to_string(),
            row_index: None,
            meeting_key: None,
            field: Some(field.to_string()),
            message: format!("no {} column; file skipped", field),
        }
    }

    pub fn malformed_row(source_file: &str, row_index: usize, error: &csv::Error) -> Self {
        Self {
            kind: WarningKind::MalformedRow,
            source_file: source_file.to_string(),
            row_index: Some(row_index),
            meeting_key: None,
            field: None,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source_file)?;
        if let Some(row) = self.row_index {
            write!(f, " row {}", row)?;
        }
        if let Some(key) = &self.meeting_key {
            write!(f, " [{}]", key)?;
        }
        write!(f, ": {}", self.message)
    }
}
