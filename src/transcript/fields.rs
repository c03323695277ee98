use super::{KeySource, Row};
use sha1::{Digest, Sha1};

/// Transcript text columns, most preferred first
pub const TEXT_FIELDS: [&str; 2] = ["content_clean", "content"];

/// Derived meeting keys keep this many hex characters
const DERIVED_KEY_LEN: usize = 12;

pub fn has_transcript_columns<S: AsRef<str>>(headers: &[S]) -> bool {
    headers
        .iter()
        .any(|h| TEXT_FIELDS.contains(&h.as_ref().trim()))
}

/// First text field holding non-blank content. When every non-empty field
/// is whitespace, the first of those is returned so it chunks to nothing
/// instead of counting as missing. `None` only when all fields are absent
/// or empty.
pub fn select_transcript(row: &Row) -> Option<&str> {
    let mut present = TEXT_FIELDS
        .iter()
        .filter_map(|field| row.get(*field))
        .map(String::as_str)
        .filter(|value| !value.is_empty());

    let first = present.next()?;
    if !first.trim().is_empty() {
        return Some(first);
    }
    Some(present.find(|value| !value.trim().is_empty()).unwrap_or(first))
}

/// The row's `meeting_key` column when present, otherwise the first 12 hex
/// characters of SHA-1 over `{name}|{date_ymd}|{row_index}`.
pub fn compute_meeting_key(
    row: &Row,
    meeting_name: &str,
    date_ymd: &str,
    row_index: usize,
) -> (String, KeySource) {
    if let Some(key) = row.get("meeting_key").map(|k| k.trim()).filter(|k| !k.is_empty()) {
        return (key.to_string(), KeySource::Column);
    }

    let payload = format!("{}|{}|{}", meeting_name, date_ymd, row_index);
    let digest = hex::encode(Sha1::digest(payload.as_bytes()));
    (digest[..DERIVED_KEY_LEN].to_string(), KeySource::Derived)
}
