use sha1::{Digest, Sha1};

/// Field separator inside the hashed identity tuple
pub const ID_SEPARATOR: &str = "|";

/// Stable chunk identifier.
///
/// Lowercase hex SHA-1 over the UTF-8 bytes of
/// `{meeting_key}|{chunk_index}|{text}`, with the index in plain decimal and
/// `text` exactly as emitted (overlap included). Any implementation hashing
/// the same bytes gets the same 40-character id.
pub fn chunk_id(meeting_key: &str, chunk_index: usize, text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(meeting_key.as_bytes());
    hasher.update(ID_SEPARATOR.as_bytes());
    hasher.update(chunk_index.to_string().as_bytes());
    hasher.update(ID_SEPARATOR.as_bytes());
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            chunk_id("abc", 0, "text"),
            "611c2aece2c2e86972c32bbcfd7ba92bf200e464"
        );
        assert_eq!(
            chunk_id("m1", 0, "Para one."),
            "f669b3c5bbbe5b3107c6ccf8f1d54b0e09848fe0"
        );
    }

    #[test]
    fn test_each_field_changes_id() {
        let base = chunk_id("abc", 0, "text");
        assert_eq!(
            chunk_id("abc", 1, "text"),
            "987c483a3d341f5c881302774e5931d9edecdc6c"
        );
        assert_eq!(
            chunk_id("abd", 0, "text"),
            "bdd970e6df8913d2e21e13e3351b050d97ede8f5"
        );
        assert_ne!(chunk_id("abc", 0, "text "), base);
    }

    #[test]
    fn test_stable_and_fixed_length() {
        let a = chunk_id("meeting", 42, "같은 텍스트");
        let b = chunk_id("meeting", 42, "같은 텍스트");
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
