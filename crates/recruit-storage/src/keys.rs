//! Unique object key generation.
//!
//! The uploaded file name is kept recognizable but made unique per
//! request: `portfolio/{stem}-{millis}-{suffix}.{ext}`. The timestamp
//! keeps keys sortable by upload time; the random suffix rules out
//! collisions within the same millisecond.

use chrono::Utc;
use uuid::Uuid;

const PREFIX: &str = "portfolio";
const MAX_STEM_LEN: usize = 80;

/// Derive a unique storage key for an uploaded portfolio file.
pub fn generate_object_key(original_filename: &str) -> String {
    let (stem, ext) = split_filename(original_filename);
    let stem = sanitize(stem);
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    let millis = Utc::now().timestamp_millis();

    match ext {
        Some(ext) => format!("{}/{}-{}-{}.{}", PREFIX, stem, millis, suffix, ext),
        None => format!("{}/{}-{}-{}", PREFIX, stem, millis, suffix),
    }
}

fn split_filename(filename: &str) -> (&str, Option<String>) {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            let ext: String = ext.chars().filter(char::is_ascii_alphanumeric).collect();
            if ext.is_empty() {
                (stem, None)
            } else {
                (stem, Some(ext))
            }
        }
        _ => (filename, None),
    }
}

/// Replace anything outside [A-Za-z0-9_-] and cap the length; an empty
/// result falls back to a fixed stem.
fn sanitize(part: &str) -> String {
    let cleaned: String = part
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .take(MAX_STEM_LEN)
        .collect();
    let trimmed = cleaned.trim_matches('-').to_string();
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_stem_and_extension() {
        let key = generate_object_key("resume.pdf");
        assert!(key.starts_with("portfolio/resume-"));
        assert!(key.ends_with(".pdf"));
    }

    #[test]
    fn test_keys_are_unique_for_same_filename() {
        let a = generate_object_key("resume.pdf");
        let b = generate_object_key("resume.pdf");
        assert_ne!(a, b);
    }

    #[test]
    fn test_sanitizes_unsafe_characters() {
        let key = generate_object_key("my portfolio (final)!.pdf");
        assert!(!key.contains(' '));
        assert!(!key.contains('('));
        assert!(key.ends_with(".pdf"));
    }

    #[test]
    fn test_no_extension() {
        let key = generate_object_key("README");
        assert!(key.starts_with("portfolio/README-"));
        assert!(!key.contains('.'));
    }

    #[test]
    fn test_empty_filename_falls_back() {
        let key = generate_object_key("");
        assert!(key.starts_with("portfolio/file-"));
    }

    #[test]
    fn test_no_path_traversal_in_key() {
        let key = generate_object_key("../../etc/passwd");
        assert!(!key.contains(".."));
        assert!(!key[PREFIX.len() + 1..].contains('/'));
    }
}
