use shared_types::ExtractionError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole input file as text, dropping byte sequences that are not UTF-8.
pub fn read_source(path: &Path) -> Result<String, ExtractionError> {
    let content = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExtractionError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ExtractionError::ReadError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(decode_permissive(&content))
}

pub fn decode_permissive(content: &[u8]) -> String {
    let mut text = String::with_capacity(content.len());
    for chunk in content.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"ali\xffce@exa\xc3mple.com";
        assert_eq!(decode_permissive(bytes), "alice@example.com");
    }

    #[test]
    fn test_byte_order_mark_removed() {
        let bytes = b"\xef\xbb\xbfEmail\nx@example.com";
        assert_eq!(decode_permissive(bytes), "Email\nx@example.com");
    }

    #[test]
    fn test_multibyte_text_preserved() {
        assert_eq!(decode_permissive("José,jose@example.com".as_bytes()), "José,jose@example.com");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        match read_source(&path) {
            Err(ExtractionError::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();

        match read_source(dir.path()) {
            Err(ExtractionError::ReadError { .. }) => {}
            other => panic!("Expected ReadError, got {:?}", other),
        }
    }
}
