use std::fs;
use std::path::Path;

use crate::app::error::Result;

/// Read the whole file as UTF-8 text. Invalid UTF-8 is an error, not a lossy read.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Overwrite `path` with `text`, exactly as given.
///
/// Not atomic: a failure part-way through can leave a truncated file behind.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::AppError;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        write_text(&path, "line one\nline two").unwrap();
        assert_eq!(read_text(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        write_text(&path, "a much longer first version").unwrap();
        write_text(&path, "short").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::InvalidData));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("note.txt");
        assert!(write_text(&path, "x").is_err());
    }
}
