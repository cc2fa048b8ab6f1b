//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename pattern.
///
/// This prevents data corruption if the process is interrupted during write.
/// The content is first written to a temporary file, then atomically renamed
/// to the target path.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    // Atomic on POSIX systems
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        atomic_write(&path, "{}\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{}\n");

        // Temp file should not exist
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second");
    }
}
