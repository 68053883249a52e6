use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a YAML document from disk
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a YAML document, creating parent directories as needed
pub fn write_document(path: &Path, content: &str) -> Result<(), IoError> {
    let io_err = |source: std::io::Error| IoError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    fs::write(path, content).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.yaml");
        fs::write(&path, "a: b\n").unwrap();

        assert_eq!(read_document(&path).unwrap(), "a: b\n");
    }

    #[test]
    fn test_read_document_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_document(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_document_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folder").join("subfolder").join("out.yaml");

        write_document(&path, "x: 1\n").unwrap();

        assert_eq!(read_document(&path).unwrap(), "x: 1\n");
        assert!(dir.path().join("folder").join("subfolder").is_dir());
    }

    #[test]
    fn test_write_document_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("existing.yaml");
        fs::write(&path, "old: true\n").unwrap();

        write_document(&path, "new: true\n").unwrap();

        assert_eq!(read_document(&path).unwrap(), "new: true\n");
    }

    #[test]
    fn test_write_document_into_directory_fails() {
        let dir = TempDir::new().unwrap();
        let result = write_document(dir.path(), "x: 1\n");
        assert!(matches!(result, Err(IoError::Io { .. })));
    }
}
