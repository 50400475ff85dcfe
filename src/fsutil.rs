use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Error that occurs when opening a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to open file `{path}`: {source}")]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Error that occurs when the existence of a path cannot be determined.
#[derive(Debug, thiserror::Error)]
#[error("failed to check if path `{path}` exists: {source}")]
pub struct ExistenceCheckError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Opens a file at the given path and wraps it in a [`BufReader`].
///
/// # Errors
///
/// Returns a [`FileOpenError`] if the file cannot be opened.
///
/// # Example
/// ```no_run
/// # use cgroup_identity::fsutil;
/// let reader = fsutil::open_file_reader("/proc/self/cgroup")?;
/// # Ok::<(), fsutil::FileOpenError>(())
/// ```
pub fn open_file_reader(path: impl AsRef<Path>) -> Result<BufReader<File>, FileOpenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileOpenError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Returns whether `path` exists. Broken symlinks are reported as missing.
///
/// # Errors
///
/// Returns an [`ExistenceCheckError`] if the existence can neither be confirmed nor denied,
/// e.g. because of missing permissions on a parent directory.
pub fn path_exists(path: impl AsRef<Path>) -> Result<bool, ExistenceCheckError> {
    let path = path.as_ref();
    path.try_exists().map_err(|source| ExistenceCheckError {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns whether the current process is able to open `path` for reading.
pub fn is_readable(path: impl AsRef<Path>) -> bool {
    File::open(path).is_ok()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_open_file_reader_success() {
        let tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        let reader = open_file_reader(tmp.path()).expect("should open test file");
        let metadata = reader.get_ref().metadata().unwrap();
        assert!(metadata.is_file());
    }

    #[test]
    fn test_open_file_reader_error() {
        let err = open_file_reader("/definitely/does/not/exist").unwrap_err();
        assert_eq!(err.path, PathBuf::from("/definitely/does/not/exist"));
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_path_exists() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(path_exists(tmp.path()).unwrap());
        assert!(!path_exists("/definitely/does/not/exist").unwrap());
    }

    #[test]
    #[cfg(target_family = "unix")]
    fn test_broken_symlink_does_not_exist() {
        let tempdir = tempfile::tempdir().unwrap();
        let symlink = tempdir.path().join("symlink");
        std::os::unix::fs::symlink(tempdir.path().join("non_existent"), &symlink).unwrap();

        assert!(!path_exists(&symlink).unwrap());
        assert!(!is_readable(&symlink));
    }

    #[test]
    fn test_is_readable() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(is_readable(tmp.path()));
        assert!(!is_readable("/definitely/does/not/exist"));
    }
}
