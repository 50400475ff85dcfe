use crate::fsutil;

/// Errors that may occur when opening a cgroup source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    FileOpen(#[from] fsutil::FileOpenError),
}

pub type Result<T> = std::result::Result<T, Error>;
