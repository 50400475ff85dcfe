//! Providers of cgroup membership text.
//!
//! The resolver never touches the filesystem directly. It reads through a [`CgroupSource`],
//! which is either the real procfs file ([`ProcFile`]) or fixed content ([`StaticSource`]).
mod error;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub use error::{Error, Result};

use crate::error::ResultOkLogExt;
use crate::fsutil;

/// Location of the cgroup membership file of the current process.
pub const DEFAULT_CGROUP_PATH: &str = "/proc/self/cgroup";

/// A readable provider of cgroup membership lines.
pub trait CgroupSource {
    /// Lines of the source, read lazily and only once.
    type Lines: Iterator<Item = io::Result<String>>;

    /// Returns whether the source exists at all.
    fn exists(&self) -> bool;

    /// Returns whether the source can be read by the current process.
    fn is_readable(&self) -> bool;

    /// Opens the source and returns its lines.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the source cannot be opened.
    fn lines(&self) -> Result<Self::Lines>;
}

/// A cgroup file on disk, `/proc/self/cgroup` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFile {
    path: PathBuf,
}

impl ProcFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProcFile {
    fn default() -> Self {
        Self::new(DEFAULT_CGROUP_PATH)
    }
}

/// Lines of a reader, split on `\n` with a trailing `\r` removed.
///
/// Invalid UTF-8 is replaced with `U+FFFD` instead of failing the line, so a single garbled
/// line does not end the scan.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl CgroupSource for ProcFile {
    type Lines = LossyLines<BufReader<File>>;

    fn exists(&self) -> bool {
        fsutil::path_exists(&self.path)
            .ok_log("failed to locate cgroup file")
            .unwrap_or(false)
    }

    fn is_readable(&self) -> bool {
        fsutil::is_readable(&self.path)
    }

    fn lines(&self) -> Result<Self::Lines> {
        Ok(LossyLines::new(fsutil::open_file_reader(&self.path)?))
    }
}

/// Fixed cgroup content, or a source that is missing entirely.
///
/// # Examples
///
/// ```
/// use cgroup_identity::source::{CgroupSource, StaticSource};
///
/// let source = StaticSource::new("0::/docker/abc\n");
/// assert!(source.exists());
/// assert!(!StaticSource::missing().exists());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    content: Option<String>,
}

impl StaticSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl CgroupSource for StaticSource {
    type Lines = std::vec::IntoIter<io::Result<String>>;

    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn is_readable(&self) -> bool {
        self.content.is_some()
    }

    fn lines(&self) -> Result<Self::Lines> {
        let lines: Vec<_> = self
            .content
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(|line| Ok(line.to_owned()))
            .collect();
        Ok(lines.into_iter())
    }
}
