use crate::cgroup::ParseError;

/// Errors that may occur during strict parsing of cgroup content.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse cgroup line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
