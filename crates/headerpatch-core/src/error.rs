use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid --headers JSON: {0}")]
    InvalidHeaders(#[source] serde_json::Error),
    #[error("--headers must be a JSON object of key value pairs, got {0}")]
    HeadersNotObject(&'static str),
    #[error("unable to scan directory {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Process exit status for this error. clap reserves 2 for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidHeaders(_) | Error::HeadersNotObject(_) => 3,
            Error::Scan { .. } => 4,
            Error::Read { .. } | Error::Parse { .. } => 5,
            Error::Encode { .. } | Error::Write { .. } => 6,
        }
    }
}
