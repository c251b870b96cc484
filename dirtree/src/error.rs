use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn read_dir<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Error {
        Error::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// The underlying IO error kind, whichever variant this is.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Error::ReadDir { source, .. } => source.kind(),
            Error::Io(err) => err.kind(),
        }
    }
}
