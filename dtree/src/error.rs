use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Clap(#[from] clap::Error),
    #[error("{0}")]
    TreeError(#[from] dirtree::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
