use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Stdin (or whatever we were slurping) failed, or was not UTF-8.
    #[error("failed to read input")]
    Read(#[source] io::Error),

    #[error("failed to write output")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
