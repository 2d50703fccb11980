//! Error types for MIDI output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport buffer full ({capacity} bytes)")]
    TransportFull { capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
