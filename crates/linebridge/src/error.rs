//! Error — the failure surfaced by a bridge write.

use std::io;

use thiserror::Error;

use crate::parser::ParseError;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Field extraction failed; nothing from the chunk was emitted.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<BridgeError> for io::Error {
    fn from(err: BridgeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
