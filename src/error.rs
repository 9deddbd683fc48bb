// Thu Oct 15 2026 - Alex

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unexpected end of file at offset {offset}")]
    UnexpectedEndOfFile { offset: u64 },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, ParseError::UnexpectedEndOfFile { .. })
    }
}
