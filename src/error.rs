//! The single error type for the crate.
//!
//! Only `DegenerateAlphabet` is expected in normal use. The other variants
//! report inputs that did not come from a matching `compress`/`flatten`/`encode`
//! call and are surfaced instead of producing corrupted output.

use thiserror::Error;

use crate::min_heap::HeapErr;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// Fewer than two distinct symbols: no two-branch code tree exists.
    #[error("degenerate alphabet: need at least 2 distinct symbols, found {distinct}")]
    DegenerateAlphabet { distinct: usize },

    /// A flattened tree or message bit stream that no valid tree could produce.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("symbol {0:#04x} has no code in this tree")]
    UnknownSymbol(u8),

    #[error("priority queue error: {0}")]
    Heap(#[from] HeapErr),
}

impl HuffmanError {
    pub(crate) fn malformed<S: Into<String>>(message: S) -> Self {
        HuffmanError::MalformedEncoding(message.into())
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
