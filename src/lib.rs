//! # rust_huffman
//!
//! Huffman coding over 8-bit symbols, kept entirely in memory.
//!
//! A tree is built from symbol counts, flattened into pre-order shape bits
//! plus leaf symbols, and used to encode the message as a bit sequence. The
//! three sequences together form a [`CompressedData`] record, which is enough
//! to rebuild the tree and the original text.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_huffman::{compress, decompress};
//!
//! let data = compress("STREETTEST")?;
//! assert_eq!(data.leaves(), b"TRSE");
//! assert_eq!(decompress(&data)?, b"STREETTEST");
//! # Ok::<(), rust_huffman::HuffmanError>(())
//! ```
//!
//! Packing the bit sequences into bytes for storage is left to the caller.

pub mod bit_vec;
pub mod compressed_data;
pub mod error;
pub mod huffman_codec;
pub mod hufftree;
pub mod metadata;
pub mod tree_shape;

// Internal modules - not part of public API
mod min_heap;

// Re-export main types for convenience
pub use bit_vec::{BitSeq, Bits};
pub use compressed_data::{compress, decompress, CompressedData};
pub use error::{HuffmanError, Result};
pub use huffman_codec::{decode_text, encode_text, HuffmanCodec};
pub use hufftree::{CodeTable, FrequencyTable, HuffNode, HuffmanTree};
pub use metadata::Metadata;
pub use min_heap::HeapErr;
pub use tree_shape::FlatTree;

/// Builds the optimal code tree for `text`. See [`HuffmanTree::build`].
pub fn build_tree(text: &[u8]) -> Result<HuffmanTree> {
    HuffmanTree::build(text)
}

/// Flattens `tree` into pre-order shape bits and leaf symbols.
pub fn flatten_tree(tree: &HuffmanTree) -> FlatTree {
    tree_shape::flatten(tree)
}

/// Rebuilds a tree from shape bits and leaf symbols. Two empty sequences give
/// `Ok(None)`.
pub fn unflatten_tree(shape: &BitSeq, leaves: &[u8]) -> Result<Option<HuffmanTree>> {
    tree_shape::unflatten(shape, leaves)
}
