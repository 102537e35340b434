use crate::bit_vec::{BitSeq, Bits};
use crate::error::{HuffmanError, Result};
use crate::huffman_codec::{decode_text, HuffmanCodec};
use crate::hufftree::HuffmanTree;
use crate::tree_shape::{flatten, unflatten, FlatTree};

/// The output of [`compress`]: the flattened tree plus the encoded message.
///
/// The three sequences only make sense together, so they are kept in one
/// value and exposed read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedData {
    shape: Bits,
    leaves: Vec<u8>,
    message: Bits,
}

impl CompressedData {
    /// Assembles a record from sequences produced elsewhere, for example
    /// after a caller's own byte-unpacking. Nothing is validated until
    /// [`decompress`] runs.
    pub fn from_parts(shape: Bits, leaves: Vec<u8>, message: Bits) -> Self {
        CompressedData {
            shape,
            leaves,
            message,
        }
    }

    pub fn into_parts(self) -> (Bits, Vec<u8>, Bits) {
        (self.shape, self.leaves, self.message)
    }

    pub fn shape(&self) -> &BitSeq {
        &self.shape
    }

    pub fn leaves(&self) -> &[u8] {
        &self.leaves
    }

    pub fn message(&self) -> &BitSeq {
        &self.message
    }

    pub fn flat_tree(&self) -> FlatTree {
        FlatTree {
            shape: self.shape.clone(),
            leaves: self.leaves.clone(),
        }
    }
}

/// Builds a tree for `text`, flattens it and encodes `text` under it.
///
/// Fails with [`HuffmanError::DegenerateAlphabet`] when `text` has fewer than
/// two distinct symbols.
pub fn compress<T: AsRef<[u8]>>(text: T) -> Result<CompressedData> {
    let text = text.as_ref();
    let tree = HuffmanTree::build(text)?;
    let FlatTree { shape, leaves } = flatten(&tree);
    let message = HuffmanCodec::new(tree).encode(text)?;

    log::debug!(
        "compressed {} symbols into {} message bits ({} shape bits, {} leaves)",
        text.len(),
        message.len(),
        shape.len(),
        leaves.len()
    );

    Ok(CompressedData {
        shape,
        leaves,
        message,
    })
}

/// Rebuilds the tree from `data` and decodes its message.
pub fn decompress(data: &CompressedData) -> Result<Vec<u8>> {
    let decoded = match unflatten(&data.shape, &data.leaves)? {
        Some(tree) => decode_text(&tree, &data.message)?,
        None if data.message.is_empty() => Vec::new(),
        None => {
            return Err(HuffmanError::malformed(format!(
                "{} message bits but no tree",
                data.message.len()
            )))
        }
    };

    log::debug!(
        "decompressed {} message bits into {} symbols",
        data.message.len(),
        decoded.len()
    );
    Ok(decoded)
}
