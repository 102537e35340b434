//! Pre-order flattening of a code tree into shape bits plus leaf symbols.
//!
//! Each visited node contributes one shape bit: `1` for an internal node
//! (followed by its zero subtree, then its one subtree), `0` for a leaf, whose
//! symbol is appended to the leaf sequence. Neither sequence is meaningful
//! without the other.

use crate::bit_vec::{BitSeq, Bits};
use crate::error::{HuffmanError, Result};
use crate::hufftree::{HuffNode, HuffmanTree};

/// One leaf per byte value.
const MAX_LEAVES: usize = 256;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTree {
    pub shape: Bits,
    pub leaves: Vec<u8>,
}

impl FlatTree {
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty() && self.leaves.is_empty()
    }

    pub fn unflatten(&self) -> Result<Option<HuffmanTree>> {
        unflatten(&self.shape, &self.leaves)
    }
}

pub fn flatten(tree: &HuffmanTree) -> FlatTree {
    let mut flat = FlatTree {
        shape: Bits::with_capacity(2 * tree.leaf_count()),
        leaves: Vec::with_capacity(tree.leaf_count()),
    };
    flatten_node(tree.root(), &mut flat);
    flat
}

fn flatten_node(node: &HuffNode, flat: &mut FlatTree) {
    match node {
        HuffNode::Leaf { symbol } => {
            flat.shape.push(false);
            flat.leaves.push(*symbol);
        }
        HuffNode::Internal { zero, one } => {
            flat.shape.push(true);
            flatten_node(zero, flat);
            flatten_node(one, flat);
        }
    }
}

/// Rebuilds a tree from its flattened form.
///
/// Two empty sequences give `Ok(None)`. Anything that is not exactly one
/// complete pre-order encoding (a shape that ends early, too few or too many
/// leaf symbols, trailing shape bits) is a [`HuffmanError::MalformedEncoding`].
/// So is a leaf symbol that appears twice, or more than 256 leaves: a code tree
/// holds each byte at most once, which also keeps its depth at most 255.
pub fn unflatten(shape: &BitSeq, leaves: &[u8]) -> Result<Option<HuffmanTree>> {
    if shape.is_empty() && leaves.is_empty() {
        return Ok(None);
    }
    if leaves.len() > MAX_LEAVES {
        return Err(HuffmanError::malformed(format!(
            "{} leaf symbols, a tree holds at most {}",
            leaves.len(),
            MAX_LEAVES
        )));
    }

    let mut bits = shape.iter().by_vals();
    let mut symbols = leaves.iter().copied();
    // Internal nodes still waiting for children; `Some` once the zero branch is done.
    let mut pending: Vec<Option<HuffNode>> = Vec::new();
    let mut seen = [false; MAX_LEAVES];

    let root = 'tree: loop {
        let bit = bits
            .next()
            .ok_or_else(|| HuffmanError::malformed("tree shape ended before the tree was complete"))?;
        if bit {
            pending.push(None);
            continue;
        }

        let symbol = symbols
            .next()
            .ok_or_else(|| HuffmanError::malformed("tree shape has more leaves than leaf symbols"))?;
        if std::mem::replace(&mut seen[symbol as usize], true) {
            return Err(HuffmanError::malformed(format!(
                "leaf symbol {:?} appears more than once",
                symbol as char
            )));
        }
        let mut node = HuffNode::leaf(symbol);

        loop {
            match pending.pop() {
                None => break 'tree node,
                Some(None) => {
                    pending.push(Some(node));
                    break;
                }
                Some(Some(zero)) => node = HuffNode::internal(zero, node),
            }
        }
    };

    let extra_bits = bits.count();
    if extra_bits > 0 {
        return Err(HuffmanError::malformed(format!(
            "{} tree shape bits left after the tree was complete",
            extra_bits
        )));
    }
    let extra_symbols = symbols.count();
    if extra_symbols > 0 {
        return Err(HuffmanError::malformed(format!(
            "{} leaf symbols left after the tree was complete",
            extra_symbols
        )));
    }

    Ok(Some(HuffmanTree::new(root)))
}
