use crate::bit_vec::{BitSeq, Bits};
use crate::error::{HuffmanError, Result};
use crate::hufftree::{CodeTable, HuffNode, HuffmanTree};

/// Encodes and decodes messages against one fixed tree.
///
/// The code table is built once when the codec is created, so a codec can be
/// reused for any number of messages.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    encode_table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(tree: HuffmanTree) -> Self {
        let encode_table = tree.generate_table();
        log::trace!("code table built for {} symbols", encode_table.len());
        HuffmanCodec { tree, encode_table }
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn into_tree(self) -> HuffmanTree {
        self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.encode_table
    }

    pub fn code_for(&self, symbol: u8) -> Option<&BitSeq> {
        self.encode_table.get(&symbol).map(|bits| bits.as_bitslice())
    }

    /// Concatenates the code of every symbol of `text`, in order.
    ///
    /// Fails with [`HuffmanError::UnknownSymbol`] for a symbol with no leaf in
    /// the tree. A tree that is a single leaf has no code paths, so only the
    /// empty text can be encoded against it.
    pub fn encode(&self, text: &[u8]) -> Result<Bits> {
        encode_with(&self.tree, &self.encode_table, text)
    }

    /// Walks the tree from the root for each code, emitting a symbol at every
    /// leaf. `bits` must be a whole number of codes: a trailing partial code is
    /// a [`HuffmanError::MalformedEncoding`].
    pub fn decode(&self, bits: &BitSeq) -> Result<Vec<u8>> {
        decode_with(&self.tree, bits)
    }
}

fn encode_with(tree: &HuffmanTree, encode_table: &CodeTable, text: &[u8]) -> Result<Bits> {
    if tree.root().is_leaf() && !text.is_empty() {
        return Err(HuffmanError::malformed(
            "a single-leaf tree has no code paths to encode with",
        ));
    }

    let mut bits = Bits::new();
    for &symbol in text {
        let code = encode_table
            .get(&symbol)
            .ok_or(HuffmanError::UnknownSymbol(symbol))?;
        bits.extend_from_bitslice(code);
    }
    Ok(bits)
}

fn decode_with(tree: &HuffmanTree, bits: &BitSeq) -> Result<Vec<u8>> {
    let root = tree.root();
    if root.is_leaf() && !bits.is_empty() {
        return Err(HuffmanError::malformed(
            "a single-leaf tree cannot decode a non-empty message",
        ));
    }

    let mut result = Vec::new();
    let mut bit_index = 0;

    while bit_index < bits.len() {
        let mut current_node = root;

        // walk the tree until we hit a leaf
        loop {
            match current_node {
                HuffNode::Leaf { symbol } => {
                    result.push(*symbol);
                    break;
                }
                HuffNode::Internal { zero, one } => {
                    if bit_index >= bits.len() {
                        return Err(HuffmanError::malformed(format!(
                            "message ends inside a code after {} symbols",
                            result.len()
                        )));
                    }
                    current_node = if bits[bit_index] { one } else { zero };
                    bit_index += 1;
                }
            }
        }
    }

    Ok(result)
}

/// Encodes `text` with a code table built from `tree`.
pub fn encode_text(tree: &HuffmanTree, text: &[u8]) -> Result<Bits> {
    encode_with(tree, &tree.generate_table(), text)
}

/// Decodes `bits` by walking `tree`.
pub fn decode_text(tree: &HuffmanTree, bits: &BitSeq) -> Result<Vec<u8>> {
    decode_with(tree, bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit_vec::parse_bits;
    use crate::hufftree::example_tree;

    fn bits(text: &str) -> Bits {
        parse_bits(text).unwrap()
    }

    #[test]
    fn test_decode_example_tree() {
        let tree = example_tree();
        assert_eq!(decode_text(&tree, &bits("11")).unwrap(), b"E".to_vec());
        assert_eq!(decode_text(&tree, &bits("101110")).unwrap(), b"SET".to_vec());
        assert_eq!(
            decode_text(&tree, &bits("101010011110101")).unwrap(),
            b"STREETS".to_vec()
        );
        assert_eq!(decode_text(&tree, &bits("010011101101")).unwrap(), b"TRESS".to_vec());
    }

    #[test]
    fn test_decode_other_tree() {
        //        *
        //      /   \
        //     S     *
        //          / \
        //         *   E
        //        / \
        //       T   R
        let tree = HuffmanTree::new(HuffNode::internal(
            HuffNode::leaf(b'S'),
            HuffNode::internal(
                HuffNode::internal(HuffNode::leaf(b'T'), HuffNode::leaf(b'R')),
                HuffNode::leaf(b'E'),
            ),
        ));
        assert_eq!(decode_text(&tree, &bits("011100")).unwrap(), b"SET".to_vec());
        assert_eq!(decode_text(&tree, &bits("1001011100")).unwrap(), b"TRESS".to_vec());
    }

    #[test]
    fn test_encode_example_tree() {
        let tree = example_tree();
        assert_eq!(encode_text(&tree, b"E").unwrap(), bits("11"));
        assert_eq!(encode_text(&tree, b"SET").unwrap(), bits("101110"));
        assert_eq!(encode_text(&tree, b"STREETS").unwrap(), bits("101010011110101"));
        assert_eq!(encode_text(&tree, b"").unwrap(), Bits::new());
    }

    #[test]
    fn test_codec_reuse() {
        let codec = HuffmanCodec::new(example_tree());
        assert_eq!(codec.code_for(b'T'), Some(bits("0").as_bitslice()));
        assert_eq!(codec.code_for(b'x'), None);
        assert_eq!(codec.code_table().len(), 4);

        for text in [&b"TREES"[..], &b"SETTER"[..], &b"RESET"[..]] {
            let encoded = codec.encode(text).unwrap();
            assert_eq!(codec.decode(&encoded).unwrap(), text.to_vec());
        }
        assert_eq!(codec.into_tree(), example_tree());
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let err = encode_text(&example_tree(), b"TEXT").unwrap_err();
        assert_eq!(err, HuffmanError::UnknownSymbol(b'X'));
    }

    #[test]
    fn test_decode_partial_code() {
        // "T" followed by the first two bits of "S"
        let err = decode_text(&example_tree(), &bits("010")).unwrap_err();
        assert!(matches!(err, HuffmanError::MalformedEncoding(_)));
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = HuffmanTree::new(HuffNode::leaf(b'a'));
        assert_eq!(encode_text(&tree, b"").unwrap(), Bits::new());
        assert!(matches!(
            encode_text(&tree, b"aaa"),
            Err(HuffmanError::MalformedEncoding(_))
        ));
        assert!(matches!(
            decode_text(&tree, &bits("0")),
            Err(HuffmanError::MalformedEncoding(_))
        ));
        assert_eq!(decode_text(&tree, &Bits::new()).unwrap(), Vec::<u8>::new());
    }
}
