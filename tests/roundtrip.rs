//! End-to-end checks of the public API against known trees and messages.

use rust_huffman::bit_vec::{format_bits, parse_bits};
use rust_huffman::{
    build_tree, compress, decode_text, decompress, encode_text, flatten_tree, unflatten_tree,
    Bits, CompressedData, HuffNode, HuffmanError, HuffmanTree, Metadata,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bits(text: &str) -> Bits {
    parse_bits(text).unwrap()
}

/// `(T, ((R, S), E))`
fn example_tree() -> HuffmanTree {
    HuffmanTree::new(HuffNode::internal(
        HuffNode::leaf(b'T'),
        HuffNode::internal(
            HuffNode::internal(HuffNode::leaf(b'R'), HuffNode::leaf(b'S')),
            HuffNode::leaf(b'E'),
        ),
    ))
}

#[test]
fn compress_streettest() {
    init_logging();
    let data = compress("STREETTEST").unwrap();
    assert_eq!(format_bits(data.shape()), "1011000");
    assert_eq!(data.leaves(), b"TRSE");
    assert_eq!(format_bits(data.message()), "1010100111100111010");
    assert_eq!(decompress(&data).unwrap(), b"STREETTEST");
}

#[test]
fn equal_frequencies_give_equal_trees() {
    let a = build_tree(b"STREETTEST").unwrap();
    let b = build_tree(b"SSTTTTREEE").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, example_tree());
}

#[test]
fn degenerate_inputs_are_rejected() {
    for text in [&b""[..], &b"a"[..], &b"aaaa"[..]] {
        assert!(matches!(
            build_tree(text),
            Err(HuffmanError::DegenerateAlphabet { .. })
        ));
        assert!(matches!(
            compress(text),
            Err(HuffmanError::DegenerateAlphabet { .. })
        ));
    }
    assert!(build_tree(b"ab").is_ok());
}

#[test]
fn decode_tress_from_flattened_tree() {
    let tree = unflatten_tree(&bits("1,0,1,1,0,0,0"), b"TRSE").unwrap().unwrap();
    assert_eq!(tree, example_tree());
    assert_eq!(
        decode_text(&tree, &bits("0,1,0,0,1,1,1,0,1,1,0,1")).unwrap(),
        b"TRESS"
    );
}

#[test]
fn flatten_matches_example() {
    let flat = flatten_tree(&example_tree());
    assert_eq!(format_bits(&flat.shape), "1011000");
    assert_eq!(flat.leaves, b"TRSE");
}

#[test]
fn encode_decode_with_built_tree() {
    let tree = build_tree(b"the quick brown fox jumps over the lazy dog").unwrap();
    for text in ["dog", "the lazy fox", "quick brown", ""] {
        let encoded = encode_text(&tree, text.as_bytes()).unwrap();
        assert_eq!(decode_text(&tree, &encoded).unwrap(), text.as_bytes());
    }
    assert_eq!(
        encode_text(&tree, b"QUICK").unwrap_err(),
        HuffmanError::UnknownSymbol(b'Q')
    );
}

#[test]
fn whitespace_and_runs_survive() {
    init_logging();
    let inputs: [&[u8]; 4] = [
        b"  \t\n\n  \t",
        b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab",
        b"\x00\xff\x00\xff\x80",
        b"Nana Nana Nana Nana Nana Nana Nana Nana Batman",
    ];
    for input in inputs {
        let data = compress(input).unwrap();
        assert_eq!(decompress(&data).unwrap(), input);
    }
}

#[test]
fn full_byte_alphabet() {
    let input: Vec<u8> = (0..=255u8).chain(0..=127u8).collect();
    let data = compress(&input).unwrap();
    assert_eq!(data.leaves().len(), 256);
    assert_eq!(decompress(&data).unwrap(), input);
}

#[test]
fn corrupted_records_fail_cleanly() {
    let (shape, leaves, message) = compress("HAPPY HIP HOP").unwrap().into_parts();

    let mut short_shape = shape.clone();
    short_shape.pop();
    let data = CompressedData::from_parts(short_shape, leaves.clone(), message.clone());
    assert!(matches!(decompress(&data), Err(HuffmanError::MalformedEncoding(_))));

    let mut extra_leaves = leaves.clone();
    extra_leaves.push(b'!');
    let data = CompressedData::from_parts(shape.clone(), extra_leaves, message.clone());
    assert!(matches!(decompress(&data), Err(HuffmanError::MalformedEncoding(_))));

    let mut missing_leaves = leaves.clone();
    missing_leaves.pop();
    let data = CompressedData::from_parts(shape.clone(), missing_leaves, message.clone());
    assert!(matches!(decompress(&data), Err(HuffmanError::MalformedEncoding(_))));

    let mut repeated_leaves = leaves.clone();
    repeated_leaves[1] = repeated_leaves[0];
    let data = CompressedData::from_parts(shape.clone(), repeated_leaves, message.clone());
    assert!(matches!(decompress(&data), Err(HuffmanError::MalformedEncoding(_))));

    // every code in this tree is at least two bits long
    let mut partial = message;
    partial.push(true);
    let data = CompressedData::from_parts(shape, leaves, partial);
    assert!(matches!(decompress(&data), Err(HuffmanError::MalformedEncoding(_))));
}

#[test]
fn repeated_leaf_record_is_rejected() {
    let data = CompressedData::from_parts(bits("100"), b"aa".to_vec(), bits("111"));
    assert!(matches!(decompress(&data), Err(HuffmanError::MalformedEncoding(_))));
}

#[test]
fn deep_chain_record_is_rejected() {
    init_logging();
    let n = 1_000_000;
    let mut shape = Bits::with_capacity(2 * n + 1);
    shape.extend(std::iter::repeat(true).take(n));
    shape.extend(std::iter::repeat(false).take(n + 1));
    let data = CompressedData::from_parts(shape, vec![b'x'; n + 1], Bits::new());
    assert!(matches!(decompress(&data), Err(HuffmanError::MalformedEncoding(_))));
}

#[test]
fn metadata_reports_sizes() {
    let text = "Nana Nana Nana Nana Nana Nana Nana Nana Batman";
    let data = compress(text).unwrap();
    let meta = Metadata::new(&data, text.len());
    assert_eq!(meta.message_bits, data.message().len());
    assert_eq!(meta.leaf_count, 7);
    assert_eq!(meta.shape_bits, 2 * 7 - 1);
    assert!(meta.compression_ratio() < 1.0);
}
