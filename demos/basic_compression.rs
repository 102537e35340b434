use rust_huffman::bit_vec::format_bits;
use rust_huffman::hufftree::format_table;
use rust_huffman::{compress, decompress, flatten_tree, HuffmanCodec, HuffmanTree, Metadata};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";

    println!("📝 Sample text: {} bytes", sample_text.len());

    let tree = HuffmanTree::build(sample_text.as_bytes())?;
    let flat = flatten_tree(&tree);
    println!(
        "🌳 Tree: {} leaves, depth {}, shape {}",
        tree.leaf_count(),
        tree.depth(),
        format_bits(&flat.shape)
    );

    let codec = HuffmanCodec::new(tree);
    println!("{}", format_table(codec.code_table()));

    let data = compress(sample_text)?;
    let meta = Metadata::new(&data, sample_text.len());
    println!(
        "🗜️  Compressed to: {} bits ({:.1}% of original, {:.2} bits/symbol)",
        meta.total_bits(),
        meta.compression_ratio() * 100.0,
        meta.bits_per_symbol()
    );

    let decompressed = decompress(&data)?;
    if decompressed == sample_text.as_bytes() {
        println!("✅ Decompression successful! Data matches exactly.");
    } else {
        println!("❌ Decompression failed! Data mismatch.");
        return Err("Decompression verification failed".into());
    }

    Ok(())
}
