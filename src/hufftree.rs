use std::collections::BTreeMap;
use std::fmt;

use crate::bit_vec::{format_bits, Bits};
use crate::error::{HuffmanError, Result};
use crate::min_heap::MinHeap;

/// Symbol -> bit path from the root, `false` for the zero branch.
pub type CodeTable = BTreeMap<u8, Bits>;

/// Occurrence counts per symbol. Symbols with a zero count are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, usize>,
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let counts = bytes.iter().copied().fold(BTreeMap::new(), |mut acc, byte| {
            *acc.entry(byte).or_insert(0) += 1;
            acc
        });
        FrequencyTable { counts }
    }

    /// Builds a table from `(symbol, count)` pairs. Repeated symbols are summed.
    pub fn from_counts<I: IntoIterator<Item = (u8, usize)>>(counts: I) -> Self {
        let mut table = BTreeMap::new();
        for (symbol, count) in counts {
            if count > 0 {
                *table.entry(symbol).or_insert(0) += count;
            }
        }
        FrequencyTable { counts: table }
    }

    pub fn get(&self, symbol: u8) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    pub fn distinct_symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
    },
    Internal {
        zero: Box<HuffNode>,
        one: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u8) -> Self {
        HuffNode::Leaf { symbol }
    }

    pub fn internal(zero: HuffNode, one: HuffNode) -> Self {
        HuffNode::Internal {
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<u8> {
        match self {
            HuffNode::Leaf { symbol } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { zero, one } => zero.leaf_count() + one.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { zero, one } => 1 + zero.depth().max(one.depth()),
        }
    }

    fn collect_symbols(&self, out: &mut Vec<u8>) {
        match self {
            HuffNode::Leaf { symbol } => out.push(*symbol),
            HuffNode::Internal { zero, one } => {
                zero.collect_symbols(out);
                one.collect_symbols(out);
            }
        }
    }

    // `path` is owned by each call so sibling branches never see each other's bits.
    fn generate_table(&self, code_table: &mut CodeTable, path: Bits) {
        match self {
            HuffNode::Leaf { symbol } => {
                code_table.insert(*symbol, path);
            }
            HuffNode::Internal { zero, one } => {
                let mut zero_path = path.clone();
                zero_path.push(false);
                zero.generate_table(code_table, zero_path);

                let mut one_path = path;
                one_path.push(true);
                one.generate_table(code_table, one_path);
            }
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            HuffNode::Leaf { symbol } => writeln!(
                f,
                "{}{}-> Leaf: '{}' ({})",
                indent,
                label,
                (*symbol as char).escape_default(),
                symbol
            ),
            HuffNode::Internal { zero, one } => {
                writeln!(f, "{}{}-> Internal", indent, label)?;
                zero.fmt_node(f, depth + 1, "0")?;
                one.fmt_node(f, depth + 1, "1")
            }
        }
    }
}

/// A strict binary code tree. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    pub fn new(root: HuffNode) -> Self {
        HuffmanTree { root }
    }

    /// Builds the optimal code tree for `text`.
    ///
    /// Fails with [`HuffmanError::DegenerateAlphabet`] unless `text` holds at
    /// least two distinct symbols.
    pub fn build(text: &[u8]) -> Result<Self> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(text))
    }

    /// Leaves are seeded in ascending symbol order. The two front entries of
    /// the queue are merged with the first as the zero branch; on equal
    /// weights the most recently inserted tree is taken first.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let distinct = frequencies.len();
        if distinct < 2 {
            return Err(HuffmanError::DegenerateAlphabet { distinct });
        }

        let mut heap = MinHeap::new();
        for (symbol, count) in frequencies.iter() {
            heap.insert(HuffNode::leaf(symbol), count);
        }
        HuffmanTree::build_from_heap(heap)
    }

    fn build_from_heap(mut heap: MinHeap<HuffNode>) -> Result<Self> {
        let alphabet = heap.heap_size();
        while heap.heap_size() > 1 {
            let (first, w0) = heap.extract_min()?;
            let (second, w1) = heap.extract_min()?;
            log::trace!("merging subtrees of weight {} and {}", w0, w1);
            heap.insert(HuffNode::internal(first, second), w0.saturating_add(w1));
        }
        let (root, weight) = heap.extract_min()?;
        log::debug!(
            "built huffman tree: {} symbols, total weight {}, depth {}",
            alphabet,
            weight,
            root.depth()
        );
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    pub fn into_root(self) -> HuffNode {
        self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest code path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Leaf symbols in pre-order.
    pub fn symbols(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.root.collect_symbols(&mut out);
        out
    }

    pub fn generate_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        self.root.generate_table(&mut table, Bits::new());
        table
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman Tree Structure:")?;
        self.root.fmt_node(f, 0, "root")
    }
}

/// Renders a code table one `symbol: bits` pair per line.
pub fn format_table(table: &CodeTable) -> String {
    table
        .iter()
        .map(|(symbol, bits)| format!("'{}': {}", (*symbol as char).escape_default(), format_bits(bits)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) fn example_tree() -> HuffmanTree {
    //        *
    //      /   \
    //     T     *
    //          / \
    //         *   E
    //        / \
    //       R   S
    HuffmanTree::new(HuffNode::internal(
        HuffNode::leaf(b'T'),
        HuffNode::internal(
            HuffNode::internal(HuffNode::leaf(b'R'), HuffNode::leaf(b'S')),
            HuffNode::leaf(b'E'),
        ),
    ))
}
