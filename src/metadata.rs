use crate::compressed_data::CompressedData;

const SYMBOL_BITS: usize = 8;

/// Size summary of a compressed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub original_length: usize,
    pub message_bits: usize,
    pub shape_bits: usize,
    pub leaf_count: usize,
}

impl Metadata {
    pub fn new(data: &CompressedData, original_length: usize) -> Self {
        Metadata {
            original_length,
            message_bits: data.message().len(),
            shape_bits: data.shape().len(),
            leaf_count: data.leaves().len(),
        }
    }

    /// Message bits, shape bits and 8 bits per leaf symbol.
    pub fn total_bits(&self) -> usize {
        self.message_bits + self.shape_bits + self.leaf_count * SYMBOL_BITS
    }

    /// Total record bits over the original's size at 8 bits per symbol.
    /// Returns 0.0 for an empty original.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.total_bits() as f64 / (self.original_length * SYMBOL_BITS) as f64
    }

    /// Average code length per symbol of the message body alone.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.message_bits as f64 / self.original_length as f64
    }
}
