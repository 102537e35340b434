//! Bit sequences used for tree shapes, code paths and message bodies.
//!
//! A bit is a `bool` (`true` is 1). The backing store is `bitvec`'s
//! `BitVec<u8, Msb0>`, but the crate only ever treats it as an ordered
//! sequence; packing it into bytes for storage is up to the caller.

use bitvec::prelude::*;

pub type Bits = BitVec<u8, Msb0>;
pub type BitSeq = BitSlice<u8, Msb0>;

/// Renders bits as a string of `0`/`1` characters.
pub fn format_bits(bits: &BitSeq) -> String {
    bits.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect()
}

/// Parses a string of `0`/`1` characters, ignoring whitespace and `,`.
/// Returns `None` on any other character.
pub fn parse_bits(text: &str) -> Option<Bits> {
    let mut bits = Bits::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            c if c.is_whitespace() || c == ',' => {}
            _ => return None,
        }
    }
    Some(bits)
}
