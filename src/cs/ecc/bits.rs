//! Conversions between unsigned integers and fixed-length bit vectors.
//!
//! Bit vectors are ordered most-significant bit first (`Msb0`), which is the
//! order the codeword layout `P1 P2 D1 P4 D2 D3 D4` is written in.

use bitvec::prelude::*;

/// Converts `value` into exactly `length` bits, most significant first.
///
/// Bits above `length` are discarded without error.
///
/// # Example
/// ```
/// use hamming74::cs::ecc::bits::to_bits;
///
/// let bits = to_bits(0b1011, 4);
/// assert_eq!(bits.iter().by_vals().collect::<Vec<_>>(), vec![true, false, true, true]);
/// ```
pub fn to_bits(mut value: u64, length: usize) -> BitVec<u8, Msb0> {
    let mut bits = bitvec![u8, Msb0; 0; length];
    for i in (0..length).rev() {
        bits.set(i, value & 1 == 1);
        value >>= 1;
    }
    bits
}

/// Folds a bit sequence, most significant first, back into an integer.
pub fn from_bits(bits: &BitSlice<u8, Msb0>) -> u64 {
    bits.iter()
        .by_vals()
        .fold(0, |acc, bit| (acc << 1) | u64::from(bit))
}

/// Truncates `value` to its lowest `length` bits.
pub fn mask(value: u64, length: usize) -> u64 {
    if length >= u64::BITS as usize {
        value
    } else {
        value & ((1 << length) - 1)
    }
}

/// Number of set bits in `value`.
pub fn weight(value: u64) -> u32 {
    value.count_ones()
}
