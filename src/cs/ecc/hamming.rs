//! Hamming (7,4) error correction code implementation.
//!
//! The (7,4) Hamming code encodes 4 data bits into 7 bits by adding 3 parity bits.
//! Its minimum distance is 3, so every single-bit error is corrected. Two or more
//! flipped bits are not detected: the decoder silently returns a different data word.
//!
//! Codeword layout, bit positions 1..7 counted from the most significant bit:
//!
//! ```text
//! position:  1   2   3   4   5   6   7
//! content:   P1  P2  D1  P4  D2  D3  D4
//! ```
//!
//! Parity bits sit at the power-of-two positions and each covers the positions
//! whose index has the matching bit set, so a non-zero syndrome is the 1-indexed
//! position of the flipped bit. This layout is a wire format: changing it breaks
//! compatibility with every previously encoded word.
//!
//! # Example
//!
//! ```
//! use hamming74::cs::ecc::hamming::Hamming74;
//!
//! let code = Hamming74::new();
//! let codeword = code.encode(0b1011);
//! assert_eq!(codeword, 0b0110011);
//!
//! // Flip bit position 5
//! assert_eq!(code.decode(codeword ^ 0b0000100), 0b1011);
//! ```

use crate::cs::ecc::bits::{from_bits, mask, to_bits};
use crate::cs::ecc::{ErrorCorrection, Result};
use crate::cs::error::Error;
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};

/// Number of bits in a codeword (n)
pub const CODE_LENGTH: usize = 7;

/// Number of information bits in a codeword (k)
pub const DATA_LENGTH: usize = 4;

/// Number of parity bits in a codeword (n - k)
pub const PARITY_LENGTH: usize = CODE_LENGTH - DATA_LENGTH;

/// 0-indexed codeword positions holding D1, D2, D3, D4
pub const DATA_POSITIONS: [usize; DATA_LENGTH] = [2, 4, 5, 6];

/// Result of running syndrome decoding on a received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Syndrome of the received word, 0 when no error was detected
    pub syndrome: u8,
    /// 0-indexed position that was flipped, if any
    pub flipped: Option<usize>,
    /// Received word after correction
    pub corrected: u64,
    /// Information word extracted from the corrected word
    pub data: u64,
}

/// The (7,4) Hamming code with parity bits at positions 1, 2 and 4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming74;

impl Hamming74 {
    /// Creates the code
    pub fn new() -> Self {
        Hamming74
    }

    /// Number of bits in a codeword
    pub fn code_length(&self) -> usize {
        CODE_LENGTH
    }

    /// Number of information bits per codeword
    pub fn data_length(&self) -> usize {
        DATA_LENGTH
    }

    /// Encodes a 4-bit information word into a 7-bit codeword.
    ///
    /// Bits above the lowest four are ignored.
    pub fn encode(&self, data: u64) -> u64 {
        let data = truncate(data, DATA_LENGTH);
        let d = to_bits(data, DATA_LENGTH);

        let p1 = d[0] ^ d[1] ^ d[3];
        let p2 = d[0] ^ d[2] ^ d[3];
        let p4 = d[1] ^ d[2] ^ d[3];

        let mut codeword = BitVec::<u8, Msb0>::with_capacity(CODE_LENGTH);
        for bit in [p1, p2, d[0], p4, d[1], d[2], d[3]] {
            codeword.push(bit);
        }

        from_bits(&codeword)
    }

    /// Computes the 3-bit syndrome of a received word.
    ///
    /// Bits above the lowest seven are ignored.
    pub fn syndrome(&self, received: u64) -> u8 {
        let bits = to_bits(truncate(received, CODE_LENGTH), CODE_LENGTH);
        syndrome_of(&bits)
    }

    /// Runs syndrome decoding and reports what was corrected.
    pub fn correct(&self, received: u64) -> Correction {
        let mut bits = to_bits(truncate(received, CODE_LENGTH), CODE_LENGTH);
        let syndrome = syndrome_of(&bits);

        let mut flipped = None;
        if syndrome != 0 {
            let position = usize::from(syndrome - 1);
            if position < bits.len() {
                let bit = bits[position];
                bits.set(position, !bit);
                flipped = Some(position);
            }
        }

        let mut data = BitVec::<u8, Msb0>::with_capacity(DATA_LENGTH);
        for position in DATA_POSITIONS {
            data.push(bits[position]);
        }

        Correction {
            syndrome,
            flipped,
            corrected: from_bits(&bits),
            data: from_bits(&data),
        }
    }

    /// Decodes a received 7-bit word into its 4-bit information word,
    /// correcting a single flipped bit.
    ///
    /// Words with two or more flipped bits decode to a wrong information word
    /// without any indication.
    pub fn decode(&self, received: u64) -> u64 {
        self.correct(received).data
    }
}

impl Display for Hamming74 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hamming({},{})", CODE_LENGTH, DATA_LENGTH)
    }
}

/// Byte-stream coding: every byte becomes two codeword bytes, high nibble first.
/// The most significant bit of each codeword byte is unused.
impl ErrorCorrection for Hamming74 {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(data.len() * 2);
        for &byte in data {
            encoded.push(Hamming74::encode(self, u64::from(byte >> 4)) as u8);
            encoded.push(Hamming74::encode(self, u64::from(byte & 0x0F)) as u8);
        }
        Ok(encoded)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % 2 != 0 {
            return Err(Error::InvalidInput(format!(
                "Encoded data must hold two codewords per byte, got {} bytes",
                data.len()
            )));
        }

        Ok(data
            .chunks_exact(2)
            .map(|pair| {
                let high = Hamming74::decode(self, u64::from(pair[0]));
                let low = Hamming74::decode(self, u64::from(pair[1]));
                ((high << 4) | low) as u8
            })
            .collect())
    }
}

fn syndrome_of(b: &BitSlice<u8, Msb0>) -> u8 {
    let s1 = b[0] ^ b[2] ^ b[4] ^ b[6];
    let s2 = b[1] ^ b[2] ^ b[5] ^ b[6];
    let s3 = b[3] ^ b[4] ^ b[5] ^ b[6];
    (u8::from(s3) << 2) | (u8::from(s2) << 1) | u8::from(s1)
}

fn truncate(value: u64, length: usize) -> u64 {
    let masked = mask(value, length);
    if masked != value {
        log::trace!("truncating {:#b} to {} bits ({:#b})", value, length, masked);
    }
    masked
}

/// Encodes a 4-bit information word using the (7,4) Hamming code
pub fn hamming74_encode(data: u64) -> u64 {
    Hamming74::new().encode(data)
}

/// Decodes a 7-bit word using the (7,4) Hamming code
pub fn hamming74_decode(received: u64) -> u64 {
    Hamming74::new().decode(received)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_creation() {
        let code = Hamming74::new();
        assert_eq!(code.code_length(), 7);
        assert_eq!(code.data_length(), 4);
        assert_eq!(PARITY_LENGTH, 3);
        assert_eq!(code.to_string(), "Hamming(7,4)");
    }

    #[test]
    fn test_encode_reference_word() {
        // p1 = 1^0^1 = 0, p2 = 1^1^1 = 1, p4 = 0^1^1 = 0
        let code = Hamming74::new();
        assert_eq!(code.encode(0b1011), 0b0110011);
        assert_eq!(code.encode(0), 0);
        assert_eq!(code.encode(0b1111), 0b1111111);
        assert_eq!(code.encode(0b1000), 0b1110000);
    }

    #[test]
    fn test_codewords_have_zero_syndrome() {
        let code = Hamming74::new();
        for data in 0..16 {
            assert_eq!(code.syndrome(code.encode(data)), 0, "data {:04b}", data);
        }
    }

    #[test]
    fn test_encode_decode_no_errors() {
        let code = Hamming74::new();
        for data in 0..16 {
            assert_eq!(code.decode(code.encode(data)), data);
        }
    }

    #[test]
    fn test_single_bit_error_correction() {
        let code = Hamming74::new();
        for data in 0..16 {
            let codeword = code.encode(data);
            for position in 0..CODE_LENGTH {
                let error = 1u64 << (CODE_LENGTH - 1 - position);
                let correction = code.correct(codeword ^ error);

                assert_eq!(correction.syndrome as usize, position + 1);
                assert_eq!(correction.flipped, Some(position));
                assert_eq!(correction.corrected, codeword);
                assert_eq!(correction.data, data);
            }
        }
    }

    #[test]
    fn test_reference_error_example() {
        let code = Hamming74::new();
        let received = code.encode(0b1011) ^ 0b0000100;
        assert_eq!(received, 0b0110111);

        let correction = code.correct(received);
        assert_eq!(correction.syndrome, 5);
        assert_eq!(correction.flipped, Some(4));
        assert_eq!(correction.data, 0b1011);
    }

    #[test]
    fn test_double_bit_error_is_miscorrected() {
        let code = Hamming74::new();
        let codeword = code.encode(0b1011);
        let correction = code.correct(codeword ^ 0b1100000);

        // The syndrome points at a third position, so the result is a different codeword
        assert_eq!(correction.syndrome, 3);
        assert_ne!(correction.corrected, codeword);
        assert_ne!(correction.data, 0b1011);
    }

    #[test]
    fn test_wide_inputs_are_truncated() {
        let code = Hamming74::new();
        assert_eq!(code.encode(0b1_1011), code.encode(0b1011));
        assert_eq!(code.decode(0b1000_0000 | 0b0110011), 0b1011);
        assert_eq!(code.syndrome(0xFF80), 0);
    }

    #[test]
    fn test_byte_stream_round_trip() {
        let code = Hamming74::new();
        let data = b"Test data for Hamming code";

        let encoded = ErrorCorrection::encode(&code, data).unwrap();
        assert_eq!(encoded.len(), data.len() * 2);
        assert!(encoded.iter().all(|&b| b < 0x80));

        let decoded = ErrorCorrection::decode(&code, &encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_byte_stream_error_correction() {
        use rand::{Rng, SeedableRng};

        let code = Hamming74::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(21);
        let data: Vec<u8> = (0..64).map(|_| rng.gen()).collect();

        let mut encoded = ErrorCorrection::encode(&code, &data).unwrap();
        for byte in encoded.iter_mut() {
            *byte ^= 1 << rng.gen_range(0..CODE_LENGTH);
        }

        let decoded = ErrorCorrection::decode(&code, &encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_byte_stream_odd_length() {
        let code = Hamming74::new();
        let result = ErrorCorrection::decode(&code, &[0x33, 0x33, 0x33]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        assert!(ErrorCorrection::decode(&code, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_helper_functions() {
        assert_eq!(hamming74_encode(0b1011), 0b0110011);
        assert_eq!(hamming74_decode(0b0110111), 0b1011);
    }
}
