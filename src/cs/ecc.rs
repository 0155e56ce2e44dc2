//! Error correction code implementations.
//!
//! This module provides:
//! - Bit/integer conversion helpers for fixed-width words
//! - The (7,4) Hamming code with syndrome decoding
//! - An exhaustive analysis of the code's correction capability per error weight
//! - A console report built on top of the analysis
//!
//! # Examples
//!
//! ```rust
//! use hamming74::cs::ecc::{ErrorClassAnalyzer, HammingConfig};
//!
//! let analysis = ErrorClassAnalyzer::new(HammingConfig::default()).unwrap().run();
//! assert_eq!(analysis.codeword, 0b0110011);
//! assert_eq!(analysis.classes[0].rate(), 1.0);
//! ```

pub use crate::cs::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod analysis;
pub mod bits;
pub mod hamming;
pub mod report;

pub use analysis::{
    binomial, classify, correction_rate, Analysis, ClassStats, ErrorClassAnalyzer, ErrorClasses,
    HammingConfig, Verdict,
};
pub use bits::{from_bits, to_bits};
pub use hamming::{hamming74_decode, hamming74_encode, Correction, Hamming74};
pub use report::{Report, DEMO_ERROR_PATTERN};
