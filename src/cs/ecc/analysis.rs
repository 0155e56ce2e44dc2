//! Exhaustive analysis of the (7,4) Hamming code's correction capability.
//!
//! Every non-zero error pattern over the codeword is enumerated, grouped by its
//! Hamming weight, and injected into a reference codeword. For each weight class
//! the analysis counts how many received words still decode to the original
//! information word.
//!
//! Only the weight-1 class is guaranteed to be fully corrected. Heavier patterns
//! are mis-corrected silently by the decoder, so their rates fall below 1.0.

use crate::cs::ecc::bits::{mask, weight};
use crate::cs::ecc::hamming::{Hamming74, CODE_LENGTH, DATA_LENGTH};
use crate::cs::ecc::Result;
use crate::cs::error::Error;
use rayon::prelude::*;

/// Parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingConfig {
    /// Codeword length (n)
    pub code_length: usize,
    /// Information word length (k)
    pub data_length: usize,
    /// Reference information word injected with every error pattern
    pub information_word: u64,
}

impl Default for HammingConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            data_length: DATA_LENGTH,
            information_word: 0b1011,
        }
    }
}

impl HammingConfig {
    /// Default geometry with a different reference information word
    pub fn with_information_word(information_word: u64) -> Self {
        Self {
            information_word,
            ..Self::default()
        }
    }

    /// Checks that the configuration describes a (7,4) code and that the
    /// information word fits in `data_length` bits.
    pub fn validate(&self) -> Result<()> {
        if self.code_length != CODE_LENGTH || self.data_length != DATA_LENGTH {
            return Err(Error::InvalidInput(format!(
                "Only the ({},{}) geometry is supported, got ({},{})",
                CODE_LENGTH, DATA_LENGTH, self.code_length, self.data_length
            )));
        }

        let used_bits = (u64::BITS - self.information_word.leading_zeros()) as usize;
        if used_bits > self.data_length {
            return Err(Error::InputTooLarge {
                length: used_bits,
                max_length: self.data_length,
            });
        }

        Ok(())
    }
}

/// Error patterns grouped by Hamming weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClasses {
    /// `classes[w]` holds the patterns of weight `w`, in ascending order
    classes: Vec<Vec<u64>>,
}

impl ErrorClasses {
    /// Largest weight a pattern can have (the codeword length)
    pub fn max_weight(&self) -> u32 {
        (self.classes.len() - 1) as u32
    }

    /// Patterns of the given weight; empty for weights outside `1..=n`
    pub fn class(&self, weight: u32) -> &[u64] {
        self.classes
            .get(weight as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty classes in ascending weight order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u64])> + '_ {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, patterns)| !patterns.is_empty())
            .map(|(weight, patterns)| (weight as u32, patterns.as_slice()))
    }

    /// Total number of patterns over all classes
    pub fn total(&self) -> usize {
        self.classes.iter().map(Vec::len).sum()
    }
}

/// Enumerates every error pattern in `[1, 2^code_length - 1]` and groups it by weight.
///
/// # Panics
///
/// Panics if `code_length` is 64 or more, since the patterns no longer fit in a `u64`.
pub fn classify(code_length: usize) -> ErrorClasses {
    assert!(
        code_length < u64::BITS as usize,
        "code length {} does not fit in a u64 error pattern",
        code_length
    );

    let mut classes = vec![Vec::new(); code_length + 1];
    for pattern in 1..(1u64 << code_length) {
        classes[weight(pattern) as usize].push(pattern);
    }

    ErrorClasses { classes }
}

/// How an error class fared against the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every pattern was corrected
    AlwaysCorrected,
    /// Some patterns were corrected
    SometimesCorrected,
    /// No pattern was corrected
    NeverCorrected,
}

impl Verdict {
    /// Console mark for the verdict
    pub fn symbol(&self) -> &'static str {
        match self {
            Verdict::AlwaysCorrected => "✓",
            Verdict::SometimesCorrected => "~",
            Verdict::NeverCorrected => "✗",
        }
    }
}

/// Correction statistics for one weight class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    /// Hamming weight of the class (i)
    pub weight: u32,
    /// Number of patterns in the class, C(n,i)
    pub size: usize,
    /// Number of patterns decoded back to the information word (Nk)
    pub corrected: usize,
}

impl ClassStats {
    /// Fraction of corrected patterns (Ck), 0.0 for an empty class
    pub fn rate(&self) -> f64 {
        if self.size == 0 {
            return 0.0;
        }
        self.corrected as f64 / self.size as f64
    }

    /// Classifies the class as always, sometimes or never corrected
    pub fn verdict(&self) -> Verdict {
        if self.size > 0 && self.corrected == self.size {
            Verdict::AlwaysCorrected
        } else if self.corrected == 0 {
            Verdict::NeverCorrected
        } else {
            Verdict::SometimesCorrected
        }
    }
}

/// Injects every pattern into `code.encode(information_word)` and counts the
/// received words that decode back to `information_word`.
///
/// `information_word` is truncated to its lowest four bits, as the encoder does.
pub fn correction_rate(
    code: &Hamming74,
    information_word: u64,
    weight: u32,
    patterns: &[u64],
) -> ClassStats {
    let information_word = mask(information_word, DATA_LENGTH);
    let codeword = code.encode(information_word);

    let mut corrected = 0;
    for &pattern in patterns {
        let decoded = code.decode(codeword ^ pattern);
        if decoded == information_word {
            corrected += 1;
        } else {
            log::trace!("pattern {:07b} mis-corrected to {:04b}", pattern, decoded);
        }
    }

    let stats = ClassStats {
        weight,
        size: patterns.len(),
        corrected,
    };
    log::debug!(
        "weight {}: {}/{} corrected ({:.3})",
        weight,
        stats.corrected,
        stats.size,
        stats.rate()
    );
    stats
}

/// Outcome of a full sweep over all error classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Information word the reference codeword was encoded from
    pub information_word: u64,
    /// Reference codeword every pattern was injected into
    pub codeword: u64,
    /// Statistics of the non-empty classes in ascending weight
    pub classes: Vec<ClassStats>,
}

impl Analysis {
    /// Statistics for a given weight, if that class is non-empty
    pub fn class(&self, weight: u32) -> Option<&ClassStats> {
        self.classes.iter().find(|stats| stats.weight == weight)
    }

    /// Number of patterns analyzed over all classes
    pub fn total_patterns(&self) -> usize {
        self.classes.iter().map(|stats| stats.size).sum()
    }
}

/// Runs the weight-classed correction sweep for a configuration.
#[derive(Debug, Clone)]
pub struct ErrorClassAnalyzer {
    config: HammingConfig,
    code: Hamming74,
}

impl ErrorClassAnalyzer {
    /// Creates an analyzer after validating `config`
    pub fn new(config: HammingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            code: Hamming74::new(),
        })
    }

    /// Configuration the analyzer was built with
    pub fn config(&self) -> &HammingConfig {
        &self.config
    }

    /// Code used for encoding and decoding
    pub fn code(&self) -> &Hamming74 {
        &self.code
    }

    /// Sweeps every class on the current thread
    pub fn run(&self) -> Analysis {
        let classes = classify(self.config.code_length);
        let stats = classes
            .iter()
            .map(|(weight, patterns)| {
                correction_rate(&self.code, self.config.information_word, weight, patterns)
            })
            .collect();
        self.finish(stats)
    }

    /// Sweeps the classes on the rayon thread pool; same result as [`run`](Self::run)
    pub fn run_parallel(&self) -> Analysis {
        let classes = classify(self.config.code_length);
        let work: Vec<(u32, &[u64])> = classes.iter().collect();
        let stats = work
            .par_iter()
            .map(|&(weight, patterns)| {
                correction_rate(&self.code, self.config.information_word, weight, patterns)
            })
            .collect();
        self.finish(stats)
    }

    fn finish(&self, classes: Vec<ClassStats>) -> Analysis {
        let analysis = Analysis {
            information_word: self.config.information_word,
            codeword: self.code.encode(self.config.information_word),
            classes,
        };
        log::debug!(
            "analyzed {} error patterns against codeword {:07b}",
            analysis.total_patterns(),
            analysis.codeword
        );
        analysis
    }
}

/// Binomial coefficient C(n, k), 0 when k > n
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
