//! Console report for a (7,4) Hamming code analysis run.

use crate::cs::ecc::analysis::{Analysis, ErrorClassAnalyzer};
use crate::cs::ecc::bits::mask;
use crate::cs::ecc::hamming::{Correction, CODE_LENGTH, DATA_LENGTH};
use std::fmt::{Display, Formatter};

/// Error pattern used for the worked correction example: bit position 5 flipped
pub const DEMO_ERROR_PATTERN: u64 = 0b0000100;

/// Everything printed by one report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Correction sweep over every error class
    pub analysis: Analysis,
    /// Error pattern injected for the worked example
    pub error_pattern: u64,
    /// Codeword with `error_pattern` applied
    pub received: u64,
    /// Decoder output for `received`
    pub correction: Correction,
}

impl Report {
    /// Runs the analysis and the worked example with [`DEMO_ERROR_PATTERN`]
    pub fn generate(analyzer: &ErrorClassAnalyzer) -> Self {
        Self::with_error_pattern(analyzer, DEMO_ERROR_PATTERN)
    }

    /// Runs the analysis and the worked example with `error_pattern`, truncated to seven bits
    pub fn with_error_pattern(analyzer: &ErrorClassAnalyzer, error_pattern: u64) -> Self {
        let error_pattern = mask(error_pattern, CODE_LENGTH);
        let analysis = analyzer.run();
        let received = analysis.codeword ^ error_pattern;
        let correction = analyzer.code().correct(received);
        Self {
            analysis,
            error_pattern,
            received,
            correction,
        }
    }

    /// Whether the worked example decoded back to the information word
    pub fn example_corrected(&self) -> bool {
        self.correction.data == self.analysis.information_word
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let info = self.analysis.information_word;

        writeln!(f, "=== HAMMING CODE [{},{}] ===", CODE_LENGTH, DATA_LENGTH)?;
        writeln!(f, "Information word: {:0k$b}", info, k = DATA_LENGTH)?;
        writeln!(f, "Capability: error correcting (Ck)")?;
        writeln!(f)?;

        writeln!(f, "Encoding:")?;
        writeln!(f, "  Information word:  {:0k$b}", info, k = DATA_LENGTH)?;
        writeln!(
            f,
            "  Codeword:          {:0n$b}",
            self.analysis.codeword,
            n = CODE_LENGTH
        )?;
        writeln!(f)?;

        writeln!(f, "Error correction example:")?;
        writeln!(
            f,
            "  Error pattern:     {:0n$b}",
            self.error_pattern,
            n = CODE_LENGTH
        )?;
        writeln!(
            f,
            "  Received word:     {:0n$b}",
            self.received,
            n = CODE_LENGTH
        )?;
        let outcome = if self.example_corrected() {
            "✓ error corrected"
        } else {
            "✗ error not corrected"
        };
        writeln!(
            f,
            "  Decoded word:      {:0k$b} {}",
            self.correction.data,
            outcome,
            k = DATA_LENGTH
        )?;
        writeln!(f)?;

        writeln!(f, "Correction capability:")?;
        writeln!(f, "i  C(n,i)  Nk   Ck")?;
        writeln!(f, "───────────────────")?;
        for stats in &self.analysis.classes {
            writeln!(
                f,
                "{}  {:6}  {:3}  {:.3} {}",
                stats.weight,
                stats.size,
                stats.corrected,
                stats.rate(),
                stats.verdict().symbol()
            )?;
        }
        Ok(())
    }
}
