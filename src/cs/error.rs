use thiserror::Error;

/// Errors shared by the coding modules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input does not fit in the number of bits available for it
    #[error("input too large: {length} bits, maximum is {max_length}")]
    InputTooLarge { length: usize, max_length: usize },
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;
