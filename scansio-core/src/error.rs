//! Core error types (deterministic only)

use serde::Serialize;
use thiserror::Error;

/// Errors from the scansion pipeline proper (no I/O, no external failures).
///
/// Every error is local to a single word token; callers skip the offending
/// token and continue with the rest of the sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CoreError {
    /// A word token reached the syllabifier without a vowel or diphthong to
    /// anchor a syllable. The tokenizer contract forbids this, but the core
    /// reports it explicitly rather than scanning past the end of the token.
    #[error("token '{token}' has no vocalic nucleus")]
    NoNucleus {
        /// The offending token, verbatim.
        token: String,
    },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
