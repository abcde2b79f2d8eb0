use thiserror::Error;

/// Errors produced by the waveform synthesizer.
///
/// Every variant is local and synchronous: generation either fails before a
/// single sample is produced, or it succeeds completely.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed hex input or a bit/byte count that does not match the
    /// selected frame type.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Degenerate or out-of-range LFSR initial state. An all-zero state
    /// freezes the register and would produce a constant chip stream.
    #[error("invalid LFSR seed {0:#08x}")]
    InvalidSeed(u32),

    /// Sample rate incompatible with the required samples-per-chip or
    /// samples-per-bit resolution.
    #[error("configuration mismatch: {0}")]
    ConfigurationMismatch(String),

    /// The PRN self-check did not reproduce the published reference
    /// sequence. Must never be downgraded to a warning.
    #[error("PRN self-check failed: expected {expected}, got {actual}")]
    VerificationFailure { expected: String, actual: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
