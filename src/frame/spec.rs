use serde::{Deserialize, Serialize};

use crate::utils::consts::{SAMPLE_RATE_1G, SAMPLE_RATE_2G};

/// Protocol generation of the transmission to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    /// T.001 Biphase-L / BPSK
    First,
    /// T.018 DSSS / OQPSK
    Second,
}

/// One generation request. Immutable once built; consumed by the assembler.
///
/// For 1G the message hex encodes raw frame bytes (typically 18 or 14); for
/// 2G it is the 63-character T.018 frame with BCH parity already computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSpec {
    pub generation: Generation,
    pub message_hex: String,
    pub test_mode: bool,
    pub repeat: bool,
    pub sample_rate: f64,
}

impl FrameSpec {
    pub fn first_generation(message_hex: impl Into<String>) -> Self {
        Self {
            generation: Generation::First,
            message_hex: message_hex.into(),
            test_mode: false,
            repeat: false,
            sample_rate: SAMPLE_RATE_1G,
        }
    }

    pub fn second_generation(message_hex: impl Into<String>) -> Self {
        Self {
            generation: Generation::Second,
            message_hex: message_hex.into(),
            test_mode: false,
            repeat: false,
            sample_rate: SAMPLE_RATE_2G,
        }
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}
