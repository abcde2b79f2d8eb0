//! OQPSK modulation for 2G frames (T.018 Sections 2.3.3 and 2.3.4).
//!
//! I and Q chip streams are pulse-shaped independently, then Q is delayed
//! by half a chip period so I leads Q, and the combined complex stream is
//! peak-normalized.

use num_complex::Complex32;
use tracing::debug;

use crate::dsp::rrc;
use crate::error::{Error, Result};
use crate::utils::consts::{CHIP_RATE, RRC_ALPHA, RRC_SPAN_CHIPS};

pub struct OqpskModulator {
    samples_per_chip: usize,
    taps: Vec<f64>,
}

impl OqpskModulator {
    /// Build a modulator for the given sample rate.
    ///
    /// Samples per chip is the floored ratio `sample_rate / chip_rate`
    /// (10 at the nominal 400 kHz); a rate below one sample per chip
    /// cannot represent the chip stream and is rejected.
    pub fn new(sample_rate: f64) -> Result<Self> {
        let samples_per_chip = (sample_rate / CHIP_RATE) as usize;
        if samples_per_chip < 1 {
            return Err(Error::ConfigurationMismatch(format!(
                "sample rate {sample_rate} Hz is below the chip rate {CHIP_RATE} Hz"
            )));
        }

        let taps = rrc::taps(RRC_ALPHA, RRC_SPAN_CHIPS, samples_per_chip);
        debug!(
            "OQPSK modulator: {} samples/chip, {} RRC taps",
            samples_per_chip,
            taps.len()
        );

        Ok(Self {
            samples_per_chip,
            taps,
        })
    }

    pub fn samples_per_chip(&self) -> usize {
        self.samples_per_chip
    }

    /// Half-chip Q delay in samples (integer floor).
    pub fn q_offset_samples(&self) -> usize {
        self.samples_per_chip / 2
    }

    /// Modulate I and Q chip streams into one complex baseband stream.
    ///
    /// Output peak magnitude is exactly 1.0 after normalization.
    pub fn modulate(&self, i_chips: &[i8], q_chips: &[i8]) -> Vec<Complex32> {
        let i_signal = rrc::shape(i_chips, self.samples_per_chip, &self.taps);
        let q_signal = rrc::shape(q_chips, self.samples_per_chip, &self.taps);

        // I leads Q by half a chip: prepend neutral samples to Q
        let offset = self.q_offset_samples();
        let len = i_signal.len().min(q_signal.len() + offset);

        let mut samples = Vec::with_capacity(len);
        for n in 0..len {
            let q = if n < offset { 0.0 } else { q_signal[n - offset] };
            samples.push(Complex32::new(i_signal[n], q));
        }

        let peak = samples.iter().map(|s| s.norm()).fold(0.0f32, f32::max);
        if peak > 0.0 {
            for s in &mut samples {
                *s /= peak;
            }
        }

        samples
    }
}
