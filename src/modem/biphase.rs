//! Biphase-L (differential Manchester) modulation for 1G frames.
//!
//! Constant-envelope phase modulation: each bit is two equal-length sample
//! halves at ±1.1 rad, with the transition direction encoding the bit.

use num_complex::Complex32;

pub struct BiphaseLModulator {
    samples_per_bit: usize,
    phase_rad: f32,
}

impl BiphaseLModulator {
    /// `samples_per_bit` must be even so the mid-bit transition falls on a
    /// sample boundary.
    pub fn new(samples_per_bit: usize, phase_rad: f32) -> Self {
        debug_assert!(samples_per_bit % 2 == 0);
        Self {
            samples_per_bit,
            phase_rad,
        }
    }

    /// Modulate a single bit into `samples_per_bit` complex samples.
    ///
    /// Bit '1': first half at +phase, second half at −phase.
    /// Bit '0': the inverse. Amplitude is 1.0 throughout.
    pub fn modulate_bit(&self, bit: u8) -> Vec<Complex32> {
        let half = self.samples_per_bit / 2;
        let plus = Complex32::from_polar(1.0, self.phase_rad);
        let minus = Complex32::from_polar(1.0, -self.phase_rad);

        let (first, second) = if bit != 0 { (plus, minus) } else { (minus, plus) };

        let mut samples = Vec::with_capacity(self.samples_per_bit);
        samples.extend(std::iter::repeat_n(first, half));
        samples.extend(std::iter::repeat_n(second, half));
        samples
    }

    /// Modulate a bit slice into a contiguous sample stream.
    pub fn modulate_bits(&self, bits: &[u8]) -> Vec<Complex32> {
        let mut samples = Vec::with_capacity(bits.len() * self.samples_per_bit);
        for &bit in bits {
            samples.extend(self.modulate_bit(bit));
        }
        samples
    }

    pub fn samples_for_bits(&self, num_bits: usize) -> usize {
        num_bits * self.samples_per_bit
    }
}
