//! Frame assembly: bit sequences → complete complex baseband frames, plus
//! the pull-based playback cursor over the assembled buffer.

use num_complex::Complex32;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::frame::bits;
use crate::frame::spec::{FrameSpec, Generation};
use crate::modem::biphase::BiphaseLModulator;
use crate::modem::oqpsk::OqpskModulator;
use crate::prn::{
    LFSR_NORMAL_I, LFSR_NORMAL_Q, LFSR_SELF_TEST_I, LFSR_SELF_TEST_Q, LfsrState,
};
use crate::spread;
use crate::utils::consts::{
    BIT_RATE_1G, CARRIER_DURATION, CHIPS_PER_BIT, MOD_PHASE_RAD,
};

/// Assemble the complete sample buffer for a generation request and return
/// a playback cursor over it.
pub fn assemble(spec: &FrameSpec) -> Result<FrameCursor> {
    let samples = match spec.generation {
        Generation::First => assemble_1g(spec)?,
        Generation::Second => assemble_2g(spec)?,
    };

    info!(
        "Frame assembled: {} samples ({:.3} s at {} Hz)",
        samples.len(),
        samples.len() as f64 / spec.sample_rate,
        spec.sample_rate
    );

    Ok(FrameCursor::new(samples, spec.repeat))
}

/// 1G frame: unmodulated carrier, then preamble + sync + data in Biphase-L.
fn assemble_1g(spec: &FrameSpec) -> Result<Vec<Complex32>> {
    let data_bytes = bits::parse_hex_bytes(&spec.message_hex)?;
    if data_bytes.is_empty() {
        return Err(Error::InvalidInput("1G message is empty".into()));
    }

    let ratio = spec.sample_rate / BIT_RATE_1G;
    let samples_per_bit = ratio as usize;
    if ratio.fract() != 0.0 || samples_per_bit == 0 || samples_per_bit % 2 != 0 {
        return Err(Error::ConfigurationMismatch(format!(
            "1G sample rate {} Hz does not give an even integer number of samples per bit at {} bps",
            spec.sample_rate, BIT_RATE_1G
        )));
    }

    let carrier_samples = (CARRIER_DURATION * spec.sample_rate).round() as usize;
    let frame_bits = bits::build_frame_1g(&data_bytes, spec.test_mode);
    let modulator = BiphaseLModulator::new(samples_per_bit, MOD_PHASE_RAD);

    debug!(
        "1G frame: carrier {} samples, {} bits ({} data bytes), {} samples/bit, {}",
        carrier_samples,
        frame_bits.len(),
        data_bytes.len(),
        samples_per_bit,
        if spec.test_mode { "self-test" } else { "normal" },
    );

    let mut samples =
        Vec::with_capacity(carrier_samples + modulator.samples_for_bits(frame_bits.len()));
    samples.extend(std::iter::repeat_n(Complex32::new(1.0, 0.0), carrier_samples));
    samples.extend(modulator.modulate_bits(&frame_bits));

    Ok(samples)
}

/// 2G frame: preamble + message bits through DSSS spreading, RRC shaping
/// and OQPSK modulation. No unmodulated carrier segment; acquisition relies
/// on the known all-zero preamble chip pattern.
fn assemble_2g(spec: &FrameSpec) -> Result<Vec<Complex32>> {
    let frame_bits = bits::build_frame_2g(&spec.message_hex)?;

    let (seed_i, seed_q) = if spec.test_mode {
        (LFSR_SELF_TEST_I, LFSR_SELF_TEST_Q)
    } else {
        (LFSR_NORMAL_I, LFSR_NORMAL_Q)
    };
    let lfsr_i = LfsrState::new(seed_i)?;
    let lfsr_q = LfsrState::new(seed_q)?;

    let spread = spread::spread(&frame_bits, CHIPS_PER_BIT, lfsr_i, lfsr_q);
    debug!(
        "2G DSSS: {} frame bits -> {} I chips + {} Q chips ({})",
        frame_bits.len(),
        spread.i_chips.len(),
        spread.q_chips.len(),
        if spec.test_mode { "self-test seeds" } else { "normal seeds" },
    );

    let modulator = OqpskModulator::new(spec.sample_rate)?;
    Ok(modulator.modulate(&spread.i_chips, &spread.q_chips))
}

/// Result of one [`FrameCursor::pull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullState {
    /// More samples remain (always the case with repeat enabled)
    Streaming,
    /// The frame is exhausted; the chunk was zero-padded past the end
    End,
}

/// Pull-based cursor over an assembled frame buffer.
///
/// With `repeat` the read index wraps at the buffer end and the stream is
/// logically infinite. Without it, the final partial chunk is zero-padded
/// and [`PullState::End`] is returned from that pull onward.
pub struct FrameCursor {
    samples: Vec<Complex32>,
    position: usize,
    repeat: bool,
    finished: bool,
}

impl FrameCursor {
    fn new(samples: Vec<Complex32>, repeat: bool) -> Self {
        Self {
            samples,
            position: 0,
            repeat,
            finished: false,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whole assembled buffer, for one-shot consumers.
    pub fn samples(&self) -> &[Complex32] {
        &self.samples
    }

    /// Fill `out` with the next chunk of samples.
    pub fn pull(&mut self, out: &mut [Complex32]) -> PullState {
        let mut produced = 0;

        while produced < out.len() {
            if self.finished {
                out[produced..].fill(Complex32::new(0.0, 0.0));
                return PullState::End;
            }

            let remaining = self.samples.len() - self.position;
            let take = remaining.min(out.len() - produced);
            out[produced..produced + take]
                .copy_from_slice(&self.samples[self.position..self.position + take]);
            produced += take;
            self.position += take;

            if self.position == self.samples.len() {
                if self.repeat {
                    self.position = 0;
                } else {
                    self.finished = true;
                }
            }
        }

        if self.finished {
            PullState::End
        } else {
            PullState::Streaming
        }
    }
}
