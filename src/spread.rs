//! DSSS spreading: frame bits → I/Q chip streams (T.018 Section 2.2.3).
//!
//! Odd-numbered bits (the 1st, 3rd, 5th, ... in transmission order) go to
//! the I channel, even-numbered bits to Q. Each bit draws the next 256 chips
//! from its channel's running LFSR; the registers are never reset between
//! bits. A '1' bit inverts its chip group, a '0' bit leaves it unchanged.

use crate::prn::{self, LfsrState};

pub struct SpreadOutput {
    pub i_chips: Vec<i8>,
    pub q_chips: Vec<i8>,
}

pub fn spread(
    frame_bits: &[u8],
    chips_per_bit: usize,
    lfsr_i: LfsrState,
    lfsr_q: LfsrState,
) -> SpreadOutput {
    let half = frame_bits.len().div_ceil(2);
    let mut i_chips = Vec::with_capacity(half * chips_per_bit);
    let mut q_chips = Vec::with_capacity(half * chips_per_bit);
    let mut state_i = lfsr_i;
    let mut state_q = lfsr_q;

    for (index, &bit) in frame_bits.iter().enumerate() {
        // index 0 is bit number 1, so even indices are odd-numbered bits
        let (channel, state) = if index % 2 == 0 {
            (&mut i_chips, &mut state_i)
        } else {
            (&mut q_chips, &mut state_q)
        };

        let (chips, next) = prn::generate_sequence(*state, chips_per_bit);
        *state = next;

        if bit == 1 {
            channel.extend(chips.iter().map(|&c| -c));
        } else {
            channel.extend(chips);
        }
    }

    SpreadOutput { i_chips, q_chips }
}
