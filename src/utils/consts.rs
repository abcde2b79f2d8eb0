/// Default log level (overridable through RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// First Generation (T.001) Parameters
// ============================================================================

/// Nominal baseband sample rate for 1G frames (Hz)
pub const SAMPLE_RATE_1G: f64 = 6400.0;

/// 1G bit rate (bps)
pub const BIT_RATE_1G: f64 = 400.0;

/// Duration of the unmodulated carrier at frame start (seconds)
pub const CARRIER_DURATION: f64 = 0.160;

/// Number of '1' bits in the 1G preamble
pub const PREAMBLE_BITS_1G: usize = 15;

/// 1G frame synchronization pattern, normal mode
pub const FRAME_SYNC_NORMAL: [u8; 9] = [0, 0, 0, 1, 0, 1, 1, 1, 1];

/// 1G frame synchronization pattern, self-test mode
pub const FRAME_SYNC_SELF_TEST: [u8; 9] = [0, 1, 1, 0, 1, 0, 0, 0, 0];

/// Biphase-L phase deviation (radians)
pub const MOD_PHASE_RAD: f32 = 1.1;

/// Long-frame message size (144 data bits)
pub const LONG_FRAME_BYTES: usize = 18;

/// Short-frame message size (112 data bits)
pub const SHORT_FRAME_BYTES: usize = 14;

// ============================================================================
// Second Generation (T.018) Parameters
// ============================================================================

/// Nominal baseband sample rate for 2G frames (Hz)
pub const SAMPLE_RATE_2G: f64 = 400_000.0;

/// 2G data rate (bps)
pub const DATA_RATE_2G: f64 = 300.0;

/// DSSS chip rate (chips/s)
pub const CHIP_RATE: f64 = 38400.0;

/// Spreading factor: chips per bit, per channel
pub const CHIPS_PER_BIT: usize = 256;

/// Number of '0' bits in the 2G preamble
pub const PREAMBLE_BITS_2G: usize = 50;

/// Information bits per 2G message
pub const INFO_BITS_2G: usize = 202;

/// BCH(250,202) parity bits per 2G message
pub const BCH_BITS_2G: usize = 48;

/// Total 2G message bits (information + parity)
pub const MESSAGE_BITS_2G: usize = INFO_BITS_2G + BCH_BITS_2G;

/// Hex characters in a 2G frame (250 bits rounded up to a nibble boundary)
pub const FRAME_HEX_CHARS_2G: usize = 63;

/// RRC pulse-shaping roll-off factor
pub const RRC_ALPHA: f64 = 0.8;

/// RRC filter span, in chips each side of center
pub const RRC_SPAN_CHIPS: usize = 31;
