//! Bit-exact baseband waveform synthesizer for COSPAS-SARSAT 406 MHz
//! distress-beacon transmissions.
//!
//! Two protocol generations are supported: first-generation T.001 frames
//! (Biphase-L phase modulation at 400 bps) and second-generation T.018
//! frames (DSSS spreading over a 23-bit PRN, root-raised-cosine pulse
//! shaping and OQPSK at 38400 chips/s). The core is pure and
//! single-threaded; all file and CLI surfaces sit on top of it.
//!
//! ```no_run
//! use sarsatgen::frame::{self, FrameSpec};
//!
//! let spec = FrameSpec::first_generation("FF");
//! let cursor = frame::assemble(&spec)?;
//! assert_eq!(cursor.len(), 1536);
//! # Ok::<(), sarsatgen::Error>(())
//! ```

pub mod dsp;
pub mod error;
pub mod frame;
pub mod io;
pub mod modem;
pub mod prn;
pub mod spread;
pub mod utils;

pub use error::{Error, Result};
