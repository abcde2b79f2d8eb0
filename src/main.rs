use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use sarsatgen::frame::{self, FrameSpec};
use sarsatgen::io::{GenerationMeta, write_iq_file, write_meta, write_wav_stereo};
use sarsatgen::utils::consts::{LONG_FRAME_BYTES, SAMPLE_RATE_1G, SAMPLE_RATE_2G, SHORT_FRAME_BYTES};
use sarsatgen::utils::logging::init_logging;
use sarsatgen::{Result, prn};

#[derive(Parser)]
#[command(author, version, about = "COSPAS-SARSAT 406 MHz beacon waveform generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a first-generation (T.001) Biphase-L frame
    Gen1g {
        /// Message bytes as hex (default: 0xAA test pattern)
        #[arg(long)]
        hex: Option<String>,

        /// Use the 14-byte short-frame test pattern instead of 18 bytes
        #[arg(long)]
        short: bool,

        /// Self-test mode (self-test frame sync pattern)
        #[arg(long)]
        test_mode: bool,

        /// Repeat the frame cyclically in the output metadata
        #[arg(long)]
        repeat: bool,

        /// Baseband sample rate in Hz
        #[arg(short, long, default_value_t = SAMPLE_RATE_1G)]
        sample_rate: f64,

        /// Output IQ file (interleaved float32)
        #[arg(short, long)]
        output: PathBuf,

        /// Also write a stereo I/Q WAV file
        #[arg(long)]
        wav: Option<PathBuf>,

        /// Also write a JSON generation summary
        #[arg(long)]
        meta: Option<PathBuf>,
    },

    /// Generate a second-generation (T.018) DSSS/OQPSK frame
    Gen2g {
        /// T.018 frame as 63 hex characters (250 bits, BCH included)
        #[arg(long, conflicts_with = "frame_file")]
        hex: Option<String>,

        /// Read the hex frame from a text file (lines starting with # are ignored)
        #[arg(long)]
        frame_file: Option<PathBuf>,

        /// Self-test mode (self-test PRN seeds)
        #[arg(long)]
        test_mode: bool,

        /// Repeat the frame cyclically in the output metadata
        #[arg(long)]
        repeat: bool,

        /// Baseband sample rate in Hz
        #[arg(short, long, default_value_t = SAMPLE_RATE_2G)]
        sample_rate: f64,

        /// Output IQ file (interleaved float32)
        #[arg(short, long)]
        output: PathBuf,

        /// Also write a stereo I/Q WAV file
        #[arg(long)]
        wav: Option<PathBuf>,

        /// Also write a JSON generation summary
        #[arg(long)]
        meta: Option<PathBuf>,
    },

    /// Run the PRN generator self-check against the published reference chips
    Verify,
}

/// Validated test frame (EPIRB, TAC 12345, position 42.85N 4.95E)
const DEFAULT_FRAME_2G: &str =
    "0C0E7456390956CCD02799A2468ACF135787FFF00C02832000037707609BC0F";

fn main() -> ExitCode {
    init_logging();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Gen1g {
            hex,
            short,
            test_mode,
            repeat,
            sample_rate,
            output,
            wav,
            meta,
        } => {
            let message_hex = hex.unwrap_or_else(|| {
                let bytes = if short { SHORT_FRAME_BYTES } else { LONG_FRAME_BYTES };
                "AA".repeat(bytes)
            });
            let spec = FrameSpec::first_generation(message_hex)
                .with_test_mode(test_mode)
                .with_repeat(repeat)
                .with_sample_rate(sample_rate);
            generate(&spec, &output, wav.as_deref(), meta.as_deref())
        }
        Commands::Gen2g {
            hex,
            frame_file,
            test_mode,
            repeat,
            sample_rate,
            output,
            wav,
            meta,
        } => {
            let message_hex = match (hex, frame_file) {
                (Some(hex), _) => hex,
                (None, Some(path)) => read_frame_file(&path)?,
                (None, None) => {
                    info!("No frame given, using the built-in test frame");
                    DEFAULT_FRAME_2G.to_string()
                }
            };
            let spec = FrameSpec::second_generation(message_hex)
                .with_test_mode(test_mode)
                .with_repeat(repeat)
                .with_sample_rate(sample_rate);
            generate(&spec, &output, wav.as_deref(), meta.as_deref())
        }
        Commands::Verify => {
            prn::self_check()?;
            info!("PRN self-check passed: {}", prn::REFERENCE_CHIPS_HEX);
            Ok(())
        }
    }
}

fn generate(
    spec: &FrameSpec,
    output: &std::path::Path,
    wav: Option<&std::path::Path>,
    meta: Option<&std::path::Path>,
) -> Result<()> {
    let cursor = frame::assemble(spec)?;
    write_iq_file(output, cursor.samples())?;

    if let Some(wav_path) = wav {
        write_wav_stereo(wav_path, cursor.samples(), spec.sample_rate as u32)?;
    }
    if let Some(meta_path) = meta {
        write_meta(meta_path, &GenerationMeta::new(spec, cursor.len()))?;
    }
    Ok(())
}

/// Read a hex frame from a text file: the first non-empty line that is not
/// a `#` comment.
fn read_frame_file(path: &std::path::Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)?;
    for line in contents.lines() {
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            return Ok(line.to_string());
        }
    }
    Err(sarsatgen::Error::InvalidInput(format!(
        "no hex frame found in {}",
        path.display()
    )))
}
