use num_complex::Complex32;
use sarsatgen::frame::{self, FrameSpec, PullState};
use sarsatgen::prn;
use sarsatgen::utils::consts::CHIP_RATE;

#[test]
fn first_generation_long_frame_layout() {
    let spec = FrameSpec::first_generation("AA".repeat(18));
    let cursor = frame::assemble(&spec).expect("long frame should assemble");

    // carrier + (15 preamble + 9 sync + 144 data) bits at 16 samples/bit
    assert_eq!(cursor.len(), 1024 + (15 + 9 + 144) * 16);

    let samples = cursor.samples();
    for s in &samples[..1024] {
        assert_eq!(*s, Complex32::new(1.0, 0.0));
    }
    // the whole frame is constant-envelope, so the peak is exactly 1.0
    let peak = samples.iter().map(|s| s.norm()).fold(0.0f32, f32::max);
    assert!((peak - 1.0).abs() < 1e-5);
}

#[test]
fn first_generation_short_frame_layout() {
    let spec = FrameSpec::first_generation("AA".repeat(14));
    let cursor = frame::assemble(&spec).expect("short frame should assemble");
    assert_eq!(cursor.len(), 1024 + (15 + 9 + 112) * 16);
}

#[test]
fn first_generation_single_byte_scenario() {
    // Generator with data 0xFF, no repeat, normal mode: 1536 samples total,
    // carrier then a '1' preamble bit at +1.1 rad / -1.1 rad
    let spec = FrameSpec::first_generation("FF");
    let cursor = frame::assemble(&spec).unwrap();
    assert_eq!(cursor.len(), 1536);

    let samples = cursor.samples();
    for s in &samples[1024..1032] {
        assert!((s.arg() - 1.1).abs() < 1e-6, "phase {}", s.arg());
    }
    for s in &samples[1032..1040] {
        assert!((s.arg() + 1.1).abs() < 1e-6, "phase {}", s.arg());
    }
}

#[test]
fn first_generation_rejects_bad_input() {
    assert!(frame::assemble(&FrameSpec::first_generation("GG")).is_err());
    assert!(frame::assemble(&FrameSpec::first_generation("")).is_err());
    // 6000 Hz gives 15 samples/bit: not even, no mid-bit transition sample
    let odd_rate = FrameSpec::first_generation("FF").with_sample_rate(6000.0);
    assert!(frame::assemble(&odd_rate).is_err());
}

const TEST_FRAME_2G: &str = "0C0E7456390956CCD02799A2468ACF135787FFF00C02832000037707609BC0F";

#[test]
fn second_generation_frame_duration() {
    // 300 frame bits split 150/150 over I and Q at 256 chips/bit is one
    // second of signal at the chip rate, whatever the oversampling
    let spec = FrameSpec::second_generation(TEST_FRAME_2G).with_sample_rate(76_800.0);
    let cursor = frame::assemble(&spec).unwrap();

    let samples_per_chip = (76_800.0 / CHIP_RATE) as usize;
    let chips_per_channel = cursor.len() / samples_per_chip;
    assert_eq!(chips_per_channel, 150 * 256);
    assert!((chips_per_channel as f64 / CHIP_RATE - 1.0).abs() < 1e-9);
}

#[test]
fn second_generation_normalized_at_nominal_rate() {
    let spec = FrameSpec::second_generation(TEST_FRAME_2G);
    let cursor = frame::assemble(&spec).unwrap();
    assert_eq!(cursor.len(), 150 * 256 * 10);

    let peak = cursor
        .samples()
        .iter()
        .map(|s| s.norm())
        .fold(0.0f32, f32::max);
    assert!((peak - 1.0).abs() < 1e-5, "peak = {peak}");
}

#[test]
fn second_generation_self_test_mode_changes_waveform() {
    let normal = FrameSpec::second_generation(TEST_FRAME_2G).with_sample_rate(76_800.0);
    let self_test = normal.clone().with_test_mode(true);
    let a = frame::assemble(&normal).unwrap();
    let b = frame::assemble(&self_test).unwrap();
    assert_eq!(a.len(), b.len());
    assert_ne!(a.samples(), b.samples());
}

#[test]
fn second_generation_rejects_short_hex() {
    let spec = FrameSpec::second_generation("0C0E74");
    assert!(frame::assemble(&spec).is_err());
}

#[test]
fn repeat_playback_wraps() {
    let spec = FrameSpec::first_generation("FF").with_repeat(true);
    let mut cursor = frame::assemble(&spec).unwrap();
    let frame_len = cursor.len();

    let mut chunk = vec![Complex32::default(); frame_len + 10];
    assert_eq!(cursor.pull(&mut chunk), PullState::Streaming);
    // wrapped read restarts at the carrier
    assert_eq!(chunk[frame_len], Complex32::new(1.0, 0.0));
}

#[test]
fn one_shot_playback_ends_once() {
    let spec = FrameSpec::first_generation("FF");
    let mut cursor = frame::assemble(&spec).unwrap();

    let mut chunk = vec![Complex32::default(); 1000];
    assert_eq!(cursor.pull(&mut chunk), PullState::Streaming);
    assert_eq!(cursor.pull(&mut chunk), PullState::End);
    // 1536 total: second chunk holds 536 real samples then zero padding
    assert!(chunk[..536].iter().any(|s| s.norm() > 0.0));
    assert!(chunk[536..].iter().all(|s| s.norm() == 0.0));
}

#[test]
fn prn_self_check_is_a_regression_gate() {
    prn::self_check().expect("reference vector must match");
}
