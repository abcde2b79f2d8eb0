//! Root-raised-cosine pulse shaping (T.018 Section 2.3.4: α = 0.8,
//! span ±31 chips).

use std::f64::consts::PI;

/// Generate RRC filter coefficients, normalized to unit energy.
///
/// `span_chips` is the filter extent each side of center, so the tap count
/// is `2 * span_chips * samples_per_chip + 1` and always odd. The two
/// removable singularities of the closed-form response (t = 0 and
/// t = ±1/(4α)) are evaluated from their limits.
pub fn taps(alpha: f64, span_chips: usize, samples_per_chip: usize) -> Vec<f64> {
    let filter_len = 2 * span_chips * samples_per_chip + 1;
    let mut coeffs = Vec::with_capacity(filter_len);

    for i in 0..filter_len {
        // t in chip periods, centered at 0
        let t = (i as f64 - (filter_len - 1) as f64 / 2.0) / samples_per_chip as f64;

        let h = if t.abs() < 1e-10 {
            1.0 - alpha + 4.0 * alpha / PI
        } else if (t.abs() - 1.0 / (4.0 * alpha)).abs() < 1e-10 {
            let term1 = (1.0 + 2.0 / PI) * (PI / (4.0 * alpha)).sin();
            let term2 = (1.0 - 2.0 / PI) * (PI / (4.0 * alpha)).cos();
            alpha / 2.0_f64.sqrt() * (term1 + term2)
        } else {
            let num = (PI * t * (1.0 - alpha)).sin()
                + 4.0 * alpha * t * (PI * t * (1.0 + alpha)).cos();
            let den = PI * t * (1.0 - (4.0 * alpha * t).powi(2));
            num / den
        };

        coeffs.push(h);
    }

    let norm = coeffs.iter().map(|c| c * c).sum::<f64>().sqrt();
    for c in &mut coeffs {
        *c /= norm;
    }

    coeffs
}

/// Pulse-shape a chip stream: zero-stuff by `samples_per_chip` (one impulse
/// per chip) and convolve with `taps`, "same"-length, so the output has
/// exactly `chips.len() * samples_per_chip` samples.
///
/// The convolution exploits the sparsity of the stuffed stream: each chip
/// contributes one scaled copy of the tap vector.
pub fn shape(chips: &[i8], samples_per_chip: usize, taps: &[f64]) -> Vec<f32> {
    let out_len = chips.len() * samples_per_chip;
    let half = (taps.len() - 1) / 2;
    let mut out = vec![0.0f64; out_len];

    for (chip_index, &chip) in chips.iter().enumerate() {
        let chip_value = chip as f64;
        let center = chip_index * samples_per_chip;
        for (tap_index, &tap) in taps.iter().enumerate() {
            let n = center + tap_index;
            if n < half {
                continue;
            }
            let n = n - half;
            if n >= out_len {
                break;
            }
            out[n] += chip_value * tap;
        }
    }

    out.into_iter().map(|s| s as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_count_is_odd() {
        for sps in [1, 4, 10, 16] {
            let h = taps(0.8, 31, sps);
            assert_eq!(h.len(), 2 * 31 * sps + 1);
            assert_eq!(h.len() % 2, 1);
        }
    }

    #[test]
    fn test_unit_energy() {
        let h = taps(0.8, 31, 10);
        let energy: f64 = h.iter().map(|c| c * c).sum();
        assert!((energy - 1.0).abs() < 1e-6, "energy = {energy}");
    }

    #[test]
    fn test_symmetry() {
        let h = taps(0.8, 31, 10);
        let len = h.len();
        for i in 0..len / 2 {
            assert!(
                (h[i] - h[len - 1 - i]).abs() < 1e-12,
                "asymmetric at {i}: {} vs {}",
                h[i],
                h[len - 1 - i]
            );
        }
    }

    #[test]
    fn test_center_tap_is_max() {
        let h = taps(0.8, 31, 10);
        let center = h[h.len() / 2];
        assert!(h.iter().all(|&c| c <= center));
    }

    #[test]
    fn test_quarter_alpha_singularity() {
        // With sps=16, t hits exactly 1/(4·0.8) = 0.3125 = 5/16; the limit
        // branch must produce a finite value continuous with its neighbors
        let h = taps(0.8, 31, 16);
        assert!(h.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_shape_length_and_peak_location() {
        let h = taps(0.8, 4, 8);
        let chips = vec![1i8; 20];
        let shaped = shape(&chips, 8, &h);
        assert_eq!(shaped.len(), 20 * 8);

        // A lone impulse reproduces the tap shape around its position
        let single = shape(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0], 8, &h);
        let peak = single
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.abs().partial_cmp(&b.1.abs()).unwrap())
            .unwrap()
            .0;
        assert_eq!(peak, 0);
    }
}
