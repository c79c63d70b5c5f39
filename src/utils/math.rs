/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Numerical helpers shared by the radial solvers

use super::errors::{Result, UtilsError};

/// Composite Simpson's rule over uniformly spaced samples
///
/// Each panel `(f[i-1], f[i], f[i+1])` contributes
/// `(f[i-1] + 4 f[i] + f[i+1]) * 2h / 6`.
///
/// # Arguments
///
/// * `samples` - Function values at equally spaced abscissae
/// * `h` - Spacing between neighbouring abscissae
///
/// # Returns
///
/// The approximate integral, or an error if the number of samples is not odd
pub fn simpson_sum(samples: &[f64], h: f64) -> Result<f64> {
    if samples.len() < 3 || samples.len() % 2 == 0 {
        return Err(UtilsError::Math(format!(
            "Simpson's rule needs an odd number of samples (at least 3), got {}",
            samples.len()
        )));
    }

    let mut sum = 0.0;
    for i in (1..samples.len() - 1).step_by(2) {
        sum += samples[i - 1] + 4.0 * samples[i] + samples[i + 1];
    }

    Ok(sum * 2.0 * h / 6.0)
}

/// Count strict sign changes between neighbouring values in `values[start - 1..end]`
///
/// A pair `(values[i - 1], values[i])` is counted for every `i` in `start..end`
/// whose product is negative; exact zeros never count.
pub fn count_sign_changes(values: &[f64], start: usize, end: usize) -> usize {
    let start = start.max(1);
    let end = end.min(values.len());
    if start >= end {
        return 0;
    }

    (start..end)
        .filter(|&i| values[i] * values[i - 1] < 0.0)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_simpson_exact_for_cubics() {
        let n = 11;
        let h = 0.1;
        let samples: Vec<f64> = (0..n)
            .map(|i| {
                let x = i as f64 * h;
                x * x * x - 2.0 * x + 1.0
            })
            .collect();

        // ∫_0^1 (x³ - 2x + 1) dx = 1/4
        assert_relative_eq!(simpson_sum(&samples, h).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_sine() {
        let n = 1001;
        let h = PI / (n - 1) as f64;
        let samples: Vec<f64> = (0..n).map(|i| (i as f64 * h).sin()).collect();
        assert_relative_eq!(simpson_sum(&samples, h).unwrap(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_simpson_rejects_even_sample_count() {
        assert!(simpson_sum(&[1.0, 2.0, 3.0, 4.0], 0.1).is_err());
        assert!(simpson_sum(&[1.0], 0.1).is_err());
    }

    #[test]
    fn test_count_sign_changes() {
        let values = [1.0, -1.0, -2.0, 3.0, 0.0, -1.0, 2.0];
        assert_eq!(count_sign_changes(&values, 1, values.len()), 3);

        // Guard bands exclude the first and last pairs
        assert_eq!(count_sign_changes(&values, 2, values.len() - 1), 1);

        // Degenerate ranges
        assert_eq!(count_sign_changes(&values, 5, 3), 0);
        assert_eq!(count_sign_changes(&[], 1, 10), 0);
    }
}
