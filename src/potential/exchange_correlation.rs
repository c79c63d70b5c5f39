/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Local density exchange-correlation functional
//!
//! Exchange is the Dirac/Slater form and correlation is the Vosko-Wilk-Nusair
//! parameterization for the spin-unpolarized electron gas. All quantities are
//! in Hartree.

use crate::utils::constants::FOUR_PI;
use std::f64::consts::PI;

/// Densities at or below this value produce no exchange-correlation contribution
pub const DEFAULT_DENSITY_CUTOFF: f64 = 1e-20;

// VWN parameters (paramagnetic)
const VWN_A: f64 = 0.0621814;
const VWN_X0: f64 = -0.10498;
const VWN_B: f64 = 3.72744;
const VWN_C: f64 = 12.9352;
const VWN_Q: f64 = 6.151991; // sqrt(4c - b²)

/// Exchange and correlation potentials and energy densities at one point
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct XcPoint {
    pub v_exchange: f64,
    pub e_exchange: f64,
    pub v_correlation: f64,
    pub e_correlation: f64,
}

impl XcPoint {
    /// Evaluate the functional at a single density
    pub fn at_density(density: f64, cutoff: f64) -> Self {
        if !(density > cutoff) {
            return Self::default();
        }

        let rs = seitz_radius(density);
        let (v_exchange, e_exchange) = exchange(rs);
        let (v_correlation, e_correlation) = correlation(rs);

        Self {
            v_exchange,
            e_exchange,
            v_correlation,
            e_correlation,
        }
    }

    pub fn potential(&self) -> f64 {
        self.v_exchange + self.v_correlation
    }

    pub fn energy_density(&self) -> f64 {
        self.e_exchange + self.e_correlation
    }
}

/// Exchange-correlation fields tabulated on the radial grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XcFields {
    pub v_exchange: Vec<f64>,
    pub e_exchange: Vec<f64>,
    pub v_correlation: Vec<f64>,
    pub e_correlation: Vec<f64>,
}

impl XcFields {
    pub fn len(&self) -> usize {
        self.v_exchange.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v_exchange.is_empty()
    }

    /// Combined potential Vx + Vc at grid point `i`
    pub fn potential(&self, i: usize) -> f64 {
        self.v_exchange[i] + self.v_correlation[i]
    }

    /// Combined energy density Ex + Ec at grid point `i`
    pub fn energy_density(&self, i: usize) -> f64 {
        self.e_exchange[i] + self.e_correlation[i]
    }

    /// Combined potential Vx + Vc on the whole grid
    pub fn total_potential(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.potential(i)).collect()
    }
}

/// Wigner-Seitz radius rs = (3 / (4π n))^{1/3}
pub fn seitz_radius(density: f64) -> f64 {
    (3.0 / (FOUR_PI * density)).cbrt()
}

/// Slater exchange potential and energy density for a given rs
pub fn exchange(rs: f64) -> (f64, f64) {
    let v_exchange = -(3.0 / (2.0 * PI)).powf(2.0 / 3.0) / rs;
    (v_exchange, 0.75 * v_exchange)
}

/// VWN correlation potential and energy density for a given rs
pub fn correlation(rs: f64) -> (f64, f64) {
    let x = rs.sqrt();
    let big_x = x * x + VWN_B * x + VWN_C;
    let angle = (VWN_Q / (2.0 * x + VWN_B)).atan();

    let term1 = 0.5 * VWN_A * ((x * x / big_x).ln() + angle * 2.0 * VWN_B / VWN_Q);

    let prefactor = -0.5 * VWN_A * VWN_B * VWN_X0 / (VWN_X0 * VWN_X0 + VWN_B * VWN_X0 + VWN_C);
    let term2 = prefactor
        * (((x - VWN_X0) * (x - VWN_X0) / big_x).ln()
            + angle * 2.0 * (VWN_B + 2.0 * VWN_X0) / VWN_Q);

    let term3 = -VWN_A / 6.0 * (VWN_C * (x - VWN_X0) - VWN_B * x * VWN_X0)
        / ((x - VWN_X0) * big_x);

    (term1 + term2 + term3, term1 + term2)
}

/// Evaluate the functional at every grid point
///
/// Points whose density does not exceed `cutoff` get zeros in all four fields.
pub fn evaluate_xc(density: &[f64], cutoff: f64) -> XcFields {
    let mut fields = XcFields {
        v_exchange: Vec::with_capacity(density.len()),
        e_exchange: Vec::with_capacity(density.len()),
        v_correlation: Vec::with_capacity(density.len()),
        e_correlation: Vec::with_capacity(density.len()),
    };

    for &n in density {
        let point = XcPoint::at_density(n, cutoff);
        fields.v_exchange.push(point.v_exchange);
        fields.e_exchange.push(point.e_exchange);
        fields.v_correlation.push(point.v_correlation);
        fields.e_correlation.push(point.e_correlation);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_seitz_radius() {
        let density = 3.0 / (FOUR_PI * 8.0);
        assert_relative_eq!(seitz_radius(density), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exchange() {
        let (v, e) = exchange(1.0);
        assert_relative_eq!(v, -0.6108870577108572, epsilon = 1e-12);
        assert_relative_eq!(e, 0.75 * v, epsilon = 1e-15);

        // Equivalent closed form -(3n/π)^{1/3}
        let n = 0.1;
        let (v, _) = exchange(seitz_radius(n));
        assert_relative_eq!(v, -(3.0 * n / PI).cbrt(), epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.5, -0.08562449045570385, -0.07706330745814065)]
    #[case(1.0, -0.06781621074619312, -0.06001868680887172)]
    #[case(2.0, -0.051603824239126524, -0.04478278890395798)]
    #[case(5.0, -0.033384171221293814, -0.028133762475660636)]
    fn test_vwn_correlation(#[case] rs: f64, #[case] v_expected: f64, #[case] e_expected: f64) {
        let (v, e) = correlation(rs);
        assert_relative_eq!(v, v_expected, epsilon = 1e-12);
        assert_relative_eq!(e, e_expected, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_potential_is_functional_derivative() {
        // Vc = Ec - (rs/3) dEc/drs
        for &rs in &[0.3, 1.0, 4.0] {
            let d = 1e-6;
            let slope = (correlation(rs + d).1 - correlation(rs - d).1) / (2.0 * d);
            assert_relative_eq!(correlation(rs).0, correlation(rs).1 - rs / 3.0 * slope, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_cutoff_gives_zeros() {
        let fields = evaluate_xc(&[0.0, 1e-25, DEFAULT_DENSITY_CUTOFF, 0.1], DEFAULT_DENSITY_CUTOFF);
        assert_eq!(fields.len(), 4);
        for i in 0..3 {
            assert_eq!(fields.v_exchange[i], 0.0);
            assert_eq!(fields.e_exchange[i], 0.0);
            assert_eq!(fields.v_correlation[i], 0.0);
            assert_eq!(fields.e_correlation[i], 0.0);
        }
        assert!(fields.potential(3) < 0.0);
        assert!(fields.energy_density(3) < 0.0);
        assert_eq!(fields.total_potential()[0], 0.0);
    }

    #[test]
    fn test_fields_are_negative_for_positive_density() {
        let density: Vec<f64> = (1..50).map(|i| 10f64.powf(-(i as f64) / 5.0)).collect();
        let fields = evaluate_xc(&density, DEFAULT_DENSITY_CUTOFF);
        for i in 0..density.len() {
            assert!(fields.v_exchange[i] < 0.0);
            assert!(fields.v_correlation[i] < 0.0);
            assert!(fields.e_correlation[i] > fields.v_correlation[i]);
        }
    }
}
