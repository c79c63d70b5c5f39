/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Logarithmic radial grid
//!
//! Grid points follow `r[i] = exp(ln r_min + i h)` with `h = (ln r_max - ln r_min) / Nx`.
//! The solvers work in the uniform variable `x = ln r`, so every radial
//! integral is evaluated as `∫ f dr = ∫ f r dx` with Simpson's rule in `x`.

use super::errors::{check_len, PotentialError, Result};
use crate::utils::constants::FOUR_PI;
use crate::utils::math::simpson_sum;
use serde::{Deserialize, Serialize};

/// Parameters of the radial grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Innermost radius in bohr
    pub r_min: f64,
    /// Outermost radius in bohr
    pub r_max: f64,
    /// Number of intervals Nx (must be even)
    pub intervals: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            r_min: 1e-12,
            r_max: 30.0,
            intervals: 20000,
        }
    }
}

impl GridSettings {
    /// Check that the settings describe a usable grid
    pub fn validate(&self) -> Result<()> {
        if !(self.r_min.is_finite() && self.r_min > 0.0) {
            return Err(PotentialError::InvalidGrid(format!(
                "r_min must be positive, got {}",
                self.r_min
            )));
        }
        if !(self.r_max.is_finite() && self.r_max > self.r_min) {
            return Err(PotentialError::InvalidGrid(format!(
                "r_max must exceed r_min, got r_min={} r_max={}",
                self.r_min, self.r_max
            )));
        }
        if self.intervals < 4 || self.intervals % 2 != 0 {
            return Err(PotentialError::InvalidGrid(format!(
                "number of intervals must be even and at least 4, got {}",
                self.intervals
            )));
        }
        Ok(())
    }
}

/// Radial grid shared by all solvers of one SCF run
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGrid {
    r: Vec<f64>,
    sqrt_r: Vec<f64>,
    log_step: f64,
}

impl RadialGrid {
    /// Build the grid described by `settings`
    pub fn new(settings: &GridSettings) -> Result<Self> {
        Self::logarithmic(settings.r_min, settings.r_max, settings.intervals)
    }

    /// Build a logarithmic grid with `intervals + 1` points from `r_min` to `r_max`
    pub fn logarithmic(r_min: f64, r_max: f64, intervals: usize) -> Result<Self> {
        GridSettings {
            r_min,
            r_max,
            intervals,
        }
        .validate()?;

        let x_min = r_min.ln();
        let log_step = (r_max.ln() - x_min) / intervals as f64;

        let mut r: Vec<f64> = (0..=intervals)
            .map(|i| (x_min + i as f64 * log_step).exp())
            .collect();
        // Pin the end points against rounding in exp(ln r)
        r[0] = r_min;
        r[intervals] = r_max;

        let sqrt_r = r.iter().map(|&ri| ri.sqrt()).collect();

        Ok(Self { r, sqrt_r, log_step })
    }

    /// Number of grid points (Nx + 1)
    pub fn len(&self) -> usize {
        self.r.len()
    }

    /// A grid always holds at least five points
    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// Number of intervals Nx
    pub fn intervals(&self) -> usize {
        self.r.len() - 1
    }

    /// Radii in bohr
    pub fn r(&self) -> &[f64] {
        &self.r
    }

    /// Square roots of the radii
    pub fn sqrt_r(&self) -> &[f64] {
        &self.sqrt_r
    }

    /// Uniform step h in x = ln r
    pub fn log_step(&self) -> f64 {
        self.log_step
    }

    pub fn r_min(&self) -> f64 {
        self.r[0]
    }

    pub fn r_max(&self) -> f64 {
        self.r[self.r.len() - 1]
    }

    /// ∫ f(r) dr over the grid for tabulated `f`
    pub fn integrate(&self, integrand: &[f64]) -> Result<f64> {
        check_len("integrand", integrand, self.len())?;
        self.integrate_with(|i, _| integrand[i])
    }

    /// ∫ f(r) dr where `f(i, r_i)` is evaluated on demand
    pub fn integrate_with<F>(&self, f: F) -> Result<f64>
    where
        F: Fn(usize, f64) -> f64,
    {
        let samples: Vec<f64> = self
            .r
            .iter()
            .enumerate()
            .map(|(i, &ri)| f(i, ri) * ri)
            .collect();
        Ok(simpson_sum(&samples, self.log_step)?)
    }

    /// Number of electrons ∫ 4π r² n dr held by a density
    pub fn electron_count(&self, density: &[f64]) -> Result<f64> {
        check_len("density", density, self.len())?;
        self.integrate_with(|i, r| FOUR_PI * r * r * density[i])
    }

    /// Hydrogen-like trial density `Z² exp(-Z r)` scaled to hold `n_electrons`
    pub fn trial_density(&self, nuclear_charge: f64, n_electrons: f64) -> Result<Vec<f64>> {
        if !(nuclear_charge > 0.0 && n_electrons > 0.0) {
            return Err(PotentialError::CalculationError(format!(
                "trial density needs positive charges, got Z={} N={}",
                nuclear_charge, n_electrons
            )));
        }

        let mut density: Vec<f64> = self
            .r
            .iter()
            .map(|&r| nuclear_charge * nuclear_charge * (-nuclear_charge * r).exp())
            .collect();

        let count = self.electron_count(&density)?;
        if !(count.is_finite() && count > 0.0) {
            return Err(PotentialError::Normalization(format!(
                "trial density holds {} electrons",
                count
            )));
        }

        let scale = n_electrons / count;
        density.iter_mut().for_each(|n| *n *= scale);
        Ok(density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_layout() {
        let grid = RadialGrid::logarithmic(1e-6, 20.0, 1000).unwrap();
        assert_eq!(grid.len(), 1001);
        assert_eq!(grid.intervals(), 1000);
        assert_eq!(grid.r_min(), 1e-6);
        assert_eq!(grid.r_max(), 20.0);

        // Constant ratio between neighbours
        let ratio = grid.log_step().exp();
        for i in 1..grid.len() - 1 {
            assert_relative_eq!(grid.r()[i] / grid.r()[i - 1], ratio, max_relative = 1e-9);
        }
        assert_relative_eq!(grid.sqrt_r()[500], grid.r()[500].sqrt());
    }

    #[test]
    fn test_invalid_grids() {
        assert!(RadialGrid::logarithmic(0.0, 30.0, 100).is_err());
        assert!(RadialGrid::logarithmic(1.0, 0.5, 100).is_err());
        assert!(RadialGrid::logarithmic(1e-6, 30.0, 101).is_err());
        assert!(RadialGrid::logarithmic(1e-6, 30.0, 2).is_err());
    }

    #[test]
    fn test_integration() {
        let grid = RadialGrid::new(&GridSettings::default()).unwrap();

        // ∫_0^∞ r² e^{-r} dr = 2
        let value = grid.integrate_with(|_, r| r * r * (-r).exp()).unwrap();
        assert_relative_eq!(value, 2.0, epsilon = 1e-8);

        let tabulated: Vec<f64> = grid.r().iter().map(|&r| (-2.0 * r).exp()).collect();
        assert_relative_eq!(grid.integrate(&tabulated).unwrap(), 0.5, epsilon = 1e-8);

        assert!(grid.integrate(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_trial_density_normalization() {
        let grid = RadialGrid::logarithmic(1e-10, 30.0, 4000).unwrap();
        let density = grid.trial_density(6.0, 6.0).unwrap();
        assert_relative_eq!(grid.electron_count(&density).unwrap(), 6.0, epsilon = 1e-10);
        assert!(density.iter().all(|&n| n >= 0.0));
        assert!(density[0] > density[grid.len() / 2]);

        assert!(grid.trial_density(0.0, 1.0).is_err());
    }
}
