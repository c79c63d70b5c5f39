/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Radial Poisson solver for the Hartree potential
//!
//! The Hartree potential is carried as `U(r) = r V_H(r)`, which satisfies
//! `U'' = -4π r n(r)` with `U(0) = 0` and `U(∞) = N`. Writing `U = Y √r` and
//! `x = ln r` turns this into `Y'' = Y/4 - 4π r^{5/2} n`, which is integrated
//! inward with Numerov. `Y` is fixed at the outer boundary and the value at
//! the second-to-last point is adjusted until `Y(r_min)` vanishes.

use super::errors::{check_len, PotentialError, Result};
use super::grid::RadialGrid;
use super::numerov::numerov_inward;
use super::shooting::{newton_shoot, NewtonSettings};
use crate::utils::constants::FOUR_PI;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Parameters of the Hartree shooting search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HartreeSettings {
    /// Finite-difference perturbation, divided by √r_max
    pub step_scale: f64,
    /// Residual tolerance, divided by √r_min
    pub tolerance_scale: f64,
    pub max_iterations: usize,
    /// Offset subtracted from N for the first guess of Y at the second-to-last point
    pub initial_offset: f64,
}

impl Default for HartreeSettings {
    fn default() -> Self {
        Self {
            step_scale: 0.1,
            tolerance_scale: 1e-9,
            max_iterations: 1000,
            initial_offset: 1e-8,
        }
    }
}

impl HartreeSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.step_scale > 0.0 && self.step_scale.is_finite()) {
            return Err(PotentialError::InvalidSettings(format!(
                "Hartree step scale must be positive, got {}",
                self.step_scale
            )));
        }
        if !(self.tolerance_scale > 0.0 && self.tolerance_scale.is_finite()) {
            return Err(PotentialError::InvalidSettings(format!(
                "Hartree tolerance scale must be positive, got {}",
                self.tolerance_scale
            )));
        }
        if self.max_iterations == 0 {
            return Err(PotentialError::InvalidSettings(
                "Hartree solver needs at least one iteration".to_string(),
            ));
        }
        if !self.initial_offset.is_finite() {
            return Err(PotentialError::InvalidSettings(
                "Hartree initial offset must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hartree potential produced for one density
#[derive(Debug, Clone)]
pub struct HartreeSolution {
    /// U(r) = r V_H(r) on the grid
    pub potential: Vec<f64>,
    /// Shooting variable Y = U / √r
    pub shooting: Vec<f64>,
    /// Final value of Y at the second-to-last grid point
    pub parameter: f64,
    /// Y(r_min) at the final parameter
    pub residual: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl HartreeSolution {
    /// Hartree potential V_H(r) = U(r) / r
    pub fn hartree_potential(&self, grid: &RadialGrid) -> Vec<f64> {
        self.potential
            .iter()
            .zip(grid.r())
            .map(|(u, r)| u / r)
            .collect()
    }
}

/// Solve the radial Poisson equation for `density` holding `n_electrons`
///
/// A non-converged search is not an error: the potential from the last
/// parameter is returned with `converged == false`.
pub fn solve_hartree(
    grid: &RadialGrid,
    density: &[f64],
    n_electrons: f64,
    settings: &HartreeSettings,
) -> Result<HartreeSolution> {
    let n = grid.len();
    check_len("density", density, n)?;

    let r = grid.r();
    let sqrt_r = grid.sqrt_r();
    let h = grid.log_step();
    let sqrt_r_max = grid.r_max().sqrt();

    let source: Vec<f64> = (0..n)
        .map(|i| -FOUR_PI * r[i] * r[i] * sqrt_r[i] * density[i])
        .collect();
    let curvature = vec![0.25; n];
    let outer = n_electrons / sqrt_r_max;

    let shoot = |y: &mut [f64], parameter: f64| -> Result<()> {
        y[n - 1] = outer;
        y[n - 2] = parameter;
        numerov_inward(y, &curvature, Some(&source), h)
    };

    let newton = NewtonSettings {
        step: settings.step_scale / sqrt_r_max,
        tolerance: settings.tolerance_scale / grid.r_min().sqrt(),
        max_iterations: settings.max_iterations,
    };
    let start = (n_electrons - settings.initial_offset) / sqrt_r_max;

    let mut y = vec![0.0; n];
    let outcome = newton_shoot(
        |parameter| {
            shoot(&mut y, parameter)?;
            Ok::<f64, PotentialError>(y[0])
        },
        start,
        &newton,
    )?;

    // Profile at the parameter the search settled on
    shoot(&mut y, outcome.parameter)?;

    if outcome.converged {
        debug!(
            "Hartree potential converged after {} Newton steps (residual {:.3e})",
            outcome.iterations, outcome.residual
        );
    } else {
        warn!(
            "Hartree potential did not converge after {} Newton steps (residual {:.3e})",
            outcome.iterations, outcome.residual
        );
    }

    let potential = y.iter().zip(sqrt_r).map(|(y, s)| y * s).collect();

    Ok(HartreeSolution {
        potential,
        shooting: y,
        parameter: outcome.parameter,
        residual: outcome.residual,
        iterations: outcome.iterations,
        converged: outcome.converged,
    })
}
