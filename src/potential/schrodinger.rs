/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Radial Schrödinger eigenvalue solver
//!
//! For `u(r) = r R(r)` the radial equation is
//! `u'' = [2(V - E) + l(l+1)/r²] u`. With `u = y √r` and `x = ln r` this
//! becomes `y'' = p y` where `p = 2(V - E) r² + l(l+1) + 1/4`.
//! Trial solutions are integrated inward from a decaying boundary and the
//! energy is bisected until `y(r_min)` vanishes with the required number of
//! nodes. For `l > 0` the irregular solution grows like `r^{-l-1/2}` toward
//! the origin, so the residual rarely drops below tolerance and the search
//! normally ends by resolving the bracket to machine precision.

use super::errors::{check_len, PotentialError, Result};
use super::grid::RadialGrid;
use super::numerov::numerov_inward;
use super::shooting::{node_bisection, BisectionSettings, ShootingTrial};
use crate::utils::math::count_sign_changes;
use serde::{Deserialize, Serialize};

/// Parameters of the eigenvalue search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchrodingerSettings {
    /// Lowest trial energy in Hartree, lowered further when the potential
    /// admits a deeper hydrogen-like level
    pub energy_start: f64,
    /// Initial energy increment in Hartree
    pub energy_step: f64,
    /// Residual tolerance, divided by √r_min
    pub tolerance_scale: f64,
    /// Increment below which the energy counts as resolved
    pub step_tolerance: f64,
    pub max_iterations: usize,
    /// Seed for y at the second-to-last point, divided by √r_max
    pub outer_seed: f64,
    /// Grid points skipped near the origin when counting nodes
    pub inner_guard: usize,
    /// Grid points skipped near r_max when counting nodes
    pub outer_guard: usize,
}

impl Default for SchrodingerSettings {
    fn default() -> Self {
        Self {
            energy_start: -150.0,
            energy_step: 0.1,
            tolerance_scale: 1e-7,
            step_tolerance: 1e-18,
            max_iterations: 5000,
            outer_seed: 1e-6,
            inner_guard: 6,
            outer_guard: 5,
        }
    }
}

impl SchrodingerSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.energy_start.is_finite() && self.energy_start < 0.0) {
            return Err(PotentialError::InvalidSettings(format!(
                "starting energy must be negative, got {}",
                self.energy_start
            )));
        }
        if !(self.energy_step.is_finite() && self.energy_step > 0.0) {
            return Err(PotentialError::InvalidSettings(format!(
                "energy step must be positive, got {}",
                self.energy_step
            )));
        }
        if !(self.tolerance_scale > 0.0 && self.step_tolerance > 0.0) {
            return Err(PotentialError::InvalidSettings(
                "eigenvalue tolerances must be positive".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(PotentialError::InvalidSettings(
                "eigenvalue search needs at least one iteration".to_string(),
            ));
        }
        if !(self.outer_seed.is_finite() && self.outer_seed != 0.0) {
            return Err(PotentialError::InvalidSettings(
                "outer seed must be finite and non-zero".to_string(),
            ));
        }
        if self.inner_guard == 0 {
            return Err(PotentialError::InvalidSettings(
                "inner node guard must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check that the node guards leave room on a grid of `points` points
    pub fn validate_for_grid(&self, points: usize) -> Result<()> {
        self.validate()?;
        if self.inner_guard + self.outer_guard >= points {
            return Err(PotentialError::InvalidSettings(format!(
                "node guards {}+{} leave no interior on a grid of {} points",
                self.inner_guard, self.outer_guard, points
            )));
        }
        Ok(())
    }
}

/// Eigenpair for one (n, l)
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalSolution {
    pub n: u32,
    pub l: u32,
    /// Eigenvalue in Hartree
    pub energy: f64,
    /// u(r) = r R(r), normalized so that ∫ u² dr = 1
    pub wavefunction: Vec<f64>,
    pub nodes: usize,
    /// y(r_min) of the final trial
    pub residual: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Solves the radial equation in a fixed potential
#[derive(Debug, Clone, Copy)]
pub struct SchrodingerSolver<'a> {
    grid: &'a RadialGrid,
    potential: &'a [f64],
    settings: &'a SchrodingerSettings,
}

impl<'a> SchrodingerSolver<'a> {
    /// Create a solver for `potential` (V(r) in Hartree) on `grid`
    pub fn new(
        grid: &'a RadialGrid,
        potential: &'a [f64],
        settings: &'a SchrodingerSettings,
    ) -> Result<Self> {
        check_len("effective potential", potential, grid.len())?;
        settings.validate_for_grid(grid.len())?;
        Ok(Self {
            grid,
            potential,
            settings,
        })
    }

    /// Find the eigenpair with `n - l - 1` nodes
    ///
    /// Returns a solution with `converged == false` if the search ran out of
    /// iterations or reached E = 0, provided the last trial can be normalized.
    pub fn solve(&self, n: u32, l: u32) -> Result<OrbitalSolution> {
        if n == 0 || l >= n {
            return Err(PotentialError::InvalidQuantumNumbers { n, l });
        }

        let points = self.grid.len();
        let r = self.grid.r();
        let h = self.grid.log_step();
        let centrifugal = (l * (l + 1)) as f64 + 0.25;

        // p(E) = base - E * two_r2
        let two_r2: Vec<f64> = r.iter().map(|&ri| 2.0 * ri * ri).collect();
        let base: Vec<f64> = (0..points)
            .map(|i| two_r2[i] * self.potential[i] + centrifugal)
            .collect();

        let seed = self.settings.outer_seed / self.grid.r_max().sqrt();
        let node_end = points - self.settings.outer_guard;
        let settings = BisectionSettings {
            initial_step: self.settings.energy_step,
            tolerance: self.settings.tolerance_scale / self.grid.r_min().sqrt(),
            step_tolerance: self.settings.step_tolerance,
            max_iterations: self.settings.max_iterations,
            upper_bound: 0.0,
        };

        let mut y = vec![0.0; points];
        let mut p = vec![0.0; points];
        let mut integrate = |energy: f64| -> Result<ShootingTrial> {
            for i in 0..points {
                p[i] = base[i] - energy * two_r2[i];
            }
            y[points - 1] = 0.0;
            y[points - 2] = seed;
            numerov_inward(&mut y, &p, None, h)?;

            Ok(ShootingTrial {
                residual: y[0],
                nodes: count_sign_changes(&y, self.settings.inner_guard, node_end),
            })
        };

        let start = self.settings.energy_start.min(self.hydrogenic_floor(l));
        let outcome = node_bisection(&mut integrate, start, (n - l - 1) as usize, &settings)?;
        // The last trial may lie on the far side of the bracket
        integrate(outcome.energy)?;

        let mut wavefunction: Vec<f64> = y
            .iter()
            .zip(self.grid.sqrt_r())
            .map(|(y, s)| y * s)
            .collect();
        normalize_wavefunction(self.grid, &mut wavefunction)?;

        Ok(OrbitalSolution {
            n,
            l,
            energy: outcome.energy,
            wavefunction,
            nodes: outcome.nodes,
            residual: outcome.residual,
            iterations: outcome.iterations,
            converged: outcome.converged,
        })
    }

    /// Energy safely below every level with angular momentum `l`
    ///
    /// A potential bounded below by `-Z_eff / r` has no level with angular
    /// momentum `l` under `-Z_eff² / (2 (l+1)²)`. The margin keeps the first
    /// trial off an exact Coulomb level.
    fn hydrogenic_floor(&self, l: u32) -> f64 {
        let z_eff = self
            .grid
            .r()
            .iter()
            .zip(self.potential)
            .map(|(r, v)| -r * v)
            .fold(0.0, f64::max);
        let n_min = (l + 1) as f64;
        -1.05 * z_eff * z_eff / (2.0 * n_min * n_min)
    }
}

/// Scale `u` in place so that ∫ u² dr = 1, returning the factor it was divided by
///
/// Inward solutions for deep levels grow far beyond the range of `u²`, so the
/// peak is brought to one before squaring.
pub fn normalize_wavefunction(grid: &RadialGrid, u: &mut [f64]) -> Result<f64> {
    check_len("wavefunction", u, grid.len())?;

    let peak = u.iter().fold(0.0_f64, |max, value| max.max(value.abs()));
    if !(peak.is_finite() && peak > 0.0) {
        return Err(PotentialError::Normalization(format!(
            "cannot normalize wavefunction with peak |u| = {}",
            peak
        )));
    }
    u.iter_mut().for_each(|value| *value /= peak);

    let norm = grid.integrate_with(|i, _| u[i] * u[i])?;
    if !(norm.is_finite() && norm > 0.0) {
        return Err(PotentialError::Normalization(format!(
            "cannot normalize wavefunction with norm {}",
            norm
        )));
    }

    let root_norm = norm.sqrt();
    u.iter_mut().for_each(|value| *value /= root_norm);
    Ok(peak * root_norm)
}
