/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Kohn-Sham total energy
//!
//! The total energy is assembled from the eigenvalue sum with double-counting
//! corrections:
//! `E = Σ f ε - E_H + E_xc - ∫ 4π r² n (Vx + Vc) dr`
//! where `E_H = ∫ 2π r n U dr` and `E_xc = ∫ 4π r² n (Ex + Ec) dr`.

use super::errors::Result;
use super::orbital::Orbital;
use crate::potential::{PotentialError, RadialGrid, XcFields};
use crate::utils::constants::FOUR_PI;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Components of the total energy in Hartree
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyComponents {
    /// Σ f ε over occupied orbitals
    pub band: f64,
    /// Hartree energy E_H
    pub hartree: f64,
    /// Exchange-correlation energy E_xc
    pub exchange_correlation: f64,
    /// Double-counting term -∫ 4π r² n (Vx + Vc) dr
    pub xc_double_counting: f64,
    pub total: f64,
}

/// Evaluate the total energy for the current density and potentials
///
/// # Arguments
///
/// * `density` - Electron density on the grid
/// * `hartree` - U(r) = r V_H(r) on the grid
/// * `xc` - Exchange-correlation fields on the grid
/// * `orbitals` - Occupied orbitals with their current eigenvalues
pub fn total_energy(
    grid: &RadialGrid,
    density: &[f64],
    hartree: &[f64],
    xc: &XcFields,
    orbitals: &[Orbital],
) -> Result<EnergyComponents> {
    let n = grid.len();
    for (name, len) in [
        ("density", density.len()),
        ("Hartree potential", hartree.len()),
        ("exchange-correlation fields", xc.len()),
    ] {
        if len != n {
            return Err(PotentialError::LengthMismatch {
                name,
                expected: n,
                found: len,
            }
            .into());
        }
    }

    let band: f64 = orbitals.iter().map(|o| o.occupancy * o.energy).sum();

    let hartree_energy = grid.integrate_with(|i, r| 2.0 * PI * r * density[i] * hartree[i])?;
    let exchange_correlation =
        grid.integrate_with(|i, r| FOUR_PI * r * r * density[i] * xc.energy_density(i))?;
    let xc_double_counting =
        grid.integrate_with(|i, r| -FOUR_PI * r * r * density[i] * xc.potential(i))?;

    Ok(EnergyComponents {
        band,
        hartree: hartree_energy,
        exchange_correlation,
        xc_double_counting,
        total: band - hartree_energy + exchange_correlation + xc_double_counting,
    })
}

/// Total energies of successive iterations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyHistory {
    values: Vec<f64>,
}

impl EnergyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, total: f64) {
        self.values.push(total);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Change between the last two entries
    pub fn last_change(&self) -> Option<f64> {
        match self.values.as_slice() {
            [.., previous, current] => Some(current - previous),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
