/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Electron density construction and mixing

use super::errors::{Result, ScfError};
use super::orbital::Orbital;
use crate::potential::{PotentialError, RadialGrid};
use crate::utils::constants::FOUR_PI;

/// Spherically averaged density `n(r) = Σ f u(r)² / (4π r²)`
///
/// Orbitals that have not produced a wavefunction yet are skipped.
pub fn density_from_orbitals(grid: &RadialGrid, orbitals: &[Orbital]) -> Result<Vec<f64>> {
    let r = grid.r();
    let mut density = vec![0.0; grid.len()];

    for orbital in orbitals.iter().filter(|o| o.has_wavefunction()) {
        if orbital.wavefunction.len() != grid.len() {
            return Err(PotentialError::LengthMismatch {
                name: "wavefunction",
                expected: grid.len(),
                found: orbital.wavefunction.len(),
            }
            .into());
        }
        for (i, u) in orbital.wavefunction.iter().enumerate() {
            density[i] += orbital.occupancy * u * u / (FOUR_PI * r[i] * r[i]);
        }
    }

    Ok(density)
}

/// Strategy for combining the previous and newly built densities
pub trait DensityMixer: Send + Sync {
    /// Produce the density for the next iteration
    fn mix(&mut self, old_density: &[f64], new_density: &[f64]) -> Result<Vec<f64>>;
}

/// Linear mixing `α n_new + (1 - α) n_old`
#[derive(Debug, Clone, Copy)]
pub struct LinearMixer {
    alpha: f64,
}

impl LinearMixer {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl DensityMixer for LinearMixer {
    fn mix(&mut self, old_density: &[f64], new_density: &[f64]) -> Result<Vec<f64>> {
        if old_density.len() != new_density.len() {
            return Err(ScfError::PotentialError(PotentialError::LengthMismatch {
                name: "mixed density",
                expected: old_density.len(),
                found: new_density.len(),
            }));
        }

        Ok(old_density
            .iter()
            .zip(new_density)
            .map(|(old, new)| self.alpha * new + (1.0 - self.alpha) * old)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::normalize_wavefunction;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_mixing() {
        let mut mixer = LinearMixer::new(0.5);
        let mixed = mixer.mix(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_eq!(mixed, vec![2.0, 2.0, 2.0]);

        let mut mixer = LinearMixer::new(0.25);
        let mixed = mixer.mix(&[0.0, 4.0], &[4.0, 0.0]).unwrap();
        assert_relative_eq!(mixed[0], 1.0);
        assert_relative_eq!(mixed[1], 3.0);
        assert_eq!(mixer.alpha(), 0.25);

        assert!(mixer.mix(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_density_holds_occupancy() {
        let grid = RadialGrid::logarithmic(1e-10, 30.0, 4000).unwrap();

        let mut u1s: Vec<f64> = grid.r().iter().map(|&r| r * (-r).exp()).collect();
        normalize_wavefunction(&grid, &mut u1s).unwrap();
        let mut u2p: Vec<f64> = grid.r().iter().map(|&r| r * r * (-0.5 * r).exp()).collect();
        normalize_wavefunction(&grid, &mut u2p).unwrap();

        let mut core = Orbital::from_spec(&crate::atoms::OrbitalSpec {
            n: 1,
            l: 0,
            occupancy: 2.0,
        });
        core.wavefunction = u1s;
        let mut valence = Orbital::from_spec(&crate::atoms::OrbitalSpec {
            n: 2,
            l: 1,
            occupancy: 3.0,
        });
        valence.wavefunction = u2p;
        let unsolved = Orbital::from_spec(&crate::atoms::OrbitalSpec {
            n: 3,
            l: 0,
            occupancy: 1.0,
        });

        let density = density_from_orbitals(&grid, &[core, valence, unsolved]).unwrap();
        assert!(density.iter().all(|&n| n >= 0.0));
        assert_relative_eq!(grid.electron_count(&density).unwrap(), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_wavefunction_length_mismatch() {
        let grid = RadialGrid::logarithmic(1e-6, 30.0, 100).unwrap();
        let mut orbital = Orbital::from_spec(&crate::atoms::OrbitalSpec {
            n: 1,
            l: 0,
            occupancy: 1.0,
        });
        orbital.wavefunction = vec![1.0; 5];
        assert!(density_from_orbitals(&grid, &[orbital]).is_err());
    }
}
