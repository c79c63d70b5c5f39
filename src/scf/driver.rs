/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Self-consistent field driver
//!
//! Each iteration solves the Hartree potential for the current density,
//! evaluates exchange-correlation, solves every occupied orbital in the
//! resulting effective potential, rebuilds and mixes the density and
//! recomputes the total energy. The cycle stops once the energy change falls
//! below tolerance with every orbital and the Hartree potential converged.

use super::config::SolverConfig;
use super::density::{density_from_orbitals, DensityMixer, LinearMixer};
use super::energy::{total_energy, EnergyComponents, EnergyHistory};
use super::errors::{Result, ScfError};
use super::orbital::Orbital;
use crate::atoms::AtomConfiguration;
use crate::potential::{
    assemble_effective_potential, evaluate_xc, solve_hartree, OrbitalSolution, PotentialError,
    PotentialFields, RadialGrid, SchrodingerSolver,
};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Final state of an SCF run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScfStatus {
    /// Converged after the given number of iterations
    Converged { iterations: usize },
    /// Stopped at the iteration limit
    NotConverged { iterations: usize },
}

impl ScfStatus {
    pub fn is_converged(&self) -> bool {
        matches!(self, ScfStatus::Converged { .. })
    }

    pub fn iterations(&self) -> usize {
        match *self {
            ScfStatus::Converged { iterations } | ScfStatus::NotConverged { iterations } => {
                iterations
            }
        }
    }
}

/// Progress record of one iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub total_energy: f64,
    /// Change from the previous iteration, absent on the first
    pub energy_change: Option<f64>,
    pub hartree_converged: bool,
    pub orbitals_converged: bool,
    pub elapsed_ms: u64,
}

/// Everything produced by an SCF run
#[derive(Debug, Clone)]
pub struct ScfResult {
    pub atom: AtomConfiguration,
    pub status: ScfStatus,
    pub grid: RadialGrid,
    /// Mixed density after the final iteration
    pub density: Vec<f64>,
    pub orbitals: Vec<Orbital>,
    /// Potentials of the final iteration
    pub fields: PotentialFields,
    pub energies: EnergyComponents,
    pub history: EnergyHistory,
    pub iterations: Vec<IterationRecord>,
}

impl ScfResult {
    pub fn converged(&self) -> bool {
        self.status.is_converged()
    }

    pub fn total_energy(&self) -> f64 {
        self.energies.total
    }

    /// Eigenvalue of the (n, l) orbital
    pub fn eigenvalue(&self, n: u32, l: u32) -> Option<f64> {
        self.orbitals
            .iter()
            .find(|o| o.n == n && o.l == l)
            .map(|o| o.energy)
    }
}

/// Runs the self-consistent cycle for one atom
#[derive(Debug, Clone, Copy)]
pub struct ScfDriver<'a> {
    atom: &'a AtomConfiguration,
    config: &'a SolverConfig,
}

impl<'a> ScfDriver<'a> {
    /// Create a driver after validating the atom and the configuration
    pub fn new(atom: &'a AtomConfiguration, config: &'a SolverConfig) -> Result<Self> {
        atom.validate()?;
        config.validate()?;
        Ok(Self { atom, config })
    }

    /// Run the cycle until convergence or the iteration limit
    pub fn run(&self) -> Result<ScfResult> {
        let settings = &self.config.scf;
        let grid = RadialGrid::new(&self.config.grid)?;
        let nuclear_charge = self.atom.nuclear_charge();
        let n_electrons = self.atom.electron_count();

        info!(
            "Starting SCF for {} (Z = {}, {} orbitals, {} grid points)",
            self.atom.symbol,
            self.atom.atomic_number,
            self.atom.orbitals.len(),
            grid.len()
        );

        let mut density = grid.trial_density(nuclear_charge, n_electrons)?;
        let mut orbitals: Vec<Orbital> = self.atom.orbitals.iter().map(Orbital::from_spec).collect();
        let mut mixer = LinearMixer::new(settings.mixing);
        let mut history = EnergyHistory::new();
        let mut records = Vec::new();
        let mut fields = None;
        let mut energies = EnergyComponents::default();
        let mut status = ScfStatus::NotConverged {
            iterations: settings.max_iterations,
        };

        for iteration in 1..=settings.max_iterations {
            let start = Instant::now();

            let hartree = solve_hartree(&grid, &density, n_electrons, &self.config.hartree)?;
            let xc = evaluate_xc(&density, settings.density_cutoff);
            let effective =
                assemble_effective_potential(&grid, nuclear_charge, &hartree.potential, &xc)?;

            let solutions = self.solve_orbitals(&grid, &effective, &orbitals)?;
            let mut orbitals_converged = true;
            for (orbital, solution) in orbitals.iter_mut().zip(solutions) {
                orbitals_converged &= orbital.apply(solution);
            }

            let rebuilt = density_from_orbitals(&grid, &orbitals)?;
            density = mixer.mix(&density, &rebuilt)?;

            energies = total_energy(&grid, &density, &hartree.potential, &xc, &orbitals)?;
            history.push(energies.total);
            let energy_change = history.last_change();

            let elapsed_ms = start.elapsed().as_millis() as u64;
            let state = if orbitals_converged && hartree.converged {
                "all converged"
            } else {
                "not converged"
            };
            match energy_change {
                Some(delta) => info!(
                    "Iteration {:>3}: E = {:.8} Ha, dE = {:+.3e}, {} ({} ms)",
                    iteration, energies.total, delta, state, elapsed_ms
                ),
                None => info!(
                    "Iteration {:>3}: E = {:.8} Ha, {} ({} ms)",
                    iteration, energies.total, state, elapsed_ms
                ),
            }
            for orbital in &orbitals {
                debug!(
                    "  {:<3} E = {:.8} Ha, {} nodes, converged: {}",
                    orbital.label(),
                    orbital.energy,
                    orbital.nodes,
                    orbital.converged
                );
            }
            debug!(
                "  band {:.8}, Hartree {:.8}, xc {:.8}, xc double counting {:.8}",
                energies.band,
                energies.hartree,
                energies.exchange_correlation,
                energies.xc_double_counting
            );

            records.push(IterationRecord {
                iteration,
                total_energy: energies.total,
                energy_change,
                hartree_converged: hartree.converged,
                orbitals_converged,
                elapsed_ms,
            });

            let hartree_converged = hartree.converged;
            fields = Some(PotentialFields {
                hartree: hartree.potential,
                hartree_converged,
                xc,
                effective,
            });

            let energy_converged = energy_change
                .map(|delta| delta.abs() < settings.energy_tolerance)
                .unwrap_or(false);
            if energy_converged && orbitals_converged && hartree_converged {
                status = ScfStatus::Converged { iterations: iteration };
                break;
            }
        }

        match status {
            ScfStatus::Converged { iterations } => {
                info!("SCF converged in {} iterations", iterations)
            }
            ScfStatus::NotConverged { iterations } => {
                warn!("SCF did not converge within {} iterations", iterations)
            }
        }

        let fields = fields.ok_or_else(|| {
            ScfError::InvalidConfig("SCF finished without running an iteration".to_string())
        })?;

        Ok(ScfResult {
            atom: self.atom.clone(),
            status,
            grid,
            density,
            orbitals,
            fields,
            energies,
            history,
            iterations: records,
        })
    }

    /// Solve every orbital in the effective potential, in order
    fn solve_orbitals(
        &self,
        grid: &RadialGrid,
        effective: &[f64],
        orbitals: &[Orbital],
    ) -> Result<Vec<std::result::Result<OrbitalSolution, PotentialError>>> {
        let solver = SchrodingerSolver::new(grid, effective, &self.config.schrodinger)?;

        let solutions: Vec<_> = if self.config.scf.parallel_orbitals {
            orbitals
                .par_iter()
                .map(|orbital| solver.solve(orbital.n, orbital.l))
                .collect()
        } else {
            orbitals
                .iter()
                .map(|orbital| solver.solve(orbital.n, orbital.l))
                .collect()
        };

        Ok(solutions)
    }
}
