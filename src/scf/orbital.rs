/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Orbital state carried between SCF iterations

use crate::atoms::{OrbitalSpec, ShellType};
use crate::potential::{OrbitalSolution, PotentialError};
use log::warn;

/// One occupied Kohn-Sham orbital
#[derive(Debug, Clone, PartialEq)]
pub struct Orbital {
    pub n: u32,
    pub l: u32,
    pub occupancy: f64,
    /// Eigenvalue in Hartree
    pub energy: f64,
    /// u(r) = r R(r); empty until a solve has produced one
    pub wavefunction: Vec<f64>,
    pub nodes: usize,
    /// Whether the most recent solve converged
    pub converged: bool,
}

impl Orbital {
    /// Unsolved orbital for a configuration entry
    pub fn from_spec(spec: &OrbitalSpec) -> Self {
        Self {
            n: spec.n,
            l: spec.l,
            occupancy: spec.occupancy,
            energy: 0.0,
            wavefunction: Vec::new(),
            nodes: 0,
            converged: false,
        }
    }

    pub fn shell(&self) -> Option<ShellType> {
        ShellType::from_l(self.l)
    }

    /// Spectroscopic label such as "2p"
    pub fn label(&self) -> String {
        match self.shell() {
            Some(shell) => format!("{}{}", self.n, shell.letter()),
            None => format!("{}l{}", self.n, self.l),
        }
    }

    pub fn required_nodes(&self) -> usize {
        (self.n - self.l - 1) as usize
    }

    pub fn has_wavefunction(&self) -> bool {
        !self.wavefunction.is_empty()
    }

    /// Fold the outcome of a solve into the orbital and report whether it converged
    ///
    /// A converged solution always replaces the stored one. After a failed
    /// solve the previous eigenpair is kept. An orbital that has never
    /// converged stays empty and adds nothing to the density: a scan that ran
    /// up to E = 0 ends on a solution that diverges at the origin.
    pub fn apply(&mut self, outcome: std::result::Result<OrbitalSolution, PotentialError>) -> bool {
        match outcome {
            Ok(solution) if solution.converged => {
                self.adopt(solution);
                true
            }
            Ok(solution) => {
                warn!(
                    "Orbital {} did not converge (E = {:.6} Ha, {} nodes, residual {:.3e})",
                    self.label(),
                    solution.energy,
                    solution.nodes,
                    solution.residual
                );
                self.converged = false;
                false
            }
            Err(err) => {
                warn!("Orbital {} could not be solved: {}", self.label(), err);
                self.converged = false;
                false
            }
        }
    }

    fn adopt(&mut self, solution: OrbitalSolution) {
        self.energy = solution.energy;
        self.wavefunction = solution.wavefunction;
        self.nodes = solution.nodes;
        self.converged = solution.converged;
    }
}
