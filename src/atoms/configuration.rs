/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Electron configuration types for atomic calculations

use super::errors::{AtomError, Result};
use serde::{Deserialize, Serialize};

/// Shell type in spectroscopic notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    S, // l=0
    P, // l=1
    D, // l=2
    F, // l=3
}

impl ShellType {
    /// Shell type for an angular momentum quantum number
    pub fn from_l(l: u32) -> Option<Self> {
        match l {
            0 => Some(ShellType::S),
            1 => Some(ShellType::P),
            2 => Some(ShellType::D),
            3 => Some(ShellType::F),
            _ => None,
        }
    }

    /// Angular momentum quantum number of the shell
    pub fn l(self) -> u32 {
        match self {
            ShellType::S => 0,
            ShellType::P => 1,
            ShellType::D => 2,
            ShellType::F => 3,
        }
    }

    /// Spectroscopic letter
    pub fn letter(self) -> char {
        match self {
            ShellType::S => 's',
            ShellType::P => 'p',
            ShellType::D => 'd',
            ShellType::F => 'f',
        }
    }
}

/// Quantum numbers and fixed occupancy of one orbital in a configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalSpec {
    /// Principal quantum number
    pub n: u32,
    /// Angular momentum quantum number
    pub l: u32,
    /// Number of electrons in the orbital
    pub occupancy: f64,
}

impl OrbitalSpec {
    /// Create a validated orbital specification
    pub fn new(n: u32, l: u32, occupancy: f64) -> Result<Self> {
        let spec = Self { n, l, occupancy };
        spec.validate()?;
        Ok(spec)
    }

    /// Check quantum numbers and occupancy
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 || self.l >= self.n || ShellType::from_l(self.l).is_none() {
            return Err(AtomError::InvalidOrbital {
                n: self.n,
                l: self.l,
            });
        }

        let capacity = self.capacity();
        if !self.occupancy.is_finite() || self.occupancy <= 0.0 || self.occupancy > capacity {
            return Err(AtomError::InvalidOccupancy {
                label: self.label(),
                occupancy: self.occupancy,
                capacity,
            });
        }

        Ok(())
    }

    /// Maximum number of electrons the shell holds: 2(2l+1)
    pub fn capacity(&self) -> f64 {
        (2 * (2 * self.l + 1)) as f64
    }

    /// Number of radial nodes of the eigenfunction: n - l - 1
    pub fn required_nodes(&self) -> usize {
        (self.n - self.l - 1) as usize
    }

    /// Spectroscopic label such as "1s" or "2p"
    pub fn label(&self) -> String {
        match ShellType::from_l(self.l) {
            Some(shell) => format!("{}{}", self.n, shell.letter()),
            None => format!("{}l{}", self.n, self.l),
        }
    }
}

/// Immutable description of a neutral atom to be solved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomConfiguration {
    /// Element symbol
    pub symbol: String,
    /// Atomic number Z
    pub atomic_number: u32,
    /// Total electron count Ntot
    pub n_electrons: u32,
    /// Orbitals with their fixed occupancies
    pub orbitals: Vec<OrbitalSpec>,
}

impl AtomConfiguration {
    /// Create a neutral atom configuration (Ntot = Z) and validate it
    pub fn neutral(symbol: &str, atomic_number: u32, orbitals: Vec<OrbitalSpec>) -> Result<Self> {
        let config = Self {
            symbol: symbol.to_string(),
            atomic_number,
            n_electrons: atomic_number,
            orbitals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Nuclear charge Z as a float
    pub fn nuclear_charge(&self) -> f64 {
        self.atomic_number as f64
    }

    /// Total electron count as a float
    pub fn electron_count(&self) -> f64 {
        self.n_electrons as f64
    }

    /// Validate every orbital and the total occupancy
    pub fn validate(&self) -> Result<()> {
        if self.atomic_number == 0 {
            return Err(AtomError::InvalidAtomicNumber(self.atomic_number));
        }

        for (i, orbital) in self.orbitals.iter().enumerate() {
            orbital.validate()?;
            if self.orbitals[..i]
                .iter()
                .any(|other| other.n == orbital.n && other.l == orbital.l)
            {
                return Err(AtomError::DuplicateOrbital(orbital.label()));
            }
        }

        let total: f64 = self.orbitals.iter().map(|o| o.occupancy).sum();
        if (total - self.electron_count()).abs() > 1e-9 {
            return Err(AtomError::OccupancyMismatch {
                expected: self.n_electrons,
                found: total,
            });
        }

        Ok(())
    }
}
