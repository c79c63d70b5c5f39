/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Self-consistent field cycle
//!
//! Couples the radial solvers of the potential module into the Kohn-Sham
//! loop: density, potentials, orbitals, new density, until the total
//! energy settles.

mod config;
mod density;
mod driver;
mod energy;
mod errors;
mod orbital;

pub use config::{ScfSettings, SolverConfig};
pub use density::{density_from_orbitals, DensityMixer, LinearMixer};
pub use driver::{IterationRecord, ScfDriver, ScfResult, ScfStatus};
pub use energy::{total_energy, EnergyComponents, EnergyHistory};
pub use errors::{Result, ScfError};
pub use orbital::Orbital;
