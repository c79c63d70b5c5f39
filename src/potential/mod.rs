/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Potential calculation module
//!
//! Radial grid, Hartree and exchange-correlation potentials, and the radial
//! Schrödinger solver used inside the self-consistent cycle. Both radial
//! equations are solved by inward Numerov integration in `x = ln r` with a
//! shooting search on a single parameter.

mod effective;
mod errors;
pub mod exchange_correlation;
mod grid;
mod hartree;
pub mod numerov;
mod schrodinger;
pub mod shooting;

pub use effective::{assemble_effective_potential, PotentialFields};
pub use errors::{PotentialError, Result};
pub use exchange_correlation::{evaluate_xc, XcFields, XcPoint, DEFAULT_DENSITY_CUTOFF};
pub use grid::{GridSettings, RadialGrid};
pub use hartree::{solve_hartree, HartreeSettings, HartreeSolution};
pub use schrodinger::{
    normalize_wavefunction, OrbitalSolution, SchrodingerSettings, SchrodingerSolver,
};
